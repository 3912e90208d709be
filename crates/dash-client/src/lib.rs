//! dash-client
//!
//! The dashboard's data-access layer: a typed REST client for the five
//! API operations, with the degraded-fallback read policy made explicit
//! in the types.
//!
//! Read operations never fail; on any transport failure they log the
//! error and return the fixture payload, tagged [`DataSource::Fallback`]
//! so callers can tell placeholder data from live data. Only
//! [`ApiClient::close_order`] propagates errors.

pub mod client;
pub mod config;
pub mod error;
pub mod fetched;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ClientError;
pub use fetched::{DataSource, Fetched};
