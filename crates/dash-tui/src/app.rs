// crates/dash-tui/src/app.rs

use chrono::{DateTime, Local};
use dash_client::Fetched;
use dash_core::{AccountInfo, HistoryEntry, Order, Statistics};
use tokio::sync::mpsc::UnboundedSender;

use crate::data::{DataEvent, FetchRequest};
use crate::routes::View;

pub struct App {
    // Navigation state
    pub view: View,
    pub should_quit: bool,
    pub show_help: bool,

    // Connection state (fed by the health probe)
    pub connected: bool,

    // Data slots, one per fetch operation. `None` until the first
    // answer arrives; afterwards the provenance tag says whether the
    // slot holds live or fixture data.
    pub account: Option<Fetched<AccountInfo>>,
    pub orders: Option<Fetched<Vec<Order>>>,
    pub history: Option<Fetched<Vec<HistoryEntry>>>,
    pub statistics: Option<Fetched<Statistics>>,

    // Orders view selection
    pub selected_order: usize,

    // Status line
    pub status_message: Option<String>,
    pub last_update: Option<DateTime<Local>>,

    request_tx: Option<UnboundedSender<FetchRequest>>,
}

impl App {
    pub fn new(view: View) -> Self {
        Self {
            view,
            should_quit: false,
            show_help: false,
            connected: false,
            account: None,
            orders: None,
            history: None,
            statistics: None,
            selected_order: 0,
            status_message: None,
            last_update: None,
            request_tx: None,
        }
    }

    pub fn set_request_sender(&mut self, tx: UnboundedSender<FetchRequest>) {
        self.request_tx = Some(tx);
    }

    fn request(&self, req: FetchRequest) {
        if let Some(tx) = &self.request_tx {
            let _ = tx.send(req);
        }
    }

    /// Re-fetch whatever the current view displays, plus a health probe.
    /// The individual fetches run concurrently and uncoordinated.
    pub fn refresh(&mut self) {
        self.request(FetchRequest::Health);
        match self.view {
            View::Dashboard => {
                self.request(FetchRequest::Account);
                self.request(FetchRequest::Orders);
            }
            View::Orders => self.request(FetchRequest::Orders),
            View::History => self.request(FetchRequest::History),
            View::Statistics => self.request(FetchRequest::Statistics),
        }
    }

    pub fn goto(&mut self, view: View) {
        if self.view != view {
            self.view = view;
            self.status_message = None;
            self.refresh();
        }
    }

    pub fn next_view(&mut self) {
        self.goto(self.view.next());
    }

    pub fn prev_view(&mut self) {
        self.goto(self.view.prev());
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_order > 0 {
            self.selected_order -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        let count = self.orders.as_ref().map(|o| o.value.len()).unwrap_or(0);
        if self.selected_order < count.saturating_sub(1) {
            self.selected_order += 1;
        }
    }

    /// Ask the server to close the order under the cursor (Orders view).
    pub fn close_selected_order(&mut self) {
        if self.view != View::Orders {
            return;
        }
        let Some(orders) = &self.orders else {
            return;
        };
        if let Some(order) = orders.value.get(self.selected_order) {
            self.status_message = Some(format!("closing {}...", order.id));
            self.request(FetchRequest::CloseOrder(order.id.clone()));
        }
    }

    pub fn handle_data_event(&mut self, event: DataEvent) {
        match event {
            DataEvent::Account(account) => {
                self.note_update();
                self.account = Some(account);
            }
            DataEvent::Orders(orders) => {
                self.note_update();
                self.selected_order = self.selected_order.min(orders.value.len().saturating_sub(1));
                self.orders = Some(orders);
            }
            DataEvent::History(history) => {
                self.note_update();
                self.history = Some(history);
            }
            DataEvent::Statistics(statistics) => {
                self.note_update();
                self.statistics = Some(statistics);
            }
            DataEvent::Health(up) => {
                self.connected = up;
            }
            DataEvent::OrderClosed { id, result } => match result {
                Ok(receipt) => {
                    self.status_message = Some(format!("{id}: {}", receipt.message));
                    // Re-fetch everything a close invalidates.
                    self.request(FetchRequest::Orders);
                    self.request(FetchRequest::Account);
                    self.request(FetchRequest::History);
                }
                Err(e) => {
                    self.status_message = Some(format!("close {id} failed: {e}"));
                }
            },
        }
    }

    fn note_update(&mut self) {
        self.last_update = Some(Local::now());
    }

    /// True when any populated slot holds fixture data.
    pub fn serving_fallback(&self) -> bool {
        fn is_fallback<T>(slot: &Option<Fetched<T>>) -> bool {
            slot.as_ref().is_some_and(|f| !f.is_live())
        }
        is_fallback(&self.account)
            || is_fallback(&self.orders)
            || is_fallback(&self.history)
            || is_fallback(&self.statistics)
    }
}
