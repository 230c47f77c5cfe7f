use anyhow::Result;
use ratatui::widgets::ListState;

use crate::domain::dashboard::{DashboardData, DashboardStats};
use crate::domain::email::EmailSummary;

/// What the background fetch hands back to the UI thread.
pub type FetchOutcome = Result<DashboardData>;

/// The "Priority Emails" panel shows at most this many, whatever the API returned.
pub const VISIBLE_EMAILS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
}

#[derive(Debug)]
pub struct DashboardState {
    pub load: LoadState,
    pub stats: DashboardStats,
    pub emails: Vec<EmailSummary>,
    pub list_state: ListState,
    pub spinner_tick: usize,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            load: LoadState::Loading,
            stats: DashboardStats::default(),
            emails: vec![],
            list_state: ListState::default(),
            spinner_tick: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    /// Leaves the loading state either way. A failed fetch is logged and the
    /// dashboard keeps its zero stats and empty list.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(data) => {
                log::info!(
                    "Dashboard loaded: {} emails total, {} received",
                    data.stats.total_emails,
                    data.emails.len()
                );
                self.stats = data.stats;
                self.emails = data.emails;
            }
            Err(e) => {
                log::error!("Error fetching dashboard data: {e:#}");
            }
        }
        self.load = LoadState::Loaded;

        if self.visible_emails().is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    pub fn visible_emails(&self) -> &[EmailSummary] {
        let n = self.emails.len().min(VISIBLE_EMAILS);
        &self.emails[..n]
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.visible_emails().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let cur = self.list_state.selected().unwrap_or(0) as i64;
        let next = (cur + delta as i64).clamp(0, len as i64 - 1) as usize;
        self.list_state.select(Some(next));
    }

    pub fn select_first(&mut self) {
        if !self.visible_emails().is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        let len = self.visible_emails().len();
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    pub fn tick(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
