//! Error banner state for failed backend round-trips.

/// Last action failure shown above the cards until dismissed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub error: Option<String>,
}

impl NoticeState {
    pub fn show(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn dismiss(&mut self) {
        self.error = None;
    }
}
