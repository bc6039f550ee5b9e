//! Submission state machine.
//!
//! The original change/submit listeners kept their state implicitly in the
//! DOM; here the save flow is an explicit machine with named transitions so
//! it tests without a browser. One machine is reused across submissions.

use super::render;
use super::snapshot::FormSnapshot;
use contracts::costing::SaveResponse;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Saving,
    Success,
    Error,
}

/// Current phase of the submit flow plus the two display strings it owns.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SubmitMachine {
    state: SubmitState,
    status_text: String,
    total_price_text: String,
}

impl SubmitMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_saving(&self) -> bool {
        self.state == SubmitState::Saving
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn total_price_text(&self) -> &str {
        &self.total_price_text
    }

    /// `Idle | Success | Error -> Saving`. Returns `false` (and changes
    /// nothing) while a save is already in flight, so a double-click cannot
    /// fire two concurrent requests. Previous result text does not carry
    /// over into the new attempt.
    pub fn begin_submit(&mut self) -> bool {
        if self.state == SubmitState::Saving {
            return false;
        }
        self.state = SubmitState::Saving;
        self.status_text = "Saving...".to_string();
        self.total_price_text.clear();
        true
    }

    /// `Saving -> Success`: render the decoded result. `snapshot` is the one
    /// captured at submit time, used for fields the response may omit.
    pub fn complete_success(&mut self, response: &SaveResponse, snapshot: &FormSnapshot) {
        self.state = SubmitState::Success;
        self.status_text = render::status_line(response);
        self.total_price_text = render::total_price_line(response, snapshot);
    }

    /// `Saving -> Error`: surface the failure as status text. Every failure
    /// is terminal for its attempt; retrying means resubmitting.
    pub fn complete_error(&mut self, message: &str) {
        self.state = SubmitState::Error;
        self.status_text = format!("Error: {}", message);
        self.total_price_text.clear();
    }
}
