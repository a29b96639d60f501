// src/state/mod.rs
use anyhow::Result;

use crate::api::ApiClient;
use crate::report::AnalysisResult;
use crate::session::SessionStore;

pub mod chat_state;
pub mod upload_state;

pub use chat_state::{ChatExchange, ChatState};
pub use upload_state::{UploadPhase, UploadState, DEFAULT_RISK};

// Screen/view tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    Upload,
    Dashboard,
    Results,
    Tax,
}

impl Screen {
    /// Views that render the stored record. With an empty slot they bounce
    /// back to Upload instead of rendering partial data.
    pub fn requires_session(self) -> bool {
        !matches!(self, Screen::Upload)
    }
}

// Core application state
pub struct AppState {
    pub current_screen: Screen,
    pub upload: UploadState,
    pub chat: ChatState,
    /// Record backing the current rendering view, reloaded from the store
    /// on every navigation. Views read it; only a submission replaces it.
    pub report: Option<AnalysisResult>,

    pub api: ApiClient,
    pub session: Box<dyn SessionStore>,
}

impl AppState {
    pub fn new(api: ApiClient, session: Box<dyn SessionStore>) -> Self {
        Self {
            current_screen: Screen::Upload,
            upload: UploadState::default(),
            chat: ChatState::default(),
            report: None,
            api,
            session,
        }
    }

    /// Moves between views. A rendering view reloads the slot on entry; an
    /// absent record silently redirects to Upload (no error state).
    pub fn navigate(&mut self, target: Screen) {
        if target.requires_session() {
            match self.session.load() {
                Some(result) => {
                    self.report = Some(result);
                    self.current_screen = target;
                }
                None => {
                    self.report = None;
                    self.current_screen = Screen::Upload;
                }
            }
        } else {
            self.current_screen = target;
        }
    }

    /// Applies a finished submission: exactly one store write, then one
    /// navigation to the dashboard. A write failure is surfaced, not hidden.
    /// Chat history belongs to the replaced report and is dropped with it.
    pub fn apply_submission(&mut self, result: AnalysisResult) -> Result<()> {
        self.session.save(&result)?;
        self.chat = ChatState::default();
        self.navigate(Screen::Dashboard);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::DashboardMetrics;
    use anyhow::anyhow;
    use std::cell::RefCell;

    /// In-memory single-slot store for state tests.
    struct StubStore {
        slot: RefCell<Option<AnalysisResult>>,
        fail_saves: bool,
    }

    impl StubStore {
        fn empty() -> Self {
            Self {
                slot: RefCell::new(None),
                fail_saves: false,
            }
        }

        fn filled() -> Self {
            let store = Self::empty();
            *store.slot.borrow_mut() = Some(AnalysisResult {
                dashboard_metrics: Some(DashboardMetrics {
                    cash_flow_health: Some("Healthy".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            });
            store
        }

        fn failing() -> Self {
            Self {
                fail_saves: true,
                ..Self::empty()
            }
        }
    }

    impl SessionStore for StubStore {
        fn save(&self, result: &AnalysisResult) -> Result<()> {
            if self.fail_saves {
                return Err(anyhow!("disk full"));
            }
            *self.slot.borrow_mut() = Some(result.clone());
            Ok(())
        }

        fn load(&self) -> Option<AnalysisResult> {
            self.slot.borrow().clone()
        }
    }

    fn state_with(store: StubStore) -> AppState {
        AppState::new(ApiClient::new("http://localhost:8000"), Box::new(store))
    }

    #[test]
    fn rendering_views_redirect_to_upload_when_slot_is_empty() {
        for target in [Screen::Dashboard, Screen::Results, Screen::Tax] {
            let mut state = state_with(StubStore::empty());
            state.navigate(target);
            assert_eq!(state.current_screen, Screen::Upload);
            assert!(state.report.is_none());
        }
    }

    #[test]
    fn rendering_views_load_the_stored_record_on_entry() {
        let mut state = state_with(StubStore::filled());
        state.navigate(Screen::Results);
        assert_eq!(state.current_screen, Screen::Results);
        let report = state.report.as_ref().unwrap();
        assert_eq!(
            report
                .dashboard_metrics
                .as_ref()
                .unwrap()
                .cash_flow_health
                .as_deref(),
            Some("Healthy")
        );
    }

    #[test]
    fn successful_submission_writes_once_and_lands_on_dashboard() {
        let mut state = state_with(StubStore::empty());
        state.apply_submission(AnalysisResult::default()).unwrap();

        assert_eq!(state.current_screen, Screen::Dashboard);
        assert!(state.report.is_some());
    }

    #[test]
    fn failed_slot_write_is_surfaced_and_does_not_navigate() {
        let mut state = state_with(StubStore::failing());
        let outcome = state.apply_submission(AnalysisResult::default());
        assert!(outcome.is_err());
        assert_eq!(state.current_screen, Screen::Upload);
    }

    #[test]
    fn new_submission_drops_chat_history_for_the_old_report() {
        let mut state = state_with(StubStore::empty());
        state.chat.history.push(ChatExchange {
            question: "Why is my SIP capped?".to_string(),
            answer: "Limited surplus.".to_string(),
        });

        state.apply_submission(AnalysisResult::default()).unwrap();
        assert!(state.chat.history.is_empty());
    }

    #[test]
    fn navigating_back_to_dashboard_keeps_the_slot() {
        let mut state = state_with(StubStore::filled());
        state.navigate(Screen::Results);
        state.navigate(Screen::Dashboard);
        assert_eq!(state.current_screen, Screen::Dashboard);
        assert!(state.report.is_some());
    }
}
