// src/state/chat_state.rs
use std::sync::mpsc::{Receiver, TryRecvError};

use crate::api::SubmissionError;

/// One answered question shown in the report-chat panel.
#[derive(Debug, Clone)]
pub struct ChatExchange {
    pub question: String,
    pub answer: String,
}

/// Report-chat panel state. Follows the upload machine's rule of one
/// outstanding request: the ask control is disabled while a question is in
/// flight, failures show inline, nothing is persisted.
pub struct ChatState {
    pub input: String,
    pub history: Vec<ChatExchange>,
    pub error_message: Option<String>,

    /// Question whose answer is outstanding; pushed into the history when
    /// the worker delivers.
    pending_question: Option<String>,
    in_flight: Option<Receiver<Result<String, SubmissionError>>>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            input: String::new(),
            history: Vec::new(),
            error_message: None,
            pending_question: None,
            in_flight: None,
        }
    }
}

impl ChatState {
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_ask(&self) -> bool {
        !self.input.trim().is_empty() && !self.is_busy()
    }

    /// Marks the question outstanding and clears the input for the next one.
    pub fn begin(&mut self, question: String, rx: Receiver<Result<String, SubmissionError>>) {
        self.pending_question = Some(question);
        self.input.clear();
        self.error_message = None;
        self.in_flight = Some(rx);
    }

    /// Non-blocking check of the outstanding question; applies the outcome
    /// in place. An answer joins the history, a failure shows inline and the
    /// question is dropped (the user re-asks manually).
    pub fn poll(&mut self) {
        let rx = match &self.in_flight {
            Some(rx) => rx,
            None => return,
        };

        match rx.try_recv() {
            Ok(Ok(answer)) => {
                let question = self.pending_question.take().unwrap_or_default();
                self.history.push(ChatExchange { question, answer });
                self.in_flight = None;
            }
            Ok(Err(e)) => {
                self.error_message = Some(e.to_string());
                self.pending_question = None;
                self.in_flight = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.error_message = Some(
                    SubmissionError::Transport("chat worker exited unexpectedly".to_string())
                        .to_string(),
                );
                self.pending_question = None;
                self.in_flight = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn busy_state(question: &str) -> (ChatState, mpsc::Sender<Result<String, SubmissionError>>) {
        let mut state = ChatState::default();
        state.input = question.to_string();
        let (tx, rx) = mpsc::channel();
        state.begin(question.to_string(), rx);
        (state, tx)
    }

    #[test]
    fn empty_input_cannot_be_asked() {
        let mut state = ChatState::default();
        assert!(!state.can_ask());
        state.input = "   ".to_string();
        assert!(!state.can_ask());
        state.input = "Why is my SIP capped?".to_string();
        assert!(state.can_ask());
    }

    #[test]
    fn one_question_in_flight_blocks_the_next() {
        let (mut state, _tx) = busy_state("Why is my SIP capped?");
        assert!(state.is_busy());
        state.input = "Another question".to_string();
        assert!(!state.can_ask());
    }

    #[test]
    fn answer_joins_the_history_and_frees_the_panel() {
        let (mut state, tx) = busy_state("Why is my SIP capped?");

        state.poll();
        assert!(state.history.is_empty());

        tx.send(Ok("Spending exceeds income in multiple months.".to_string()))
            .unwrap();
        state.poll();

        assert!(!state.is_busy());
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].question, "Why is my SIP capped?");
        assert_eq!(
            state.history[0].answer,
            "Spending exceeds income in multiple months."
        );
    }

    #[test]
    fn failure_shows_inline_and_keeps_earlier_history() {
        let (mut state, tx) = busy_state("First");
        tx.send(Ok("First answer".to_string())).unwrap();
        state.poll();

        state.input = "Second".to_string();
        let (tx, rx) = mpsc::channel();
        state.begin("Second".to_string(), rx);
        tx.send(Err(SubmissionError::Server(502))).unwrap();
        state.poll();

        assert!(!state.is_busy());
        assert_eq!(state.history.len(), 1);
        assert!(state
            .error_message
            .as_deref()
            .unwrap()
            .contains("502"));
    }

    #[test]
    fn vanished_worker_is_reported_as_failure() {
        let (mut state, tx) = busy_state("Question");
        drop(tx);
        state.poll();

        assert!(!state.is_busy());
        assert!(state.error_message.is_some());
        assert!(state.history.is_empty());
    }
}
