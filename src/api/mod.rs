// src/api/mod.rs
use std::sync::mpsc;
use std::thread;

use reqwest::blocking::multipart;
use serde::Deserialize;

use crate::report::AnalysisResult;

pub mod error;

pub use error::SubmissionError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client for the remote analysis service. The calls block, so the UI never
/// invokes them directly; it goes through `spawn_submit`/`spawn_ask` and
/// polls the returned channel each frame. One pooled HTTP client serves
/// every request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Default endpoint, overridable with FINAUTOBOT_API_URL.
    pub fn from_env() -> Self {
        match std::env::var("FINAUTOBOT_API_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one statement for analysis: multipart parts `file` and `risk`
    /// (decimal string), single POST, no side effects beyond the request.
    /// Every failure collapses into a [`SubmissionError`].
    pub fn submit(
        &self,
        file: Vec<u8>,
        file_name: String,
        risk: u8,
    ) -> Result<AnalysisResult, SubmissionError> {
        let form = multipart::Form::new()
            .part("file", multipart::Part::bytes(file).file_name(file_name))
            .text("risk", risk.to_string());

        let response = self
            .http
            .post(format!("{}/analyze", self.base_url))
            .multipart(form)
            .send()
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SubmissionError::Server(response.status().as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| SubmissionError::Malformed(e.to_string()))
    }

    /// Asks one question about an insight report. Same single-shot contract
    /// as `submit`: one POST to the chat endpoint, every failure collapses
    /// into a [`SubmissionError`], retry is manual.
    pub fn ask(&self, report_json: String, question: String) -> Result<String, SubmissionError> {
        let body = serde_json::json!({
            "report": report_json,
            "question": question,
        });

        let response = self
            .http
            .post(format!("{}/chat", self.base_url))
            .json(&body)
            .send()
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SubmissionError::Server(response.status().as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;
        let answer: ChatAnswer =
            serde_json::from_str(&body).map_err(|e| SubmissionError::Malformed(e.to_string()))?;
        Ok(answer.answer)
    }
}

/// Body of a chat response; the assistant replies with plain text only.
#[derive(Debug, Clone, Deserialize)]
struct ChatAnswer {
    answer: String,
}

/// Runs `submit` on a worker thread and hands back the receiving end. If the
/// receiver is dropped before the call finishes (the attempt was reset), the
/// result has nowhere to go and is discarded.
pub fn spawn_submit(
    client: ApiClient,
    file: Vec<u8>,
    file_name: String,
    risk: u8,
) -> mpsc::Receiver<Result<AnalysisResult, SubmissionError>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(client.submit(file, file_name, risk));
    });
    rx
}

/// Runs `ask` on a worker thread; the chat panel polls the receiver each
/// frame, one outstanding question at a time.
pub fn spawn_ask(
    client: ApiClient,
    report_json: String,
    question: String,
) -> mpsc::Receiver<Result<String, SubmissionError>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(client.ask(report_json, question));
    });
    rx
}
