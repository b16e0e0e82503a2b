//! HTTP client for the course Q&A backend.
//!
//! The backend owns every substantive computation (answer generation, video
//! matching, quiz generation); this client only speaks its three endpoints
//! and decodes the payloads leniently.

use std::env;

use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::warn;

use assistant_core::Intent;
use assistant_core::model::{Language, QuizItem, UploadedVideo, VideoMatch};

use crate::error::BackendError;

#[derive(Clone, Debug)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    /// Reads `SIGMA_BACKEND_URL`, defaulting to the local dev server.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("SIGMA_BACKEND_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "http://localhost:8000".into());
        Self { base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    config: BackendConfig,
}

impl BackendClient {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(BackendConfig::from_env())
    }

    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Submits a question to `POST /ask`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` when the request fails or the backend answers
    /// with a non-success status.
    pub async fn ask(
        &self,
        question: &str,
        language: Language,
        intent: Intent,
    ) -> Result<AskResponse, BackendError> {
        let payload = AskRequest {
            question: question.to_string(),
            language,
            intent,
        };
        let response = self
            .client
            .post(self.config.endpoint("ask"))
            .json(&payload)
            .send()
            .await
            .inspect_err(|err| warn!(error = %err, "ask request failed"))?;
        if !response.status().is_success() {
            warn!(status = %response.status(), "ask returned non-success status");
            return Err(BackendError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Requests a generated quiz from `POST /quiz`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` on transport failure or non-success status.
    pub async fn generate_quiz(
        &self,
        question: &str,
        language: Language,
    ) -> Result<QuizResponse, BackendError> {
        let payload = QuizRequest {
            question: question.to_string(),
            language,
        };
        let response = self
            .client
            .post(self.config.endpoint("quiz"))
            .json(&payload)
            .send()
            .await
            .inspect_err(|err| warn!(error = %err, "quiz request failed"))?;
        if !response.status().is_success() {
            warn!(status = %response.status(), "quiz returned non-success status");
            return Err(BackendError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }

    /// Uploads a video file via `POST /upload_video` (multipart: `file` +
    /// `title`). The backend transcribes and indexes it.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` on transport failure or non-success status.
    /// Processing failures arrive as a successful response with
    /// `success = false`.
    pub async fn upload_video(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse, BackendError> {
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new()
            .part("file", part)
            .text("title", file_name.to_string());
        let response = self
            .client
            .post(self.config.endpoint("upload_video"))
            .multipart(form)
            .send()
            .await
            .inspect_err(|err| warn!(error = %err, "upload request failed"))?;
        if !response.status().is_success() {
            warn!(status = %response.status(), "upload returned non-success status");
            return Err(BackendError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AskRequest {
    pub question: String,
    pub language: Language,
    pub intent: Intent,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub matches: Vec<VideoMatch>,
}

impl AskResponse {
    /// Answer text with the backend's empty-answer case made explicit.
    #[must_use]
    pub fn answer_or_placeholder(&self) -> &str {
        if self.answer.trim().is_empty() {
            "No answer from server."
        } else {
            &self.answer
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizRequest {
    pub question: String,
    pub language: Language,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizResponse {
    #[serde(default)]
    pub quiz: Vec<QuizItem>,
    #[serde(default)]
    pub raw: Option<String>,
}

/// What a quiz response amounts to once decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizOutcome {
    Items(Vec<QuizItem>),
    Raw(String),
    Empty,
}

impl QuizResponse {
    /// Structured items win over the raw fallback; a payload with neither
    /// is `Empty` and surfaces as a generation failure.
    #[must_use]
    pub fn into_outcome(self) -> QuizOutcome {
        if !self.quiz.is_empty() {
            QuizOutcome::Items(self.quiz)
        } else if let Some(raw) = self.raw.filter(|raw| !raw.trim().is_empty()) {
            QuizOutcome::Raw(raw)
        } else {
            QuizOutcome::Empty
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub chunks: Option<u32>,
}

impl UploadResponse {
    /// Maps a successful upload into the video record the UI keeps.
    #[must_use]
    pub fn into_video(self) -> Option<UploadedVideo> {
        if !self.success {
            return None;
        }
        Some(UploadedVideo {
            id: self.video_id?,
            title: self.title.unwrap_or_default(),
            chunks: self.chunks.unwrap_or(0),
        })
    }
}
