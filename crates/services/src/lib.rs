#![forbid(unsafe_code)]

pub mod backend;
pub mod error;
pub mod export;
pub mod gate;
pub mod speech;

pub use backend::{
    AskRequest, AskResponse, BackendClient, BackendConfig, QuizOutcome, QuizRequest, QuizResponse,
    UploadResponse,
};
pub use error::{BackendError, ExportError, SpeechError};
pub use export::{AnswerExport, DEFAULT_EXPORT_FILE_NAME};
pub use gate::ResponseGate;
pub use speech::{
    SpeechCapture, SpeechEvent, SpeechSink, UnsupportedSpeech, append_transcript, replay_events,
};
