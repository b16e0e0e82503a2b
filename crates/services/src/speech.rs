//! Speech-capture capability seam.
//!
//! The view layer dictates questions through this trait pair instead of
//! touching a platform speech API directly. A capture run reports through
//! the sink with an explicit start/result/error/end contract: `on_start`
//! once, then any number of `on_result`/`on_error`, then `on_end` exactly
//! once. No timeout is enforced here; a capability that never calls
//! `on_end` leaves the listening indicator on, which is the caller's risk
//! to surface.

use crate::error::SpeechError;

/// Events a capture run can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Started,
    Result(String),
    Error(String),
    Ended,
}

/// Receives capture events; implemented by the view layer.
pub trait SpeechSink: Send {
    fn on_start(&mut self);
    fn on_result(&mut self, transcript: &str);
    fn on_error(&mut self, message: &str);
    fn on_end(&mut self);
}

/// A speech-to-text capability.
pub trait SpeechCapture: Send + Sync {
    /// Whether capture can be attempted at all on this device.
    fn is_supported(&self) -> bool;

    /// Starts one capture run, reporting into `sink`.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Unsupported` when no capture backend exists,
    /// or `SpeechError::AlreadyRunning` when a run is in progress.
    fn start(&self, sink: Box<dyn SpeechSink>) -> Result<(), SpeechError>;
}

/// The stub used where no speech engine is available; `start` always fails
/// so the UI surfaces its unsupported message without attempting capture.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedSpeech;

impl SpeechCapture for UnsupportedSpeech {
    fn is_supported(&self) -> bool {
        false
    }

    fn start(&self, _sink: Box<dyn SpeechSink>) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }
}

/// Replays a scripted event sequence into a sink, honoring the contract
/// mapping. Used by scripted capture doubles in tests and demos.
pub fn replay_events(sink: &mut dyn SpeechSink, events: &[SpeechEvent]) {
    for event in events {
        match event {
            SpeechEvent::Started => sink.on_start(),
            SpeechEvent::Result(transcript) => sink.on_result(transcript),
            SpeechEvent::Error(message) => sink.on_error(message),
            SpeechEvent::Ended => sink.on_end(),
        }
    }
}

/// Appends a recognized transcript to the question text: the transcript
/// alone when the question is empty, otherwise the trimmed question, one
/// space, then the transcript.
#[must_use]
pub fn append_transcript(question: &str, transcript: &str) -> String {
    if question.is_empty() {
        transcript.to_string()
    } else {
        format!("{} {}", question.trim(), transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_replaces_empty_question() {
        assert_eq!(append_transcript("", "what is css"), "what is css");
    }

    #[test]
    fn transcript_appends_after_trimmed_question() {
        assert_eq!(
            append_transcript("what is  ", "css grid"),
            "what is css grid"
        );
    }

    #[test]
    fn unsupported_capability_refuses_to_start() {
        struct NullSink;
        impl SpeechSink for NullSink {
            fn on_start(&mut self) {}
            fn on_result(&mut self, _transcript: &str) {}
            fn on_error(&mut self, _message: &str) {}
            fn on_end(&mut self) {}
        }

        let capture = UnsupportedSpeech;
        assert!(!capture.is_supported());
        assert!(matches!(
            capture.start(Box::new(NullSink)),
            Err(SpeechError::Unsupported)
        ));
    }

    #[test]
    fn replay_follows_the_event_contract() {
        #[derive(Default)]
        struct RecordingSink {
            log: Vec<String>,
        }
        impl SpeechSink for RecordingSink {
            fn on_start(&mut self) {
                self.log.push("start".to_string());
            }
            fn on_result(&mut self, transcript: &str) {
                self.log.push(format!("result:{transcript}"));
            }
            fn on_error(&mut self, message: &str) {
                self.log.push(format!("error:{message}"));
            }
            fn on_end(&mut self) {
                self.log.push("end".to_string());
            }
        }

        let mut sink = RecordingSink::default();
        replay_events(
            &mut sink,
            &[
                SpeechEvent::Started,
                SpeechEvent::Result("what is css".to_string()),
                SpeechEvent::Ended,
            ],
        );
        assert_eq!(sink.log, ["start", "result:what is css", "end"]);
    }
}
