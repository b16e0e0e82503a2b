mod ids;
mod language;
mod quiz_item;
mod segment;
mod session;
mod video;

pub use ids::SessionId;
pub use language::Language;
pub use quiz_item::QuizItem;
pub use segment::VideoMatch;
pub use session::{ChatSession, DEFAULT_SESSION_TITLE, derive_session_title};
pub use video::UploadedVideo;
