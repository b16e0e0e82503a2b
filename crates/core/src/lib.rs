#![forbid(unsafe_code)]

pub mod intent;
pub mod links;
pub mod model;
pub mod quiz;
pub mod session_store;
pub mod time;
pub mod topics;

pub use intent::Intent;
pub use links::VideoLinks;
pub use quiz::{QuizScore, QuizState};
pub use session_store::SessionStore;
pub use time::Clock;
pub use topics::TopicTracker;
