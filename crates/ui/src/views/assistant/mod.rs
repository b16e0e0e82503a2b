mod actions;
mod state;
mod view;

pub use view::AssistantView;
