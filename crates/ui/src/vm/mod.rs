mod labels;

pub use labels::{bar_width_style, option_marker, session_pill_label, time_range_label};
