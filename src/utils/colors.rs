/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Work status color: green while on shift, yellow on break, grey off duty.
pub fn color_for_status(is_during: bool, is_break: bool) -> &'static str {
    if is_break {
        YELLOW
    } else if is_during {
        GREEN
    } else {
        GREY
    }
}
