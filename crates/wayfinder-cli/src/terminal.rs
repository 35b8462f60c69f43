//! ANSI styling for route listings.

use std::env;

const RESET: &str = "\x1b[0m";
const START_BADGE: &str = "\x1b[1;7;32m";
const GOAL_BADGE: &str = "\x1b[1;7;35m";
const NODE_ID: &str = "\x1b[1;97m";
const DIM: &str = "\x1b[90m";

/// Escape sequences used by the text renderer. Every field is empty when
/// color is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_start: &'static str,
    pub tag_goal: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: RESET,
            tag_start: START_BADGE,
            tag_goal: GOAL_BADGE,
            white_bold: NODE_ID,
            gray: DIM,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_start: "",
            tag_goal: "",
            white_bold: "",
            gray: "",
        }
    }

    /// Colored unless the environment opts out, see [`supports_color`].
    #[must_use]
    pub fn for_environment() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

/// Whether the current process should emit ANSI codes.
///
/// Color is off when `NO_COLOR` is set (to any value) or `TERM` is `dumb`.
#[must_use]
pub fn supports_color() -> bool {
    color_allowed(env::var_os("NO_COLOR").is_some(), env::var("TERM").ok().as_deref())
}

fn color_allowed(no_color: bool, term: Option<&str>) -> bool {
    !no_color && !term.is_some_and(|term| term.eq_ignore_ascii_case("dumb"))
}
