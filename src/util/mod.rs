//! Text helpers for printing decoded feed values to a terminal.
//!
//! # Examples
//!
//! ```
//! use feedscope::util::{flatten_for_terminal, truncate_to_width};
//!
//! let title = flatten_for_terminal("Episode\n  12: \x1b[1mLive\x1b[0m");
//! assert_eq!(title, "Episode 12: Live");
//! assert_eq!(truncate_to_width(&title, 10), "Episode...");
//! ```

mod text;

pub use text::{flatten_for_terminal, truncate_to_width};
