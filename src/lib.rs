//! # chitshare-content
//!
//! Message content handling for the chitshare chat client: split a message
//! into text and fenced code, decide whether unfenced text is code, guess
//! the language of a snippet, and render the result for a terminal or a
//! webview.
//!
//! ```
//! use chitshare_content::{Segment, parse};
//!
//! let segments = parse("Try:\n```py\nprint(1)\n```");
//! assert_eq!(segments[0], Segment::Text { content: "Try:".into() });
//! assert!(segments[1].is_code());
//! ```

pub mod core;
pub mod render;

pub use crate::core::content::{Language, Segment, detect, is_code_message, looks_like_code, parse};
