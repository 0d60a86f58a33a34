//! Message content classification: fenced-code segmentation, code heuristic, language detection.
//!
//! Everything here is pure. The same input always yields an equal result, so callers
//! may cache parses wherever they like.

mod aliases;
mod detect;
mod heuristic;
mod patterns;
mod preview;
mod segments;

pub use aliases::{aliases, resolve_fence_language};
pub use detect::{Language, detect, score_all};
pub use heuristic::{code_score, is_conversational, looks_like_code};
pub use patterns::Family;
pub use preview::{DEFAULT_PREVIEW_LEN, preview};
pub use segments::{Segment, is_code_message, parse};
