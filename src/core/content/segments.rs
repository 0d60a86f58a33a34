//! Message segmentation: split content into text and fenced code blocks.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::aliases::resolve_fence_language;
use super::detect::detect;
use super::heuristic::looks_like_code;

/// Three backticks, optional bare tag, optional newline, shortest body up to the next three backticks.
static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w*)\n?(.*?)```").expect("fence regex is valid"));

/// Segment of a message: either plain text or a code span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    Text { content: String },
    Code { language: String, code: String },
}

impl Segment {
    pub fn is_code(&self) -> bool {
        matches!(self, Segment::Code { .. })
    }

    fn text(content: &str) -> Self {
        Segment::Text {
            content: content.to_string(),
        }
    }
}

/// Parse message content into text and code segments.
///
/// Explicit ``` fences always win. Without fences the whole message becomes one
/// segment, code or text depending on [`looks_like_code`].
pub fn parse(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last_end = 0;
    let mut fenced = false;

    for caps in FENCE.captures_iter(content) {
        let (Some(whole), Some(tag), Some(body)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        fenced = true;
        push_trimmed_text(&mut segments, &content[last_end..whole.start()]);
        segments.push(Segment::Code {
            language: resolve_fence_language(tag.as_str()),
            code: body.as_str().to_string(),
        });
        last_end = whole.end();
    }

    if fenced {
        push_trimmed_text(&mut segments, &content[last_end..]);
        log::debug!("parsed {} segment(s) from fenced message", segments.len());
        return segments;
    }

    if looks_like_code(content) {
        let language = detect(content);
        log::debug!("unfenced message detected as {} code", language);
        return vec![Segment::Code {
            language: language.as_str().to_string(),
            code: content.to_string(),
        }];
    }
    vec![Segment::text(content)]
}

fn push_trimmed_text(segments: &mut Vec<Segment>, gap: &str) {
    let text = gap.trim();
    if !text.is_empty() {
        segments.push(Segment::text(text));
    }
}

/// True when the message is a single code segment (rendered without a text wrapper).
pub fn is_code_message(content: &str) -> bool {
    matches!(parse(content).as_slice(), [segment] if segment.is_code())
}
