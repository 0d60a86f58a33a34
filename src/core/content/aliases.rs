//! Fence tag aliases, loaded from `config/lang-aliases.json` (embedded at compile time).

use std::collections::HashMap;
use std::sync::OnceLock;

use super::detect::Language;

fn load_aliases() -> HashMap<String, String> {
    let json = include_str!("../../../config/lang-aliases.json");
    // build.rs has already checked the shape of this file.
    serde_json::from_str(json).expect("lang-aliases.json must be valid")
}

static ALIASES: OnceLock<HashMap<String, String>> = OnceLock::new();

/// Alias table: short fence tag -> canonical tag.
pub fn aliases() -> &'static HashMap<String, String> {
    ALIASES.get_or_init(load_aliases)
}

/// Canonical language for a fence tag.
///
/// Lowercases the tag, then resolves aliases. Unknown tags pass through; an empty tag is "text".
pub fn resolve_fence_language(tag: &str) -> String {
    let tag = tag.to_lowercase();
    if tag.is_empty() {
        return Language::Text.as_str().to_string();
    }
    match aliases().get(&tag) {
        Some(canonical) => canonical.clone(),
        None => tag,
    }
}
