//! Build script: validates lang-aliases.json at compile time.

use std::collections::BTreeMap;
use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let aliases_path: PathBuf = [&manifest_dir, "config", "lang-aliases.json"]
        .iter()
        .collect();
    println!("cargo:rerun-if-changed={}", aliases_path.display());

    let json = std::fs::read_to_string(&aliases_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. lang-aliases.json must exist and be valid.",
            aliases_path.display(),
            e
        )
    });
    let aliases: BTreeMap<String, String> = serde_json::from_str(&json).unwrap_or_else(|e| {
        panic!(
            "lang-aliases.json must be an object of alias -> language: {}. Fix the file and rebuild.",
            e
        )
    });
    for (alias, language) in &aliases {
        if alias.is_empty() || language.is_empty() {
            panic!("lang-aliases.json: empty alias or language ('{}' -> '{}')", alias, language);
        }
        if alias != &alias.to_lowercase() || language != &language.to_lowercase() {
            panic!(
                "lang-aliases.json: '{}' -> '{}' must be lowercase (fence tags are lowercased before lookup)",
                alias, language
            );
        }
    }
}
