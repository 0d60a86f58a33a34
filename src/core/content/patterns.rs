//! Per-language regex tables used by language detection and the code heuristic.
//!
//! Each [`Family`] owns a fixed list of patterns. The lists are compiled once into
//! `RegexSet`s so that scoring a text against a family is a single pass.

use std::sync::OnceLock;

use regex::RegexSet;

/// A group of patterns tuned to one language (or one add-on, like React/JSX).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    JsTs,
    React,
    Python,
    JavaKotlin,
    CCpp,
    Go,
    Rust,
    Sql,
    Css,
    Html,
    Json,
    Shell,
    Yaml,
}

impl Family {
    /// Every family, in table order. The code heuristic scores against all of them.
    pub const ALL: [Family; 13] = [
        Family::JsTs,
        Family::React,
        Family::Python,
        Family::JavaKotlin,
        Family::CCpp,
        Family::Go,
        Family::Rust,
        Family::Sql,
        Family::Css,
        Family::Html,
        Family::Json,
        Family::Shell,
        Family::Yaml,
    ];

    /// Raw pattern sources for this family.
    pub fn sources(self) -> &'static [&'static str] {
        match self {
            Family::JsTs => JS_TS,
            Family::React => REACT,
            Family::Python => PYTHON,
            Family::JavaKotlin => JAVA_KOTLIN,
            Family::CCpp => C_CPP,
            Family::Go => GO,
            Family::Rust => RUST,
            Family::Sql => SQL,
            Family::Css => CSS,
            Family::Html => HTML,
            Family::Json => JSON,
            Family::Shell => SHELL,
            Family::Yaml => YAML,
        }
    }

    /// Number of patterns in this family that match somewhere in `text`.
    pub fn count(self, text: &str) -> usize {
        compiled()[self as usize].matches(text).iter().count()
    }
}

static COMPILED: OnceLock<Vec<RegexSet>> = OnceLock::new();

fn compiled() -> &'static [RegexSet] {
    COMPILED.get_or_init(|| {
        Family::ALL
            .iter()
            .map(|family| {
                RegexSet::new(family.sources())
                    .unwrap_or_else(|e| panic!("invalid {:?} pattern: {}", family, e))
            })
            .collect()
    })
}

const JS_TS: &[&str] = &[
    // `let` is left out: Rust bindings share the shape.
    r"\b(const|var)\s+\w+\s*=",
    r"\bfunction\s+\w+\s*\(",
    r"\b(async\s+)?function\s*\(",
    r"=>\s*[{(]",
    r"(?m)^\s*(export\s+(default\s+)?)?class\s+\w+(\s+extends\s+[\w.]+)?\s*\{",
    r#"\bimport\s+([\w*{][^;\n]*\s)?from\s+['"]|\bimport\s+['"][^'"\n]*['"]\s*;"#,
    r"\bexport\s+(default|const|let|function|class|async|interface|type)\b",
    r"\bconsole\.(log|error|warn|info|debug)\s*\(",
    r"\b(await|async)\b",
    r"\b(interface|type)\s+\w+\s*[={<]",
    r":\s*(string|number|boolean|any|void|never)\b",
    r"\bnew\s+\w+\s*\(",
    r"\.(map|filter|reduce|forEach|find|some|every)\s*\(",
    r"\b(try|catch|finally)\s*[{(]",
    r"\b(if|else if|else)\s*[({]",
    r"\bthrow\s+new\s+\w*Error",
    r"\bmodule\.exports\b",
    r#"\brequire\s*\(\s*['"`]"#,
    r"\bPromise\.(all|race|resolve|reject)\s*\(",
    r"\.then\s*\(\s*(async\s*)?\(",
    r"\b(setTimeout|setInterval|clearTimeout|clearInterval)\b",
    r"\bdocument\.(getElementById|querySelector|createElement)\s*\(",
    r"\bwindow\.\w+",
    r"\bevent\.(preventDefault|stopPropagation)\s*\(",
];

const REACT: &[&str] = &[
    // Component tag, not a generic argument like List<String>
    r"(^|[^\w.])<[A-Z]\w*(\s+\w+=|\s*/?>)",
    r#"\bclassName\s*=\s*[{'"]"#,
    r"\b(useState|useEffect|useCallback|useMemo|useRef)\b",
    r"\bReact\.\w+",
    r"</[A-Z]\w*>",
    // JSX attribute expression, e.g. onClick={handler}
    r"\w+=\{[^}]*\}",
    r"\b(onClick|onChange|onSubmit|onKeyDown)\b",
    r"\bprops\.\w+",
];

const PYTHON: &[&str] = &[
    r"\bdef\s+\w+\s*\([^)]*\)\s*(->\s*[^:\n]+)?:",
    r"(?m)^\s*class\s+\w+(\([^)]*\))?:\s*$",
    r"(?m)^\s*import\s+[\w.]+(\s+as\s+\w+)?(\s*,\s*[\w.]+)*\s*$|^\s*from\s+[\w.]+\s+import\b",
    r"(?m)\bif\s+.+:\s*$",
    r"(?m)\bfor\s+\w+(\s*,\s*\w+)*\s+in\s+.+:\s*$",
    r"(?m)\bwhile\s+.+:\s*$",
    r"\bprint\s*\(",
    r"(?m)\bself\.\w+\s*=[^=;\n]*$",
    r"\b(True|False|None)\b",
    r"\blambda\s+\w+\s*:",
    r"\bwith\s+.+\s+as\s+\w+:",
    r"(?m)^\s*(try|finally)\s*:|^\s*except\b.*:|\braise\s+\w+",
    r"\basync\s+def\b",
    r"\bawait\s+\w+",
    r"__\w+__",
    r"\b(list|dict|tuple|set)\s*\(",
    r"\[\s*\w+\s+for\s+\w+\s+in\s+",
    // Block opener: keyword line ending in a colon
    r"(?m)^\s*(def|class|if|elif|else|for|while|with|try|except|finally)\b.*:\s*$",
];

const JAVA_KOTLIN: &[&str] = &[
    r"\bpublic\s+(static\s+)?(void|class|interface)\b",
    r"\bprivate\s+(final\s+)?\w+\s+\w+",
    r"\bSystem\.(out|err)\.(print|println)\s*\(",
    r"\bString\s+\w+\s*=",
    r"\bnew\s+\w+(<[^>]*>)?\s*\(",
    r"\bpackage\s+[\w.]+;",
    r"(?m)^\s*import\s+(static\s+)?[a-z]\w*(\.\w+)+(\.\*)?;",
    r"\b(extends|implements)\s+\w+",
    r"(?m)^\s*@[A-Z]\w*",
    r"\bfun\s+\w+\s*\(",
    r"\bval\s+\w+\s*[:=]",
    r"\bvar\s+\w+\s*[:=]",
    r"\bdata\s+class\b",
];

const C_CPP: &[&str] = &[
    r#"#include\s*[<"]"#,
    r"\bint\s+main\s*\(",
    r"(?m)^\s*((static|const|unsigned)\s+)*(int|char|float|double|void|long)\s+\*?\w+\s*[=;(]",
    // Not followed by `::`, so Rust paths like std::string::String stay out
    r"\bstd::(cout|cin|cerr|endl|string|vector|map|set|unique_ptr|shared_ptr|make_unique|make_shared|move|size_t)([^:\w]|$)",
    r"\bcout\s*<<",
    r"\bcin\s*>>",
    r"\bprintf\s*\(",
    r"\bscanf\s*\(",
    r"\btypedef\s+struct\b|\bstruct\s+\w+\s*\{[^}]*\}\s*;",
    r"\btemplate\s*<",
    r"\bclass\s+\w+\s*:\s*(public|private|protected)\b",
    r"\b(nullptr|NULL)\b",
    r"\bsizeof\s*\(",
    r"\b(int|char|float|double|void|long|short|unsigned|const)\s*\*+\s*\w+",
    r"\b(malloc|free)\s*\(",
];

const GO: &[&str] = &[
    r"(?m)\bpackage\s+\w+\s*$",
    r"\bfunc\s+(\([^)]+\)\s+)?\w+\s*\(",
    r"\bimport\s+\(",
    r"\bgo\s+func\s*\(",
    r"\bchan\s+\w+",
    r"\bdefer\s+\w+",
    r"\b(make|append|len|cap)\s*\(",
    r"\btype\s+\w+\s+(struct|interface)\s*\{",
    r"\brange\s+\w+",
    r"(?m)^\s*case\s+[^:\n]+:\s*$",
    r"\bfmt\.(Print|Println|Printf|Sprintf|Errorf)\s*\(",
    r":=|\berr\s*!=\s*nil\b",
];

const RUST: &[&str] = &[
    r"\bfn\s+\w+\s*(<[^>]+>)?\s*\(",
    r"\blet\s+(mut\s+)?\w+\s*[:=]",
    r"\bimpl\s+(<[^>]+>\s+)?\w+",
    r"\bstruct\s+\w+\s*[<{(;]",
    r"\benum\s+\w+\s*\{",
    r"\bpub(\(crate\))?\s+(fn|struct|enum|trait|mod|use)\b",
    r"\bmatch\s+\w+\s*\{",
    r"\buse\s+\w+(::\w+)*::",
    r"\b(Option|Result|Vec|String|Box)\s*(<|::)",
    r"->\s*\w+",
    r"\bmod\s+\w+\s*[;{]",
    r"\b(println|eprintln|format|vec|panic|assert|assert_eq|write|writeln)!\s*[(\[]",
    r"\.unwrap\(\)|\.expect\(",
    r"&mut\s+\w+|&self\b",
];

// FROM/WHERE stay case-sensitive: lowercase "from" and "where" are everyday words.
const SQL: &[&str] = &[
    r"(?i)\bSELECT\s+(\*|\w+(\.\w+)?)(\s*,\s*\w+(\.\w+)?)*\s+FROM\b",
    r"\bFROM\s+\w+",
    r"\bWHERE\s+\w+",
    r"(?i)\b(INNER|LEFT|RIGHT|FULL)\s+(OUTER\s+)?JOIN\b",
    r"(?i)\bINSERT\s+INTO\s+\w+",
    r"(?i)\bUPDATE\s+\w+\s+SET\b",
    r"(?i)\bDELETE\s+FROM\s+\w+",
    r"(?i)\bCREATE\s+(TABLE|INDEX|VIEW|DATABASE)\b",
    r"(?i)\bALTER\s+TABLE\b",
    r"(?i)\bDROP\s+TABLE\b",
    r"(?i)\bGROUP\s+BY\b",
    r"(?i)\bORDER\s+BY\b",
];

const CSS: &[&str] = &[
    r"(?m)^\s*[.#]?\w+(-\w+)*\s*\{",
    r"(?i)\b(margin|padding|color|background|font|border|display|position|width|height)(-[a-z]+)*\s*:",
    r"\burl\s*\(",
    r"\d(px|em|rem|vh|vw|%)",
    r":\s*(flex|grid|block|inline|inline-block|none)\s*;",
    r"@media\s+",
    r"@keyframes\s+\w+",
    r"\brgba?\s*\(",
    r"\bvar\s*\(--[\w-]+\)",
];

const HTML: &[&str] = &[
    r"(?i)<!DOCTYPE\s+html>",
    r"(?i)<html[^>]*>",
    r"<(head|body|div|span|p|a|img|ul|ol|li|table|tr|td|th|form|input|button|script|style|link|meta)(\s[^>]*)?/?>",
    r"</(html|head|body|div|span|p|a|ul|ol|li|table|tr|td|th|form|button|script|style)>",
    r#"\s(id|class|src|href|alt|title|style)\s*=\s*["']"#,
];

const JSON: &[&str] = &[
    r"^\s*\{[\s\S]*\}\s*$",
    r"^\s*\[[\s\S]*\]\s*$",
    r#""\w+"\s*:\s*("[^"]*"|-?\d+|true|false|null|\{|\[)"#,
];

const SHELL: &[&str] = &[
    r"^#!",
    r"\$\(.*\)",
    r"\$\{\w+\}|\$[A-Za-z_]\w*",
    r"\becho\s+",
    r"(?m)(^|[|&;]\s*)(sudo\s+)?(cd|ls|mkdir|rm|mv|cp|cat|grep|awk|sed|chmod)\s+",
    r"\bif\s+\[\[?\s+",
    r"(?m);\s*(then|do)\s*$|^\s*(fi|done|esac)\s*$",
    r"(?m)^\s*(exit|source|alias)\s+|^\s*export\s+[A-Za-z_]\w*=",
    r"\w\s+\|\s+[a-z]\w*",
    r"\s\d?>{1,2}\s*(/dev/null|&\d|[\w./-]+\.\w+)",
];

const YAML: &[&str] = &[
    // Scalar value with no `;` or `,`: CSS declarations and struct fields stay out
    r"(?m)^\s*[\w-]+:\s+[^;,{}\n]+$",
    r"(?m)^\s*-\s+[\w-]+:(\s|$)",
    r"(?m)^\s*[\w-]+:\n\s+(-\s|[\w-]+:)",
    r"(?m):\s*\|$",
    r"(?m):\s*>$",
    r"(?m)^---\s*$",
];
