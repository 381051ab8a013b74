//! Language detection and line-pattern profiles.
//!
//! A [`LanguageRegistry`] maps file extensions to a [`LanguageProfile`]: an
//! ordered list of single-line element matchers plus comment markers. The
//! matchers are heuristics; multi-line signatures are only recognized on the
//! line that carries the name.

mod profiles;
mod registry;


use serde::Serialize;
use std::str::FromStr;

pub use registry::{ElementPattern, LanguageProfile, LanguageRegistry};

/// Languages with a built-in profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Python,
    JavaScript,
    TypeScript,
    Java,
    Go,
    Rust,
    C,
    Cpp,
    /// Fallback for languages with only import and comment heuristics.
    Generic,
}

impl LanguageId {
    /// Canonical names accepted in configuration.
    pub const NAMES: [&'static str; 9] = [
        "python",
        "javascript",
        "typescript",
        "java",
        "go",
        "rust",
        "c",
        "cpp",
        "generic",
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            LanguageId::Python => "Python",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::TypeScript => "TypeScript",
            LanguageId::Java => "Java",
            LanguageId::Go => "Go",
            LanguageId::Rust => "Rust",
            LanguageId::C => "C",
            LanguageId::Cpp => "C++",
            LanguageId::Generic => "generic",
        }
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for LanguageId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "python" | "py" => Ok(LanguageId::Python),
            "javascript" | "js" => Ok(LanguageId::JavaScript),
            "typescript" | "ts" => Ok(LanguageId::TypeScript),
            "java" => Ok(LanguageId::Java),
            "go" | "golang" => Ok(LanguageId::Go),
            "rust" | "rs" => Ok(LanguageId::Rust),
            "c" => Ok(LanguageId::C),
            "cpp" | "c++" | "cxx" => Ok(LanguageId::Cpp),
            "generic" => Ok(LanguageId::Generic),
            other => Err(format!("unknown language '{}'", other)),
        }
    }
}

/// Kind of structural element a pattern detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Function,
    Class,
    Import,
    Type,
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ElementKind::Function => "function",
            ElementKind::Class => "class",
            ElementKind::Import => "import",
            ElementKind::Type => "type",
        };
        write!(f, "{}", s)
    }
}
