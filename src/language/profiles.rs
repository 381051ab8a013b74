//! Built-in language descriptor tables.
//!
//! Each descriptor is plain data: the registry compiles the patterns once
//! and dispatches by table lookup. Patterns are single-line and anchored at
//! the start of the line; the first participating capture group is the
//! element name.

use super::{ElementKind, LanguageId};

/// Static description of a language profile before its patterns are compiled.
pub(super) struct ProfileSpec {
    pub id: LanguageId,
    pub extensions: &'static [&'static str],
    pub patterns: &'static [(ElementKind, &'static str)],
    pub comment_prefixes: &'static [&'static str],
    /// Words that are never element names and never lead a declaration.
    pub keywords: &'static [&'static str],
}

const C_COMMENTS: &[&str] = &["//", "/*", "*/", "* "];

const C_KEYWORDS: &[&str] = &[
    "if", "else", "while", "for", "do", "switch", "case", "return", "sizeof", "goto", "break",
    "continue", "default",
];

const JS_FUNCTION: &str = r"^\s*(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*([A-Za-z_$][\w$]*)";
const JS_ARROW: &str = r"^\s*(?:export\s+)?(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*(?::[^=]+)?=\s*(?:async\s+)?(?:function\b|\([^)]*\)\s*(?::\s*[^=]+)?=>|[A-Za-z_$][\w$]*\s*=>)";
const JS_CLASS: &str = r"^\s*(?:export\s+)?(?:default\s+)?(?:abstract\s+)?class\s+([A-Za-z_$][\w$]*)";
const JS_IMPORT: &str = r#"^\s*import\s+(?:type\s+)?(?:.+?\s+from\s+)?['"]([^'"]+)['"]"#;
const JS_REQUIRE: &str = r#"\brequire\(\s*['"]([^'"]+)['"]\s*\)"#;

const C_INCLUDE: &str = r#"^\s*#\s*include\s*[<"]([^>"]+)[>"]"#;
const C_TYPEDEF: &str = r"^\s*typedef\s+.+?\b([A-Za-z_]\w*)\s*;\s*$";

pub(super) const BUILTIN_PROFILES: &[ProfileSpec] = &[
    ProfileSpec {
        id: LanguageId::Python,
        extensions: &["py", "pyw", "pyi"],
        patterns: &[
            (ElementKind::Function, r"^\s*(?:async\s+)?def\s+([A-Za-z_]\w*)\s*\("),
            (ElementKind::Class, r"^\s*class\s+([A-Za-z_]\w*)\s*[(:]"),
            (ElementKind::Import, r"^\s*from\s+([\w.]+)\s+import\b"),
            (ElementKind::Import, r"^\s*import\s+([\w.]+)"),
            (ElementKind::Type, r"^\s*type\s+([A-Za-z_]\w*)\s*(?:\[[^\]]*\])?\s*="),
        ],
        comment_prefixes: &["#", "\"\"\"", "'''"],
        keywords: &["return", "if", "elif", "else", "while", "for", "lambda"],
    },
    ProfileSpec {
        id: LanguageId::JavaScript,
        extensions: &["js", "jsx", "mjs", "cjs"],
        patterns: &[
            (ElementKind::Function, JS_FUNCTION),
            (ElementKind::Function, JS_ARROW),
            (ElementKind::Class, JS_CLASS),
            (ElementKind::Import, JS_IMPORT),
            (ElementKind::Import, JS_REQUIRE),
        ],
        comment_prefixes: C_COMMENTS,
        keywords: &["return", "if", "else", "while", "for", "switch", "new", "throw"],
    },
    ProfileSpec {
        id: LanguageId::TypeScript,
        extensions: &["ts", "tsx", "mts", "cts"],
        patterns: &[
            (ElementKind::Function, JS_FUNCTION),
            (ElementKind::Function, JS_ARROW),
            (ElementKind::Class, JS_CLASS),
            (ElementKind::Import, JS_IMPORT),
            (ElementKind::Import, JS_REQUIRE),
            (
                ElementKind::Type,
                r"^\s*(?:export\s+)?(?:declare\s+)?interface\s+([A-Za-z_$][\w$]*)",
            ),
            (
                ElementKind::Type,
                r"^\s*(?:export\s+)?(?:declare\s+)?type\s+([A-Za-z_$][\w$]*)\s*(?:<[^>]*>)?\s*=",
            ),
            (
                ElementKind::Type,
                r"^\s*(?:export\s+)?(?:declare\s+)?(?:const\s+)?enum\s+([A-Za-z_$][\w$]*)",
            ),
        ],
        comment_prefixes: C_COMMENTS,
        keywords: &["return", "if", "else", "while", "for", "switch", "new", "throw"],
    },
    ProfileSpec {
        id: LanguageId::Java,
        extensions: &["java"],
        patterns: &[
            (
                ElementKind::Function,
                r"^\s*(?:@\w+\s+)*(?:(?:public|protected|private|static|final|abstract|synchronized|native|default)\s+)+(?:<[^>]+>\s*)?[\w.<>\[\]?, ]+?\s+([A-Za-z_]\w*)\s*\(",
            ),
            (
                ElementKind::Class,
                r"^\s*(?:(?:public|protected|private|abstract|final|static|sealed|non-sealed)\s+)*(?:class|record)\s+([A-Za-z_]\w*)",
            ),
            (
                ElementKind::Type,
                r"^\s*(?:(?:public|protected|private|abstract|static|sealed|non-sealed)\s+)*(?:@?interface|enum)\s+([A-Za-z_]\w*)",
            ),
            (
                ElementKind::Import,
                r"^\s*import\s+(?:static\s+)?([\w.]+(?:\.\*)?)\s*;",
            ),
        ],
        comment_prefixes: C_COMMENTS,
        keywords: &[
            "return", "if", "else", "while", "for", "switch", "case", "new", "throw", "catch",
        ],
    },
    ProfileSpec {
        id: LanguageId::Go,
        extensions: &["go"],
        patterns: &[
            (
                ElementKind::Function,
                r"^\s*func\s+(?:\([^)]*\)\s*)?([A-Za-z_]\w*)\s*[\[(]",
            ),
            (ElementKind::Class, r"^\s*type\s+([A-Za-z_]\w*)(?:\[[^\]]*\])?\s+struct\b"),
            (ElementKind::Type, r"^\s*type\s+([A-Za-z_]\w*)(?:\[[^\]]*\])?\s+interface\b"),
            (ElementKind::Import, r#"^\s*import\s+(?:[\w.]+\s+)?"([^"]+)""#),
            // Entries inside an `import ( ... )` block.
            (ElementKind::Import, r#"^\s+(?:[\w.]+\s+)?"([^"]+)"\s*$"#),
        ],
        comment_prefixes: C_COMMENTS,
        keywords: &["return", "if", "else", "for", "switch", "case", "go", "defer"],
    },
    ProfileSpec {
        id: LanguageId::Rust,
        extensions: &["rs"],
        patterns: &[
            (
                ElementKind::Function,
                r#"^\s*(?:pub(?:\([^)]*\))?\s+)?(?:(?:const|async|unsafe)\s+)*(?:extern\s+"[^"]*"\s+)?fn\s+([A-Za-z_]\w*)"#,
            ),
            (
                ElementKind::Class,
                r"^\s*(?:pub(?:\([^)]*\))?\s+)?(?:struct|union)\s+([A-Za-z_]\w*)",
            ),
            (
                ElementKind::Type,
                r"^\s*(?:pub(?:\([^)]*\))?\s+)?(?:unsafe\s+)?(?:enum|trait|type)\s+([A-Za-z_]\w*)",
            ),
            (
                ElementKind::Import,
                r"^\s*(?:pub(?:\([^)]*\))?\s+)?use\s+(\w+(?:::\w+)*)",
            ),
            (ElementKind::Import, r"^\s*extern\s+crate\s+(\w+)"),
        ],
        comment_prefixes: C_COMMENTS,
        keywords: &["return", "if", "else", "while", "for", "match", "let"],
    },
    ProfileSpec {
        id: LanguageId::C,
        extensions: &["c", "h"],
        patterns: &[
            (
                ElementKind::Function,
                r"^\s*(?:(?:static|extern|inline|const|unsigned|signed|struct|enum)\s+)*[A-Za-z_]\w*[\s*]+([A-Za-z_]\w*)\s*\([^;]*$",
            ),
            (
                ElementKind::Class,
                r"^\s*(?:typedef\s+)?(?:struct|union)\s+([A-Za-z_]\w*)\s*\{?\s*$",
            ),
            (
                ElementKind::Type,
                r"^\s*(?:typedef\s+)?enum\s+([A-Za-z_]\w*)\s*\{?\s*$",
            ),
            (ElementKind::Type, C_TYPEDEF),
            (ElementKind::Import, C_INCLUDE),
        ],
        comment_prefixes: C_COMMENTS,
        keywords: C_KEYWORDS,
    },
    ProfileSpec {
        id: LanguageId::Cpp,
        extensions: &["cpp", "cc", "cxx", "c++", "hpp", "hh", "hxx"],
        patterns: &[
            (
                ElementKind::Function,
                r"^\s*(?:template\s*<[^>]*>\s*)?(?:(?:static|extern|inline|virtual|constexpr|explicit|const|unsigned|signed)\s+)*[\w:<>,]+[\s*&]+((?:[A-Za-z_]\w*::)*~?[A-Za-z_]\w*)\s*\([^;]*$",
            ),
            (
                ElementKind::Class,
                r"^\s*(?:template\s*<[^>]*>\s*)?(?:class|struct)\s+([A-Za-z_]\w*)(?:\s+final)?\s*(?::[^;{]*)?\{?\s*$",
            ),
            (
                ElementKind::Type,
                r"^\s*enum\s+(?:class\s+|struct\s+)?([A-Za-z_]\w*)\s*(?::\s*\w+)?\s*\{?\s*$",
            ),
            (ElementKind::Type, r"^\s*using\s+([A-Za-z_]\w*)\s*="),
            (ElementKind::Type, C_TYPEDEF),
            (ElementKind::Import, C_INCLUDE),
        ],
        comment_prefixes: C_COMMENTS,
        keywords: C_KEYWORDS,
    },
    ProfileSpec {
        id: LanguageId::Generic,
        extensions: &[
            "rb", "php", "cs", "swift", "kt", "kts", "scala", "sh", "bash", "zsh", "pl", "pm", "lua",
            "r",
        ],
        patterns: &[
            (
                ElementKind::Import,
                r#"^\s*(?:require|require_relative|require_once|include_once|load)\s*\(?\s*['"]([^'"]+)['"]"#,
            ),
            (ElementKind::Import, r"^\s*(?:import|using|use)\s+([\w.:\\]+)"),
            (ElementKind::Import, r#"^\s*(?:library|require)\(\s*['"]?([\w.]+)"#),
            (ElementKind::Import, r"^\s*source\s+(\S+)"),
        ],
        comment_prefixes: &["#", "//", "--", "/*", "*/", "* "],
        keywords: &[],
    },
];
