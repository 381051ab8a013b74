//! Compiled path globs and line keyword patterns used by the rule table.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use regex::Regex;

use crate::error::{DiffsumError, Result};

const TEST_PATHS: &[&str] = &[
    "**/test/**",
    "**/tests/**",
    "**/__tests__/**",
    "**/spec/**",
    "**/test_*.*",
    "**/*_test.*",
    "**/*_tests.*",
    "**/*_spec.*",
    "**/*.test.*",
    "**/*.spec.*",
    "**/conftest.py",
];

const DOC_PATHS: &[&str] = &[
    "**/docs/**",
    "**/doc/**",
    "**/documentation/**",
    "**/readme",
    "**/readme.*",
    "**/changelog",
    "**/changelog.*",
    "**/contributing.*",
    "**/license",
    "**/license.*",
    "**/*.md",
    "**/*.markdown",
    "**/*.rst",
    "**/*.adoc",
];

const MANIFEST_PATHS: &[&str] = &[
    "**/cargo.toml",
    "**/cargo.lock",
    "**/package.json",
    "**/package-lock.json",
    "**/npm-shrinkwrap.json",
    "**/yarn.lock",
    "**/pnpm-lock.yaml",
    "**/requirements*.txt",
    "**/pyproject.toml",
    "**/pipfile",
    "**/pipfile.lock",
    "**/poetry.lock",
    "**/setup.py",
    "**/setup.cfg",
    "**/go.mod",
    "**/go.sum",
    "**/pom.xml",
    "**/build.gradle",
    "**/build.gradle.kts",
    "**/gemfile",
    "**/gemfile.lock",
    "**/composer.json",
    "**/composer.lock",
    "**/*.csproj",
];

const LOGGING: &str = r"\b(?:print|println|printf|eprint|eprintln|puts|dbg)!?\s*\(|\bconsole\.(?:log|debug|info|warn|error|trace)\s*\(|\b(?:log|logger|logging|slog|tracing)\s*(?:\.|::)\s*(?:debug|info|warn|warning|error|trace|critical|fatal|exception)\b|\b(?:debug|info|warn|error|trace)!\s*\(|\bSystem\.(?:out|err)\.print|\bfmt\.Print|\bdebugger\b|\bpdb\.set_trace\(|\bbreakpoint\(\)";

const FIX_KEYWORDS: &str = r"(?i)\b(?:fix|fixes|fixed|bug|bugfix|hotfix|workaround|regression)\b";

const ERROR_HANDLING: &str = r"\b(?:try|catch|except|finally|rescue|raise|throw|throws)\b|\bif\s+err\s*!=\s*nil\b|\.map_err\(|\bErr\(|\.ok_or(?:_else)?\(|\b(?:Error|Exception)\b";

const DEBT_MARKERS: &str = r"(?i)\b(?:TODO|FIXME|HACK|XXX)\b";

/// Compiled signals shared by every rule.
#[derive(Debug, Clone)]
pub(super) struct Signals {
    pub test_paths: GlobSet,
    pub doc_paths: GlobSet,
    pub manifest_paths: GlobSet,
    pub logging: Regex,
    pub fix_keywords: Regex,
    pub error_handling: Regex,
    pub debt_markers: Regex,
}

impl Signals {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            test_paths: build_globset(TEST_PATHS)?,
            doc_paths: build_globset(DOC_PATHS)?,
            manifest_paths: build_globset(MANIFEST_PATHS)?,
            logging: compile_regex(LOGGING)?,
            fix_keywords: compile_regex(FIX_KEYWORDS)?,
            error_handling: compile_regex(ERROR_HANDLING)?,
            debt_markers: compile_regex(DEBT_MARKERS)?,
        })
    }
}

/// Build a case-insensitive GlobSet from a list of patterns.
fn build_globset(patterns: &[&str]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| DiffsumError::pattern(pattern, e))?;
        builder.add(glob);
    }

    builder
        .build()
        .map_err(|e| DiffsumError::pattern(&patterns.join(", "), e))
}

fn compile_regex(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| DiffsumError::pattern(pattern, e))
}
