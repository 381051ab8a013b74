//! Compiled language profiles and extension lookup.

use std::collections::{BTreeMap, HashMap};

use regex::Regex;

use super::profiles::{BUILTIN_PROFILES, ProfileSpec};
use super::{ElementKind, LanguageId};
use crate::error::{DiffsumError, Result};

/// A compiled single-line matcher for one kind of structural element.
#[derive(Debug, Clone)]
pub struct ElementPattern {
    pub kind: ElementKind,
    regex: Regex,
    keywords: &'static [&'static str],
}

impl ElementPattern {
    fn compile(kind: ElementKind, pattern: &str, keywords: &'static [&'static str]) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| DiffsumError::pattern(pattern, e))?;
        Ok(Self {
            kind,
            regex,
            keywords,
        })
    }

    /// Extract the element name from a line, if the line declares one.
    ///
    /// The name is the first capture group that participated in the match.
    /// Lines led by a language keyword (`return foo(x,`) and names that are
    /// keywords (`else if (`) are rejected.
    pub fn extract<'l>(&self, line: &'l str) -> Option<&'l str> {
        if let Some(first) = first_word(line)
            && self.keywords.contains(&first)
        {
            return None;
        }

        let caps = self.regex.captures(line)?;
        let name = caps.iter().skip(1).flatten().next()?.as_str();

        if name.is_empty() || self.keywords.contains(&name) {
            return None;
        }
        Some(name)
    }
}

/// Line-pattern knowledge about one language.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub id: LanguageId,
    pub extensions: Vec<String>,
    /// Matchers in evaluation order.
    pub patterns: Vec<ElementPattern>,
    pub comment_prefixes: &'static [&'static str],
}

impl LanguageProfile {
    fn compile(spec: &ProfileSpec) -> Result<Self> {
        let patterns = spec
            .patterns
            .iter()
            .map(|(kind, pattern)| ElementPattern::compile(*kind, pattern, spec.keywords))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            id: spec.id,
            extensions: spec.extensions.iter().map(|e| e.to_string()).collect(),
            patterns,
            comment_prefixes: spec.comment_prefixes,
        })
    }

    /// Whether the line is a comment in this language.
    ///
    /// Blank lines are not comments.
    pub fn is_comment(&self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.comment_prefixes
            .iter()
            .any(|p| trimmed.starts_with(p) || trimmed == p.trim_end())
    }

    /// Run every matcher over one line, yielding at most one name per matcher.
    pub fn elements_in<'l>(&self, line: &'l str) -> impl Iterator<Item = (ElementKind, &'l str)> {
        self.patterns
            .iter()
            .filter_map(move |p| p.extract(line).map(|name| (p.kind, name)))
    }
}

/// Immutable table of language profiles keyed by file extension.
///
/// Build once with [`LanguageRegistry::builtin`] (plus any configured
/// overrides) and pass by reference.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    profiles: Vec<LanguageProfile>,
    /// Lowercase extension -> index into `profiles`.
    by_extension: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// Compile the built-in profile table.
    ///
    /// # Returns
    ///
    /// * `Ok(LanguageRegistry)` - All built-in patterns compiled
    /// * `Err(DiffsumError::PatternError)` - A built-in pattern is invalid
    pub fn builtin() -> Result<Self> {
        let profiles = BUILTIN_PROFILES
            .iter()
            .map(LanguageProfile::compile)
            .collect::<Result<Vec<_>>>()?;

        let mut by_extension = HashMap::new();
        for (idx, profile) in profiles.iter().enumerate() {
            for ext in &profile.extensions {
                by_extension.insert(ext.clone(), idx);
            }
        }

        log::debug!(
            "compiled {} language profiles covering {} extensions",
            profiles.len(),
            by_extension.len()
        );

        Ok(Self {
            profiles,
            by_extension,
        })
    }

    /// Map additional extensions to built-in languages.
    ///
    /// Keys are extensions (a leading dot is allowed), values are language
    /// names accepted by [`LanguageId`]'s `FromStr`. Later mappings replace
    /// built-in ones.
    ///
    /// # Returns
    ///
    /// * `Err(DiffsumError::UserError)` - A language name is not recognized
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Result<Self> {
        for (ext, language) in overrides {
            let id: LanguageId = language.parse().map_err(|_| {
                DiffsumError::UserError(format!(
                    "unknown language '{}' for extension '{}' in language_overrides\n\
                     Fix: use one of: {}",
                    language,
                    ext,
                    LanguageId::NAMES.join(", ")
                ))
            })?;

            let ext = normalize_extension(ext);
            if ext.is_empty() {
                return Err(DiffsumError::UserError(
                    "empty extension in language_overrides".to_string(),
                ));
            }

            let Some(idx) = self.profiles.iter().position(|p| p.id == id) else {
                continue;
            };
            log::debug!("extension '{}' mapped to {}", ext, id);
            self.by_extension.insert(ext, idx);
        }
        Ok(self)
    }

    /// Look up the profile for a path by its extension (case-insensitive).
    ///
    /// Files without an extension, and dotfiles such as `.bashrc`, resolve
    /// to `None`.
    pub fn resolve(&self, path: &str) -> Option<&LanguageProfile> {
        let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        let (stem, ext) = file_name.rsplit_once('.')?;
        if stem.is_empty() {
            return None;
        }
        let idx = self.by_extension.get(&ext.to_lowercase())?;
        self.profiles.get(*idx)
    }

    #[cfg(test)]
    pub fn profile(&self, id: LanguageId) -> Option<&LanguageProfile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    #[cfg(test)]
    pub fn profiles(&self) -> &[LanguageProfile] {
        &self.profiles
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

fn first_word(line: &str) -> Option<&str> {
    line.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .find(|w| !w.is_empty())
}
