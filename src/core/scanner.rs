//! Text-based extraction of translation keys.
//!
//! Files are treated as plain text. A key is recognized at call sites of the
//! marker `_` or the resolver `__`, directly followed by `(` and a quoted
//! literal, e.g. `_("Save")` or `__('Save', lang)`. Only the first literal is
//! extracted. The literal may contain letters, digits, spaces and
//! `. , / \ | ? ! : + - * =`; anything else means the call is not matched.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

/// Characters accepted inside a key literal.
const KEY_CHARS: &str = r"\p{L}\p{Nd} .,/\\|?!:+\-*=";

static CALL_SITE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r#"(?:^|[^\p{{L}}\p{{Nd}}_$])__?\((?:"([{KEY_CHARS}]+)"|'([{KEY_CHARS}]+)'|`([{KEY_CHARS}]+)`)"#
    );
    Regex::new(&pattern).unwrap()
});

/// A discovered key and the file it was first seen in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedKey {
    pub token: String,
    pub source_path: String,
}

/// Keys discovered during a run, unique by token, in discovery order.
#[derive(Debug, Default, Clone)]
pub struct MatchedKeys {
    keys: Vec<MatchedKey>,
    seen: HashSet<String>,
}

impl MatchedKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `token`, returning false if it was already known. The first
    /// source path wins.
    pub fn insert(&mut self, token: &str, source_path: &str) -> bool {
        if !self.seen.insert(token.to_string()) {
            return false;
        }
        self.keys.push(MatchedKey {
            token: token.to_string(),
            source_path: source_path.to_string(),
        });
        true
    }

    pub fn contains(&self, token: &str) -> bool {
        self.seen.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchedKey> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<'a> IntoIterator for &'a MatchedKeys {
    type Item = &'a MatchedKey;
    type IntoIter = std::slice::Iter<'a, MatchedKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// Every key literal referenced in `content`, in order of appearance,
/// duplicates included.
pub fn find_tokens(content: &str) -> Vec<&str> {
    CALL_SITE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|m| m.as_str())
        .collect()
}

/// Result of scanning one file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FileScan {
    /// Every call site found in the file.
    pub occurrences: Vec<String>,
    /// Tokens first discovered in this file.
    pub new_tokens: Vec<String>,
}

/// Scan `content` and append unseen tokens to `keys`, attributed to
/// `source_path`.
pub fn scan_content(content: &str, source_path: &str, keys: &mut MatchedKeys) -> FileScan {
    let mut scan = FileScan::default();
    for token in find_tokens(content) {
        if keys.insert(token, source_path) {
            scan.new_tokens.push(token.to_string());
        }
        scan.occurrences.push(token.to_string());
    }
    scan
}
