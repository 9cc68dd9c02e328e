use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How runs of uppercase letters are broken into words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitPolicy {
    /// Every capital after the first in a run opens a new word:
    /// `HTTPServer` splits into `h t t p server`.
    #[default]
    Legacy,
    /// A run of capitals is one word; if lowercase letters follow, the last
    /// capital starts the next word: `HTTPServer` splits into `http server`.
    Acronym,
}

impl FromStr for SplitPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(SplitPolicy::Legacy),
            "acronym" => Ok(SplitPolicy::Acronym),
            _ => Err(format!("Unknown split policy: {}", s)),
        }
    }
}

impl fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitPolicy::Legacy => write!(f, "legacy"),
            SplitPolicy::Acronym => write!(f, "acronym"),
        }
    }
}

pub fn is_separator(ch: char) -> bool {
    matches!(ch, '-' | '_' | ' ' | '.')
}

/// Split an identifier into lowercase words using the legacy policy.
pub fn split_words(key: &str) -> Vec<String> {
    split_words_with(key, SplitPolicy::Legacy)
}

/// Split an identifier into lowercase words.
///
/// Separators (`-`, `_`, space, `.`) end the current word and are dropped.
/// Uppercase letters start a new word according to `policy`. Everything
/// else, digits included, extends the current word. An empty key or one made
/// only of separators yields no words.
pub fn split_words_with(key: &str, policy: SplitPolicy) -> Vec<String> {
    let chars: Vec<char> = key.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if is_separator(ch) {
            flush(&mut words, &mut current);
        } else if ch.is_uppercase() {
            let boundary = match policy {
                SplitPolicy::Legacy => true,
                SplitPolicy::Acronym => {
                    let prev_upper = i > 0 && chars[i - 1].is_uppercase();
                    let next_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
                    !prev_upper || next_lower
                }
            };
            if boundary {
                flush(&mut words, &mut current);
            }
            current.extend(ch.to_lowercase());
        } else {
            current.extend(ch.to_lowercase());
        }
    }

    flush(&mut words, &mut current);
    words
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}
