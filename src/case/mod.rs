pub mod joiner;
pub mod splitter;

use crate::Error;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub use splitter::{split_words, split_words_with, SplitPolicy};

/// Turns a word sequence into a key.
pub type Joiner = fn(&[String]) -> String;

/// Target naming convention for object keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStyle {
    #[default]
    #[serde(rename = "camelCase", alias = "camel")]
    CamelCase,
    #[serde(rename = "snake_case", alias = "snake")]
    SnakeCase,
    #[serde(rename = "kebab-case", alias = "kebab")]
    KebabCase,
    #[serde(rename = "PascalCase", alias = "pascal")]
    PascalCase,
    #[serde(rename = "flatcase")]
    FlatCase,
    #[serde(rename = "UPPERFLATCASE")]
    UpperFlatCase,
    #[serde(rename = "Pascal_Snake_Case")]
    PascalSnakeCase,
    #[serde(rename = "camel_Snake_Case")]
    CamelSnakeCase,
    #[serde(rename = "SCREAMING_SNAKE_CASE")]
    ScreamingSnakeCase,
}

// Indexed by `CaseStyle as usize`; order must follow the enum declaration.
const JOINERS: [(CaseStyle, &str, Joiner); 9] = [
    (CaseStyle::CamelCase, "camelCase", joiner::camel),
    (CaseStyle::SnakeCase, "snake_case", joiner::snake),
    (CaseStyle::KebabCase, "kebab-case", joiner::kebab),
    (CaseStyle::PascalCase, "PascalCase", joiner::pascal),
    (CaseStyle::FlatCase, "flatcase", joiner::flat),
    (CaseStyle::UpperFlatCase, "UPPERFLATCASE", joiner::upper_flat),
    (CaseStyle::PascalSnakeCase, "Pascal_Snake_Case", joiner::pascal_snake),
    (CaseStyle::CamelSnakeCase, "camel_Snake_Case", joiner::camel_snake),
    (CaseStyle::ScreamingSnakeCase, "SCREAMING_SNAKE_CASE", joiner::screaming_snake),
];

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, CaseStyle> = {
        let mut names: HashMap<&'static str, CaseStyle> =
            JOINERS.iter().map(|(style, name, _)| (*name, *style)).collect();
        names.insert("camel", CaseStyle::CamelCase);
        names.insert("snake", CaseStyle::SnakeCase);
        names.insert("kebab", CaseStyle::KebabCase);
        names.insert("pascal", CaseStyle::PascalCase);
        names
    };
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 9] = [
        CaseStyle::CamelCase,
        CaseStyle::SnakeCase,
        CaseStyle::KebabCase,
        CaseStyle::PascalCase,
        CaseStyle::FlatCase,
        CaseStyle::UpperFlatCase,
        CaseStyle::PascalSnakeCase,
        CaseStyle::CamelSnakeCase,
        CaseStyle::ScreamingSnakeCase,
    ];

    /// Canonical identifier, e.g. `kebab-case`.
    pub fn name(self) -> &'static str {
        JOINERS[self as usize].1
    }

    pub fn joiner(self) -> Joiner {
        JOINERS[self as usize].2
    }

    pub fn join(self, words: &[String]) -> String {
        (self.joiner())(words)
    }

    /// Split `key` with `policy` and rejoin it in this style.
    pub fn convert(self, key: &str, policy: SplitPolicy) -> String {
        self.join(&split_words_with(key, policy))
    }
}

impl FromStr for CaseStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_NAME
            .get(s)
            .copied()
            .ok_or_else(|| Error::UnsupportedCaseStyle(s.to_string()))
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) fn style_names() -> String {
    CaseStyle::ALL
        .iter()
        .map(|style| style.name())
        .collect::<Vec<_>>()
        .join(", ")
}
