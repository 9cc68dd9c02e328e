pub mod discover;

use crate::{CaseStyle, Error, Options, Transformable};
use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Detect document format from extension
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "json" => Ok(DocumentFormat::Json),
            "toml" => Ok(DocumentFormat::Toml),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            "toml" => Ok(DocumentFormat::Toml),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "json"),
            DocumentFormat::Toml => write!(f, "toml"),
        }
    }
}

/// A parsed input file.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Json(serde_json::Value),
    Toml(toml::Value),
}

impl Document {
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        match format {
            DocumentFormat::Json => serde_json::from_str(content)
                .map(Document::Json)
                .context("Failed to parse JSON document"),
            DocumentFormat::Toml => toml::from_str::<toml::Table>(content)
                .map(|table| Document::Toml(toml::Value::Table(table)))
                .context("Failed to parse TOML document"),
        }
    }

    pub fn format(&self) -> DocumentFormat {
        match self {
            Document::Json(_) => DocumentFormat::Json,
            Document::Toml(_) => DocumentFormat::Toml,
        }
    }

    pub fn transform(&self, style: CaseStyle, options: &Options) -> Result<Self, Error> {
        Ok(match self {
            Document::Json(value) => Document::Json(value.transform(style, options)?),
            Document::Toml(value) => Document::Toml(value.transform(style, options)?),
        })
    }

    /// Serialize back to text, always ending with a newline.
    pub fn render(&self, pretty: bool) -> Result<String> {
        let mut out = match self {
            Document::Json(value) if pretty => serde_json::to_string_pretty(value)?,
            Document::Json(value) => serde_json::to_string(value)?,
            Document::Toml(value) if pretty => toml::to_string_pretty(value)?,
            Document::Toml(value) => toml::to_string(value)?,
        };
        if !out.ends_with('\n') {
            out.push('\n');
        }
        Ok(out)
    }
}
