use core::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Encoding the host should use for a generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf8Bom,
    Utf16Le,
    Utf16Be,
}

/// One source handed back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    hint_name: String,
    text: String,
    encoding: TextEncoding,
    digest: String,
}

impl GeneratedSource {
    pub fn new(hint_name: impl Into<String>, text: impl Into<String>, encoding: TextEncoding) -> Self {
        let text = text.into();
        let digest = blake3::hash(text.as_bytes()).to_hex().to_string();
        Self {
            hint_name: hint_name.into(),
            text,
            encoding,
            digest,
        }
    }

    /// File name the host registers the source under; unique per pass.
    pub fn hint_name(&self) -> &str {
        &self.hint_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// BLAKE3 hex digest of the text, for host-side caching across passes.
    pub fn digest(&self) -> &str {
        &self.digest
    }
}

/// A candidate whose source could not be produced.
#[derive(Debug)]
pub struct Diagnostic {
    pub type_name: String,
    pub source_path: PathBuf,
    pub error: Error,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.source_path.display(), self.error, self.type_name)
    }
}

/// Everything one generator pass produced.
#[derive(Debug, Default)]
pub struct GeneratorOutput {
    pub sources: Vec<GeneratedSource>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GeneratorOutput {
    pub fn source(&self, hint_name: &str) -> Option<&GeneratedSource> {
        self.sources.iter().find(|s| s.hint_name == hint_name)
    }
}

/// `{stem}{suffix}`, where `stem` is the declaring file's name without its
/// extension (`App.xaml.cs` -> `App.xaml`). Paths without a file name use
/// `fallback`.
pub fn file_name_hint(source_path: &Path, fallback: &str, suffix: &str) -> String {
    let stem = source_path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .filter(|s| !s.is_empty());
    match stem {
        Some(stem) => format!("{}{}", stem, suffix),
        None => format!("{}{}", fallback, suffix),
    }
}
