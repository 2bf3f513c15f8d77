// SPDX-License-Identifier: Apache-2.0
//! Generated code handed back to the host.

use std::fmt;

use serde::Serialize;

/// Syntax the host should highlight generated code with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Html,
    Css,
    Js,
}

impl Language {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Js => "js",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rendered snippet and its language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeOutput {
    pub code: String,
    pub language: Language,
}

impl CodeOutput {
    #[must_use]
    pub fn new(code: impl Into<String>, language: Language) -> Self {
        Self {
            code: code.into(),
            language,
        }
    }

    /// Attach a filename, turning the snippet into a file export.
    #[must_use]
    pub fn into_file(self, filename: impl Into<String>) -> ExportedFile {
        ExportedFile {
            code: self.code,
            filename: filename.into(),
            language: self.language,
        }
    }
}

/// A snippet the host writes to disk under `filename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedFile {
    pub code: String,
    pub filename: String,
    pub language: Language,
}
