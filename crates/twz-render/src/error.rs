// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;
use twz_style::ConfigError;

pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unsupported layer type: {kind}")]
    UnsupportedLayerType { kind: String },

    #[error("invalid layer: {0}")]
    InvalidLayer(#[source] serde_json::Error),

    #[error("failed to serialize output: {0}")]
    Output(#[source] serde_json::Error),
}

impl RenderError {
    #[must_use]
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::UnsupportedLayerType { kind: kind.into() }
    }
}
