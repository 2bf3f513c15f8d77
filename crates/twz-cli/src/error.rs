use std::path::PathBuf;

use thiserror::Error;
use twz_render::RenderError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("cannot read {path}: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CliError {
    /// Process exit status: 2 for usage problems, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } | Self::Render(RenderError::UnsupportedLayerType { .. }) => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<twz_style::ConfigError> for CliError {
    fn from(error: twz_style::ConfigError) -> Self {
        Self::Render(RenderError::from(error))
    }
}

#[cfg(test)]
mod tests {
    use super::CliError;
    use twz_render::RenderError;

    #[test]
    fn invalid_argument_is_a_usage_error() {
        let error = CliError::invalid("--option expects KEY=VALUE");
        assert_eq!(error.exit_code(), 2);
        assert_eq!(error.to_string(), "invalid argument: --option expects KEY=VALUE");
    }

    #[test]
    fn unsupported_layer_is_a_usage_error() {
        let error = CliError::from(RenderError::unsupported("group"));
        assert_eq!(error.exit_code(), 2);
        assert_eq!(error.to_string(), "unsupported layer type: group");
    }

    #[test]
    fn io_errors_exit_with_one() {
        let error = CliError::from(std::io::Error::other("disk full"));
        assert_eq!(error.exit_code(), 1);
    }
}
