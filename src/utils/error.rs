use thiserror::Error;

#[derive(Error, Debug)]
pub enum MdpipeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Error processing {path}: {reason}")]
    ConversionError { path: String, reason: String },

    #[error("Bootstrap error: {message}")]
    BootstrapError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Per-item failure, the batch keeps going.
    Low,
    /// Worth retrying the whole run.
    Medium,
    /// Run failed.
    High,
    /// Environment is unusable.
    Critical,
}

impl MdpipeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MdpipeError::ConversionError { .. } => ErrorSeverity::Low,
            MdpipeError::IoError(_) => ErrorSeverity::Medium,
            MdpipeError::ValidationError { .. } => ErrorSeverity::High,
            MdpipeError::BootstrapError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MdpipeError::ConversionError { path, reason } => {
                format!("Could not convert {}: {}", path, reason)
            }
            MdpipeError::IoError(e) => format!("IO failure on the output stream: {}", e),
            MdpipeError::BootstrapError { message } => {
                format!("Could not set up the markitdown backend: {}", message)
            }
            MdpipeError::ValidationError { message } => {
                format!("Invalid configuration: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MdpipeError::ConversionError { .. } => {
                "Check that the file exists and is a format the converter supports"
            }
            MdpipeError::IoError(_) => {
                "Check that the downstream consumer is still reading stdout"
            }
            MdpipeError::BootstrapError { .. } => {
                "Install the module manually: pip install 'markitdown[all]'"
            }
            MdpipeError::ValidationError { .. } => "Run with --help to see valid options",
        }
    }
}

pub type Result<T> = std::result::Result<T, MdpipeError>;
