//! Error handling for domain-sift

use std::time::Duration;

use thiserror::Error;

/// Main error type for domain-sift
#[derive(Error, Debug, Clone)]
pub enum DomainSiftError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Lexicon error: {message}")]
    Lexicon {
        message: String,
        path: Option<String>,
    },

    #[error("Session setup failed: {message}")]
    Session {
        message: String,
        status_code: Option<u16>,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        retry_after: Option<u64>,
    },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainSiftError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a lexicon loading error
    pub fn lexicon(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Lexicon {
            message: message.into(),
            path,
        }
    }

    /// Create a session setup error
    pub fn session(message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self::Session {
            message: message.into(),
            status_code,
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a rate limit error
    pub fn rate_limit(message: impl Into<String>, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            message: message.into(),
            retry_after,
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the failed operation may succeed if attempted again.
    ///
    /// Connection failures, timeouts, 429 and 5xx responses are transient.
    /// Session setup failures never are.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimit { .. } | Self::Timeout { .. } => true,
            Self::Network { status_code, .. } => match status_code {
                None => true,
                Some(code) => *code == 429 || (500..600).contains(code),
            },
            _ => false,
        }
    }

    /// Whether the pipeline must stop instead of skipping the failing step
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Session { .. } | Self::Lexicon { .. } | Self::Config { .. }
        )
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or command line flags", message)
            }
            Self::Lexicon { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ Word list could not be loaded{}: {}\n💡 Use one 5-letter word per line", path_info, message)
            }
            Self::Session { message, status_code } => {
                let status = status_code.map_or(String::new(), |c| format!(" ({})", c));
                format!("❌ Could not open a search session{}: {}\n💡 The site may have changed its page layout", status, message)
            }
            Self::Network { message, status_code, .. } => {
                let status = status_code.map_or(String::new(), |c| format!(" ({})", c));
                format!("❌ Network error{}: {}\n💡 Check your internet connection", status, message)
            }
            Self::RateLimit { message, retry_after } => {
                let retry = retry_after.map_or(String::new(), |s| format!(" Retry in {}s.", s));
                format!("⏱️  Rate limit exceeded: {}{}\n💡 Increase the delay between requests", message, retry)
            }
            Self::Timeout { operation, timeout_secs } => {
                format!("⏱️  Operation '{}' timed out after {}s\n💡 Try again later", operation, timeout_secs)
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}\n💡 This might be a temporary issue, try again", message)
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }

}

impl DomainSiftError {
    /// Map a failed HTTP request; `timeout` is the client timeout in force
    pub fn from_request(err: reqwest::Error, timeout: Duration) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_timeout() {
            Self::timeout("HTTP request", timeout_secs(timeout))
        } else if err.is_connect() {
            Self::network("Connection failed", status_code, url)
        } else if err.is_decode() {
            Self::parse(err.to_string(), None)
        } else {
            Self::network(err.to_string(), status_code, url)
        }
    }
}

/// Whole seconds, rounded up so sub-second timeouts do not read as 0s
fn timeout_secs(timeout: Duration) -> u64 {
    (timeout.as_millis() as u64).div_ceil(1000)
}

/// Convert from common error types
impl From<serde_json::Error> for DomainSiftError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<csv::Error> for DomainSiftError {
    fn from(err: csv::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<std::io::Error> for DomainSiftError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DomainSiftError>;



/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::DomainSiftError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::DomainSiftError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::DomainSiftError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::DomainSiftError::validation(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! internal_error {
    ($msg:expr) => {
        $crate::error::DomainSiftError::internal($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::DomainSiftError::internal(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(DomainSiftError::network("boom", None, None).is_retryable());
        assert!(DomainSiftError::network("busy", Some(503), None).is_retryable());
        assert!(DomainSiftError::network("slow down", Some(429), None).is_retryable());
        assert!(DomainSiftError::timeout("page", 10).is_retryable());
        assert!(!DomainSiftError::network("gone", Some(404), None).is_retryable());
        assert!(!DomainSiftError::session("no token", Some(200)).is_retryable());
        assert!(!DomainSiftError::parse("bad json", None).is_retryable());
    }

    #[test]
    fn test_fatal_classification() {
        assert!(DomainSiftError::session("forbidden", Some(403)).is_fatal());
        assert!(DomainSiftError::lexicon("empty", None).is_fatal());
        assert!(!DomainSiftError::network("boom", None, None).is_fatal());
    }

    #[test]
    fn test_timeout_secs_rounds_up() {
        assert_eq!(timeout_secs(Duration::from_secs(10)), 10);
        assert_eq!(timeout_secs(Duration::from_millis(1500)), 2);
        assert_eq!(timeout_secs(Duration::from_millis(100)), 1);
    }

    #[test]
    fn test_macros() {
        let err = config_error!("bad top-n: {}", 0);
        assert!(err.to_string().contains("bad top-n: 0"));

        let err = validation_error!("nope");
        assert!(matches!(err, DomainSiftError::Validation { .. }));
    }
}
