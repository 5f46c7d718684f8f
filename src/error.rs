use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can stop the application shell.
///
/// Counter operations themselves are total; everything here comes from
/// loading configuration or driving the terminal.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use crate::config::ConfigError;

    #[test]
    fn config_error_is_shown_verbatim() {
        let err = AppError::from(ConfigError::ValidationError {
            message: "tick_rate_ms must be between 1 and 10000".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Config validation failed: tick_rate_ms must be between 1 and 10000"
        );
    }

    #[test]
    fn io_error_is_prefixed() {
        let err = AppError::from(std::io::Error::other("not a tty"));
        assert_eq!(err.to_string(), "Terminal error: not a tty");
    }
}
