//! Error types.
//!
//! - [`DrawError`]: failures of the pure schedule/validation core.
//! - [`ProviderError`]: failures at the lottery-data provider boundary.
//! - [`AppError`]: what the binary reports, carrying a process exit code.
//!
//! Exit codes: `1` failed check, `2` usage/config/IO, `3` not found,
//! `4` provider or decoding.

use std::fmt;

/// Errors raised by the draw schedule core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// A draw number below 1 was passed to a date conversion.
    InvalidArgument(String),
    /// A date or draw-number string could not be interpreted.
    Parse(String),
    /// A derived value could not be computed (e.g. date overflow).
    Computation(String),
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            DrawError::Parse(msg) => write!(f, "parse error: {msg}"),
            DrawError::Computation(msg) => write!(f, "computation error: {msg}"),
        }
    }
}

impl std::error::Error for DrawError {}

/// Errors a [`crate::provider::LotteryInfoProvider`] may return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Network failure, timeout, or non-success HTTP status.
    Unavailable(String),
    /// The requested draw has no record (usually it has not happened yet).
    NotFound(u32),
    /// The upstream payload could not be decoded.
    Decode(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Unavailable(msg) => write!(f, "lottery provider unavailable: {msg}"),
            ProviderError::NotFound(n) => write!(f, "no record for draw {n}"),
            ProviderError::Decode(msg) => write!(f, "failed to decode provider response: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<DrawError> for AppError {
    fn from(err: DrawError) -> Self {
        AppError::new(2, err.to_string())
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        let code = match err {
            ProviderError::NotFound(_) => 3,
            ProviderError::Unavailable(_) | ProviderError::Decode(_) => 4,
        };
        AppError::new(code, err.to_string())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_map_to_exit_codes() {
        assert_eq!(AppError::from(ProviderError::NotFound(5000)).exit_code(), 3);
        assert_eq!(AppError::from(ProviderError::Unavailable("timeout".into())).exit_code(), 4);
        assert_eq!(AppError::from(ProviderError::Decode("bad json".into())).exit_code(), 4);
        assert_eq!(AppError::from(DrawError::InvalidArgument("0".into())).exit_code(), 2);
    }
}
