use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("HTTP error! status: {status} ({url})")]
    Http { status: u16, url: String },

    #[error("Backend reported a failure: {0}")]
    Backend(String),

    #[error("Fixture decode error: {0}")]
    Fixture(#[from] serde_json::Error),

    #[error("Target growth must be between -100% and 100%, got {0}%")]
    GrowthOutOfRange(f64),

    #[error("Not a number: {0:?}")]
    InvalidNumber(String),
}

/// Blocking browser alert. Every remote failure ends here and leaves the
/// caller's state as it was.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
