use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";

/// Backend origin. Set `CAPCOACH_API_BASE_URL` when running `trunk build`
/// to point the bundle somewhere else.
pub const API_BASE_URL: &str = match option_env!("CAPCOACH_API_BASE_URL") {
    Some(url) => url,
    None => DEFAULT_API_BASE_URL,
};

pub const DASHBOARD_ROWS: usize = 10;
pub const CHECKING_ROWS: usize = 12;
pub const SAVINGS_ROWS: usize = 10;

pub const DASHBOARD_WINDOW_MONTHS: usize = 3;
pub const SPENDING_WINDOW_MONTHS: usize = 3;
pub const CHECKING_WINDOW_MONTHS: usize = 3;
pub const SAVINGS_WINDOW_MONTHS: usize = 6;

/// Conversation progress at which the coach's summary insights are requested.
pub const INSIGHTS_PROGRESS_THRESHOLD: f64 = 0.8;
pub const INSIGHTS_DELAY_MS: u32 = 1_000;

const UI_SETTINGS_KEY: &str = "capcoach_ui";

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    pub nav_open: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { nav_open: true }
    }
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE_URL.trim_end_matches('/'), path)
}

pub fn load_ui_settings() -> UiSettings {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(raw)) = storage.get_item(UI_SETTINGS_KEY) {
                if let Ok(settings) = serde_json::from_str::<UiSettings>(&raw) {
                    return settings;
                }
            }
        }
    }
    UiSettings::default()
}

pub fn save_ui_settings(settings: &UiSettings) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(raw) = serde_json::to_string(settings) {
                let _ = storage.set_item(UI_SETTINGS_KEY, &raw);
            }
        }
    }
}
