use log::Level;

pub const APP_URL: &str = "https://app.lexora.si/";
pub const CONTACT_EMAIL: &str = "info@lexora.si";
pub const VIDEO_EMBED_URL: &str = "https://www.youtube.com/embed/d6VyCQnH0wc?modestbranding=1&rel=0";

/// Vertical offset in pixels past which the nav switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn contact_mailto() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}
