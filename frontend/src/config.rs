use log::Level;

/// Distance from the top of the viewport hidden behind the floating header.
/// The scroll tracker looks this far below `scrollY`.
pub const HEADER_OFFSET_PX: f64 = 100.0;

pub const CAROUSEL_INTERVAL_MS: u32 = 4000;

/// One full rotation of the logo before it fades.
pub const PRELOADER_SPIN_MS: u32 = 2000;
pub const PRELOADER_FADE_MS: u32 = 600;
pub const PRELOADER_CURTAIN_MS: u32 = 1200;

pub const THEME_STORAGE_KEY: &str = "theme";

// Scheduling widget
pub const BOOKING_ORIGIN: &str = "https://cal.com";
pub const BOOKING_NAMESPACE: &str = "intro-call";
pub const BOOKING_CAL_LINK: &str = "meiyo/intro-call";
pub const BOOKING_LAYOUT: &str = "month_view";

pub const LOGO_URL: &str = "/assets/logo.svg";
pub const HERO_VIDEO_URL: &str = "/assets/hero.mp4";
/// Shown until the video can play, or instead of it when the file is absent.
pub const HERO_POSTER_URL: &str = "/assets/hero-poster.svg";

pub const CONTACT_EMAIL: &str = "hello@meiyo.online";
pub const FOUNDED_YEAR: i32 = 2023;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty state transitions while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn bundled_images_exist_in_the_copied_assets_dir() {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        for url in [LOGO_URL, HERO_POSTER_URL] {
            let file = manifest_dir.join(url.trim_start_matches('/'));
            assert!(file.is_file(), "missing {}", file.display());
        }
    }
}
