use log::Level;

/// Height of the fixed top nav bar. Scroll targets are shifted up by this much
/// so the section heading lands just below the bar.
pub const NAVBAR_HEIGHT: f64 = 64.0;

/// Smooth scroll duration, independent of distance.
pub const SCROLL_DURATION_MS: f64 = 1000.0;

/// Distance from the top of the viewport used to decide which section is current.
pub const ACTIVE_SECTION_LINE: f64 = 100.0;

/// Nav bar switches to its solid style past this offset.
pub const NAV_SCROLLED_THRESHOLD: f64 = 50.0;

/// Viewport width where the burger menu takes over.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Fraction of the viewport trimmed from each edge before a section counts as visible.
pub const REVEAL_MARGIN: f64 = 0.2;

/// How long the DNA loading screen stays up at startup.
pub const LOADING_SCREEN_MS: u32 = 1500;

pub const PARTICLES_JSON: &str = include_str!("../assets/particles.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
