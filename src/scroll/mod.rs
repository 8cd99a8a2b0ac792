//! Smooth in-page navigation.
//!
//! - `easing` - cubic ease-in-out curve
//! - `timing` - progress and interpolation helpers
//! - `animation` - a single scroll animation between two offsets
//! - `navigator` - frame-driven animator with generation-guarded re-entrancy
//! - `active` - which section sits under the reference line

pub mod active;
pub mod animation;
pub mod easing;
pub mod navigator;
pub mod timing;

pub use active::{ActiveSection, SectionBounds};
pub use navigator::{ScrollHost, SmoothScroller};
