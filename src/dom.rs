//! Browser side of the scroll machinery.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::error::DomError;
use crate::scroll::navigator::FrameCallback;
use crate::scroll::{ScrollHost, SectionBounds};

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Inner viewport size in CSS pixels.
pub fn viewport_size() -> Result<(f64, f64), DomError> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

/// Viewport-relative bounds of the element with `id`.
pub fn element_bounds(document: &Document, id: &str) -> Option<SectionBounds> {
    document.get_element_by_id(id).map(|element| {
        let rect = element.get_bounding_client_rect();
        SectionBounds::new(rect.top(), rect.bottom())
    })
}

/// Distance from the document top given each `offsetTop` along an element's
/// offset-parent chain, innermost first.
///
/// Layout offsets ignore CSS transforms, so a section still sliding in is
/// measured where it will settle rather than where it is drawn.
pub fn layout_top(offsets: impl IntoIterator<Item = i32>) -> f64 {
    offsets.into_iter().map(f64::from).sum()
}

fn offset_chain(element: HtmlElement) -> impl Iterator<Item = i32> {
    std::iter::successors(Some(element), |el| {
        el.offset_parent().and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
    })
    .map(|el| el.offset_top())
}

/// Scroll host backed by the real window and `requestAnimationFrame`.
#[derive(Clone)]
pub struct WindowHost {
    window: Window,
}

impl WindowHost {
    pub fn new() -> Result<Self, DomError> {
        Ok(Self { window: window()? })
    }
}

impl ScrollHost for WindowHost {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn set_scroll_y(&self, offset: f64) {
        self.window.scroll_to_with_x_and_y(0.0, offset);
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        let element = self
            .window
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(layout_top(offset_chain(element)))
    }

    fn now(&self) -> f64 {
        match self.window.performance() {
            Some(performance) => performance.now(),
            None => {
                warn!("performance clock unavailable");
                0.0
            }
        }
    }

    fn request_frame(&self, callback: FrameCallback) -> Result<(), DomError> {
        let closure = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        self.window
            .request_animation_frame(closure.unchecked_ref())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_top_sums_offset_chain() {
        // section inside <main> inside <body>
        assert_eq!(layout_top([1200, 64, 0]), 1264.0);
    }

    #[test]
    fn test_layout_top_of_root_element() {
        assert_eq!(layout_top([0]), 0.0);
        assert_eq!(layout_top(std::iter::empty()), 0.0);
    }

    #[test]
    fn test_layout_top_ignores_reveal_offset() {
        // A hidden section drawn 70px low still reports its settled position,
        // so the nav bar compensation lands it right under the bar.
        let settled = layout_top([1564]);
        let target = settled - crate::config::NAVBAR_HEIGHT;
        assert_eq!(target, 1500.0);
    }
}
