use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::dom::WindowHost;
use crate::scroll::navigator::ScrollSettings;
use crate::scroll::SmoothScroller;

/// Cheap, clonable handle to the page's smooth scroller.
#[derive(Clone)]
pub struct SectionNavigator {
    scroller: Option<Rc<SmoothScroller<WindowHost>>>,
}

impl PartialEq for SectionNavigator {
    fn eq(&self, other: &Self) -> bool {
        match (&self.scroller, &other.scroller) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl SectionNavigator {
    fn new(on_scrolling: impl Fn(bool) + 'static) -> Self {
        let scroller = match WindowHost::new() {
            Ok(host) => Some(SmoothScroller::new(host, ScrollSettings::default(), on_scrolling)),
            Err(e) => {
                warn!("smooth scrolling disabled: {}", e);
                None
            }
        };
        Self { scroller }
    }

    /// Smooth-scroll to the section `id`.
    pub fn go(&self, id: &str) {
        if let Some(scroller) = &self.scroller {
            scroller.scroll_to(id);
        }
    }

    /// Abandon any animation in flight.
    pub fn cancel(&self) {
        if let Some(scroller) = &self.scroller {
            scroller.cancel();
        }
    }

    pub fn on_click(&self, id: &'static str) -> Callback<MouseEvent> {
        let navigator = self.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navigator.go(id);
        })
    }
}

/// The page-wide navigator plus whether it is animating right now.
#[hook]
pub fn use_section_navigator() -> (SectionNavigator, bool) {
    let scrolling = use_state_eq(|| false);
    let navigator = {
        let setter = scrolling.setter();
        use_memo(move |_| SectionNavigator::new(move |value| setter.set(value)), ())
    };

    {
        let navigator = navigator.clone();
        // Leaving the page must not let a queued frame keep scrolling the next one.
        use_effect_with_deps(move |_| move || navigator.cancel(), ());
    }
    ((*navigator).clone(), *scrolling)
}
