//! Owned event-listener registrations.
//!
//! `listen` attaches a handler and hands back a [`Listener`]. Dropping it, or
//! calling [`Listener::dispose`], detaches the handler. Either path runs once,
//! so a component cleanup can simply drop its guards.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::error::DomError;

/// Anything handlers can be attached to and detached from.
pub trait ListenerTarget {
    type Handler;

    fn attach(&self, event: &str, handler: &Self::Handler) -> Result<(), DomError>;
    fn detach(&self, event: &str, handler: &Self::Handler);
}

#[must_use = "the listener is removed as soon as this guard is dropped"]
pub struct Listener<T: ListenerTarget> {
    target: T,
    event: &'static str,
    handler: Option<T::Handler>,
}

pub fn listen<T: ListenerTarget>(
    target: T,
    event: &'static str,
    handler: T::Handler,
) -> Result<Listener<T>, DomError> {
    target.attach(event, &handler)?;
    debug!("attached {} listener", event);
    Ok(Listener {
        target,
        event,
        handler: Some(handler),
    })
}

impl<T: ListenerTarget> Listener<T> {
    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(handler) = self.handler.take() {
            self.target.detach(self.event, &handler);
            debug!("detached {} listener", self.event);
        }
    }
}

impl<T: ListenerTarget> Drop for Listener<T> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Browser handlers keep their closure alive for as long as they stay attached.
pub type DomHandler = Closure<dyn FnMut(Event)>;

impl ListenerTarget for EventTarget {
    type Handler = DomHandler;

    fn attach(&self, event: &str, handler: &DomHandler) -> Result<(), DomError> {
        self.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())?;
        Ok(())
    }

    fn detach(&self, event: &str, handler: &DomHandler) {
        if let Err(e) = self.remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref()) {
            debug!("removing {} listener failed: {:?}", event, e);
        }
    }
}

/// Attach `handler` for `event` on the global window.
pub fn listen_window(
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<Listener<EventTarget>, DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let handler: DomHandler = Closure::new(handler);
    listen(EventTarget::from(window), event, handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Counts registrations per event, like a window would hold them.
    #[derive(Default)]
    struct FakeTarget {
        pub registered: RefCell<Vec<(String, u32)>>,
        pub detach_calls: RefCell<u32>,
        pub refuse: bool,
    }

    impl FakeTarget {
        pub fn count(&self) -> usize {
            self.registered.borrow().len()
        }
    }

    impl ListenerTarget for Rc<FakeTarget> {
        type Handler = u32;

        fn attach(&self, event: &str, handler: &u32) -> Result<(), DomError> {
            if self.refuse {
                return Err(DomError::Js("listener rejected".into()));
            }
            self.registered.borrow_mut().push((event.to_string(), *handler));
            Ok(())
        }

        fn detach(&self, event: &str, handler: &u32) {
            *self.detach_calls.borrow_mut() += 1;
            self.registered
                .borrow_mut()
                .retain(|(e, h)| !(e == event && h == handler));
        }
    }

    #[test]
    fn test_listeners_released_on_teardown() {
        let window = Rc::new(FakeTarget::default());
        let baseline = window.count();

        {
            let _scroll = listen(Rc::clone(&window), "scroll", 1).unwrap();
            let _resize = listen(Rc::clone(&window), "resize", 2).unwrap();
            assert_eq!(window.count(), baseline + 2);
        }

        assert_eq!(window.count(), baseline);
    }

    #[test]
    fn test_dispose_runs_exactly_once() {
        let window = Rc::new(FakeTarget::default());
        let guard = listen(Rc::clone(&window), "scroll", 7).unwrap();
        assert_eq!(window.count(), 1);

        guard.dispose();

        assert_eq!(window.count(), 0);
        assert_eq!(*window.detach_calls.borrow(), 1);
    }

    #[test]
    fn test_released_on_early_exit() {
        fn mount(window: &Rc<FakeTarget>) -> Result<(), DomError> {
            let _scroll = listen(Rc::clone(window), "scroll", 1)?;
            Err(DomError::NoDocument)
        }

        let window = Rc::new(FakeTarget::default());
        assert_eq!(mount(&window), Err(DomError::NoDocument));
        assert_eq!(window.count(), 0);
    }

    #[test]
    fn test_failed_attach_yields_no_guard() {
        let window = Rc::new(FakeTarget {
            refuse: true,
            ..Default::default()
        });

        assert!(listen(Rc::clone(&window), "keydown", 3).is_err());
        assert_eq!(*window.detach_calls.borrow(), 0);
    }

    #[test]
    fn test_same_event_guards_are_independent() {
        let window = Rc::new(FakeTarget::default());
        let first = listen(Rc::clone(&window), "scroll", 1).unwrap();
        let _second = listen(Rc::clone(&window), "scroll", 2).unwrap();

        drop(first);

        assert_eq!(*window.registered.borrow(), vec![("scroll".to_string(), 2)]);
    }
}
