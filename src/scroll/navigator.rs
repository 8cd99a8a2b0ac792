//! Frame-driven smooth scroller.
//!
//! Every call to [`SmoothScroller::scroll_to`] bumps a generation counter and
//! starts a new chain of frame callbacks. The frame scheduler has no cancel
//! handle, so a superseded chain keeps firing until its next callback sees a
//! newer generation and stops. Only the newest chain writes the scroll offset
//! or clears the scrolling flag.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};

use super::animation::ScrollAnimation;
use crate::config::{NAVBAR_HEIGHT, SCROLL_DURATION_MS};
use crate::error::DomError;

/// Callback run on the next display frame with the frame timestamp in ms.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// What the scroller needs from the page it drives.
pub trait ScrollHost {
    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;
    fn set_scroll_y(&self, offset: f64);
    /// Distance from the document top to the element with `id`, if present.
    fn element_top(&self, id: &str) -> Option<f64>;
    /// Monotonic clock in ms, same timebase as frame timestamps.
    fn now(&self) -> f64;
    fn request_frame(&self, callback: FrameCallback) -> Result<(), DomError>;
}

/// Timing knobs, defaulting to the site constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSettings {
    pub navbar_height: f64,
    pub duration_ms: f64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            navbar_height: NAVBAR_HEIGHT,
            duration_ms: SCROLL_DURATION_MS,
        }
    }
}

pub struct SmoothScroller<H: ScrollHost> {
    host: H,
    settings: ScrollSettings,
    generation: Cell<u64>,
    scrolling: Cell<bool>,
    on_scrolling: Box<dyn Fn(bool)>,
}

impl<H: ScrollHost + 'static> SmoothScroller<H> {
    /// `on_scrolling` is told every time the scrolling flag flips.
    pub fn new(host: H, settings: ScrollSettings, on_scrolling: impl Fn(bool) + 'static) -> Rc<Self> {
        Rc::new(Self {
            host,
            settings,
            generation: Cell::new(0),
            scrolling: Cell::new(false),
            on_scrolling: Box::new(on_scrolling),
        })
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling.get()
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Animate the page so the section `id` sits just under the nav bar.
    /// Unknown ids are ignored.
    pub fn scroll_to(self: &Rc<Self>, id: &str) {
        let Some(top) = self.host.element_top(id) else {
            debug!("scroll target #{} not found", id);
            return;
        };

        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let anim = ScrollAnimation::new(
            self.host.scroll_y(),
            top - self.settings.navbar_height,
            self.host.now(),
            self.settings.duration_ms,
        );
        debug!(
            "scrolling to #{} ({} -> {}, generation {})",
            id, anim.from, anim.to, generation
        );

        self.set_scrolling(true);

        if anim.distance() == 0.0 {
            self.finish(generation);
            return;
        }

        self.schedule(generation, anim);
    }

    /// Stop the running animation, if any. Queued frames belong to an older
    /// generation after this and exit without touching the page.
    pub fn cancel(&self) {
        self.generation.set(self.generation() + 1);
        if self.is_scrolling() {
            debug!("scroll cancelled (generation {})", self.generation());
            self.set_scrolling(false);
        }
    }

    fn schedule(self: &Rc<Self>, generation: u64, anim: ScrollAnimation) {
        let this = Rc::clone(self);
        let requested = self
            .host
            .request_frame(Box::new(move |now| this.on_frame(generation, anim, now)));

        if let Err(err) = requested {
            warn!("frame scheduling failed ({}), jumping to target", err);
            if self.is_current(generation) {
                self.host.set_scroll_y(anim.to);
                self.finish(generation);
            }
        }
    }

    fn on_frame(self: &Rc<Self>, generation: u64, anim: ScrollAnimation, now: f64) {
        if !self.is_current(generation) {
            return;
        }

        self.host.set_scroll_y(anim.offset_at(now));

        if anim.is_complete(now) {
            self.finish(generation);
        } else {
            self.schedule(generation, anim);
        }
    }

    fn finish(&self, generation: u64) {
        if self.is_current(generation) {
            self.set_scrolling(false);
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    fn set_scrolling(&self, value: bool) {
        self.scrolling.set(value);
        (self.on_scrolling)(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};

    /// Page stand-in with a manual clock and frame queue.
    #[derive(Default)]
    struct FakeHost {
        pub scroll: Cell<f64>,
        pub clock: Cell<f64>,
        pub elements: HashMap<String, f64>,
        pub frames: RefCell<VecDeque<FrameCallback>>,
        pub writes: RefCell<Vec<f64>>,
        pub frames_unavailable: bool,
    }

    impl FakeHost {
        pub fn with_sections(sections: &[(&str, f64)]) -> Self {
            Self {
                elements: sections.iter().map(|(id, top)| (id.to_string(), *top)).collect(),
                ..Default::default()
            }
        }

        /// Advance the clock to `at` and run every frame queued so far.
        pub fn tick(&self, at: f64) {
            self.clock.set(at);
            let pending: Vec<FrameCallback> = self.frames.borrow_mut().drain(..).collect();
            for frame in pending {
                frame(at);
            }
        }

        pub fn pending_frames(&self) -> usize {
            self.frames.borrow().len()
        }
    }

    impl ScrollHost for Rc<FakeHost> {
        fn scroll_y(&self) -> f64 {
            self.scroll.get()
        }

        fn set_scroll_y(&self, offset: f64) {
            self.scroll.set(offset);
            self.writes.borrow_mut().push(offset);
        }

        fn element_top(&self, id: &str) -> Option<f64> {
            self.elements.get(id).copied()
        }

        fn now(&self) -> f64 {
            self.clock.get()
        }

        fn request_frame(&self, callback: FrameCallback) -> Result<(), DomError> {
            if self.frames_unavailable {
                return Err(DomError::Js("requestAnimationFrame is not a function".into()));
            }
            self.frames.borrow_mut().push_back(callback);
            Ok(())
        }
    }

    fn scroller(host: &Rc<FakeHost>) -> (Rc<SmoothScroller<Rc<FakeHost>>>, Rc<RefCell<Vec<bool>>>) {
        let flags = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&flags);
        let scroller = SmoothScroller::new(Rc::clone(host), ScrollSettings::default(), move |v| {
            seen.borrow_mut().push(v)
        });
        (scroller, flags)
    }

    #[test]
    fn test_target_is_compensated_for_navbar() {
        let host = Rc::new(FakeHost::with_sections(&[("mision", 864.0)]));
        let (scroller, _) = scroller(&host);

        scroller.scroll_to("mision");
        host.tick(1000.0);

        assert_eq!(host.scroll.get(), 800.0);
        assert!(!scroller.is_scrolling());
    }

    #[test]
    fn test_midpoint_offset_after_half_duration() {
        let host = Rc::new(FakeHost::with_sections(&[("target", 1064.0)]));
        let (scroller, _) = scroller(&host);

        scroller.scroll_to("target");
        host.tick(500.0);

        assert_eq!(host.scroll.get(), 500.0);
        assert!(scroller.is_scrolling());
        assert_eq!(host.pending_frames(), 1);
    }

    #[test]
    fn test_runs_frames_until_duration_elapsed() {
        let host = Rc::new(FakeHost::with_sections(&[("equipo", 2064.0)]));
        let (scroller, flags) = scroller(&host);

        scroller.scroll_to("equipo");
        let mut t = 0.0;
        while host.pending_frames() > 0 {
            t += 16.0;
            host.tick(t);
        }

        assert_eq!(host.scroll.get(), 2000.0);
        assert_eq!(*flags.borrow(), vec![true, false]);
        let writes = host.writes.borrow();
        assert!(writes.windows(2).all(|w| w[0] <= w[1]));
        assert!(writes.len() > 60);
    }

    #[test]
    fn test_missing_target_is_noop() {
        let host = Rc::new(FakeHost::with_sections(&[("inicio", 0.0)]));
        let (scroller, flags) = scroller(&host);
        host.scroll.set(300.0);

        scroller.scroll_to("contacto");

        assert_eq!(host.scroll.get(), 300.0);
        assert_eq!(scroller.generation(), 0);
        assert!(flags.borrow().is_empty());
        assert_eq!(host.pending_frames(), 0);
    }

    #[test]
    fn test_zero_distance_completes_immediately() {
        let host = Rc::new(FakeHost::with_sections(&[("vision", 264.0)]));
        let (scroller, flags) = scroller(&host);
        host.scroll.set(200.0);

        scroller.scroll_to("vision");

        assert_eq!(*flags.borrow(), vec![true, false]);
        assert!(host.writes.borrow().is_empty());
        assert_eq!(host.pending_frames(), 0);
        assert_eq!(host.scroll.get(), 200.0);
    }

    #[test]
    fn test_retrigger_supersedes_previous_animation() {
        let host = Rc::new(FakeHost::with_sections(&[("a", 3064.0), ("b", 564.0)]));
        let (scroller, flags) = scroller(&host);

        scroller.scroll_to("a");
        host.tick(50.0);
        host.tick(100.0);
        let mid_flight = host.scroll.get();
        assert!(mid_flight > 0.0 && mid_flight < 3000.0);

        scroller.scroll_to("b");
        // frame from the first chain is still queued alongside the new one
        assert_eq!(host.pending_frames(), 2);

        let mut t = 100.0;
        while host.pending_frames() > 0 {
            t += 16.0;
            host.tick(t);
        }

        assert_eq!(host.scroll.get(), 500.0);
        assert!(host.writes.borrow().iter().all(|&y| y < 3000.0));
        assert_eq!(*flags.borrow(), vec![true, true, false]);
        // second chain restarted the full duration from the mid-flight offset
        assert!(t >= 1100.0);
    }

    #[test]
    fn test_stale_completion_does_not_clear_flag() {
        let host = Rc::new(FakeHost::with_sections(&[("a", 1064.0), ("b", 2064.0)]));
        let (scroller, _) = scroller(&host);

        scroller.scroll_to("a");
        host.tick(900.0);
        scroller.scroll_to("b");
        // past the first chain's deadline, but the second one is only 100ms in
        host.tick(1000.0);

        assert!(scroller.is_scrolling());
        assert_eq!(host.pending_frames(), 1);
    }

    #[test]
    fn test_cancel_stops_running_chain() {
        let host = Rc::new(FakeHost::with_sections(&[("valores", 2064.0)]));
        let (scroller, flags) = scroller(&host);

        scroller.scroll_to("valores");
        host.tick(100.0);
        let written = host.writes.borrow().len();

        scroller.cancel();
        host.tick(116.0);

        assert_eq!(host.writes.borrow().len(), written);
        assert_eq!(host.pending_frames(), 0);
        assert_eq!(*flags.borrow(), vec![true, false]);
        assert!(!scroller.is_scrolling());
    }

    #[test]
    fn test_cancel_when_idle_keeps_flag_quiet() {
        let host = Rc::new(FakeHost::with_sections(&[("inicio", 0.0)]));
        let (scroller, flags) = scroller(&host);

        scroller.cancel();

        assert_eq!(scroller.generation(), 1);
        assert!(flags.borrow().is_empty());
    }

    #[test]
    fn test_falls_back_to_jump_without_frames() {
        let host = Rc::new(FakeHost {
            frames_unavailable: true,
            ..FakeHost::with_sections(&[("proyectos", 1564.0)])
        });
        let (scroller, flags) = scroller(&host);

        scroller.scroll_to("proyectos");

        assert_eq!(host.scroll.get(), 1500.0);
        assert_eq!(*host.writes.borrow(), vec![1500.0]);
        assert_eq!(*flags.borrow(), vec![true, false]);
        assert!(!scroller.is_scrolling());
    }
}
