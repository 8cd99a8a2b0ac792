use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Math;
use web_sys::{CanvasRenderingContext2d, EventTarget, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::dom;
use crate::error::DomError;
use crate::listener::{listen_window, Listener};
use crate::particles::{parse_hex_color, ParticleField, ParticleOptions};

/// Longest step fed to the simulation, so a backgrounded tab does not
/// teleport every particle when it comes back.
const MAX_STEP_MS: f64 = 100.0;

const FALLBACK_COLOR: (u8, u8, u8) = (0xa8, 0x55, 0xf7);

#[function_component(ParticleBackground)]
pub fn particle_background() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(move |_| {
            let running = match start(&canvas_ref) {
                Ok(running) => Some(running),
                Err(e) => {
                    warn!("particle background disabled: {}", e);
                    None
                }
            };
            move || drop(running)
        }, ());
    }

    html! {
        <canvas id="tsparticles" ref={canvas_ref} class="particles-canvas" />
    }
}

/// Keeps the animation alive. Dropping it stops the frame loop and detaches
/// the pointer and resize listeners.
struct Running {
    alive: Rc<Cell<bool>>,
    _listeners: Vec<Listener<EventTarget>>,
}

impl Drop for Running {
    fn drop(&mut self) {
        self.alive.set(false);
        info!("particle background stopped");
    }
}

fn start(canvas_ref: &NodeRef) -> Result<Running, DomError> {
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or_else(|| DomError::MissingElement("tsparticles".to_string()))?;
    let context = canvas
        .get_context("2d")?
        .ok_or(DomError::NoCanvasContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| DomError::NoCanvasContext)?;

    let (width, height) = dom::viewport_size()?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let options = ParticleOptions::bundled();
    let frame_interval = options.frame_interval_ms();
    let field = Rc::new(RefCell::new(ParticleField::new(options, width, height, &mut Math::random)));
    let pointer = Rc::new(Cell::new(None::<(f64, f64)>));
    let alive = Rc::new(Cell::new(true));

    let listeners = vec![
        {
            let pointer = pointer.clone();
            listen_window("mousemove", move |e| {
                if let Some(e) = e.dyn_ref::<MouseEvent>() {
                    pointer.set(Some((e.client_x() as f64, e.client_y() as f64)));
                }
            })?
        },
        {
            let pointer = pointer.clone();
            listen_window("mouseout", move |e| {
                let left_page = e
                    .dyn_ref::<MouseEvent>()
                    .map_or(true, |e| e.related_target().is_none());
                if left_page {
                    pointer.set(None);
                }
            })?
        },
        {
            let field = field.clone();
            listen_window("click", move |e| {
                if let Some(e) = e.dyn_ref::<MouseEvent>() {
                    let (x, y) = (e.client_x() as f64, e.client_y() as f64);
                    field.borrow_mut().push(x, y, &mut Math::random);
                }
            })?
        },
        {
            let field = field.clone();
            let canvas = canvas.clone();
            listen_window("resize", move |_| {
                if let Ok((width, height)) = dom::viewport_size() {
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);
                    field.borrow_mut().resize(width, height);
                }
            })?
        },
    ];

    let window = dom::window()?;
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let first = frame.clone();
    let mut last_frame: Option<f64> = None;
    let mut last_draw = f64::NEG_INFINITY;
    {
        let alive = alive.clone();
        let window = window.clone();
        *first.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            if !alive.get() {
                // Breaks the closure's reference to itself so it can be freed.
                frame.borrow_mut().take();
                return;
            }

            if timestamp - last_draw >= frame_interval {
                let dt = last_frame.map_or(0.0, |last| (timestamp - last).clamp(0.0, MAX_STEP_MS));
                last_frame = Some(timestamp);
                last_draw = timestamp;

                let mut field = field.borrow_mut();
                if let Some((x, y)) = pointer.get() {
                    field.repulse(x, y, dt);
                }
                field.step(dt);
                if let Err(e) = draw(&canvas, &context, &field) {
                    warn!("particle frame not drawn: {}", e);
                }
            }

            if let Some(next) = frame.borrow().as_ref() {
                if let Err(e) = window.request_animation_frame(next.as_ref().unchecked_ref()) {
                    warn!("particle loop stopped: {:?}", e);
                }
            }
        }));
    }

    if let Some(callback) = first.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    info!("particle background started");

    Ok(Running {
        alive,
        _listeners: listeners,
    })
}

fn draw(canvas: &HtmlCanvasElement, context: &CanvasRenderingContext2d, field: &ParticleField) -> Result<(), String> {
    let (width, height) = field.size();
    context.clear_rect(0.0, 0.0, width, height);

    let backend = CanvasBackend::with_canvas_object(canvas.clone())
        .ok_or_else(|| "canvas backend unavailable".to_string())?;
    let root = backend.into_drawing_area();

    let options = field.options();
    let (r, g, b) = parse_hex_color(&options.color).unwrap_or(FALLBACK_COLOR);
    let (lr, lg, lb) = parse_hex_color(&options.links.color).unwrap_or((r, g, b));
    let particles = field.particles();

    for link in field.links() {
        let (from, to) = (particles[link.a], particles[link.b]);
        root.draw(&PathElement::new(
            vec![(from.x as i32, from.y as i32), (to.x as i32, to.y as i32)],
            RGBColor(lr, lg, lb).mix(link.opacity).stroke_width(options.links.width),
        ))
        .map_err(|e| e.to_string())?;
    }

    for p in particles {
        root.draw(&Circle::new(
            (p.x as i32, p.y as i32),
            p.radius.round() as i32,
            RGBColor(r, g, b).mix(options.opacity).filled(),
        ))
        .map_err(|e| e.to_string())?;
    }

    root.present().map_err(|e| e.to_string())
}
