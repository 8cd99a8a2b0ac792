//! Particle background model: drifting dots that bounce off the edges, get
//! linked when close, flee the pointer and multiply on click.
//!
//! Nothing here touches the DOM; the canvas component feeds it frame deltas
//! and pointer events, then draws what it reports.

use log::warn;
use serde::Deserialize;

use crate::config::PARTICLES_JSON;

/// Nominal frame length that `speed` is expressed against.
const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;

/// Clicks can add particles, but never past this multiple of the configured count.
const MAX_PARTICLE_FACTOR: usize = 4;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinkOptions {
    pub enable: bool,
    pub color: String,
    pub distance: f64,
    pub opacity: f64,
    pub width: u32,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            enable: true,
            color: "#a855f7".to_string(),
            distance: 150.0,
            opacity: 0.5,
            width: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Interactivity {
    pub push_quantity: usize,
    pub repulse_distance: f64,
    /// Seconds for a particle to be pushed fully out of the repulse radius.
    pub repulse_duration: f64,
}

impl Default for Interactivity {
    fn default() -> Self {
        Self {
            push_quantity: 4,
            repulse_distance: 200.0,
            repulse_duration: 0.4,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleOptions {
    pub fps_limit: u32,
    pub color: String,
    pub count: usize,
    pub opacity: f64,
    pub size: SizeRange,
    /// Pixels travelled per 60Hz frame.
    pub speed: f64,
    pub links: LinkOptions,
    pub interactivity: Interactivity,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            fps_limit: 120,
            color: "#a855f7".to_string(),
            count: 80,
            opacity: 0.5,
            size: SizeRange { min: 1.0, max: 5.0 },
            speed: 2.0,
            links: LinkOptions::default(),
            interactivity: Interactivity::default(),
        }
    }
}

impl ParticleOptions {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Options bundled with the site, or the defaults if they fail to parse.
    pub fn bundled() -> Self {
        Self::from_json(PARTICLES_JSON).unwrap_or_else(|e| {
            warn!("invalid particle options, using defaults: {}", e);
            Self::default()
        })
    }

    /// Shortest time between two drawn frames.
    pub fn frame_interval_ms(&self) -> f64 {
        if self.fps_limit == 0 {
            0.0
        } else {
            1000.0 / self.fps_limit as f64
        }
    }
}

/// `#rrggbb` to an RGB triple.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

/// A line to draw between two particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f64,
}

pub struct ParticleField {
    options: ParticleOptions,
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    /// Seed `options.count` particles. `random` must yield values in `[0, 1)`.
    pub fn new(options: ParticleOptions, width: f64, height: f64, random: &mut impl FnMut() -> f64) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(options.count),
            options,
            width,
            height,
        };
        for _ in 0..field.options.count {
            let x = random() * width;
            let y = random() * height;
            field.spawn(x, y, &mut *random);
        }
        field
    }

    pub fn options(&self) -> &ParticleOptions {
        &self.options
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn spawn(&mut self, x: f64, y: f64, random: &mut impl FnMut() -> f64) {
        let SizeRange { min, max } = self.options.size;
        let radius = min + random() * (max - min).max(0.0);
        let angle = random() * std::f64::consts::TAU;
        let mut particle = Particle {
            x,
            y,
            vx: angle.cos() * self.options.speed,
            vy: angle.sin() * self.options.speed,
            radius,
        };
        self.keep_inside(&mut particle);
        self.particles.push(particle);
    }

    /// Click interaction: add particles at the pointer, oldest ones make room
    /// once the cap is reached.
    pub fn push(&mut self, x: f64, y: f64, random: &mut impl FnMut() -> f64) {
        for _ in 0..self.options.interactivity.push_quantity {
            self.spawn(x, y, &mut *random);
        }
        let cap = self.options.count.max(1) * MAX_PARTICLE_FACTOR;
        if self.particles.len() > cap {
            let excess = self.particles.len() - cap;
            self.particles.drain(..excess);
        }
    }

    /// Hover interaction: nudge particles near the pointer outward.
    pub fn repulse(&mut self, x: f64, y: f64, dt_ms: f64) {
        let radius = self.options.interactivity.repulse_distance;
        let duration_ms = self.options.interactivity.repulse_duration * 1000.0;
        if radius <= 0.0 {
            return;
        }
        let fraction = if duration_ms <= 0.0 {
            1.0
        } else {
            (dt_ms / duration_ms).clamp(0.0, 1.0)
        };

        let (width, height) = (self.width, self.height);
        for p in &mut self.particles {
            let (dx, dy) = (p.x - x, p.y - y);
            let dist = (dx * dx + dy * dy).sqrt();
            if dist >= radius || dist == 0.0 {
                continue;
            }
            let shift = (radius - dist) * fraction;
            p.x = (p.x + dx / dist * shift).clamp(p.radius, (width - p.radius).max(p.radius));
            p.y = (p.y + dy / dist * shift).clamp(p.radius, (height - p.radius).max(p.radius));
        }
    }

    /// Advance by `dt_ms`, bouncing off the canvas edges.
    pub fn step(&mut self, dt_ms: f64) {
        let scale = dt_ms / REFERENCE_FRAME_MS;
        let mut particles = std::mem::take(&mut self.particles);
        for p in &mut particles {
            p.x += p.vx * scale;
            p.y += p.vy * scale;
            self.keep_inside(p);
        }
        self.particles = particles;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        let mut particles = std::mem::take(&mut self.particles);
        for p in &mut particles {
            self.keep_inside(p);
        }
        self.particles = particles;
    }

    fn keep_inside(&self, p: &mut Particle) {
        let max_x = (self.width - p.radius).max(p.radius);
        let max_y = (self.height - p.radius).max(p.radius);
        if p.x < p.radius {
            p.x = p.radius;
            p.vx = p.vx.abs();
        } else if p.x > max_x {
            p.x = max_x;
            p.vx = -p.vx.abs();
        }
        if p.y < p.radius {
            p.y = p.radius;
            p.vy = p.vy.abs();
        } else if p.y > max_y {
            p.y = max_y;
            p.vy = -p.vy.abs();
        }
    }

    /// Pairs closer than the link distance, fading out with distance.
    pub fn links(&self) -> Vec<Link> {
        let links = &self.options.links;
        if !links.enable || links.distance <= 0.0 {
            return Vec::new();
        }
        let mut out = Vec::new();
        for (a, pa) in self.particles.iter().enumerate() {
            for (b, pb) in self.particles.iter().enumerate().skip(a + 1) {
                let dist = ((pa.x - pb.x).powi(2) + (pa.y - pb.y).powi(2)).sqrt();
                if dist < links.distance {
                    out.push(Link {
                        a,
                        b,
                        opacity: links.opacity * (1.0 - dist / links.distance),
                    });
                }
            }
        }
        out
    }
}
