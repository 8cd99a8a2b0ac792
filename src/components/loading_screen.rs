use std::f64::consts::{PI, TAU};

use yew::prelude::*;

const BASE_PAIRS: usize = 16;
const HELIX_RADIUS: f64 = 20.0;
const HELIX_HEIGHT: f64 = 200.0;

/// One rung of the helix, offsets relative to its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasePair {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
    /// Pulse animation delay in seconds.
    pub delay: f64,
}

pub fn strand_positions(base_pairs: usize, radius: f64, height: f64) -> Vec<BasePair> {
    (0..base_pairs)
        .map(|i| {
            let progress = i as f64 / base_pairs as f64;
            let angle = progress * TAU;
            BasePair {
                x1: angle.cos() * radius,
                x2: (angle + PI).cos() * radius,
                y: progress * height - height / 2.0,
                delay: progress * 0.5,
            }
        })
        .collect()
}

#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    let pairs = use_memo(|_| strand_positions(BASE_PAIRS, HELIX_RADIUS, HELIX_HEIGHT), ());

    html! {
        <div class="loading-screen">
            <style>{LOADING_CSS}</style>
            <div class="dna-frame">
                <div class="dna-helix">
                    { for pairs.iter().map(|pair| {
                        let pulse = format!("animation-delay: {}s;", pair.delay);
                        html! {
                            <div class="dna-pair">
                                <div class="dna-dot dna-dot-left"
                                    style={format!("transform: translate({}px, {}px); {}", pair.x1, pair.y, pulse)} />
                                <div class="dna-dot dna-dot-right"
                                    style={format!("transform: translate({}px, {}px); {}", pair.x2, pair.y, pulse)} />
                                <div class="dna-link"
                                    style={format!(
                                        "width: {}px; transform: translate({}px, {}px); {}",
                                        (pair.x1 - pair.x2).abs(),
                                        pair.x1.min(pair.x2),
                                        pair.y,
                                        pulse,
                                    )} />
                            </div>
                        }
                    }) }
                </div>
            </div>
        </div>
    }
}

const LOADING_CSS: &str = r#"
    @keyframes dnaSpin {
        from { transform: rotateY(0deg) rotateZ(0deg); }
        to { transform: rotateY(360deg) rotateZ(360deg); }
    }
    @keyframes dnaPulse {
        0%, 100% { opacity: 0.8; scale: 1; }
        50% { opacity: 1; scale: 1.2; }
    }
    @keyframes dnaLinkPulse {
        0%, 100% { opacity: 0.5; }
        50% { opacity: 0.8; }
    }
    .loading-screen {
        position: fixed;
        inset: 0;
        z-index: 60;
        display: flex;
        align-items: center;
        justify-content: center;
        background: linear-gradient(to bottom, #111827, #000);
    }
    .dna-frame {
        position: relative;
        width: 200px;
        height: 300px;
    }
    .dna-helix {
        position: absolute;
        inset: 0;
        animation: dnaSpin 8s linear infinite;
    }
    .dna-pair {
        position: absolute;
        left: 50%;
        top: 50%;
        width: 100%;
    }
    .dna-dot {
        position: absolute;
        width: 12px;
        height: 12px;
        border-radius: 50%;
        animation: dnaPulse 1.5s ease-in-out infinite;
    }
    .dna-dot-left {
        background: #a855f7;
    }
    .dna-dot-right {
        background: #ec4899;
    }
    .dna-link {
        position: absolute;
        height: 2px;
        background: linear-gradient(to right, #a855f7, #ec4899);
        animation: dnaLinkPulse 1.5s ease-in-out infinite;
    }
    @media (max-width: 640px) {
        .dna-frame {
            width: 100px;
            height: 200px;
        }
        .dna-dot {
            width: 8px;
            height: 8px;
        }
    }
"#;
