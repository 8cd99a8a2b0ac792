use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config::REVEAL_MARGIN;
use crate::dom;
use crate::listener::listen_window;

/// Whether an element spanning `top..bottom` (viewport coordinates) is on
/// screen once `margin` of the viewport height is trimmed from both edges.
pub fn is_in_view(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    let inset = viewport_height * margin;
    top < viewport_height - inset && bottom > inset
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Full-height page section that fades in the first time it scrolls into view.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let done_now = *revealed;
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(move |done| {
            let listener = if *done {
                None
            } else {
                let check = move || {
                    let Some(element) = node.cast::<Element>() else { return };
                    let Ok((_, viewport_height)) = dom::viewport_size() else { return };
                    let rect = element.get_bounding_client_rect();
                    if is_in_view(rect.top(), rect.bottom(), viewport_height, REVEAL_MARGIN) {
                        revealed.set(true);
                    }
                };
                check();
                listen_window("scroll", move |_| check())
                    .map_err(|e| warn!("reveal listener not attached: {}", e))
                    .ok()
            };
            // Once revealed this runs with `done == true` and releases the listener.
            move || {
                if let Some(listener) = listener {
                    listener.dispose();
                }
            }
        }, done_now);
    }

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!("page-section", props.class.clone(), (*revealed).then(|| "revealed"))}
        >
            <div class="page-section-inner">
                { for props.children.iter() }
            </div>
        </section>
    }
}

pub const SECTION_CSS: &str = r#"
    .page-section {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 2rem;
        opacity: 0;
        transition: opacity 0.8s ease;
    }
    .page-section.revealed {
        opacity: 1;
    }
    .page-section-inner {
        width: 100%;
        max-width: 72rem;
        opacity: 0;
        transform: translateY(70px);
        transition: opacity 0.5s cubic-bezier(0.43, 0.13, 0.23, 0.96) 0.2s,
                    transform 0.5s cubic-bezier(0.43, 0.13, 0.23, 0.96) 0.2s;
    }
    .page-section.revealed .page-section-inner {
        opacity: 1;
        transform: translateY(0);
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_entering_from_below() {
        // 1000px viewport, 20% margin: visible once the top passes 800
        assert!(!is_in_view(850.0, 1850.0, 1000.0, 0.2));
        assert!(is_in_view(790.0, 1790.0, 1000.0, 0.2));
    }

    #[test]
    fn test_section_scrolled_past() {
        assert!(!is_in_view(-900.0, 150.0, 1000.0, 0.2));
        assert!(is_in_view(-900.0, 250.0, 1000.0, 0.2));
    }

    #[test]
    fn test_section_taller_than_viewport() {
        assert!(is_in_view(-500.0, 2500.0, 1000.0, 0.2));
    }

    #[test]
    fn test_zero_margin() {
        assert!(is_in_view(999.0, 1500.0, 1000.0, 0.0));
        assert!(!is_in_view(1000.0, 1500.0, 1000.0, 0.0));
    }
}
