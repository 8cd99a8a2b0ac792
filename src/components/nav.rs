use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{MOBILE_BREAKPOINT, NAV_SCROLLED_THRESHOLD};
use crate::dom;
use crate::listener::{listen_window, Listener};
use crate::navigation::SectionNavigator;
use crate::scroll::ActiveSection;
use crate::sections::SECTIONS;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub navigator: SectionNavigator,
    /// True while a programmatic scroll is running.
    pub is_scrolling: bool,
    pub on_contact: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { navigator, is_scrolling, on_contact } = props;
    let menu_open = use_bool_toggle(false);
    let is_scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<String>);
    let hovered = use_state_eq(|| None::<&'static str>);

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        let menu_open = menu_open.clone();
        use_effect_with_deps(move |_| {
            let tracker = Rc::new(RefCell::new(ActiveSection::default()));

            let refresh = Rc::new(move || {
                is_scrolled.set(dom::scroll_y() > NAV_SCROLLED_THRESHOLD);

                let Ok(document) = dom::document() else { return };
                let bounds = SECTIONS
                    .iter()
                    .filter_map(|s| dom::element_bounds(&document, s.id).map(|b| (s.id, b)));
                let mut tracker = tracker.borrow_mut();
                if tracker.update(bounds) {
                    debug!("active section: {:?}", tracker.current());
                    active.set(tracker.current().map(str::to_string));
                }
            });
            refresh();

            let on_scroll = {
                let refresh = refresh.clone();
                listen_window("scroll", move |_| refresh())
            };
            let on_resize = listen_window("resize", move |_| {
                if let Ok((width, _)) = dom::viewport_size() {
                    if width > MOBILE_BREAKPOINT {
                        menu_open.set(false);
                    }
                }
                refresh();
            });

            let listeners: Vec<_> = [on_scroll, on_resize]
                .into_iter()
                .filter_map(|listener| {
                    listener
                        .map_err(|e| warn!("nav listener not attached: {}", e))
                        .ok()
                })
                .collect();

            move || listeners.into_iter().for_each(Listener::dispose)
        }, ());
    }

    // A running programmatic scroll sweeps the pointer across links; ignore
    // hovers until it lands.
    {
        let hovered = hovered.clone();
        use_effect_with_deps(move |scrolling| {
            if *scrolling {
                hovered.set(None);
            }
            || ()
        }, *is_scrolling);
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let open_contact = {
        let on_contact = on_contact.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_contact.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let highlighted = (*hovered).or(active.as_deref());

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>{NAV_CSS}</style>
            <div class="nav-content">
                <a href="#inicio" class="nav-logo" onclick={navigator.on_click("inicio")}>
                    {"ADN "}<span class="nav-logo-accent">{"DEVs"}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for SECTIONS.iter().map(|section| {
                        let id = section.id;
                        let onclick = {
                            let navigator = navigator.clone();
                            let menu_open = menu_open.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                menu_open.set(false);
                                navigator.go(id);
                            })
                        };
                        let onmouseenter = {
                            let hovered = hovered.clone();
                            let is_scrolling = *is_scrolling;
                            Callback::from(move |_: MouseEvent| {
                                if !is_scrolling {
                                    hovered.set(Some(id));
                                }
                            })
                        };
                        let onmouseleave = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(None))
                        };
                        html! {
                            <a
                                key={id}
                                href={format!("#{}", id)}
                                class={classes!("nav-link", (highlighted == Some(id)).then(|| "active"))}
                                {onclick}
                                {onmouseenter}
                                {onmouseleave}
                            >
                                {section.label}
                            </a>
                        }
                    }) }
                    <button class="nav-contact-button" onclick={open_contact}>
                        {"Contacto"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

const NAV_CSS: &str = r#"
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        height: 64px;
        z-index: 40;
        transition: background 0.3s ease, box-shadow 0.3s ease;
        background: transparent;
    }
    .top-nav.scrolled {
        background: rgba(10, 10, 20, 0.85);
        backdrop-filter: blur(10px);
        box-shadow: 0 4px 24px rgba(168, 85, 247, 0.15);
    }
    .nav-content {
        max-width: 72rem;
        height: 100%;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-size: 1.5rem;
        font-weight: 700;
        color: #fff;
        text-decoration: none;
    }
    .nav-logo-accent {
        background: linear-gradient(to right, #c084fc, #db2777);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .nav-right {
        display: flex;
        align-items: center;
        gap: 1.25rem;
    }
    .nav-link {
        color: #d1d5db;
        text-decoration: none;
        font-size: 0.95rem;
        padding-bottom: 2px;
        border-bottom: 2px solid transparent;
        transition: color 0.2s ease, border-color 0.2s ease;
    }
    .nav-link.active {
        color: #fff;
        border-color: #a855f7;
    }
    .nav-contact-button {
        padding: 0.5rem 1.25rem;
        border-radius: 9999px;
        border: none;
        background: #9333ea;
        color: #fff;
        cursor: pointer;
        transition: background 0.3s ease;
    }
    .nav-contact-button:hover {
        background: #7e22ce;
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
    }
    .burger-menu span {
        width: 24px;
        height: 2px;
        background: #fff;
    }
    @media (max-width: 768px) {
        .burger-menu {
            display: flex;
        }
        .nav-right {
            display: none;
            position: absolute;
            top: 64px;
            left: 0;
            right: 0;
            flex-direction: column;
            padding: 1.5rem;
            background: rgba(10, 10, 20, 0.95);
        }
        .nav-right.mobile-menu-open {
            display: flex;
        }
    }
"#;
