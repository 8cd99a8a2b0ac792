use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::listener::listen_window;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

/// Contact modal. The form is presentational only; nothing is sent anywhere.
#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let ContactFormProps { is_open, on_close } = props;

    // Escape closes the modal, but only while it is showing.
    {
        let on_close = on_close.clone();
        use_effect_with_deps(move |open| {
            let listener = if *open {
                listen_window("keydown", move |e| {
                    if let Some(key) = e.dyn_ref::<KeyboardEvent>() {
                        if key.key() == "Escape" {
                            on_close.emit(());
                        }
                    }
                })
                .map_err(|e| warn!("escape listener not attached: {}", e))
                .ok()
            } else {
                None
            };
            move || {
                if let Some(listener) = listener {
                    listener.dispose();
                }
            }
        }, *is_open);
    }

    if !*is_open {
        return html! {};
    }

    let close = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("contact form submitted, nothing to send");
    });

    html! {
        <div class="contact-overlay" onclick={close.clone()}>
            <style>{CONTACT_CSS}</style>
            <div class="contact-dialog" onclick={keep_open}>
                <h3 class="contact-title">{"Contáctanos"}</h3>
                <form class="contact-form" {onsubmit}>
                    <div>
                        <label class="contact-label">{"Nombre"}</label>
                        <input type="text" class="contact-input" placeholder="Tu nombre" />
                    </div>
                    <div>
                        <label class="contact-label">{"Email"}</label>
                        <input type="email" class="contact-input" placeholder="tu@email.com" />
                    </div>
                    <div>
                        <label class="contact-label">{"Mensaje"}</label>
                        <textarea rows="4" class="contact-input contact-textarea" placeholder="Tu mensaje..." />
                    </div>
                    <div class="contact-actions">
                        <button type="button" class="contact-cancel" onclick={close}>
                            {"Cancelar"}
                        </button>
                        <button type="submit" class="contact-submit">
                            {"Enviar"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

const CONTACT_CSS: &str = r#"
    @keyframes contactFade {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes contactPop {
        from { opacity: 0; transform: scale(0.95); }
        to { opacity: 1; transform: scale(1); }
    }
    .contact-overlay {
        position: fixed;
        inset: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        background: rgba(0, 0, 0, 0.5);
        backdrop-filter: blur(4px);
        animation: contactFade 0.2s ease-out;
    }
    .contact-dialog {
        width: 100%;
        max-width: 28rem;
        padding: 2rem;
        border-radius: 1rem;
        background: #000;
        border: 1px solid rgba(59, 130, 246, 0.2);
        animation: contactPop 0.2s ease-out;
    }
    .contact-title {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
        background: linear-gradient(to right, #60a5fa, #f87171);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .contact-form > div + div {
        margin-top: 1rem;
    }
    .contact-label {
        display: block;
        font-size: 0.875rem;
        color: #d1d5db;
        margin-bottom: 0.25rem;
    }
    .contact-input {
        width: 100%;
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
        background: rgba(23, 37, 84, 0.5);
        border: 1px solid rgba(59, 130, 246, 0.2);
        color: #fff;
    }
    .contact-input:focus {
        outline: none;
        box-shadow: 0 0 0 2px rgba(59, 130, 246, 0.5);
    }
    .contact-textarea {
        resize: none;
    }
    .contact-actions {
        display: flex;
        justify-content: flex-end;
        gap: 0.75rem;
        margin-top: 1.5rem;
    }
    .contact-cancel {
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
        background: transparent;
        color: #fff;
        border: 1px solid rgba(59, 130, 246, 0.2);
        cursor: pointer;
    }
    .contact-cancel:hover {
        background: rgba(30, 58, 138, 0.3);
    }
    .contact-submit {
        padding: 0.5rem 1rem;
        border-radius: 0.5rem;
        border: none;
        color: #fff;
        cursor: pointer;
        background: linear-gradient(to right, #3b82f6, #ef4444);
    }
"#;
