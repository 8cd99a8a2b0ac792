use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod error;
mod listener;
mod navigation;
mod particles;
mod scroll;
mod sections;

mod components {
    pub mod contact_form;
    pub mod loading_screen;
    pub mod nav;
    pub mod particle_background;
    pub mod section;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::loading_screen::LoadingScreen;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    let loading = use_state(|| true);

    {
        let loading = loading.clone();
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(config::LOADING_SCREEN_MS, move || {
                loading.set(false);
            });
            // Dropping the timeout before it fires cancels it.
            move || drop(timeout)
        }, ());
    }

    html! {
        <BrowserRouter>
            if *loading {
                <LoadingScreen />
            }
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
