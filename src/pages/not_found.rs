use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        background: linear-gradient(to bottom, #111827, #000);
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    }
                    .not-found h1 {
                        font-size: 4rem;
                        margin: 0;
                        color: #c084fc;
                    }
                    .not-found a {
                        margin-top: 1.5rem;
                        color: #c084fc;
                    }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"Esta página no existe."}</p>
            <Link<Route> to={Route::Home}>{"Volver al inicio"}</Link<Route>>
        </div>
    }
}
