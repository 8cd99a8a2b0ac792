use log::debug;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::nav::Nav;
use crate::components::particle_background::ParticleBackground;
use crate::components::section::{Section, SECTION_CSS};
use crate::navigation::use_section_navigator;
use crate::sections::{
    Card, FEATURES, MISSION, PROJECTS, RECOMMENDATION, TEAM, VALUES, VISION,
};

#[function_component(Home)]
pub fn home() -> Html {
    let (navigator, is_scrolling) = use_section_navigator();
    let contact_open = use_state(|| false);

    // Start at the top on first mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_contact = {
        let contact_open = contact_open.clone();
        Callback::from(move |_: ()| {
            debug!("opening contact form");
            contact_open.set(true);
        })
    };
    let close_contact = {
        let contact_open = contact_open.clone();
        Callback::from(move |_: ()| contact_open.set(false))
    };
    let open_contact_click = {
        let open_contact = open_contact.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open_contact.emit(());
        })
    };

    html! {
        <div class="home-page">
            <style>{HOME_CSS}</style>
            <style>{SECTION_CSS}</style>
            <ParticleBackground />
            <Nav navigator={navigator.clone()} {is_scrolling} on_contact={open_contact.clone()} />

            <main class="home-content">
                <Section id="inicio" class={classes!("hero")}>
                    <div class="hero-inner">
                        <h1 class="hero-title">{"Bienvenidos a ADN DEVs"}</h1>
                        <p class="hero-subtitle">
                            {"Creado con Rust, Yew y WebAssembly"}
                        </p>
                        <div class="hero-cta-group">
                            <a href="#contact" class="hero-cta" onclick={open_contact_click}>
                                {"Comenzar"}
                            </a>
                            <a href="#mision" class="hero-secondary" onclick={navigator.on_click("mision")}>
                                {"Aprende más"}
                            </a>
                        </div>
                        <div class="feature-grid">
                            { for FEATURES.iter().map(card) }
                        </div>
                    </div>
                </Section>

                <Section id="mision">
                    <h2 class="section-title">{"Nuestra Misión"}</h2>
                    <p class="section-lead">{MISSION}</p>
                </Section>

                <Section id="vision">
                    <h2 class="section-title">{"Nuestra Visión"}</h2>
                    <p class="section-lead">{VISION}</p>
                </Section>

                <Section id="valores">
                    <h2 class="section-title">{"Nuestros Valores"}</h2>
                    <div class="card-grid">
                        { for VALUES.iter().map(card) }
                    </div>
                </Section>

                <Section id="equipo">
                    <h2 class="section-title">{"Nuestro Equipo"}</h2>
                    <div class="card-grid">
                        { for TEAM.iter().map(|member| html! {
                            <div class="card team-card" key={member.name}>
                                <div class="team-avatar">{member.initials}</div>
                                <h3>{member.name}</h3>
                                <p>{member.role}</p>
                            </div>
                        }) }
                    </div>
                </Section>

                <Section id="proyectos">
                    <h2 class="section-title">{"Proyectos"}</h2>
                    <div class="card-grid">
                        { for PROJECTS.iter().map(|project| html! {
                            <div class="card" key={project.name}>
                                <h3>{project.name}</h3>
                                <p>{project.summary}</p>
                                <div class="tag-list">
                                    { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                                </div>
                            </div>
                        }) }
                    </div>
                </Section>

                <Section id="recomendacion">
                    <h2 class="section-title">{"Recomendación"}</h2>
                    <p class="section-lead">{RECOMMENDATION}</p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={move |_| open_contact.emit(())}>
                            {"Hablemos"}
                        </button>
                    </div>
                </Section>
            </main>

            <footer class="home-footer">
                <p>{"© ADN DEVs"}</p>
                <a href="#inicio" onclick={navigator.on_click("inicio")}>{"Volver arriba"}</a>
            </footer>

            <ContactForm is_open={*contact_open} on_close={close_contact} />
        </div>
    }
}

fn card(card: &Card) -> Html {
    html! {
        <div class="card" key={card.title}>
            <h3>{card.title}</h3>
            <p>{card.description}</p>
        </div>
    }
}

const HOME_CSS: &str = r#"
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .home-page {
        min-height: 100vh;
        position: relative;
        overflow: hidden;
        color: #fff;
        background: linear-gradient(to bottom, #111827, #000);
    }
    .particles-canvas {
        position: fixed;
        inset: 0;
        z-index: 0;
        pointer-events: none;
    }
    .home-content {
        position: relative;
        z-index: 10;
    }
    .hero-inner {
        text-align: center;
    }
    @keyframes heroPop {
        from { opacity: 0; transform: scale(0.5); }
        to { opacity: 1; transform: scale(1); }
    }
    @keyframes heroRise {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .hero-title {
        font-size: clamp(3rem, 8vw, 4.5rem);
        font-weight: 700;
        margin-bottom: 1.5rem;
        background: linear-gradient(to right, #c084fc, #db2777);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
        animation: heroPop 0.5s ease-out both;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: #d1d5db;
        margin-bottom: 2rem;
        animation: heroRise 0.5s ease-out 0.2s both;
    }
    .hero-cta-group {
        display: flex;
        gap: 1rem;
        justify-content: center;
        animation: heroRise 0.5s ease-out 0.4s both;
    }
    .hero-cta, .hero-secondary {
        padding: 0.75rem 2rem;
        border-radius: 9999px;
        color: #fff;
        text-decoration: none;
        font-size: 1rem;
        cursor: pointer;
        transition: background 0.3s ease;
    }
    .hero-cta {
        border: none;
        background: #9333ea;
    }
    .hero-cta:hover {
        background: #7e22ce;
    }
    .hero-secondary {
        border: 1px solid #9333ea;
    }
    .hero-secondary:hover {
        background: rgba(147, 51, 234, 0.2);
    }
    .feature-grid, .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
        gap: 2rem;
        margin-top: 5rem;
    }
    .feature-grid {
        animation: heroRise 0.5s ease-out 0.6s both;
    }
    .card {
        padding: 1.5rem;
        border-radius: 1rem;
        text-align: left;
        background: linear-gradient(to bottom right, rgba(88, 28, 135, 0.5), transparent);
        border: 1px solid rgba(107, 33, 168, 0.2);
        backdrop-filter: blur(4px);
        transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
    }
    .card:hover {
        transform: scale(1.05);
    }
    .card h3 {
        font-size: 1.25rem;
        margin: 0 0 0.5rem;
    }
    .card p {
        color: #9ca3af;
        margin: 0;
    }
    .section-title {
        font-size: 2.5rem;
        text-align: center;
        margin-bottom: 1.5rem;
    }
    .section-lead {
        max-width: 48rem;
        margin: 0 auto 2rem;
        font-size: 1.25rem;
        line-height: 1.7;
        text-align: center;
        color: #d1d5db;
    }
    .team-card {
        text-align: center;
    }
    .team-avatar {
        width: 4rem;
        height: 4rem;
        margin: 0 auto 1rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
        background: linear-gradient(to right, #a855f7, #ec4899);
    }
    .tag-list {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
        margin-top: 1rem;
    }
    .tag {
        font-size: 0.75rem;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        background: rgba(168, 85, 247, 0.2);
        color: #e9d5ff;
    }
    .home-footer {
        position: relative;
        z-index: 10;
        display: flex;
        justify-content: space-between;
        padding: 2rem;
        color: #6b7280;
        border-top: 1px solid rgba(107, 33, 168, 0.2);
    }
    .home-footer a {
        color: #c084fc;
        text-decoration: none;
    }
"#;
