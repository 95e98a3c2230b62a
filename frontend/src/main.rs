use log::{info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use futurecore_site::config::{self, SiteConfig};
use futurecore_site::content::NAV_ANCHORS;
use futurecore_site::hooks::use_scrolled;

mod components {
    pub mod approach;
    pub mod cursor_glow;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod not_found;
    pub mod particles;
    pub mod services;
    pub mod team;
    pub mod tech_services;
    pub mod work;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod services;
}

use components::not_found::NotFound;
use pages::{about::AboutPage, home::Home, services::ServicesPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/about")]
    About,
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
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServicesPage /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <AboutPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.style().set_property("overflow", value);
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled(10.0);

    // Lock page scroll while the mobile overlay is showing.
    use_effect_with_deps(
        move |open| {
            if *open {
                set_body_overflow("hidden");
            }
            let open = *open;
            move || {
                if open {
                    set_body_overflow("");
                }
            }
        },
        *menu_open,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = |mobile: bool| {
        let class = if mobile { "mobile-link" } else { "nav-link" };
        html! {
            <>
                { for NAV_ANCHORS.iter().map(|(label, href)| html! {
                    <a href={*href} class={class} onclick={close_menu.clone()}>{*label}</a>
                }) }
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Services} classes={class}>{"All Services"}</Link<Route>>
                </div>
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::About} classes={class}>{"About"}</Link<Route>>
                </div>
            </>
        }
    };

    html! {
        <>
            <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
                <div class="nav-content">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {"FUTURE"}<span>{"CORE"}</span>
                    </Link<Route>>

                    <div class="nav-right">
                        { links(false) }
                        <a href="/#contact" class="nav-contact">{"Contact Us"}</a>
                    </div>

                    <button
                        class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                        aria-label="Toggle menu"
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>

            if *menu_open {
                <div class="mobile-menu-overlay" onclick={close_menu.clone()}>
                    <div class="mobile-menu" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                        { links(true) }
                        <a href="/#contact" class="nav-contact" onclick={close_menu.clone()}>{"Contact Us"}</a>
                    </div>
                </div>
            }
        </>
    }
}

#[function_component]
fn App() -> Html {
    let site_config = use_memo(|_| SiteConfig::load(), ());

    html! {
        <ContextProvider<SiteConfig> context={*site_config}>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #000000;
                    color: #ffffff;
                    font-family: 'Inter', system-ui, -apple-system, sans-serif;
                }

                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.5rem 0;
                    transition: all 0.3s ease;
                }

                .top-nav.scrolled {
                    padding: 1rem 0;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.4);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    color: #ffffff;
                    text-decoration: none;
                }

                .nav-logo span {
                    color: #9ca3af;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    color: #ffffff;
                    text-decoration: none;
                    font-size: 0.95rem;
                    position: relative;
                }

                .nav-link::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    bottom: -4px;
                    width: 0;
                    height: 1px;
                    background: #ffffff;
                    transition: width 0.3s ease;
                }

                .nav-link:hover::after {
                    width: 100%;
                }

                .nav-contact {
                    padding: 0.5rem 1.25rem;
                    border: 1px solid #ffffff;
                    border-radius: 0.25rem;
                    color: #ffffff;
                    text-decoration: none;
                    transition: background 0.3s ease, color 0.3s ease;
                }

                .nav-contact:hover {
                    background: #ffffff;
                    color: #000000;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                    z-index: 60;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #ffffff;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }

                .burger-menu.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                .burger-menu.open span:nth-child(2) { opacity: 0; }
                .burger-menu.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

                .mobile-menu-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 40;
                    background: rgba(0, 0, 0, 0.95);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                }

                .mobile-link {
                    color: #ffffff;
                    font-size: 1.5rem;
                    text-decoration: none;
                }

                @media (max-width: 768px) {
                    .nav-right {
                        display: none;
                    }

                    .burger-menu {
                        display: flex;
                    }
                }

                .section-inner {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .section-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    gap: 2rem;
                    margin-bottom: 4rem;
                    flex-wrap: wrap;
                }

                .section-title {
                    font-size: clamp(2rem, 4vw, 3rem);
                    font-weight: 700;
                    line-height: 1.2;
                    margin: 0;
                }

                .section-title--gradient {
                    background: linear-gradient(to bottom, #ffffff, #9ca3af);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .section-lead {
                    color: #9ca3af;
                    max-width: 26rem;
                    font-size: 1.05rem;
                    line-height: 1.6;
                }

                .eyebrow {
                    display: inline-block;
                    margin-bottom: 1rem;
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                    background: linear-gradient(to right, #1f2937, #111827);
                    color: #9ca3af;
                    font-size: 0.8rem;
                    font-weight: 600;
                    letter-spacing: 0.1em;
                }

                .eyebrow--plain {
                    background: none;
                    padding: 0;
                }

                .btn {
                    display: inline-flex;
                    align-items: center;
                    padding: 1rem 2rem;
                    border-radius: 0.25rem;
                    text-decoration: none;
                    font-weight: 500;
                    cursor: pointer;
                    transition: background 0.3s ease, color 0.3s ease, transform 0.3s ease;
                }

                .btn--light {
                    background: #ffffff;
                    color: #000000;
                    border: none;
                }

                .btn--light:hover {
                    background: #e5e7eb;
                }

                .btn--outline {
                    border: 1px solid #ffffff;
                    color: #ffffff;
                    background: transparent;
                }

                .btn--outline:hover {
                    background: #ffffff;
                    color: #000000;
                }

                .btn--ghost {
                    border: 2px solid #404040;
                    color: #ffffff;
                    border-radius: 0.5rem;
                }

                .btn--ghost:hover {
                    border-color: #737373;
                    transform: scale(1.05);
                }

                /* scroll reveal */
                .reveal {
                    opacity: 0;
                    transition-property: opacity, transform;
                    will-change: opacity, transform;
                }

                .reveal--fade-up { transform: translateY(30px); }
                .reveal--fade-in { transform: none; }
                .reveal--slide-left { transform: translateX(40px); }
                .reveal--slide-right { transform: translateX(-40px); }
                .reveal--scale-up { transform: scale(0.95); }

                .reveal.reveal--shown {
                    opacity: 1;
                    transform: none;
                }

                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }

                @media (prefers-reduced-motion: reduce) {
                    .reveal {
                        transition: none !important;
                    }
                }
                "#}
            </style>
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    if web_sys::window().is_none() {
        warn!("No window; nothing to render");
        return;
    }

    info!("Starting FutureCore site");
    yew::Renderer::<App>::new().render();
}
