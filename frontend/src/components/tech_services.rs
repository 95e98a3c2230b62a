use web_sys::MouseEvent;
use yew::prelude::*;

use futurecore_site::config::SiteConfig;
use futurecore_site::content::{TechService, TECH_SERVICES};
use futurecore_site::hooks::use_carousel;
use futurecore_site::reveal::CarouselConfig;

fn visual(service: &TechService) -> Html {
    match service.id {
        "web" => html! {
            <div class="mock mock--editor">
                <div class="mock__bar"><i></i><i></i><i></i><span>{"App.jsx"}</span></div>
                <pre>
                    <span class="kw">{"import"}</span>{" React "}<span class="kw">{"from"}</span>{" "}<span class="str">{"'react'"}</span>{";\n\n"}
                    <span class="kw">{"const"}</span>{" "}<span class="fn">{"App"}</span>{" = () => (\n"}
                    {"  <div className="}<span class="str">{"\"container\""}</span>{">\n"}
                    {"    <h1>Welcome to our website</h1>\n"}
                    {"    <p>Built with React</p>\n"}
                    {"  </div>\n);\n\n"}
                    <span class="kw">{"export default"}</span>{" App;"}
                </pre>
            </div>
        },
        "app" => html! {
            <div class="mock mock--phone">
                <div class="phone">
                    <div class="phone__title">{"My App"}</div>
                    { for (0..4).map(|i| html! {
                        <div class="phone__row" style={format!("animation-delay: {:.1}s;", i as f64 * 0.2)}></div>
                    }) }
                </div>
            </div>
        },
        _ => html! {
            <div class="mock mock--servers">
                { for service.features.iter().map(|(name, icon)| html! {
                    <div class="server">
                        <span class="server__icon">{*icon}</span>
                        <span>{*name}</span>
                        <span class="server__status"></span>
                    </div>
                }) }
            </div>
        },
    }
}

#[function_component(TechServices)]
pub fn tech_services() -> Html {
    let site = use_context::<SiteConfig>().unwrap_or_default();
    let tabs = use_carousel(
        TECH_SERVICES.len(),
        CarouselConfig {
            interval_ms: site.carousel.interval_ms,
            ..CarouselConfig::single()
        },
    );
    let active = &TECH_SERVICES[tabs.state.page.min(TECH_SERVICES.len() - 1)];

    let on_enter = {
        let hover = tabs.hover.clone();
        Callback::from(move |_: MouseEvent| hover.emit(true))
    };
    let on_leave = {
        let hover = tabs.hover.clone();
        Callback::from(move |_: MouseEvent| hover.emit(false))
    };

    html! {
        <section class="tech">
            <div class="section-inner">
                <div class="tech-head">
                    <h2 class="section-title">{"Tech Services "}<span class="tech-highlight">{"Reimagined"}</span></h2>
                    <p class="section-lead">
                        {"Elevate your digital presence with our comprehensive suite of development and IT services."}
                    </p>
                </div>

                <div class="tech-tabs" role="tablist">
                    { for TECH_SERVICES.iter().enumerate().map(|(i, service)| {
                        let selected = i == tabs.state.page;
                        let onclick = {
                            let select = tabs.select.clone();
                            Callback::from(move |_: MouseEvent| select.emit(i))
                        };
                        html! {
                            <button
                                role="tab"
                                aria-selected={selected.to_string()}
                                class={classes!("tech-tab", selected.then(|| "tech-tab--active"))}
                                style={if selected { format!("background: {};", service.color) } else { String::new() }}
                                {onclick}
                            >
                                <span>{service.icon}</span>
                                <span>{service.title}</span>
                            </button>
                        }
                    }) }
                </div>

                <div
                    class={classes!("tech-body", tabs.state.paused.then(|| "tech-body--paused"))}
                    onmouseenter={on_enter}
                    onmouseleave={on_leave}
                >
                    <div key={active.id} class="tech-info" style={format!("background: {};", active.color)}>
                        <div class="tech-info__head">
                            <span class="tech-info__icon">{active.icon}</span>
                            <h3>{active.title}</h3>
                        </div>
                        <p>{active.description}</p>
                        <div class="tech-features">
                            { for active.features.iter().enumerate().map(|(i, (name, icon))| html! {
                                <div class="tech-feature" style={format!("animation-delay: {}ms;", 200 + i * 100)}>
                                    <span>{*icon}</span>
                                    <span>{*name}</span>
                                </div>
                            }) }
                        </div>
                        <button class="tech-more">{"Learn More"}</button>
                    </div>
                    <div key={format!("visual-{}", active.id)} class="tech-visual">
                        { visual(active) }
                    </div>
                </div>

                <div class="tech-progress">
                    { for (0..tabs.state.total_pages).map(|i| html! {
                        <span class={classes!("tech-progress__dot", (i == tabs.state.page).then(|| "tech-progress__dot--active"))}></span>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .tech {
                    background: #000000;
                    padding: 4rem 1rem;
                    overflow: hidden;
                }

                .tech-head {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .tech-head .section-lead {
                    margin: 0 auto;
                    max-width: 42rem;
                }

                .tech-highlight {
                    color: #3b82f6;
                }

                .tech-tabs {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    flex-wrap: wrap;
                    margin-bottom: 3rem;
                }

                .tech-tab {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: #262626;
                    color: #d4d4d4;
                    cursor: pointer;
                    transition: transform 0.2s ease, background 0.3s ease;
                }

                .tech-tab:hover {
                    transform: scale(1.05);
                }

                .tech-tab--active {
                    color: #ffffff;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.4);
                }

                .tech-body {
                    display: grid;
                    grid-template-columns: 2fr 3fr;
                    gap: 2rem;
                }

                .tech-info {
                    padding: 2rem;
                    border-radius: 0.75rem;
                    color: #ffffff;
                    animation: tech-slide-in 0.5s ease-out;
                }

                .tech-info__head {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }

                .tech-info__icon {
                    background: rgba(255, 255, 255, 0.2);
                    border-radius: 50%;
                    padding: 0.75rem;
                    font-size: 1.5rem;
                }

                .tech-info h3 {
                    font-size: 1.5rem;
                    margin: 0;
                }

                .tech-features {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-top: 2rem;
                }

                .tech-feature {
                    display: flex;
                    gap: 0.75rem;
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    background: rgba(0, 0, 0, 0.3);
                    opacity: 0;
                    animation: tech-rise 0.4s ease-out forwards;
                }

                .tech-more {
                    margin-top: 2rem;
                    padding: 0.5rem 1.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #000000;
                    color: #ffffff;
                    cursor: pointer;
                }

                .tech-visual {
                    background: #171717;
                    border: 1px solid #262626;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    animation: tech-fade 0.5s ease-out;
                }

                .mock {
                    height: 100%;
                    padding: 1.5rem;
                    box-sizing: border-box;
                }

                .mock--editor pre {
                    margin: 0;
                    padding: 1rem;
                    background: #000000;
                    border-radius: 0 0 0.5rem 0.5rem;
                    color: #ffffff;
                    font-size: 0.85rem;
                    white-space: pre-wrap;
                }

                .mock__bar {
                    display: flex;
                    align-items: center;
                    gap: 0.4rem;
                    padding: 0.5rem 0.75rem;
                    background: #0a0a0a;
                    border-radius: 0.5rem 0.5rem 0 0;
                    color: #737373;
                    font-size: 0.75rem;
                }

                .mock__bar i {
                    width: 0.6rem;
                    height: 0.6rem;
                    border-radius: 50%;
                    background: #404040;
                }

                .kw { color: #c084fc; }
                .str { color: #4ade80; }
                .fn { color: #facc15; }

                .mock--phone {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                }

                .phone {
                    width: 12rem;
                    padding: 1rem;
                    border-radius: 1.5rem;
                    border: 6px solid #262626;
                    background: #0a0a0a;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .phone__title {
                    font-weight: 600;
                    font-size: 0.875rem;
                }

                .phone__row {
                    height: 1rem;
                    border-radius: 0.25rem;
                    background: rgba(255, 255, 255, 0.3);
                    animation: pulse 2s ease-in-out infinite;
                }

                .mock--servers {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    justify-content: center;
                }

                .server {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    border-radius: 0.5rem;
                    background: #0a0a0a;
                    border: 1px solid #262626;
                }

                .server__status {
                    margin-left: auto;
                    width: 0.6rem;
                    height: 0.6rem;
                    border-radius: 50%;
                    background: #4ade80;
                    animation: pulse 2s ease-in-out infinite;
                }

                .tech-progress {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 2rem;
                }

                .tech-progress__dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: #404040;
                    transition: background 0.3s ease, transform 0.3s ease;
                }

                .tech-progress__dot--active {
                    background: #ffffff;
                    transform: scale(1.3);
                }

                .tech-body--paused .tech-info {
                    box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.2);
                }

                @keyframes tech-slide-in {
                    from { opacity: 0; transform: translateX(-20px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                @keyframes tech-fade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes tech-rise {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @media (max-width: 1024px) {
                    .tech-body {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
