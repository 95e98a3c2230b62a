use yew::prelude::*;

use futurecore_site::config::SiteConfig;
use futurecore_site::hooks::{use_reveal_group, RevealHandle};
use futurecore_site::reveal::parallax::{FieldSpec, ParallaxConfig};
use futurecore_site::reveal::{RevealConfig, RevealStyle, StaggerConfig};

use super::particles::ParticleField;

const ENTRANCE_MS: f64 = 1_000.0;

#[hook]
fn use_entrance(base: RevealConfig, delay_ms: f64, style: RevealStyle) -> RevealHandle {
    let config = base.with_style(style).with_stagger(
        StaggerConfig::default()
            .with_initial_delay(delay_ms)
            .with_duration(ENTRANCE_MS),
    );
    use_reveal_group(1, config)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let base = use_context::<SiteConfig>().unwrap_or_default().reveal;
    let copy = use_entrance(base, 0.0, RevealStyle::SlideRight);
    let lead = use_entrance(base, 300.0, RevealStyle::FadeUp);
    let actions = use_entrance(base, 500.0, RevealStyle::FadeUp);
    let badges = use_entrance(base, 700.0, RevealStyle::FadeIn);
    let visual = use_entrance(base, 1_000.0, RevealStyle::SlideLeft);

    let dots = FieldSpec {
        count: 10,
        min_size_px: 8.0,
        max_size_px: 8.0,
        parallax: ParallaxConfig {
            min_factor: 0.0,
            max_factor: 0.0,
        },
    };

    html! {
        <section class="hero" id="home">
            <div class="hero-glow hero-glow--one"></div>
            <div class="hero-glow hero-glow--two"></div>
            <ParticleField spec={dots} />

            <div class="hero-content">
                <div class="hero-copy">
                    <div ref={copy.node.clone()} class={copy.class(0)} style={copy.style()}>
                        <span class="eyebrow">{"INNOVATION THROUGH TECHNOLOGY"}</span>
                        <h1 class={classes!("hero-title", copy.shown(0).then(|| "hero-title--underlined"))}>
                            {"Creating "}<span class="hero-accent">{"digital"}</span>
                            <br />
                            {"futures that "}<span class="hero-accent hero-accent--late">{"matter"}</span>
                        </h1>
                    </div>
                    <p ref={lead.node.clone()} class={classes!("hero-lead", lead.class(0))} style={lead.style()}>
                        {"We build transformative digital solutions that empower businesses to thrive in an increasingly connected world."}
                    </p>
                    <div ref={actions.node.clone()} class={classes!("hero-actions", actions.class(0))} style={actions.style()}>
                        <a href="#contact" class="btn btn--light">{"Get Started"}<span class="chevron">{"›"}</span></a>
                        <a href="#services" class="btn btn--outline">{"Our Services"}<span class="chevron">{"›"}</span></a>
                    </div>
                    <div ref={badges.node.clone()} class={classes!("hero-badges", badges.class(0))} style={badges.style()}>
                        <span><i class="dot dot--green"></i>{"Built with modern tech"}</span>
                        <span><i class="dot dot--blue"></i>{"Secure by design"}</span>
                        <span><i class="dot dot--purple"></i>{"Fully responsive"}</span>
                    </div>
                </div>

                <div ref={visual.node.clone()} class={classes!("hero-visual", visual.class(0))} style={visual.style()}>
                    <div class="hero-panel">
                        <div class="ring ring--inner"></div>
                        <div class="ring ring--middle"></div>
                        <div class="ring ring--outer"></div>
                    </div>
                    <div class="floating-card floating-card--spinner"><div class="spinner"></div></div>
                    <div class="floating-card floating-card--grid">
                        { for (0..9).map(|i| html! {
                            <div class="grid-cell" style={format!("animation-delay: {:.1}s;", i as f64 * 0.1)}></div>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    padding: 8rem 1.5rem 4rem;
                }

                .hero-glow {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    opacity: 0.2;
                    animation: pulse 4s ease-in-out infinite;
                }

                .hero-glow--one {
                    width: 50%;
                    height: 50%;
                    top: -5rem;
                    left: -5rem;
                    background: linear-gradient(to right, rgba(255, 255, 255, 0.05), transparent);
                }

                .hero-glow--two {
                    width: 33%;
                    height: 33%;
                    bottom: 10rem;
                    right: 5rem;
                    background: linear-gradient(to left, rgba(255, 255, 255, 0.05), transparent);
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 3rem;
                }

                .hero-copy {
                    flex: 1;
                }

                .hero-title {
                    font-size: clamp(2.8rem, 6vw, 4.5rem);
                    line-height: 1.1;
                    margin: 1rem 0 1.5rem;
                }

                .hero-accent {
                    position: relative;
                    display: inline-block;
                    color: #9ca3af;
                }

                .hero-accent::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    bottom: 0;
                    width: 100%;
                    height: 4px;
                    background: #9ca3af;
                    transform: scaleX(0);
                    transform-origin: left;
                    transition: transform 1s ease-out;
                }

                .hero-accent--late::after {
                    transition-delay: 0.5s;
                }

                .hero-title--underlined .hero-accent::after {
                    transform: scaleX(1);
                }

                .hero-lead {
                    font-size: 1.2rem;
                    color: #d1d5db;
                    max-width: 36rem;
                    margin-bottom: 2.5rem;
                }

                .hero-actions {
                    display: flex;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                }

                .chevron {
                    margin-left: 0.5rem;
                    display: inline-block;
                    transition: transform 0.3s ease;
                }

                .btn:hover .chevron {
                    transform: translateX(4px);
                }

                .hero-badges {
                    display: flex;
                    gap: 2rem;
                    margin-top: 4rem;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }

                .hero-badges.reveal.reveal--shown {
                    opacity: 0.7;
                }

                .dot {
                    display: inline-block;
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    margin-right: 0.35rem;
                    animation: pulse 2s ease-in-out infinite;
                }

                .dot--green { background: #4ade80; }
                .dot--blue { background: #60a5fa; }
                .dot--purple { background: #c084fc; }

                .hero-visual {
                    flex: 1;
                    display: flex;
                    justify-content: flex-end;
                    position: relative;
                }

                .hero-panel {
                    position: relative;
                    width: 24rem;
                    height: 24rem;
                    border-radius: 1rem;
                    background: linear-gradient(to top right, #1f2937, #374151, #1f2937);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .ring {
                    position: absolute;
                    border-radius: 50%;
                    border: 4px solid rgba(255, 255, 255, 0.3);
                    animation: pulse 2s ease-in-out infinite;
                }

                .ring--inner { width: 8rem; height: 8rem; }
                .ring--middle { width: 12rem; height: 12rem; border-color: rgba(255, 255, 255, 0.2); animation-delay: 0.5s; }
                .ring--outer { width: 16rem; height: 16rem; border-color: rgba(255, 255, 255, 0.1); animation-delay: 1s; }

                .floating-card {
                    position: absolute;
                    background: #1f2937;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.4);
                    animation: bounce 3s ease-in-out infinite;
                }

                .floating-card--spinner {
                    top: -1.5rem;
                    right: 18rem;
                    width: 6rem;
                    height: 6rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .spinner {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    border: 4px solid transparent;
                    border-top-color: rgba(255, 255, 255, 0.6);
                    border-right-color: rgba(255, 255, 255, 0.6);
                    animation: spin 1s linear infinite;
                }

                .floating-card--grid {
                    bottom: -2rem;
                    right: -2rem;
                    width: 8rem;
                    height: 4rem;
                    padding: 0.5rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 0.25rem;
                    animation-duration: 4s;
                    animation-delay: 1s;
                }

                .grid-cell {
                    background: rgba(255, 255, 255, 0.3);
                    border-radius: 2px;
                    animation: pulse 2s ease-in-out infinite;
                }

                @keyframes spin {
                    to { transform: rotate(360deg); }
                }

                @keyframes bounce {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-12px); }
                }

                @media (max-width: 768px) {
                    .hero-visual,
                    .hero-badges {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
