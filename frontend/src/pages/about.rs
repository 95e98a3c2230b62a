use yew::prelude::*;

use futurecore_site::config::SiteConfig;
use futurecore_site::content::{Feature, ABOUT_PILLARS, CORE_SERVICES, REASONS};
use futurecore_site::hooks::{use_reveal_group, use_scroll_to_top, use_scroll_y};
use futurecore_site::reveal::parallax::FieldSpec;
use futurecore_site::reveal::{RevealStyle, StaggerConfig};

use crate::components::{cursor_glow::CursorGlow, footer::Footer, particles::ParticleField};

#[derive(Properties, PartialEq)]
struct FeatureGridProps {
    id: &'static str,
    title: &'static str,
    lead: &'static str,
    items: &'static [Feature],
    #[prop_or_default]
    class: Classes,
}

/// Heading plus a grid of cards, each fading in once its section is seen.
#[function_component(FeatureGrid)]
fn feature_grid(props: &FeatureGridProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default().reveal;
    let heading = use_reveal_group(
        1,
        config.with_stagger(StaggerConfig::default().with_duration(1_000.0)),
    );
    let cards = use_reveal_group(
        props.items.len(),
        config
            .with_style(RevealStyle::FadeIn)
            .with_stagger(
                StaggerConfig::default()
                    .with_step(100.0)
                    .with_duration(1_000.0),
            ),
    );

    html! {
        <section id={props.id} class={classes!("feature-section", props.class.clone())}>
            <div class="feature-section__rule"></div>
            <div ref={heading.node.clone()} class={classes!("feature-section__head", heading.class(0))} style={heading.style()}>
                <h2 class="section-title section-title--gradient">{props.title}</h2>
                <p>{props.lead}</p>
            </div>
            <div ref={cards.node.clone()} class="feature-grid">
                { for props.items.iter().enumerate().map(|(i, item)| html! {
                    <div class={classes!("feature-card", cards.class(i))} style={cards.style()}>
                        if !item.icon.is_empty() {
                            <div class="feature-card__icon">{item.icon}</div>
                        }
                        <h3>{item.title}</h3>
                        <p>{item.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    use_scroll_to_top();
    let site = use_context::<SiteConfig>().unwrap_or_default();
    let scroll = use_scroll_y();
    let hero = use_reveal_group(
        1,
        site.reveal.with_stagger(
            StaggerConfig::default()
                .with_initial_delay(300.0)
                .with_duration(1_000.0),
        ),
    );
    let cta = use_reveal_group(
        1,
        site.reveal
            .with_stagger(StaggerConfig::default().with_duration(1_000.0)),
    );

    let particles = FieldSpec {
        count: 20,
        min_size_px: 50.0,
        max_size_px: 350.0,
        parallax: site.about_parallax,
    };

    html! {
        <main class="about-page">
            <CursorGlow radius_px={200} alpha={0.15} />

            <section class="about-hero">
                <ParticleField spec={particles} scroll={scroll} class="particle-field--blurred" />
                <div ref={hero.node.clone()} class={classes!("about-hero__content", hero.class(0))} style={hero.style()}>
                    <h1 class="page-title">{"Pioneering Tomorrow's Technology"}</h1>
                    <p class="page-lead">
                        {"At Future Core Innovations, we push the boundaries of what's possible through innovative technology solutions that transform industries and improve lives."}
                    </p>
                    <a href="#about" class="btn btn--pill">{"Discover Our Vision"}<span class="chevron">{"→"}</span></a>
                </div>
            </section>

            <FeatureGrid
                id="about"
                title="About Us"
                lead="Get to know the company that's reshaping the digital landscape"
                items={ABOUT_PILLARS}
            />
            <FeatureGrid
                id="core-services"
                title="Core Services"
                lead="Comprehensive technology solutions tailored to your business needs"
                items={CORE_SERVICES}
            />
            <FeatureGrid
                id="why-us"
                title="Why Choose Us"
                lead="What sets Future Core Innovations apart from competitors"
                items={REASONS}
                class="feature-section--raised"
            />

            <section ref={cta.node.clone()} class="about-cta">
                <div class={classes!("about-cta__content", cta.class(0))} style={cta.style()}>
                    <h2 class="section-title section-title--gradient">{"Ready to Transform Your Digital Future?"}</h2>
                    <p>
                        {"Let's collaborate to create innovative solutions that drive your business forward. Our team is ready to bring your vision to life."}
                    </p>
                    <a href="/#contact" class="btn btn--pill">{"Get in Touch"}<span class="chevron">{"→"}</span></a>
                </div>
            </section>

            <Footer />

            <style>
                {r#"
                .about-page {
                    position: relative;
                    background: #000000;
                    overflow: hidden;
                }

                .about-hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 5rem 1rem 10rem;
                    overflow: hidden;
                }

                .particle-field--blurred .particle {
                    background: rgba(255, 255, 255, 0.05);
                    filter: blur(70px);
                    transition: transform 0.3s ease-out;
                }

                .about-hero__content {
                    position: relative;
                    z-index: 1;
                    max-width: 48rem;
                    text-align: center;
                }

                .btn--pill {
                    border-radius: 9999px;
                    background: #ffffff;
                    color: #000000;
                    padding: 1rem 2.5rem;
                }

                .feature-section {
                    position: relative;
                    padding: 6rem 1rem;
                    background: #000000;
                }

                .feature-section--raised {
                    background: #111827;
                }

                .feature-section__rule {
                    position: absolute;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 1px;
                    background: linear-gradient(to right, transparent, #ffffff, transparent);
                    opacity: 0.2;
                }

                .feature-section__head {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .feature-section__head p {
                    color: #9ca3af;
                    font-size: 1.1rem;
                    max-width: 42rem;
                    margin: 0 auto;
                }

                .feature-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }

                .feature-card {
                    padding: 2rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(to bottom right, rgba(31, 41, 55, 0.5), rgba(0, 0, 0, 0.5));
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    transition: border-color 0.3s ease, transform 0.3s ease;
                }

                .feature-card:hover {
                    border-color: rgba(255, 255, 255, 0.2);
                    transform: translateY(-4px);
                }

                .feature-card__icon {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }

                .feature-card h3 {
                    margin: 0 0 1rem;
                    font-size: 1.3rem;
                }

                .feature-card p {
                    color: #9ca3af;
                    line-height: 1.7;
                    margin: 0;
                }

                .about-cta {
                    position: relative;
                    padding: 6rem 1rem;
                    background-color: #000000;
                    background-image: linear-gradient(to right, rgba(51, 51, 51, 0.3) 1px, transparent 1px),
                        linear-gradient(to bottom, rgba(51, 51, 51, 0.3) 1px, transparent 1px);
                    background-size: 40px 40px;
                }

                .about-cta__content {
                    max-width: 48rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .about-cta__content p {
                    color: #d1d5db;
                    font-size: 1.1rem;
                    margin-bottom: 2.5rem;
                }
                "#}
            </style>
        </main>
    }
}
