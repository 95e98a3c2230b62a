use yew::prelude::*;

use futurecore_site::config::SiteConfig;
use futurecore_site::content::SERVICES;
use futurecore_site::hooks::use_reveal_group;
use futurecore_site::reveal::{RevealStyle, StaggerConfig};

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default().reveal;
    let header = use_reveal_group(
        1,
        config
            .with_style(RevealStyle::FadeIn)
            .with_stagger(StaggerConfig::default().with_duration(1_000.0)),
    );
    let cards = use_reveal_group(
        SERVICES.len(),
        config.with_stagger(
            StaggerConfig::default()
                .with_initial_delay(100.0)
                .with_step(100.0)
                .with_duration(700.0),
        ),
    );
    let cta = use_reveal_group(
        1,
        config.with_stagger(StaggerConfig::default().with_initial_delay(700.0)),
    );

    html! {
        <section class="services" id="services">
            <div class="section-inner">
                <div ref={header.node.clone()} class={classes!("section-head", header.class(0))} style={header.style()}>
                    <div>
                        <span class="eyebrow">{"WHAT WE DO"}</span>
                        <h2 class={classes!("section-title", "underlined", header.shown(0).then(|| "underlined--on"))}>
                            {"Our Services"}
                        </h2>
                    </div>
                    <p class="section-lead">
                        {"We deliver comprehensive IT solutions tailored to your specific business needs, helping you navigate the digital landscape with confidence."}
                    </p>
                </div>

                <div ref={cards.node.clone()} class="service-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <div class={classes!("service-card", cards.class(i))} style={cards.style()}>
                            <div
                                class="service-card__wash"
                                style={format!("background: linear-gradient(to bottom right, {}, {});", service.accent.0, service.accent.1)}
                            ></div>
                            <div class="service-card__icon">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <a href="#contact" class="learn-more">{"Learn more"}<span class="chevron">{"›"}</span></a>
                        </div>
                    }) }
                </div>

                <div ref={cta.node.clone()} class={classes!("cta-band", cta.class(0))} style={cta.style()}>
                    <div>
                        <h3>{"Ready to transform your business?"}</h3>
                        <p>{"Let's discuss how our services can drive your success."}</p>
                    </div>
                    <a href="#contact" class="btn btn--light">{"Get in touch"}<span class="chevron">{"›"}</span></a>
                </div>
            </div>

            <style>
                {r#"
                .services {
                    position: relative;
                    padding: 6rem 1.5rem;
                    background: linear-gradient(to bottom, #000000, #111827);
                }

                .underlined {
                    position: relative;
                    display: inline-block;
                }

                .underlined::after {
                    content: '';
                    position: absolute;
                    left: 0;
                    bottom: -0.75rem;
                    height: 4px;
                    width: 0;
                    background: rgba(255, 255, 255, 0.5);
                    transition: width 1.5s ease 0.5s;
                }

                .underlined--on::after {
                    width: 6rem;
                }

                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }

                .service-card {
                    position: relative;
                    overflow: hidden;
                    padding: 2rem;
                    border-radius: 0.75rem;
                    background: rgba(31, 41, 55, 0.5);
                    border: 1px solid rgba(255, 255, 255, 0.05);
                }

                .service-card__wash {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }

                .service-card:hover .service-card__wash {
                    opacity: 1;
                }

                .service-card__icon {
                    position: relative;
                    font-size: 2rem;
                    margin-bottom: 1.5rem;
                    transition: transform 0.3s ease;
                }

                .service-card:hover .service-card__icon {
                    transform: scale(1.1);
                }

                .service-card h3,
                .service-card p,
                .service-card a {
                    position: relative;
                }

                .service-card h3 {
                    font-size: 1.5rem;
                    margin: 0 0 1rem;
                }

                .service-card p {
                    color: #9ca3af;
                    margin-bottom: 1.5rem;
                }

                .learn-more {
                    color: #ffffff;
                    text-decoration: none;
                    font-size: 0.9rem;
                }

                .learn-more:hover .chevron {
                    transform: translateX(4px);
                }

                .cta-band {
                    margin-top: 4rem;
                    padding: 2.5rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(to right, #1f2937, #111827);
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                    flex-wrap: wrap;
                }

                .cta-band h3 {
                    font-size: 1.5rem;
                    margin: 0 0 0.5rem;
                }

                .cta-band p {
                    color: #9ca3af;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
