use yew::prelude::*;

use futurecore_site::config::SiteConfig;
use futurecore_site::content::{APPROACH_STEPS, CONTACT};
use futurecore_site::hooks::use_reveal_group;
use futurecore_site::reveal::{Easing, RevealStyle, StaggerConfig};

#[function_component(ApproachSection)]
pub fn approach_section() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default().reveal;
    let header = use_reveal_group(
        2,
        config.with_stagger(
            StaggerConfig::default()
                .with_initial_delay(200.0)
                .with_step(100.0)
                .with_duration(700.0),
        ),
    );
    let steps = use_reveal_group(
        APPROACH_STEPS.len(),
        config.with_stagger(
            StaggerConfig::default()
                .with_step(200.0)
                .with_duration(600.0)
                .with_easing(Easing::Smooth),
        ),
    );
    let contact = use_reveal_group(
        1,
        config
            .with_style(RevealStyle::ScaleUp)
            .with_stagger(StaggerConfig::default().with_duration(600.0)),
    );

    html! {
        <section class="approach" id="approach">
            <div class="approach-glow"></div>
            <div class="section-inner">
                <div ref={header.node.clone()} class="section-head">
                    <div class={header.class(0)} style={header.style()}>
                        <span class="eyebrow">{"WHAT WE DO"}</span>
                        <h2 class="section-title section-title--gradient">{"Our Collaborative Approach"}</h2>
                    </div>
                    <p class={classes!("section-lead", header.class(1))} style={header.style()}>
                        {"We follow a proven, agile methodology ensuring transparency, partnership, and exceptional results at every project stage."}
                    </p>
                </div>

                <div ref={steps.node.clone()} class="step-grid">
                    { for APPROACH_STEPS.iter().enumerate().map(|(i, step)| html! {
                        <div class={classes!("step-card", steps.class(i))} style={steps.style()}>
                            <span class="step-card__number">{step.number}</span>
                            <div class="step-card__content">
                                <div class="step-card__icon">{step.icon}</div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                                <span class="step-card__more">{"Learn more"}<span class="chevron">{"›"}</span></span>
                            </div>
                        </div>
                    }) }
                </div>

                <div ref={contact.node.clone()} id="contact" class={classes!("contact-block", contact.class(0))} style={contact.style()}>
                    <div class="contact-block__cta">
                        <h2 class="section-title section-title--gradient">{"Ready to build the future?"}</h2>
                        <p>{"Let's discuss how our innovative solutions and expert team can help you achieve your digital ambitions."}</p>
                        <a href={format!("mailto:{}", CONTACT.email)} class="btn btn--outline">{"Schedule a Consultation"}</a>
                    </div>
                    <div class="contact-card">
                        <h3>{"Get in Touch"}</h3>
                        <a href={format!("mailto:{}", CONTACT.email)} class="contact-line">
                            <span class="contact-line__label">{"Email"}</span>
                            <span>{CONTACT.email}</span>
                        </a>
                        <a href={CONTACT.phone_href} class="contact-line">
                            <span class="contact-line__label">{"Phone"}</span>
                            <span>{CONTACT.phone}</span>
                        </a>
                        <div class="contact-line">
                            <span class="contact-line__label">{"Address"}</span>
                            <span>{CONTACT.address}</span>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .approach {
                    position: relative;
                    overflow: hidden;
                    padding: 6rem 1.5rem;
                    background: linear-gradient(to bottom, #000000, #0a0a0a);
                }

                .approach-glow {
                    position: absolute;
                    right: -10rem;
                    top: 10rem;
                    width: 36rem;
                    height: 36rem;
                    border-radius: 50%;
                    background: radial-gradient(circle, rgba(6, 182, 212, 0.08), transparent 70%);
                    animation: pulse-slow 12s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    pointer-events: none;
                }

                .step-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .step-card {
                    position: relative;
                    overflow: hidden;
                    padding: 2rem 1.5rem;
                    border-radius: 0.75rem;
                    background: rgba(23, 23, 23, 0.5);
                    border: 1px solid rgba(38, 38, 38, 0.8);
                    display: flex;
                    flex-direction: column;
                }

                .step-card:hover {
                    border-color: rgba(6, 182, 212, 0.2);
                }

                .step-card__number {
                    position: absolute;
                    top: -1rem;
                    left: -0.5rem;
                    font-size: 6rem;
                    font-weight: 700;
                    color: rgba(255, 255, 255, 0.05);
                    user-select: none;
                }

                .step-card__content {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    flex-grow: 1;
                }

                .step-card__icon {
                    align-self: flex-start;
                    padding: 0.75rem;
                    margin-bottom: 1rem;
                    border-radius: 0.5rem;
                    background: linear-gradient(to bottom right, rgba(8, 145, 178, 0.2), rgba(37, 99, 235, 0.2));
                    border: 1px solid rgba(6, 182, 212, 0.3);
                    font-size: 1.5rem;
                }

                .step-card h3 {
                    font-size: 1.4rem;
                    margin: 0 0 0.75rem;
                }

                .step-card p {
                    color: #a3a3a3;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    flex-grow: 1;
                }

                .step-card__more {
                    color: rgba(6, 182, 212, 0.7);
                    font-size: 0.875rem;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .step-card:hover .step-card__more {
                    opacity: 1;
                }

                .contact-block {
                    margin-top: 5rem;
                    padding: 3rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(64, 64, 64, 0.7);
                    background: linear-gradient(to bottom right, rgba(23, 23, 23, 0.8), rgba(0, 0, 0, 0.8));
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 3rem;
                    flex-wrap: wrap;
                }

                .contact-block__cta {
                    flex: 3;
                    min-width: 280px;
                }

                .contact-block__cta p {
                    color: #a3a3a3;
                    font-size: 1.1rem;
                    margin-bottom: 2rem;
                }

                .contact-card {
                    flex: 2;
                    min-width: 260px;
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                    background: rgba(0, 0, 0, 0.5);
                    border: 1px solid rgba(64, 64, 64, 0.7);
                }

                .contact-card h3 {
                    margin: 0 0 1.5rem;
                    padding-bottom: 0.75rem;
                    border-bottom: 1px solid rgba(64, 64, 64, 0.7);
                }

                .contact-line {
                    display: block;
                    margin-bottom: 1.25rem;
                    color: #d4d4d4;
                    text-decoration: none;
                    font-size: 0.875rem;
                    transition: color 0.3s ease, transform 0.3s ease;
                }

                a.contact-line:hover {
                    color: #22d3ee;
                    transform: translateX(2px);
                }

                .contact-line__label {
                    display: block;
                    font-size: 0.75rem;
                    color: #737373;
                }

                @media (max-width: 1024px) {
                    .step-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 640px) {
                    .step-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
