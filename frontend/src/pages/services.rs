use web_sys::{MouseEvent, SubmitEvent};
use yew::prelude::*;

use futurecore_site::config::SiteConfig;
use futurecore_site::content::{services_in, ALL_CATEGORY, CATEGORIES, FEATURED, TESTIMONIALS};
use futurecore_site::hooks::{use_carousel, use_reveal_group, use_scroll_to_top, use_scroll_y};
use futurecore_site::reveal::parallax::FieldSpec;
use futurecore_site::reveal::{RevealStyle, StaggerConfig};

use crate::components::{cursor_glow::CursorGlow, footer::Footer, particles::ParticleField};

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    use_scroll_to_top();
    let site = use_context::<SiteConfig>().unwrap_or_default();
    let scroll = use_scroll_y();
    let category = use_state(|| ALL_CATEGORY);
    let listed = services_in(*category);

    let hero = use_reveal_group(
        3,
        site.reveal.with_stagger(
            StaggerConfig::default()
                .with_step(200.0)
                .with_duration(800.0),
        ),
    );
    let cards = use_reveal_group(
        listed.len(),
        site.reveal.with_stagger(
            StaggerConfig::default()
                .with_step(100.0)
                .with_duration(500.0),
        ),
    );
    let featured = use_reveal_group(
        1 + FEATURED.benefits.len(),
        site.reveal
            .with_style(RevealStyle::SlideRight)
            .with_stagger(StaggerConfig::default().with_step(150.0)),
    );
    let newsletter = use_reveal_group(1, site.reveal.with_style(RevealStyle::ScaleUp));
    let testimonials = use_carousel(TESTIMONIALS.len(), site.carousel);
    let subscribed = use_state(|| false);

    let particles = FieldSpec {
        count: 15,
        min_size_px: 50.0,
        max_size_px: 250.0,
        parallax: site.services_parallax,
    };

    let on_enter = {
        let hover = testimonials.hover.clone();
        Callback::from(move |_: MouseEvent| hover.emit(true))
    };
    let on_leave = {
        let hover = testimonials.hover.clone();
        Callback::from(move |_: MouseEvent| hover.emit(false))
    };
    let on_subscribe = {
        let subscribed = subscribed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            subscribed.set(true);
        })
    };

    html! {
        <main class="services-page">
            <CursorGlow radius_px={300} alpha={0.08} />
            <ParticleField spec={particles} scroll={scroll} class="particle-field--soft" />

            <section ref={hero.node.clone()} class="page-hero">
                <h1 class={classes!("page-title", hero.class(0))} style={hero.style()}>{"Our Services"}</h1>
                <p class={classes!("page-lead", hero.class(1))} style={hero.style()}>
                    {"Comprehensive technology solutions designed to drive innovation and accelerate growth for your business."}
                </p>
                <div class={classes!("category-tabs", hero.class(2))} style={hero.style()}>
                    { for CATEGORIES.iter().map(|c| {
                        let id = c.id;
                        let onclick = {
                            let category = category.clone();
                            Callback::from(move |_: MouseEvent| category.set(id))
                        };
                        html! {
                            <button
                                class={classes!("category-tab", (*category == id).then(|| "category-tab--active"))}
                                {onclick}
                            >
                                {c.name}
                            </button>
                        }
                    }) }
                </div>
            </section>

            <section class="catalog">
                <div ref={cards.node.clone()} class="catalog-grid">
                    { for listed.iter().enumerate().map(|(i, service)| html! {
                        <div key={service.title} class={classes!("catalog-card", cards.class(i))} style={cards.style()}>
                            <div class="catalog-card__icon">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <ul>
                                { for service.features.iter().map(|f| html! { <li>{*f}</li> }) }
                            </ul>
                            <a href="#" class="learn-more">{"Learn more"}<span class="chevron">{"›"}</span></a>
                        </div>
                    }) }
                </div>
            </section>

            <section ref={featured.node.clone()} class="featured">
                <div class={classes!("featured__copy", featured.class(0))} style={featured.style()}>
                    <span class="eyebrow">{"FEATURED SERVICE"}</span>
                    <h2 class="section-title">{FEATURED.title}</h2>
                    <div class="featured__rule"></div>
                    <p>{FEATURED.description}</p>
                    <p>{FEATURED.long_description}</p>
                    <a href="#" class="btn btn--light">{"Learn More"}<span class="chevron">{"›"}</span></a>
                </div>
                <div class="featured__benefits">
                    { for FEATURED.benefits.iter().enumerate().map(|(i, benefit)| html! {
                        <div class={classes!("benefit", featured.class(i + 1))} style={featured.style()}>
                            <h3>{benefit.title}</h3>
                            <p>{benefit.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="testimonials">
                <h2 class="section-title section-title--center">{"What Our Clients Say"}</h2>
                <div class="testimonial-track" onmouseenter={on_enter} onmouseleave={on_leave}>
                    { for TESTIMONIALS[testimonials.state.visible_range(TESTIMONIALS.len())].iter().map(|t| html! {
                        <figure key={t.author} class="testimonial">
                            <div class="stars">{"★★★★★"}</div>
                            <blockquote>{format!("\"{}\"", t.text)}</blockquote>
                            <figcaption>
                                <strong>{t.author}</strong>
                                <span>{t.position}</span>
                            </figcaption>
                        </figure>
                    }) }
                </div>
                <div class="testimonial-dots">
                    { for (0..testimonials.state.total_pages).map(|page| {
                        let select = testimonials.select.clone();
                        let onclick = Callback::from(move |_: MouseEvent| select.emit(page));
                        html! {
                            <button
                                aria-label={format!("Show testimonials page {}", page + 1)}
                                class={classes!("testimonial-dot", (page == testimonials.state.page).then(|| "testimonial-dot--active"))}
                                {onclick}
                            ></button>
                        }
                    }) }
                </div>
            </section>

            <section ref={newsletter.node.clone()} class={classes!("services-cta", newsletter.class(0))} style={newsletter.style()}>
                <h2 class="section-title section-title--center">{"Stay Updated with Our Newsletter"}</h2>
                <p>{"Subscribe to receive the latest insights, industry trends, and exclusive offers delivered straight to your inbox."}</p>
                {
                    if *subscribed {
                        html! { <p class="services-cta__thanks">{"You're on the list. Talk soon!"}</p> }
                    } else {
                        html! {
                            <form class="services-cta__form" onsubmit={on_subscribe}>
                                <input type="email" placeholder="Enter your email address" required=true />
                                <button type="submit" class="btn btn--light">{"Subscribe Now"}</button>
                            </form>
                        }
                    }
                }
            </section>

            <Footer />

            <style>
                {r#"
                .services-page {
                    position: relative;
                    overflow: hidden;
                    background: linear-gradient(to bottom, #000000, #0a0a1a 40%, #000000);
                }

                .page-hero {
                    position: relative;
                    z-index: 1;
                    text-align: center;
                    padding: 10rem 1.5rem 4rem;
                }

                .page-title {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    margin: 0 0 1.5rem;
                    background: linear-gradient(to bottom, #ffffff, #9ca3af);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .page-lead {
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                    color: #9ca3af;
                    font-size: 1.2rem;
                }

                .category-tabs {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }

                .category-tab {
                    padding: 0.5rem 1.25rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    color: #d1d5db;
                    cursor: pointer;
                    transition: background 0.3s ease, color 0.3s ease;
                }

                .category-tab--active {
                    background: #ffffff;
                    color: #000000;
                }

                .catalog {
                    position: relative;
                    z-index: 1;
                    padding: 2rem 1.5rem 6rem;
                }

                .catalog-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                    gap: 2rem;
                }

                .catalog-card {
                    padding: 2rem;
                    border-radius: 0.75rem;
                    background: rgba(17, 24, 39, 0.6);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    backdrop-filter: blur(6px);
                }

                .catalog-card:hover {
                    border-color: rgba(255, 255, 255, 0.2);
                }

                .catalog-card__icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }

                .catalog-card h3 {
                    margin: 0 0 0.75rem;
                }

                .catalog-card p,
                .catalog-card li {
                    color: #9ca3af;
                    font-size: 0.9rem;
                }

                .catalog-card ul {
                    padding-left: 1.1rem;
                    margin-bottom: 1.5rem;
                }

                .featured {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 6rem 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }

                .featured__rule {
                    width: 4rem;
                    height: 4px;
                    background: #ffffff;
                    margin: 1rem 0 1.5rem;
                }

                .featured__copy p {
                    color: #d1d5db;
                    line-height: 1.7;
                }

                .featured__benefits {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }

                .benefit {
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                }

                .benefit h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1.1rem;
                }

                .benefit p {
                    margin: 0;
                    color: #9ca3af;
                    font-size: 0.875rem;
                }

                .testimonials {
                    position: relative;
                    z-index: 1;
                    padding: 6rem 1.5rem;
                }

                .section-title--center {
                    text-align: center;
                    display: block;
                }

                .testimonial-track {
                    max-width: 1000px;
                    margin: 3rem auto 0;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }

                .testimonial {
                    margin: 0;
                    padding: 2rem;
                    border-radius: 0.75rem;
                    background: rgba(17, 24, 39, 0.7);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    animation: tech-fade 0.5s ease-out;
                }

                .stars {
                    color: #facc15;
                    margin-bottom: 1rem;
                }

                .testimonial blockquote {
                    margin: 0 0 1.5rem;
                    color: #d1d5db;
                    font-style: italic;
                }

                .testimonial figcaption span {
                    display: block;
                    color: #6b7280;
                    font-size: 0.875rem;
                }

                .testimonial-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 2rem;
                }

                .testimonial-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    border: none;
                    background: #374151;
                    cursor: pointer;
                }

                .testimonial-dot--active {
                    background: #ffffff;
                }

                .services-cta {
                    position: relative;
                    z-index: 1;
                    max-width: 48rem;
                    margin: 0 auto 6rem;
                    padding: 3rem 1.5rem;
                    text-align: center;
                }

                .services-cta p {
                    color: #9ca3af;
                }

                .services-cta__form {
                    display: flex;
                    gap: 0.75rem;
                    justify-content: center;
                    flex-wrap: wrap;
                    margin-top: 2rem;
                }

                .services-cta__form input {
                    flex: 1;
                    min-width: 240px;
                    padding: 0.9rem 1rem;
                    border-radius: 0.5rem;
                    border: 1px solid #374151;
                    background: #111827;
                    color: #ffffff;
                }

                @keyframes tech-fade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @media (max-width: 900px) {
                    .featured,
                    .featured__benefits {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </main>
    }
}
