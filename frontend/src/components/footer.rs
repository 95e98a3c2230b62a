use chrono::{Datelike, Local};
use web_sys::SubmitEvent;
use yew::prelude::*;

use futurecore_site::config::SiteConfig;
use futurecore_site::content::{FOOTER_COMPANY, FOOTER_SERVICES, LEGAL_LINKS, SOCIAL_LINKS};
use futurecore_site::hooks::use_reveal_group;
use futurecore_site::reveal::{Easing, StaggerConfig};

#[function_component(Footer)]
pub fn footer() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default().reveal;
    // brand, three link columns, newsletter, bottom bar
    let blocks = use_reveal_group(
        6,
        config.with_stagger(
            StaggerConfig::default()
                .with_initial_delay(200.0)
                .with_step(100.0)
                .with_duration(500.0)
                .with_easing(Easing::Smooth),
        ),
    );
    let subscribed = use_state(|| false);
    let year = Local::now().year();

    let on_subscribe = {
        let subscribed = subscribed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            subscribed.set(true);
        })
    };

    let link_column = |index: usize, title: &'static str, links: &'static [&'static str]| {
        html! {
            <div class={classes!("footer-column", blocks.class(index))} style={blocks.style()}>
                <h3>{title}</h3>
                <ul>
                    { for links.iter().map(|link| html! { <li><a href="#">{*link}</a></li> }) }
                </ul>
            </div>
        }
    };

    html! {
        <footer class="site-footer">
            <div ref={blocks.node.clone()} class="footer-inner">
                <div class="footer-grid">
                    <div class={classes!("footer-brand", blocks.class(0))} style={blocks.style()}>
                        <h2 class="brand-mark">{"FUTURE"}<span>{"CORE"}</span></h2>
                        <p>{"Empowering businesses through innovative technology solutions since 2015. Driving digital transformation forward."}</p>
                    </div>
                    { link_column(1, "Services", FOOTER_SERVICES) }
                    { link_column(2, "Company", FOOTER_COMPANY) }
                    <div class={classes!("footer-column", blocks.class(3))} style={blocks.style()}>
                        <h3>{"Connect"}</h3>
                        <ul>
                            { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                                <li><a href={*href} target="_blank" rel="noopener noreferrer">{*name}</a></li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class={classes!("newsletter", blocks.class(4))} style={blocks.style()}>
                    <div>
                        <h3>{"Stay Ahead of the Curve"}</h3>
                        <p>{"Subscribe for the latest tech insights, trends, and news."}</p>
                    </div>
                    {
                        if *subscribed {
                            html! { <p class="newsletter__thanks">{"Thanks for subscribing!"}</p> }
                        } else {
                            html! {
                                <form class="newsletter__form" onsubmit={on_subscribe}>
                                    <input type="email" placeholder="your.email@example.com" required=true />
                                    <button type="submit">{"Subscribe"}</button>
                                </form>
                            }
                        }
                    }
                </div>

                <div class={classes!("footer-bottom", blocks.class(5))} style={blocks.style()}>
                    <p>{format!("© {} FutureCore. All rights reserved.", year)}</p>
                    <div class="footer-legal">
                        { for LEGAL_LINKS.iter().map(|link| html! { <a href="#">{*link}</a> }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    position: relative;
                    background: #000000;
                    border-top: 1px solid rgba(38, 38, 38, 0.5);
                    padding: 5rem 1.5rem 2rem;
                }

                .footer-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 3rem;
                    margin-bottom: 4rem;
                }

                .brand-mark {
                    font-size: 1.5rem;
                    margin: 0 0 1rem;
                    background: linear-gradient(to right, #22d3ee, #3b82f6, #9333ea);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .brand-mark span {
                    color: #22d3ee;
                }

                .footer-brand p {
                    color: #a3a3a3;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }

                .footer-column h3 {
                    font-size: 1rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #e5e5e5;
                    margin: 0 0 1rem;
                }

                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .footer-column li {
                    margin-bottom: 0.75rem;
                }

                .footer-column a {
                    color: #a3a3a3;
                    text-decoration: none;
                    font-size: 0.875rem;
                    display: inline-block;
                    transition: color 0.2s ease, transform 0.2s ease;
                }

                .footer-column a:hover {
                    color: #ffffff;
                    transform: translateX(4px);
                }

                .newsletter {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    align-items: center;
                    padding: 2rem;
                    margin-bottom: 4rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(38, 38, 38, 0.7);
                    background: linear-gradient(to bottom right, rgba(23, 23, 23, 0.3), rgba(10, 10, 10, 0.3));
                }

                .newsletter h3 {
                    margin: 0 0 0.5rem;
                }

                .newsletter p {
                    color: #a3a3a3;
                    font-size: 0.875rem;
                    margin: 0;
                }

                .newsletter__form {
                    display: flex;
                    gap: 0.75rem;
                }

                .newsletter__form input {
                    flex-grow: 1;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    border: 1px solid #404040;
                    background: #171717;
                    color: #e5e5e5;
                }

                .newsletter__form button {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: linear-gradient(to right, #06b6d4, #2563eb);
                    color: #ffffff;
                    font-weight: 500;
                    cursor: pointer;
                }

                .newsletter__thanks {
                    color: #22d3ee !important;
                }

                .footer-bottom {
                    border-top: 1px solid rgba(38, 38, 38, 0.5);
                    padding-top: 2rem;
                    display: flex;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.75rem;
                    color: #737373;
                }

                .footer-legal {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-legal a {
                    color: #737373;
                    text-decoration: none;
                }

                .footer-legal a:hover {
                    color: #e5e5e5;
                }

                @media (max-width: 900px) {
                    .footer-grid,
                    .newsletter {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
