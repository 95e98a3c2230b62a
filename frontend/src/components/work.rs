use yew::prelude::*;

use futurecore_site::config::SiteConfig;
use futurecore_site::content::{Project, PROJECTS};
use futurecore_site::hooks::use_reveal_group;
use futurecore_site::reveal::{Easing, StaggerConfig};

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    class: Classes,
    style: String,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let (from, to) = project.gradient;

    html! {
        <article class={classes!("project-card", props.class.clone())} style={props.style.clone()}>
            <div class="project-card__media">
                {
                    match project.image_url {
                        Some(url) => html! { <img src={url} alt={project.title} loading="lazy" /> },
                        None => html! {
                            <div class="project-card__placeholder" style={format!("background: linear-gradient(to bottom right, {}, {});", from, to)}>
                                <span>{"Image Placeholder"}</span>
                            </div>
                        },
                    }
                }
                <div class="project-card__shade"></div>
            </div>
            <div class="project-card__body">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="project-card__tags">
                    { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                </div>
            </div>
        </article>
    }
}

#[function_component(WorkSection)]
pub fn work_section() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default().reveal;
    let header = use_reveal_group(
        1,
        config.with_stagger(StaggerConfig::default().with_duration(500.0)),
    );
    let cards = use_reveal_group(
        PROJECTS.len(),
        config.with_stagger(
            StaggerConfig::default()
                .with_step(200.0)
                .with_duration(500.0)
                .with_easing(Easing::EaseOut),
        ),
    );

    html! {
        <section class="work" id="work">
            <div class="work-glow"></div>
            <div class="section-inner">
                <div ref={header.node.clone()} class={classes!("section-head", header.class(0))} style={header.style()}>
                    <div>
                        <span class="eyebrow eyebrow--plain">{"OUR PORTFOLIO"}</span>
                        <h2 class="section-title section-title--gradient">{"Recent Projects"}</h2>
                    </div>
                    <p class="section-lead">
                        {"Discover how we've helped organizations across various industries achieve their digital transformation goals."}
                    </p>
                </div>

                <div ref={cards.node.clone()} class="project-grid">
                    { for PROJECTS.iter().enumerate().map(|(i, project)| html! {
                        <ProjectCard project={project} class={cards.class(i)} style={cards.style()} />
                    }) }
                </div>

                <div class="work-more">
                    <a href="#contact" class="btn btn--ghost">{"View All Projects"}<span class="chevron">{"›"}</span></a>
                </div>
            </div>

            <style>
                {r#"
                .work {
                    position: relative;
                    overflow: hidden;
                    background: #000000;
                    padding: 5rem 1.5rem 8rem;
                }

                .work-glow {
                    position: absolute;
                    top: 20%;
                    left: -10%;
                    width: 40rem;
                    height: 40rem;
                    border-radius: 50%;
                    background: radial-gradient(circle, rgba(59, 130, 246, 0.08), transparent 70%);
                    animation: pulse-slow 8s ease-in-out infinite;
                    pointer-events: none;
                }

                .project-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(420px, 1fr));
                    gap: 2rem;
                }

                .project-card {
                    position: relative;
                    overflow: hidden;
                    border-radius: 0.5rem;
                    border: 1px solid rgba(38, 38, 38, 0.7);
                    background: rgba(23, 23, 23, 0.4);
                    backdrop-filter: blur(4px);
                    transition: border-color 0.3s ease, background 0.3s ease, box-shadow 0.3s ease;
                }

                .project-card:hover {
                    border-color: #404040;
                    background: rgba(23, 23, 23, 0.6);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }

                .project-card__media {
                    position: relative;
                    aspect-ratio: 16 / 9;
                    overflow: hidden;
                }

                .project-card__media img,
                .project-card__placeholder {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease-in-out;
                }

                .project-card:hover .project-card__media img {
                    transform: scale(1.05);
                }

                .project-card__placeholder {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #a3a3a3;
                    font-style: italic;
                    font-size: 0.875rem;
                }

                .project-card__shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent, rgba(0, 0, 0, 0.1));
                }

                .project-card__body {
                    padding: 1.5rem;
                }

                .project-card__body h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1.4rem;
                }

                .project-card__body p {
                    color: #a3a3a3;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }

                .project-card__tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }

                .tag {
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: #d4d4d4;
                }

                .work-more {
                    text-align: center;
                    margin-top: 4rem;
                }

                @keyframes pulse-slow {
                    0%, 100% { opacity: 0.3; transform: scale(1); }
                    50% { opacity: 0.4; transform: scale(1.05); }
                }

                @media (max-width: 900px) {
                    .project-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
