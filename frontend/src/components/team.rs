use yew::prelude::*;

use futurecore_site::config::SiteConfig;
use futurecore_site::content::TEAM;
use futurecore_site::hooks::use_reveal_group;
use futurecore_site::reveal::{RevealStyle, StaggerConfig};

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default().reveal;
    let members = use_reveal_group(
        TEAM.len(),
        config
            .with_style(RevealStyle::FadeIn)
            .with_stagger(StaggerConfig::default().with_step(150.0)),
    );

    html! {
        <section class="team" id="team">
            <div class="section-inner">
                <div class="section-head">
                    <div>
                        <span class="eyebrow eyebrow--plain">{"WHO WE ARE"}</span>
                        <h2 class="section-title">{"Our Team"}</h2>
                    </div>
                    <p class="section-lead">
                        {"Meet our talented team of experts dedicated to delivering innovative solutions and exceptional results."}
                    </p>
                </div>
                <div ref={members.node.clone()} class="team-grid">
                    { for TEAM.iter().enumerate().map(|(i, member)| html! {
                        <div class={classes!("team-member", members.class(i))} style={members.style()}>
                            <div class="team-member__photo">
                                <span class="team-member__initials">
                                    { member.name.split_whitespace().filter_map(|w| w.chars().next()).collect::<String>() }
                                </span>
                            </div>
                            <h3>{member.name}</h3>
                            <p>{member.role}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .team {
                    position: relative;
                    padding: 6rem 1.5rem;
                    background: rgba(255, 255, 255, 0.05);
                }

                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }

                .team-member__photo {
                    aspect-ratio: 1 / 1;
                    background: #111827;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }

                .team-member__initials {
                    font-size: 3rem;
                    font-weight: 700;
                    color: rgba(255, 255, 255, 0.2);
                    transition: transform 0.5s ease;
                }

                .team-member:hover .team-member__initials {
                    transform: scale(1.1);
                }

                .team-member h3 {
                    margin: 0;
                    font-size: 1.25rem;
                }

                .team-member p {
                    margin: 0.25rem 0 0;
                    color: #9ca3af;
                }
                "#}
            </style>
        </section>
    }
}
