use yew::prelude::*;

use futurecore_site::reveal::parallax::{particle_field, FieldSpec};

#[derive(Properties, PartialEq)]
pub struct ParticleFieldProps {
    pub spec: FieldSpec,
    /// Current scroll offset; zero keeps every particle in place.
    #[prop_or_default]
    pub scroll: f64,
    #[prop_or_default]
    pub class: Classes,
}

/// Floating background dots. Positions, sizes, timings and parallax factors
/// are drawn once on mount and never change afterwards.
#[function_component(ParticleField)]
pub fn particle_field_view(props: &ParticleFieldProps) -> Html {
    let spec = props.spec;
    let particles = use_state(move || particle_field(spec, js_sys::Date::now() as u64));

    html! {
        <div class={classes!("particle-field", props.class.clone())} aria-hidden="true">
            { for particles.iter().map(|p| html! {
                <div class="particle" style={p.style(props.scroll)}></div>
            }) }
            <style>
                {r#"
                .particle-field {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }

                .particle {
                    position: absolute;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.12);
                    animation-name: particle-float;
                    animation-iteration-count: infinite;
                    animation-timing-function: ease-in-out;
                    will-change: transform;
                }

                .particle-field--soft .particle {
                    background: radial-gradient(circle, rgba(99, 102, 241, 0.18), transparent 70%);
                    filter: blur(20px);
                }

                @keyframes particle-float {
                    0%, 100% { margin-top: 0; }
                    50% { margin-top: -20px; }
                }
                "#}
            </style>
        </div>
    }
}
