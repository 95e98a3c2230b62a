use yew::prelude::*;

use futurecore_site::hooks::use_pointer;

#[derive(Properties, PartialEq)]
pub struct CursorGlowProps {
    pub radius_px: u32,
    pub alpha: f64,
}

/// Soft light that follows the mouse across the whole viewport.
#[function_component(CursorGlow)]
pub fn cursor_glow(props: &CursorGlowProps) -> Html {
    let pointer = use_pointer();

    html! {
        <>
            <div class="cursor-glow" style={pointer.gradient(props.radius_px, props.alpha)} aria-hidden="true"></div>
            <style>
                {r#"
                .cursor-glow {
                    position: fixed;
                    inset: 0;
                    pointer-events: none;
                    z-index: 0;
                    transition: background 0.15s ease-out;
                }
                "#}
            </style>
        </>
    }
}
