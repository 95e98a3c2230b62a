use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page drifted out of orbit."}</p>
            <Link<Route> to={Route::Home} classes="btn btn--light">
                {"Back home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 80vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    text-align: center;
                    padding: 8rem 1.5rem;
                }

                .not-found h1 {
                    font-size: 6rem;
                    margin: 0;
                    background: linear-gradient(to bottom, #ffffff, #6b7280);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .not-found p {
                    color: #9ca3af;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
