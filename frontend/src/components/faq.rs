use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use futurecore_site::content::{filter_faqs, CONTACT};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

/// Searchable accordion. At most one answer is open; clicking it again
/// collapses it.
#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let query = use_state(String::new);
    let open = use_state(|| None::<&'static str>);
    let matches = filter_faqs(&query);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    html! {
        <section class="faq" id="faq">
            <div class="faq-inner">
                <div class="faq-head">
                    <h2 class="section-title section-title--gradient">{"Frequently Asked Questions"}</h2>
                    <p class="section-lead">
                        {"Everything you need to know about our services and technology solutions. Can't find what you're looking for? Contact our support team."}
                    </p>
                </div>

                <div class="faq-search">
                    <input
                        type="text"
                        placeholder="Search questions..."
                        value={(*query).clone()}
                        oninput={on_search}
                    />
                </div>

                <div class="faq-list">
                    {
                        if matches.is_empty() {
                            html! { <p class="faq-empty">{"No questions match your search."}</p> }
                        } else {
                            html! {
                                { for matches.iter().map(|faq| {
                                    let question = faq.question;
                                    let on_toggle = {
                                        let open = open.clone();
                                        Callback::from(move |_: ()| {
                                            let next = if *open == Some(question) { None } else { Some(question) };
                                            open.set(next);
                                        })
                                    };
                                    html! {
                                        <FaqItem
                                            key={question}
                                            question={question}
                                            answer={faq.answer}
                                            open={*open == Some(question)}
                                            {on_toggle}
                                        />
                                    }
                                }) }
                            }
                        }
                    }
                </div>

                <div class="faq-more">
                    <p>{"Still have questions?"}</p>
                    <a href={format!("mailto:{}", CONTACT.email)} class="btn btn--outline">{"Contact Support"}</a>
                </div>
            </div>

            <style>
                {r#"
                .faq {
                    padding: 6rem 1.5rem;
                    background: #000000;
                }

                .faq-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .faq-head {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .faq-head .section-lead {
                    margin: 0 auto;
                    max-width: 42rem;
                }

                .faq-search {
                    max-width: 32rem;
                    margin: 0 auto 3rem;
                }

                .faq-search input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    border: 1px solid #374151;
                    background: #111827;
                    color: #ffffff;
                    font-size: 1rem;
                }

                .faq-search input:focus {
                    outline: none;
                    border-color: #3b82f6;
                }

                .faq-item {
                    border-bottom: 1px solid #1f2937;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 1rem;
                    background: none;
                    border: none;
                    color: #f3f4f6;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .faq-question:hover {
                    color: #60a5fa;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    margin-left: 1rem;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1rem;
                    color: #9ca3af;
                    transition: max-height 0.3s ease, padding 0.3s ease;
                }

                .faq-item.open .faq-answer {
                    max-height: 500px;
                    padding-bottom: 1.25rem;
                }

                .faq-empty {
                    text-align: center;
                    color: #6b7280;
                }

                .faq-more {
                    text-align: center;
                    margin-top: 3rem;
                    color: #9ca3af;
                }
                "#}
            </style>
        </section>
    }
}
