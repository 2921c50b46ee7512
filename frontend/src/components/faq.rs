use yew::prelude::*;

use crate::content::{FaqEntry, FAQS};
use crate::state::sections::SectionId;

fn answer_id(position: usize) -> String {
    format!("faq-answer-{}", position)
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: &'static FaqEntry,
    position: usize,
}

/// One collapsible question. Items open and close independently.
#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let expanded = use_state(|| false);
    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };
    let panel = answer_id(props.position);

    html! {
        <div class={classes!("faq-item", (*expanded).then(|| "open"))}>
            <button
                class="faq-question"
                onclick={on_toggle}
                aria-expanded={(*expanded).to_string()}
                aria-controls={panel.clone()}
            >
                <span>{ props.entry.question }</span>
                <span class="faq-icon" aria-hidden="true">{"+"}</span>
            </button>
            <div id={panel} class="faq-answer" hidden={!*expanded}>
                <p>{ props.entry.answer }</p>
            </div>
        </div>
    }
}

#[function_component(FaqList)]
pub fn faq_list() -> Html {
    html! {
        <section id={SectionId::Faq.anchor()} class="faq">
            <div class="faq-list">
                { for FAQS.iter().enumerate().map(|(position, entry)| html! {
                    <FaqItem {entry} {position} />
                }) }
            </div>

            <style>
                {r#"
                .faq {
                    padding: 4rem 2rem;
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .faq-question {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: var(--card);
                    color: var(--text);
                    font-size: 1rem;
                    text-align: left;
                    cursor: pointer;
                    transition: background-color 0.2s ease;
                }

                .faq-question:hover {
                    background: var(--surface-hover);
                }

                .faq-item.open .faq-question {
                    border-radius: 0.5rem 0.5rem 0 0;
                }

                .faq-icon {
                    font-size: 1.25rem;
                    color: var(--text-muted);
                    transition: transform 0.2s ease;
                }

                .faq-item.open .faq-icon {
                    transform: rotate(45deg);
                }

                .faq-answer {
                    padding: 1rem;
                    border-top: 1px solid var(--header-border);
                    border-radius: 0 0 0.5rem 0.5rem;
                    background: var(--card);
                    color: var(--text-muted);
                    line-height: 1.6;
                }

                .faq-answer p {
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_panels_get_distinct_ids() {
        let ids: Vec<_> = (0..FAQS.len()).map(answer_id).collect();
        assert_eq!(ids[0], "faq-answer-0");
        let mut unique = ids.clone();
        unique.dedup();
        assert_eq!(unique.len(), FAQS.len());
    }
}
