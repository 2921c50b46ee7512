use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config::CAROUSEL_INTERVAL_MS;
use crate::content::TESTIMONIALS;
use crate::state::carousel::{CarouselAction, CarouselState};
use crate::state::sections::SectionId;

fn star() -> Html {
    html! {
        <svg class="review-star" fill="currentColor" viewBox="0 0 20 20">
            <path d="M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z" />
        </svg>
    }
}

fn chevron(points: &'static str) -> Html {
    html! {
        <svg class="review-chevron" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24">
            <polyline points={points} />
        </svg>
    }
}

/// Starts a new interval when `active`. The first tick always lands a full
/// `period_ms` after the call; dropping the handle stops it.
pub fn autoplay<F>(active: bool, period_ms: u32, on_tick: F) -> Option<Interval>
where
    F: Fn() + 'static,
{
    active.then(|| Interval::new(period_ms, on_tick))
}

#[function_component(Reviews)]
pub fn reviews() -> Html {
    let carousel = use_reducer(|| CarouselState::new(TESTIMONIALS.len()));

    // A fresh interval every time autoplay (re)starts; dropping the old one
    // on hover means no tick carries over the pause.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |autoplaying| {
                let interval = autoplay(*autoplaying, CAROUSEL_INTERVAL_MS, move || {
                    dispatcher.dispatch(CarouselAction::Tick)
                });
                move || drop(interval)
            },
            carousel.is_autoplaying(),
        );
    }

    let dispatch = |action: fn() -> CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(action()))
    };
    let on_previous = dispatch(|| CarouselAction::Previous);
    let on_next = dispatch(|| CarouselAction::Next);
    let on_enter = dispatch(|| CarouselAction::HoverEnter);
    let on_leave = dispatch(|| CarouselAction::HoverLeave);

    let Some(current) = TESTIMONIALS.get(carousel.index) else {
        debug!("No testimonial at index {}", carousel.index);
        return html! {};
    };

    html! {
        <section id={SectionId::Testimonials.anchor()} class="reviews">
            <h2 class="section-title">{"Client Reflections"}</h2>
            <p class="section-subtitle">{"Voices of trust, stories of honor."}</p>

            <div class="reviews-inner">
                // Everything about one entry renders from `current`, keyed
                // by index so the card swaps as a whole.
                <div class="review-slot">
                <div
                    key={carousel.index.to_string()}
                    class="review-card"
                    onmouseenter={on_enter}
                    onmouseleave={on_leave}
                >
                    <div class="review-stars">
                        { for (0..current.rating).map(|_| star()) }
                    </div>
                    <blockquote class="review-quote">
                        { format!("\u{201c}{}\u{201d}", current.quote) }
                    </blockquote>
                    <div class="review-author">
                        <div class="review-avatar">{ current.initials() }</div>
                        <h4>{ current.name }</h4>
                        <p>{ current.byline() }</p>
                    </div>
                </div>
                </div>

                <div class="review-controls">
                    <button class="review-arrow" onclick={on_previous} aria-label="Previous testimonial">
                        { chevron("15 18 9 12 15 6") }
                    </button>

                    <div class="review-dots">
                        { for (0..TESTIMONIALS.len()).map(|i| {
                            let is_current = i == carousel.index;
                            let onclick = {
                                let carousel = carousel.clone();
                                Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::JumpTo(i)))
                            };
                            html! {
                                <button
                                    class={classes!("review-dot", is_current.then(|| "current"))}
                                    {onclick}
                                    aria-label={format!("Show testimonial {}", i + 1)}
                                >
                                    if is_current && carousel.is_autoplaying() {
                                        <span
                                            class="review-progress"
                                            style={format!("animation-duration: {}ms;", CAROUSEL_INTERVAL_MS)}
                                        />
                                    }
                                </button>
                            }
                        }) }
                    </div>

                    <button class="review-arrow" onclick={on_next} aria-label="Next testimonial">
                        { chevron("9 18 15 12 9 6") }
                    </button>
                </div>

                <div class="review-cta">
                    <p>{"Join these visionaries who chose to honor their ideas with mindful craftsmanship."}</p>
                    <a href={SectionId::Booking.href()} class="pill-button solid">{"Begin your journey"}</a>
                </div>
            </div>

            <style>
                {r#"
                .reviews {
                    padding: 5rem 2rem;
                    text-align: center;
                }

                .reviews-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .review-card {
                    position: relative;
                    padding: 3rem;
                    border-radius: 1rem;
                    background: var(--card);
                    overflow: hidden;
                    animation: review-in 0.5s ease-out;
                }

                .review-stars {
                    display: flex;
                    justify-content: center;
                    margin-bottom: 2rem;
                }

                .review-star {
                    width: 1.5rem;
                    height: 1.5rem;
                    color: #facc15;
                }

                .review-quote {
                    font-size: 1.25rem;
                    line-height: 1.75;
                    font-style: italic;
                    color: var(--text-muted);
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                }

                .review-avatar {
                    width: 3rem;
                    height: 3rem;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 600;
                    background: var(--surface-active);
                    color: var(--text-muted);
                }

                .review-author h4 {
                    margin: 0 0 0.25rem;
                    font-size: 1.125rem;
                    color: var(--text);
                }

                .review-author p {
                    margin: 0;
                    color: var(--text-muted);
                }

                .review-controls {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 2rem;
                }

                .review-arrow {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    border: 1px solid var(--header-border);
                    background: transparent;
                    color: var(--text-muted);
                    cursor: pointer;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    transition: transform 0.2s ease;
                }

                .review-arrow:hover {
                    transform: scale(1.1);
                    background: var(--surface-hover);
                }

                .review-chevron {
                    width: 1.25rem;
                    height: 1.25rem;
                }

                .review-dots {
                    display: flex;
                    gap: 0.5rem;
                }

                .review-dot {
                    position: relative;
                    width: 0.5rem;
                    height: 0.5rem;
                    padding: 0;
                    border: none;
                    border-radius: 50%;
                    background: var(--surface-active);
                    cursor: pointer;
                    overflow: hidden;
                }

                .review-dot.current {
                    background: var(--text);
                }

                .review-progress {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    background: var(--bg);
                    opacity: 0.3;
                    animation-name: review-progress;
                    animation-timing-function: linear;
                }

                .review-cta {
                    margin-top: 4rem;
                }

                .review-cta p {
                    max-width: 42rem;
                    margin: 0 auto 1.5rem;
                    color: var(--text-muted);
                    line-height: 1.6;
                }

                @keyframes review-in {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes review-progress {
                    from { transform: scale(0); }
                    to { transform: scale(1); }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let ticks = Rc::new(Cell::new(0));
        let sink = ticks.clone();
        (ticks, move || sink.set(sink.get() + 1))
    }

    #[wasm_bindgen_test]
    fn paused_carousel_runs_no_interval() {
        let (_, on_tick) = counter();
        assert!(autoplay(false, 50, on_tick).is_none());
    }

    #[wasm_bindgen_test]
    async fn resuming_waits_a_full_period_before_the_next_tick() {
        let (ticks, on_tick) = counter();
        let running = autoplay(true, 100, on_tick);

        // Pointer arrives most of the way through the period.
        TimeoutFuture::new(70).await;
        drop(running);
        assert_eq!(ticks.get(), 0);

        TimeoutFuture::new(100).await;
        assert_eq!(ticks.get(), 0);

        // Pointer leaves: nothing carried over from before the pause.
        let (ticks, on_tick) = counter();
        let _resumed = autoplay(true, 100, on_tick);
        TimeoutFuture::new(50).await;
        assert_eq!(ticks.get(), 0);
        TimeoutFuture::new(120).await;
        assert!(ticks.get() >= 1);
    }
}
