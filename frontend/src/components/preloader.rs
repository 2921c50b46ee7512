use std::sync::atomic::{AtomicBool, Ordering};

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::browser;
use crate::components::theme_provider::use_theme;
use crate::config::{LOGO_URL, PRELOADER_CURTAIN_MS, PRELOADER_FADE_MS, PRELOADER_SPIN_MS};
use crate::state::preloader::{initial_phase, PreloaderPhase, PreloaderTimeline};

/// Set the first time the intro is considered during this page load, so
/// routing back to Home client-side doesn't replay it.
static INTRO_CONSIDERED: AtomicBool = AtomicBool::new(false);

fn skip_intro() -> bool {
    let seen_before = INTRO_CONSIDERED.swap(true, Ordering::Relaxed);
    seen_before || browser::came_from_internal()
}

/// Arms the timeout that ends `phase`. Dropping the returned handle cancels
/// it; terminal phases arm nothing.
pub fn schedule_step<F>(timeline: &PreloaderTimeline, phase: PreloaderPhase, advance: F) -> Option<Timeout>
where
    F: FnOnce(PreloaderPhase) + 'static,
{
    timeline
        .step(phase)
        .map(|(ms, next)| Timeout::new(ms, move || advance(next)))
}

#[function_component(Preloader)]
pub fn preloader() -> Html {
    let phase = use_state(|| initial_phase(skip_intro()));
    let theme = use_theme();

    // One pending timeout at a time. Dropping the handle (phase change or
    // unmount) cancels it, so nothing fires against a discarded view.
    {
        let phase_setter = phase.setter();
        use_effect_with_deps(
            move |phase| {
                let current = *phase;
                debug!("Preloader phase {:?}", current);
                let pending = schedule_step(&PreloaderTimeline::default(), current, move |next| {
                    phase_setter.set(next)
                });
                move || drop(pending)
            },
            *phase,
        );
    }

    if *phase == PreloaderPhase::Dismissed {
        return html! {};
    }

    let inverse = theme.resolved().map(|t| t.is_dark()).unwrap_or(false);
    let logo_class = classes!(
        "preloader-logo",
        (*phase != PreloaderPhase::Spinning).then(|| "logo-fade"),
    );
    let curtain_class = classes!(
        "preloader-curtain",
        inverse.then(|| "inverse"),
        (*phase == PreloaderPhase::CurtainRising).then(|| "curtain-up"),
    );

    html! {
        <div class="preloader" aria-hidden="true">
            <div class={curtain_class} style={format!("--curtain-ms: {}ms;", PRELOADER_CURTAIN_MS)}>
                <div class="preloader-center">
                    <div class={logo_class} style={format!("--fade-ms: {}ms;", PRELOADER_FADE_MS)}>
                        <div class="preloader-spin" style={format!("--spin-ms: {}ms;", PRELOADER_SPIN_MS)}>
                            <img src={LOGO_URL} alt="Meiyo Logo" />
                        </div>
                        <div class="preloader-pin"></div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .preloader {
                    position: fixed;
                    inset: 0;
                    z-index: 9999;
                    overflow: hidden;
                }

                .preloader-curtain {
                    position: absolute;
                    inset: 0;
                    background: #000;
                    transform-origin: bottom;
                }

                .preloader-curtain.inverse {
                    background: #fff;
                }

                .preloader-curtain.curtain-up {
                    animation: curtain-lift var(--curtain-ms) ease-in-out forwards;
                }

                .preloader-center {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .preloader-logo {
                    position: relative;
                }

                .preloader-logo.logo-fade {
                    animation: logo-fade-out var(--fade-ms) ease-out forwards;
                }

                .preloader-spin {
                    width: 10rem;
                    height: 10rem;
                    animation: logo-spin var(--spin-ms) linear forwards;
                }

                .preloader-spin img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }

                .preloader-pin {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 1.25rem;
                    height: 1.25rem;
                    border-radius: 50%;
                    transform: translate(-50%, -50%);
                    background: #fff;
                    border: 2px solid #e5e7eb;
                }

                .preloader-curtain.inverse .preloader-pin {
                    background: #000;
                    border-color: #1f2937;
                }

                @keyframes logo-spin {
                    from { transform: rotate(0deg); }
                    to { transform: rotate(360deg); }
                }

                @keyframes logo-fade-out {
                    from { opacity: 1; transform: scale(1); }
                    to { opacity: 0; transform: scale(0.9); }
                }

                @keyframes curtain-lift {
                    from { transform: translateY(0%); }
                    to { transform: translateY(-100%); }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    fn recorder() -> (Rc<Cell<Option<PreloaderPhase>>>, impl FnOnce(PreloaderPhase) + 'static) {
        let seen = Rc::new(Cell::new(None));
        let sink = seen.clone();
        (seen, move |phase| sink.set(Some(phase)))
    }

    #[wasm_bindgen_test]
    async fn armed_step_advances_after_its_duration() {
        let timeline = PreloaderTimeline::new(40, 10, 10);
        let (seen, advance) = recorder();
        let _pending = schedule_step(&timeline, PreloaderPhase::Spinning, advance);

        TimeoutFuture::new(10).await;
        assert_eq!(seen.get(), None);
        TimeoutFuture::new(100).await;
        assert_eq!(seen.get(), Some(PreloaderPhase::Fading));
    }

    #[wasm_bindgen_test]
    async fn dropping_the_handle_cancels_the_step() {
        let timeline = PreloaderTimeline::new(20, 10, 10);
        let (seen, advance) = recorder();
        let pending = schedule_step(&timeline, PreloaderPhase::Spinning, advance);
        assert!(pending.is_some());
        drop(pending);

        TimeoutFuture::new(80).await;
        assert_eq!(seen.get(), None);
    }

    #[wasm_bindgen_test]
    fn dismissed_arms_no_timer() {
        let (_, advance) = recorder();
        assert!(schedule_step(&PreloaderTimeline::default(), PreloaderPhase::Dismissed, advance).is_none());
    }
}
