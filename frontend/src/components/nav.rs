use std::rc::Rc;

use log::debug;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::browser;
use crate::config::LOGO_URL;
use crate::state::sections::{active_section, SectionId, TRACKED_SECTIONS};

/// Section currently under the floating header, recomputed on every scroll
/// and resize and once at mount.
#[hook]
pub fn use_active_section(sections: &'static [SectionId]) -> Option<SectionId> {
    let active = use_state_eq(|| None::<SectionId>);

    let recompute = {
        let active = active.clone();
        Rc::new(move || {
            let scroll_y = match browser::scroll_y() {
                Ok(y) => y,
                Err(e) => {
                    debug!("Section tracking unavailable: {}", e);
                    return;
                }
            };
            let next = active_section(scroll_y, browser::measure_sections(sections));
            if *active != next {
                debug!("Active section -> {:?}", next.map(SectionId::anchor));
            }
            active.set(next);
        })
    };

    {
        let recompute = recompute.clone();
        use_event_with_window("scroll", move |_: Event| recompute());
    }
    {
        let recompute = recompute.clone();
        use_event_with_window("resize", move |_: Event| recompute());
    }
    use_effect_with_deps(
        move |_| {
            recompute();
            || ()
        },
        (),
    );

    *active
}

fn external_icon() -> Html {
    html! {
        <svg class="book-call-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionNavProps {
    pub active: Option<SectionId>,
}

#[function_component(SectionNav)]
pub fn section_nav(props: &SectionNavProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Links are plain anchors, so the click must still navigate.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <header class="floating-header">
            <a href="#top" class="nav-logo">
                <img src={LOGO_URL} alt="Meiyo Logo" width="32" height="32" />
            </a>

            <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                <span></span>
                <span></span>
                <span></span>
            </button>

            <nav class={classes!("nav-links", (*menu_open).then(|| "mobile-menu-open"))}>
                { for TRACKED_SECTIONS.iter().map(|section| {
                    let is_active = props.active == Some(*section);
                    html! {
                        <a
                            href={section.href()}
                            class={classes!("nav-link", is_active.then(|| "active"))}
                            onclick={close_menu.clone()}
                        >
                            { section.label() }
                        </a>
                    }
                }) }
            </nav>

            <a href={SectionId::Booking.href()} class="book-call" onclick={close_menu}>
                {"Book a call"}
                { external_icon() }
            </a>

            <style>
                {r#"
                .floating-header {
                    position: fixed;
                    top: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 0.5rem 2rem;
                    border-radius: 9999px;
                    border: 1px solid var(--header-border);
                    background: var(--header-bg);
                    backdrop-filter: blur(24px);
                    box-shadow: 0 10px 15px -3px var(--header-shadow);
                    max-width: 72rem;
                }

                .nav-logo img {
                    display: block;
                    object-fit: contain;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin: 0 0.75rem;
                }

                .nav-link {
                    font-size: 0.75rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    color: var(--text-muted);
                    text-decoration: none;
                    transition: color 0.2s ease, background-color 0.2s ease;
                }

                .nav-link:hover {
                    color: var(--text);
                    background: var(--surface-hover);
                }

                .nav-link.active {
                    color: var(--text);
                    background: var(--surface-active);
                }

                .book-call {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.25rem;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                    border-radius: 9999px;
                    background: var(--text);
                    color: var(--bg);
                    text-decoration: none;
                }

                .book-call-icon {
                    width: 0.75rem;
                    height: 0.75rem;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.25rem;
                }

                .burger-menu span {
                    display: block;
                    width: 18px;
                    height: 2px;
                    background: var(--text);
                }

                @media (max-width: 768px) {
                    .floating-header {
                        padding: 0.5rem 1rem;
                        width: calc(100vw - 2rem);
                    }

                    .burger-menu {
                        display: flex;
                        order: 3;
                    }

                    .nav-links {
                        display: none;
                    }

                    .nav-links.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: calc(100% + 0.5rem);
                        left: 0;
                        right: 0;
                        margin: 0;
                        padding: 1rem;
                        border-radius: 1rem;
                        background: var(--bg);
                        border: 1px solid var(--header-border);
                    }
                }
                "#}
            </style>
        </header>
    }
}
