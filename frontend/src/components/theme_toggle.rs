use yew::prelude::*;

use crate::components::theme_provider::use_theme;

fn sun_icon() -> Html {
    html! {
        <svg class="theme-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <circle cx="12" cy="12" r="4" />
            <path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" />
        </svg>
    }
}

fn moon_icon() -> Html {
    html! {
        <svg class="theme-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" />
        </svg>
    }
}

const TOGGLE_STYLES: &str = r#"
    .theme-toggle {
        width: 2rem;
        height: 2rem;
        padding: 0;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        border: none;
        border-radius: 9999px;
        background: transparent;
        color: var(--text-muted);
        cursor: pointer;
        transition: background-color 0.2s ease;
    }

    .theme-toggle:hover:not(:disabled) {
        background: var(--surface-hover);
    }

    .theme-toggle:disabled {
        cursor: default;
    }

    .theme-icon {
        width: 1rem;
        height: 1rem;
    }
"#;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();

    let button = match theme.resolved() {
        // Placeholder until the preference is known, so the first paint
        // never shows the wrong icon.
        None => html! {
            <button class="theme-toggle" disabled=true aria-hidden="true">
                { sun_icon() }
            </button>
        },
        Some(resolved) => {
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                theme.toggle();
            });
            html! {
                <button class="theme-toggle" {onclick}>
                    { if resolved.is_dark() { sun_icon() } else { moon_icon() } }
                    <span class="sr-only">{"Toggle theme"}</span>
                </button>
            }
        }
    };

    html! {
        <>
            { button }
            <style>{ TOGGLE_STYLES }</style>
        </>
    }
}
