use log::{debug, warn};
use yew::prelude::*;

use crate::browser;
use crate::state::theme::{ResolvedTheme, ThemeAction, ThemePreference, ThemeState};

/// What consumers get to see of the theme: the resolved scheme (once known)
/// and a way to flip it. The raw light/dark/system preference stays inside
/// the provider.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    resolved: Option<ResolvedTheme>,
    toggle: Callback<()>,
}

impl ThemeContext {
    pub fn resolved(&self) -> Option<ResolvedTheme> {
        self.resolved
    }

    pub fn toggle(&self) {
        self.toggle.emit(());
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

fn persist(choice: Option<ThemePreference>) {
    if let Some(preference) = choice {
        if let Err(e) = browser::store_theme(preference) {
            warn!("Could not persist theme: {}", e);
        }
    }
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_reducer(ThemeState::default);

    // Read storage and the OS scheme once mounted, then keep following the OS.
    {
        let theme = theme.clone();
        use_effect_with_deps(
            move |_| {
                theme.dispatch(ThemeAction::Hydrate {
                    stored: browser::stored_theme(),
                    system: browser::system_theme(),
                });

                let dispatcher = theme.dispatcher();
                let listener = browser::watch_system_theme(move |scheme| {
                    dispatcher.dispatch(ThemeAction::SystemChanged(scheme));
                });
                if let Err(e) = &listener {
                    debug!("Not following OS colour scheme changes: {}", e);
                }

                move || drop(listener)
            },
            (),
        );
    }

    use_effect_with_deps(
        move |resolved| {
            if let Some(resolved) = *resolved {
                debug!("Theme resolved to {}", resolved.as_str());
                if let Err(e) = browser::apply_theme(resolved) {
                    warn!("Could not apply theme: {}", e);
                }
            }
            || ()
        },
        theme.resolved(),
    );

    use_effect_with_deps(
        move |choice| {
            persist(*choice);
            || ()
        },
        theme.choice_to_persist(),
    );

    let context = ThemeContext {
        resolved: theme.resolved(),
        toggle: {
            let theme = theme.clone();
            Callback::from(move |_| theme.dispatch(ThemeAction::Toggle))
        },
    };

    html! {
        <ContextProvider<ThemeContext> {context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

/// Outside a `ThemeProvider` the theme never resolves and toggling does nothing.
#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        resolved: None,
        toggle: Callback::from(|_| ()),
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::rc::Rc;

    use wasm_bindgen_test::*;
    use yew::Reducible;

    use super::*;
    use crate::config::THEME_STORAGE_KEY;

    fn clear_stored_theme() {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .expect("local storage");
        storage.remove_item(THEME_STORAGE_KEY).expect("remove theme");
    }

    #[wasm_bindgen_test]
    fn toggle_writes_the_new_choice_to_storage() {
        clear_stored_theme();

        let state = Rc::new(ThemeState::default()).reduce(ThemeAction::Hydrate {
            stored: browser::stored_theme(),
            system: ResolvedTheme::Light,
        });
        persist(state.choice_to_persist());
        assert_eq!(browser::stored_theme(), None);

        let state = state.reduce(ThemeAction::Toggle);
        persist(state.choice_to_persist());
        assert_eq!(browser::stored_theme(), Some(ThemePreference::Dark));

        let state = state.reduce(ThemeAction::Toggle);
        persist(state.choice_to_persist());
        assert_eq!(browser::stored_theme(), Some(ThemePreference::Light));

        clear_stored_theme();
    }
}
