use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod browser;
mod content;
mod state {
    pub mod sections;
    pub mod preloader;
    pub mod carousel;
    pub mod theme;
}
mod components {
    pub mod theme_provider;
    pub mod theme_toggle;
    pub mod preloader;
    pub mod nav;
    pub mod reviews;
    pub mod faq;
    pub mod hero_video;
    pub mod booking;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod philosophy;
}

use components::theme_provider::ThemeProvider;
use pages::{
    home::Home,
    philosophy::Philosophy,
};

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/philosophy")]
    Philosophy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Philosophy => {
            info!("Rendering Philosophy page");
            html! { <Philosophy /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        },
    }
}

const GLOBAL_STYLES: &str = r#"
:root {
    --bg: #ffffff;
    --text: #111827;
    --text-muted: #4b5563;
    --card: #f3f4f6;
    --surface-hover: #e5e7eb;
    --surface-active: #d1d5db;
    --header-bg: rgba(255, 255, 255, 0.8);
    --header-border: rgba(229, 231, 235, 0.5);
    --header-shadow: rgba(0, 0, 0, 0.05);
}

html.dark {
    --bg: #000000;
    --text: #ffffff;
    --text-muted: #9ca3af;
    --card: #111827;
    --surface-hover: #1f2937;
    --surface-active: #374151;
    --header-bg: rgba(0, 0, 0, 0.8);
    --header-border: rgba(31, 41, 55, 0.5);
    --header-shadow: rgba(0, 0, 0, 0.4);
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: "Inter", system-ui, -apple-system, sans-serif;
    transition: background-color 0.3s ease, color 0.3s ease;
}

.section-title {
    font-size: 2.25rem;
    font-weight: 700;
    margin: 0 0 1rem;
    color: var(--text);
}

.section-subtitle {
    font-size: 1.125rem;
    margin: 0 0 4rem;
    color: var(--text-muted);
}

.pill-button {
    display: inline-block;
    padding: 0.75rem 2rem;
    border-radius: 9999px;
    font-weight: 500;
    text-decoration: none;
    text-align: center;
    transition: background-color 0.2s ease, color 0.2s ease;
}

.pill-button.solid {
    background: var(--text);
    color: var(--bg);
}

.pill-button.solid:hover {
    opacity: 0.85;
}

.pill-button.ghost {
    background: transparent;
    color: var(--text);
    border: 1px solid var(--header-border);
}

.pill-button.ghost:hover {
    background: var(--surface-hover);
}

.pill-button.wide {
    display: block;
    width: 100%;
    box-sizing: border-box;
}

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    padding: 0;
    margin: -1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
    border: 0;
}
"#;

#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <style>{ GLOBAL_STYLES }</style>
        </ThemeProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
