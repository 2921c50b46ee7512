use yew::prelude::*;
use yew_router::components::Link;

use crate::components::footer::Footer;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::LOGO_URL;
use crate::content::PHILOSOPHY_SECTIONS;
use crate::pages::home::prose_block;
use crate::Route;

#[function_component(Philosophy)]
pub fn philosophy() -> Html {
    // Arriving from the footer leaves the window scrolled to the bottom.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="philosophy-page">
            <header class="philosophy-header">
                <Link<Route> to={Route::Home} classes="back-link">
                    <svg class="back-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" />
                    </svg>
                    {"Back"}
                </Link<Route>>
                <img src={LOGO_URL} alt="Meiyo Logo" width="32" height="32" />
                <ThemeToggle />
            </header>

            <main class="philosophy-main">
                <h1 class="section-title">{"Our Philosophy"}</h1>
                <p class="section-subtitle">{"The principles that guide our craft"}</p>

                <div class="philosophy-sections">
                    { for PHILOSOPHY_SECTIONS.iter().map(|block| html! {
                        <section class="philosophy-block">{ prose_block(block) }</section>
                    }) }
                </div>

                <div class="philosophy-cta">
                    <Link<Route> to={Route::Home} classes="pill-button solid">
                        {"Back to Home"}
                    </Link<Route>>
                </div>
            </main>

            <Footer />

            <style>
                {r#"
                .philosophy-page {
                    min-height: 100vh;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .philosophy-header {
                    position: sticky;
                    top: 0;
                    z-index: 40;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.5rem 2rem;
                    background: var(--bg);
                    border-bottom: 1px solid var(--header-border);
                }

                .back-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: var(--text-muted);
                    text-decoration: none;
                }

                .back-link:hover {
                    color: var(--text);
                }

                .back-icon {
                    width: 1.25rem;
                    height: 1.25rem;
                }

                .philosophy-main {
                    padding: 5rem 2rem;
                    text-align: center;
                }

                .philosophy-sections {
                    text-align: left;
                    margin-top: 4rem;
                }

                .philosophy-block {
                    margin-bottom: 4rem;
                }

                .philosophy-block .prose-heading {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin: 0 0 1.5rem;
                    color: var(--text);
                }

                .philosophy-block .prose-body {
                    line-height: 1.7;
                    color: var(--text-muted);
                }

                .philosophy-cta {
                    margin-top: 2rem;
                }
                "#}
            </style>
        </div>
    }
}
