use yew::prelude::*;

use crate::components::booking::Booking;
use crate::components::faq::FaqList;
use crate::components::footer::Footer;
use crate::components::hero_video::HeroVideo;
use crate::components::nav::{use_active_section, SectionNav};
use crate::components::preloader::Preloader;
use crate::components::reviews::Reviews;
use crate::components::theme_toggle::ThemeToggle;
use crate::content::{ProseBlock, PricingTier, PLATFORM_BLOCKS, PRICING_TIERS, WORKS_INTRO, WORKS_TILES};
use crate::state::sections::{SectionId, TRACKED_SECTIONS};

pub fn prose_block(block: &ProseBlock) -> Html {
    html! {
        <>
            <h2 class="prose-heading">{ block.heading }</h2>
            <div class="prose-body">
                { for block.paragraphs.iter().map(|p| html! { <p>{ *p }</p> }) }
            </div>
        </>
    }
}

fn pricing_card(tier: &PricingTier) -> Html {
    html! {
        <div class="pricing-card">
            <h3>{ tier.name }</h3>
            <div class="pricing-amount">{ tier.price }</div>
            <ul>
                { for tier.features.iter().map(|feature| html! {
                    <li>
                        <span class="pricing-check">{"✓"}</span>
                        <span>{ *feature }</span>
                    </li>
                }) }
            </ul>
            <a
                href={SectionId::Booking.href()}
                class={classes!("pill-button", "wide", if tier.featured { "solid" } else { "ghost" })}
            >
                { tier.cta }
            </a>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let active = use_active_section(&TRACKED_SECTIONS);

    html! {
        <>
            <Preloader />

            <div class="fixed-theme-toggle">
                <ThemeToggle />
            </div>

            <div class="home">
                <SectionNav {active} />

                <div class="container">
                    <section id="top" class="hero">
                        <h1 class="hero-title">
                            {"meiyo"}<span class="hero-dot"></span>
                        </h1>
                        <p class="hero-tagline">{"Honor. Prestige. Your ideas respected."}</p>
                        <HeroVideo />
                    </section>

                    <section id={SectionId::Platform.anchor()} class="prose-section">
                        { for PLATFORM_BLOCKS.iter().map(prose_block) }
                    </section>

                    <section id={SectionId::Works.anchor()} class="prose-section">
                        <h2 class="prose-heading">{"Personal Works"}</h2>
                        <p class="prose-body">{ WORKS_INTRO }</p>
                        <div class="works-grid">
                            { for (0..WORKS_TILES).map(|_| html! { <div class="works-tile"></div> }) }
                        </div>
                    </section>

                    <Reviews />

                    <section id={SectionId::Pricing.anchor()} class="pricing">
                        <h2 class="section-title">{"Pricing"}</h2>
                        <p class="section-subtitle">{"Transparent as water, serene as stone."}</p>
                        <div class="pricing-grid">
                            { for PRICING_TIERS.iter().map(pricing_card) }
                        </div>
                    </section>

                    <Booking />

                    <FaqList />

                    <Footer />
                </div>
            </div>

            <style>
                {r#"
                .fixed-theme-toggle {
                    position: fixed;
                    top: 1.5rem;
                    right: 1.5rem;
                    z-index: 50;
                    transform: scale(1.25);
                }

                .home {
                    min-height: 100vh;
                }

                .container {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding-top: 5rem;
                }

                .hero {
                    padding: 4rem 2rem;
                }

                .hero-title {
                    font-size: 40px;
                    font-weight: 700;
                    line-height: 1.2;
                    margin: 0 0 0.5rem;
                    color: var(--text);
                }

                .hero-dot {
                    display: inline-block;
                    width: 0.5rem;
                    height: 0.5rem;
                    margin-left: 0.25rem;
                    border-radius: 50%;
                    background: var(--text);
                }

                .hero-tagline {
                    font-size: 38px;
                    font-weight: 700;
                    line-height: 1.2;
                    margin: 0;
                    color: var(--text-muted);
                }

                .prose-section {
                    padding: 4rem 2rem;
                }

                .prose-heading {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 2rem;
                    color: var(--text);
                }

                .prose-heading:not(:first-child) {
                    margin-top: 4rem;
                }

                .prose-body {
                    max-width: 42rem;
                    line-height: 1.7;
                    color: var(--text-muted);
                }

                .works-grid {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 1.5rem;
                    margin-top: 3rem;
                }

                .works-tile {
                    aspect-ratio: 16 / 9;
                    border-radius: 0.5rem;
                    background: var(--card);
                    cursor: pointer;
                    transition: background-color 0.2s ease;
                }

                .works-tile:hover {
                    background: var(--surface-hover);
                }

                .pricing {
                    padding: 5rem 2rem;
                    text-align: center;
                }

                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 2rem;
                }

                .pricing-card {
                    display: flex;
                    flex-direction: column;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: var(--card);
                }

                .pricing-card h3 {
                    margin: 0 0 1.5rem;
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: var(--text-muted);
                }

                .pricing-amount {
                    font-size: 3rem;
                    font-weight: 700;
                    margin-bottom: 2rem;
                    color: var(--text);
                }

                .pricing-card ul {
                    list-style: none;
                    margin: 0 0 3rem;
                    padding: 0;
                    text-align: left;
                    flex: 1;
                }

                .pricing-card li {
                    display: flex;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                    line-height: 1.6;
                    color: var(--text-muted);
                }

                .pricing-check {
                    color: #22c55e;
                    font-size: 1.125rem;
                }

                @media (max-width: 1024px) {
                    .pricing-grid {
                        grid-template-columns: 1fr;
                    }
                }

                @media (max-width: 768px) {
                    .works-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </>
    }
}
