use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{CONTACT_EMAIL, FOUNDED_YEAR, LOGO_URL};
use crate::state::sections::SectionId;
use crate::Route;

pub fn copyright_line(founded: i32, current: i32) -> String {
    if current > founded {
        format!("© {}–{}", founded, current)
    } else {
        format!("© {}", founded)
    }
}

pub fn contact_href(subject: &str) -> String {
    format!("mailto:{}?subject={}", CONTACT_EMAIL, urlencoding::encode(subject))
}

fn anchor_link(label: &'static str, section: SectionId) -> Html {
    html! {
        <li><a href={section.href()}>{ label }</a></li>
    }
}

fn mail_link(label: &'static str, subject: &str) -> Html {
    html! {
        <li><a href={contact_href(subject)}>{ label }</a></li>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer id={SectionId::Contact.anchor()} class="site-footer">
            <div class="footer-top">
                <img src={LOGO_URL} alt="Meiyo Logo" width="48" height="48" class="footer-logo" />

                <div class="footer-groups">
                    <div>
                        <h4>{"Platform"}</h4>
                        <ul>
                            { anchor_link("Overview", SectionId::Platform) }
                            { anchor_link("Demo", SectionId::Works) }
                            { anchor_link("Pricing", SectionId::Pricing) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Guide"}</h4>
                        <ul>
                            { anchor_link("How It Works", SectionId::Platform) }
                            { anchor_link("FAQs", SectionId::Faq) }
                            { mail_link("Support", "Support request") }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Meiyo"}</h4>
                        <ul>
                            <li>
                                <Link<Route> to={Route::Philosophy}>{"Our Philosophy"}</Link<Route>>
                            </li>
                            { anchor_link("Team", SectionId::Testimonials) }
                            { mail_link("Contact", "Project inquiry") }
                        </ul>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{ copyright_line(FOUNDED_YEAR, year) }</p>
                <p>{"All Rights Reserved"}</p>
            </div>

            <style>
                {r#"
                .site-footer {
                    padding: 4rem 2rem;
                    border-top: 1px solid var(--header-border);
                }

                .footer-top {
                    display: flex;
                    justify-content: space-between;
                    gap: 3rem;
                }

                .footer-logo {
                    object-fit: contain;
                }

                .footer-groups {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 4rem;
                }

                .footer-groups h4 {
                    margin: 0 0 1rem;
                    font-weight: 500;
                    color: var(--text);
                }

                .footer-groups ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .footer-groups a {
                    color: var(--text-muted);
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .footer-groups a:hover {
                    color: var(--text);
                }

                .footer-bottom {
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid var(--header-border);
                    color: var(--text-muted);
                    font-size: 0.875rem;
                }

                .footer-bottom p {
                    margin: 0;
                }

                @media (max-width: 1024px) {
                    .footer-top {
                        flex-direction: column;
                    }

                    .footer-groups {
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_spans_founding_to_current_year() {
        assert_eq!(copyright_line(2023, 2025), "© 2023–2025");
        assert_eq!(copyright_line(2023, 2023), "© 2023");
        // A wrong client clock never produces a backwards range.
        assert_eq!(copyright_line(2023, 2019), "© 2023");
    }

    #[test]
    fn contact_subject_is_percent_encoded() {
        assert_eq!(
            contact_href("Project inquiry"),
            "mailto:hello@meiyo.online?subject=Project%20inquiry"
        );
    }
}
