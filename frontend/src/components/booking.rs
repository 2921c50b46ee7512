use log::{info, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Function, Reflect};
use yew::prelude::*;

use crate::browser::DomError;
use crate::config::{BOOKING_CAL_LINK, BOOKING_LAYOUT, BOOKING_NAMESPACE, BOOKING_ORIGIN};
use crate::state::sections::SectionId;

const EMBED_ELEMENT_ID: &str = "booking-embed";
const CAL_GLOBAL: &str = "Cal";

// Loaded by the embed snippet in index.html.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = window, js_name = Cal)]
    fn cal(action: &str, namespace: &str, options: JsValue) -> Result<(), JsValue>;
}

#[derive(Serialize)]
struct InitOptions<'a> {
    origin: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineOptions<'a> {
    element_or_selector: String,
    cal_link: &'a str,
    layout: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UiOptions<'a> {
    hide_event_type_details: bool,
    layout: &'a str,
}

/// `Cal.ns[namespace]`, the per-namespace command function set up by `init`.
fn namespaced_command(namespace: &str) -> Result<Function, DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let cal = Reflect::get(&window, &JsValue::from_str(CAL_GLOBAL))?;
    let ns = Reflect::get(&cal, &JsValue::from_str("ns"))?;
    let command = Reflect::get(&ns, &JsValue::from_str(namespace))?;
    Ok(command.dyn_into::<Function>()?)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, DomError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| DomError::Js(e.to_string()))
}

fn embed_is_loaded() -> bool {
    web_sys::window()
        .and_then(|w| Reflect::has(&w, &JsValue::from_str(CAL_GLOBAL)).ok())
        .unwrap_or(false)
}

fn mount_calendar() -> Result<(), DomError> {
    if !embed_is_loaded() {
        return Err(DomError::MissingGlobal(CAL_GLOBAL));
    }
    cal("init", BOOKING_NAMESPACE, to_js(&InitOptions { origin: BOOKING_ORIGIN })?)?;

    let command = namespaced_command(BOOKING_NAMESPACE)?;
    command.call2(
        &JsValue::NULL,
        &JsValue::from_str("inline"),
        &to_js(&InlineOptions {
            element_or_selector: format!("#{}", EMBED_ELEMENT_ID),
            cal_link: BOOKING_CAL_LINK,
            layout: BOOKING_LAYOUT,
        })?,
    )?;
    command.call2(
        &JsValue::NULL,
        &JsValue::from_str("ui"),
        &to_js(&UiOptions {
            hide_event_type_details: false,
            layout: BOOKING_LAYOUT,
        })?,
    )?;
    Ok(())
}

#[function_component(Booking)]
pub fn booking() -> Html {
    let embedded = use_state(|| true);

    {
        let embedded = embedded.clone();
        use_effect_with_deps(
            move |_| {
                match mount_calendar() {
                    Ok(()) => info!("Booking calendar mounted ({})", BOOKING_CAL_LINK),
                    Err(e) => {
                        warn!("Booking calendar unavailable: {}", e);
                        embedded.set(false);
                    }
                }
                || ()
            },
            (),
        );
    }

    let fallback_href = format!("{}/{}", BOOKING_ORIGIN, BOOKING_CAL_LINK);

    html! {
        <section id={SectionId::Booking.anchor()} class="booking">
            <h2 class="section-title">{"Book a call"}</h2>
            <p class="section-subtitle">{"A quiet conversation, at your pace."}</p>
            if *embedded {
                <div id={EMBED_ELEMENT_ID} class="booking-embed"></div>
            } else {
                <a href={fallback_href} target="_blank" rel="noopener noreferrer" class="pill-button solid">
                    {"Choose a time"}
                </a>
            }
            <style>
                {r#"
                .booking {
                    padding: 5rem 2rem;
                    text-align: center;
                }

                .booking-embed {
                    width: 100%;
                    min-height: 40rem;
                    overflow: auto;
                    border-radius: 1rem;
                    background: var(--card);
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    #[wasm_bindgen_test]
    fn page_without_the_embed_script_reports_the_missing_global() {
        assert!(!embed_is_loaded());
        match mount_calendar() {
            Err(DomError::MissingGlobal(name)) => assert_eq!(name, "Cal"),
            other => panic!("expected missing global, got {:?}", other),
        }
    }
}
