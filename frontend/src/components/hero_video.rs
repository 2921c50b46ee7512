use log::debug;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::config::{HERO_POSTER_URL, HERO_VIDEO_URL};

/// Browsers may refuse to start playback (data saver, autoplay policy); that
/// just leaves the poster frame, so it is only logged.
fn play(video: &HtmlVideoElement) {
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                debug!("Hero video playback refused: {:?}", e);
            }
        }),
        Err(e) => debug!("Hero video playback failed: {:?}", e),
    }
}

#[function_component(HeroVideo)]
pub fn hero_video() -> Html {
    let video_ref = use_node_ref();
    let muted = use_state(|| true);

    // The `muted` attribute only sets the default; autoplay policies look at
    // the property.
    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    video.set_muted(true);
                    play(&video);
                }
                || ()
            },
            (),
        );
    }

    let toggle_mute = {
        let video_ref = video_ref.clone();
        let muted = muted.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                let next = !*muted;
                video.set_muted(next);
                muted.set(next);
            }
        })
    };

    let restart = {
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                video.set_current_time(0.0);
                play(&video);
            }
        })
    };

    html! {
        <div class="hero-media">
            <video
                ref={video_ref}
                class="hero-video"
                src={HERO_VIDEO_URL}
                poster={HERO_POSTER_URL}
                autoplay=true
                muted=true
                loop=true
                playsinline=true
            />
            <div class="hero-video-controls">
                <button class="video-control" onclick={toggle_mute}>
                    { if *muted { "Unmute" } else { "Mute" } }
                </button>
                <button class="video-control" onclick={restart}>
                    {"Restart"}
                </button>
            </div>
            <style>
                {r#"
                .hero-media {
                    position: relative;
                    margin-top: 4rem;
                    width: 100%;
                    height: 20rem;
                    border-radius: 0.5rem;
                    overflow: hidden;
                    background: var(--card);
                }

                .hero-video {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    display: block;
                }

                .hero-video-controls {
                    position: absolute;
                    right: 1rem;
                    bottom: 1rem;
                    display: flex;
                    gap: 0.5rem;
                }

                .video-control {
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(0, 0, 0, 0.55);
                    color: #fff;
                    backdrop-filter: blur(8px);
                    cursor: pointer;
                }

                .video-control:hover {
                    background: rgba(0, 0, 0, 0.75);
                }
                "#}
            </style>
        </div>
    }
}
