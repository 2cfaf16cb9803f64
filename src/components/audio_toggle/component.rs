//! Leptos component binding the toggle button to an `<audio>` element.

use leptos::prelude::*;
use log::warn;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use super::playback::{ToggleAction, ToggleState};
use super::{AUDIO_ID, BUTTON_ID};
use crate::error::PlaybackError;

/// Ambient audio element plus the button that plays and pauses it.
///
/// The button carries the `playing` class only while playback is confirmed.
/// Rejected play attempts (autoplay policy, missing source) are logged and
/// otherwise ignored; the next click simply tries again.
#[component]
pub fn AudioToggle(#[prop(into)] src: String) -> impl IntoView {
	let audio_ref = NodeRef::<leptos::html::Audio>::new();
	let toggle = RwSignal::new(ToggleState::default());
	let playing = Memo::new(move |_| toggle.with(ToggleState::is_playing));

	let on_click = move |_| {
		let Some(audio) = audio_ref.get() else {
			return;
		};
		let audio: HtmlAudioElement = audio.into();
		match toggle.try_update(|t| t.click(audio.paused())) {
			Some(ToggleAction::Play(attempt)) => {
				let promise = match audio.play() {
					Ok(promise) => promise,
					Err(e) => {
						let err = PlaybackError::from(e);
						warn!("audio: {err}");
						toggle.update(|t| t.play_rejected(attempt));
						return;
					}
				};
				leptos::task::spawn_local(async move {
					match JsFuture::from(promise).await {
						Ok(_) => toggle.update(|t| t.play_resolved(attempt)),
						Err(e) => {
							let err = PlaybackError::from(e);
							warn!("audio: {err}");
							toggle.update(|t| t.play_rejected(attempt));
						}
					}
				});
			}
			Some(ToggleAction::Pause) => {
				let _ = audio.pause();
			}
			None => {}
		}
	};

	let on_pause = move |_| toggle.update(ToggleState::media_paused);

	view! {
		<audio
			node_ref=audio_ref
			id=AUDIO_ID
			src=src
			preload="auto"
			on:pause=on_pause
			on:ended=on_pause
		/>
		<button
			id=BUTTON_ID
			type="button"
			class="audio-btn"
			class:playing=move || playing.get()
			aria-label="Toggle ambient audio"
			aria-pressed=move || if playing.get() { "true" } else { "false" }
			on:click=on_click
		>
			<span class="audio-btn__icon" aria-hidden="true">
				"♪"
			</span>
		</button>
	}
}
