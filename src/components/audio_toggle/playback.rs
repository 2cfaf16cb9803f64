//! Two-state playback toggle.
//!
//! The button shows the playing marker only once the media element has
//! confirmed that playback started. A play attempt is identified by a
//! counter so that a late answer for an attempt that was since superseded,
//! or overtaken by a pause, cannot resurrect the marker.

/// What the button should ask of the media element after a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
	/// Call `play()` and report the outcome for this attempt.
	Play(u32),
	/// Call `pause()`.
	Pause,
}

/// Displayed playback state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
	#[default]
	Paused,
	Playing,
}

/// Toggle state tracked alongside the media element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToggleState {
	state: PlaybackState,
	pending: Option<u32>,
	attempts: u32,
}

impl ToggleState {
	pub fn state(&self) -> PlaybackState {
		self.state
	}

	/// Whether the button should carry the `playing` class.
	pub fn is_playing(&self) -> bool {
		self.state == PlaybackState::Playing
	}

	/// Handle a click given the media element's own `paused` flag.
	pub fn click(&mut self, media_paused: bool) -> ToggleAction {
		if media_paused {
			self.attempts = self.attempts.wrapping_add(1);
			self.pending = Some(self.attempts);
			ToggleAction::Play(self.attempts)
		} else {
			self.state = PlaybackState::Paused;
			self.pending = None;
			ToggleAction::Pause
		}
	}

	/// `play()` resolved for `attempt`.
	pub fn play_resolved(&mut self, attempt: u32) {
		if self.pending == Some(attempt) {
			self.pending = None;
			self.state = PlaybackState::Playing;
		}
	}

	/// `play()` rejected for `attempt`; the toggle stays paused.
	pub fn play_rejected(&mut self, attempt: u32) {
		if self.pending == Some(attempt) {
			self.pending = None;
		}
		if self.pending.is_none() {
			self.state = PlaybackState::Paused;
		}
	}

	/// The media element paused on its own: ended, native controls, etc.
	pub fn media_paused(&mut self) {
		self.pending = None;
		self.state = PlaybackState::Paused;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_paused_without_marker() {
		let t = ToggleState::default();
		assert_eq!(t.state(), PlaybackState::Paused);
		assert!(!t.is_playing());
	}

	#[test]
	fn marker_waits_for_confirmed_playback() {
		let mut t = ToggleState::default();
		let ToggleAction::Play(attempt) = t.click(true) else {
			panic!("expected play");
		};
		assert!(!t.is_playing());
		t.play_resolved(attempt);
		assert!(t.is_playing());
	}

	#[test]
	fn blocked_playback_leaves_toggle_usable() {
		let mut t = ToggleState::default();
		let ToggleAction::Play(first) = t.click(true) else {
			panic!("expected play");
		};
		t.play_rejected(first);
		assert!(!t.is_playing());

		// The media element is still paused, so the next click tries again.
		let ToggleAction::Play(second) = t.click(true) else {
			panic!("expected play");
		};
		assert_ne!(first, second);
		t.play_resolved(second);
		assert!(t.is_playing());
	}

	#[test]
	fn click_while_playing_pauses_immediately() {
		let mut t = ToggleState::default();
		let ToggleAction::Play(attempt) = t.click(true) else {
			panic!("expected play");
		};
		t.play_resolved(attempt);
		assert_eq!(t.click(false), ToggleAction::Pause);
		assert!(!t.is_playing());
	}

	#[test]
	fn natural_end_clears_marker() {
		let mut t = ToggleState::default();
		let ToggleAction::Play(attempt) = t.click(true) else {
			panic!("expected play");
		};
		t.play_resolved(attempt);
		t.media_paused();
		assert!(!t.is_playing());
	}

	#[test]
	fn stale_resolution_is_ignored() {
		let mut t = ToggleState::default();
		let ToggleAction::Play(attempt) = t.click(true) else {
			panic!("expected play");
		};
		// Paused through native controls before the promise settled.
		t.media_paused();
		t.play_resolved(attempt);
		assert!(!t.is_playing());
	}

	#[test]
	fn rejection_of_superseded_attempt_keeps_newer_one() {
		let mut t = ToggleState::default();
		let ToggleAction::Play(first) = t.click(true) else {
			panic!("expected play");
		};
		let ToggleAction::Play(second) = t.click(true) else {
			panic!("expected play");
		};
		t.play_rejected(first);
		t.play_resolved(second);
		assert!(t.is_playing());
	}
}
