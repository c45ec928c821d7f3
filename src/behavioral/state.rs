//! Behavioral Pattern: State
//! Example: An audio player whose buttons depend on what it is doing
//!
//! Run with: cargo run --bin state
//!
//! ## Problem
//! Behaviour that depends on the current mode is usually written as a pile
//! of conditionals spread over every method. Adding a mode means editing all
//! of them.
//!
//! ## Solution
//! Each state owns its behaviour and decides which state comes next. The
//! context (the player) just delegates to whatever state it holds. Unlike
//! Strategy, the states know about each other and trigger transitions.
//!
//! Here the states form a closed set, so they are a tagged union
//! ([`PlayerState`]) and each transition is a `match` arm rather than a
//! separate class.
//!
//! Real-life analogue: a phone's side button silences the ringer when locked
//! and changes the volume when unlocked.

use std::fmt;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerState::Playing => write!(f, "playing"),
            PlayerState::Paused => write!(f, "paused"),
            PlayerState::Stopped => write!(f, "stopped"),
        }
    }
}

impl PlayerState {
    /// Next state and message for the play button.
    fn on_play(self) -> (PlayerState, &'static str) {
        match self {
            PlayerState::Playing => (PlayerState::Playing, "Already playing..."),
            PlayerState::Paused | PlayerState::Stopped => (PlayerState::Playing, "Playing..."),
        }
    }

    fn on_pause(self) -> (PlayerState, &'static str) {
        match self {
            PlayerState::Paused => (PlayerState::Paused, "Already paused..."),
            PlayerState::Playing | PlayerState::Stopped => (PlayerState::Paused, "Paused..."),
        }
    }

    fn on_stop(self) -> (PlayerState, &'static str) {
        match self {
            PlayerState::Stopped => (PlayerState::Stopped, "Already stopped..."),
            PlayerState::Playing | PlayerState::Paused => (PlayerState::Stopped, "Stopped..."),
        }
    }
}

/// The context.
#[derive(Debug)]
pub struct AudioPlayer {
    state: PlayerState,
    playlist: Vec<String>,
    current: usize,
}

impl AudioPlayer {
    pub fn new(playlist: Vec<String>) -> Self {
        AudioPlayer {
            state: PlayerState::Stopped,
            playlist,
            current: 0,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn current_track(&self) -> Option<&str> {
        self.playlist.get(self.current).map(String::as_str)
    }

    pub fn play(&mut self) -> &'static str {
        self.transition(self.state.on_play())
    }

    pub fn pause(&mut self) -> &'static str {
        self.transition(self.state.on_pause())
    }

    pub fn stop(&mut self) -> &'static str {
        let message = self.transition(self.state.on_stop());
        self.current = 0;
        message
    }

    /// Skips forward, wrapping around. Only honoured while playing.
    pub fn next_track(&mut self) -> String {
        if self.state != PlayerState::Playing || self.playlist.is_empty() {
            return format!("Ignored next track while {}", self.state);
        }
        self.current = (self.current + 1) % self.playlist.len();
        format!("Now playing {}", self.playlist[self.current])
    }

    /// Skips back, wrapping around. Only honoured while playing.
    pub fn previous_track(&mut self) -> String {
        if self.state != PlayerState::Playing || self.playlist.is_empty() {
            return format!("Ignored previous track while {}", self.state);
        }
        self.current = self
            .current
            .checked_sub(1)
            .unwrap_or(self.playlist.len() - 1);
        format!("Now playing {}", self.playlist[self.current])
    }

    fn transition(&mut self, (next, message): (PlayerState, &'static str)) -> &'static str {
        if next != self.state {
            debug!(from = %self.state, to = %next, "player state change");
        }
        self.state = next;
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> AudioPlayer {
        AudioPlayer::new(vec!["intro".into(), "verse".into(), "outro".into()])
    }

    #[test]
    fn test_starts_stopped() {
        assert_eq!(player().state(), PlayerState::Stopped);
    }

    #[test]
    fn test_transitions_and_messages() {
        let mut p = player();
        assert_eq!(p.play(), "Playing...");
        assert_eq!(p.play(), "Already playing...");
        assert_eq!(p.pause(), "Paused...");
        assert_eq!(p.state(), PlayerState::Paused);
        assert_eq!(p.pause(), "Already paused...");
        assert_eq!(p.stop(), "Stopped...");
        assert_eq!(p.stop(), "Already stopped...");
        assert_eq!(p.pause(), "Paused...");
        assert_eq!(p.play(), "Playing...");
    }

    #[test]
    fn test_track_navigation_only_while_playing() {
        let mut p = player();
        assert_eq!(p.next_track(), "Ignored next track while stopped");

        p.play();
        assert_eq!(p.next_track(), "Now playing verse");
        assert_eq!(p.previous_track(), "Now playing intro");
        assert_eq!(p.previous_track(), "Now playing outro");
        assert_eq!(p.next_track(), "Now playing intro");
    }

    #[test]
    fn test_stop_rewinds() {
        let mut p = player();
        p.play();
        p.next_track();
        p.stop();
        assert_eq!(p.current_track(), Some("intro"));
    }

    #[test]
    fn test_empty_playlist() {
        let mut p = AudioPlayer::new(Vec::new());
        p.play();
        assert_eq!(p.next_track(), "Ignored next track while playing");
        assert_eq!(p.current_track(), None);
    }
}
