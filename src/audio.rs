use std::io::{self, Write};

use crossterm::execute;
use crossterm::style::Print;
use log::warn;

use crate::game::TickOutcome;

/// Sound effects the game asks its audio collaborator to play.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SoundCue {
    Eat,
    Wall,
}

impl SoundCue {
    /// Returns the cues a tick outcome should trigger, in the order they happened.
    #[must_use]
    pub fn for_outcome(outcome: TickOutcome) -> Vec<Self> {
        let mut cues = Vec::new();
        if outcome.ate_food {
            cues.push(Self::Eat);
        }
        if outcome.collision.is_some() {
            cues.push(Self::Wall);
        }
        cues
    }
}

/// Audio collaborator; playback failures are the sink's concern.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Rings the terminal bell: once for food, twice for a crash.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBell<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn ring(&mut self, times: usize) -> io::Result<()> {
        execute!(self.out, Print("\x07".repeat(times)))
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: SoundCue) {
        let times = match cue {
            SoundCue::Eat => 1,
            SoundCue::Wall => 2,
        };

        if let Err(error) = self.ring(times) {
            warn!("failed to ring terminal bell for {cue:?}: {error}");
        }
    }
}

/// Discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct Muted;

impl AudioSink for Muted {
    fn play(&mut self, _cue: SoundCue) {}
}

#[cfg(test)]
mod tests {
    use crate::game::{DeathReason, TickOutcome};

    use super::{AudioSink, SoundCue, TerminalBell};

    #[test]
    fn outcome_maps_to_cues() {
        assert!(SoundCue::for_outcome(TickOutcome::default()).is_empty());
        assert_eq!(
            SoundCue::for_outcome(TickOutcome {
                ate_food: true,
                collision: None,
            }),
            vec![SoundCue::Eat]
        );
        assert_eq!(
            SoundCue::for_outcome(TickOutcome {
                ate_food: false,
                collision: Some(DeathReason::SelfCollision),
            }),
            vec![SoundCue::Wall]
        );
    }

    #[test]
    fn bell_rings_once_for_food_and_twice_for_crash() {
        let mut bell = TerminalBell::new(Vec::new());

        bell.play(SoundCue::Eat);
        assert_eq!(bell.out, b"\x07");

        bell.play(SoundCue::Wall);
        assert_eq!(bell.out, b"\x07\x07\x07");
    }
}
