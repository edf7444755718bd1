use enum_dispatch::enum_dispatch;
use std::io::{self, Write};

/// Sound effects.  Callers treat failures as unimportant.
#[enum_dispatch]
pub(crate) trait AudioCue {
    /// Signal that the snake has eaten
    fn play_eat_cue(&mut self) -> io::Result<()>;
}

/// Rings the terminal bell
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TerminalBell;

impl AudioCue for TerminalBell {
    fn play_eat_cue(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(b"\x07")?;
        stdout.flush()
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Muted;

impl AudioCue for Muted {
    fn play_eat_cue(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Either of the sound settings, chosen at startup
#[enum_dispatch(AudioCue)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Sound {
    TerminalBell,
    Muted,
}

impl Sound {
    pub(crate) fn new(enabled: bool) -> Sound {
        if enabled {
            TerminalBell.into()
        } else {
            Muted.into()
        }
    }
}
