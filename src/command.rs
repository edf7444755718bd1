use crate::game::Difficulty;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Start,
    Pause,
    SetDifficulty(Difficulty),
    NextDifficulty,
    PrevDifficulty,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter) => Some(Command::Start),
            (KeyModifiers::NONE, KeyCode::Char(' ' | 'p') | KeyCode::Esc) => Some(Command::Pause),
            (KeyModifiers::NONE, KeyCode::Char('1')) => {
                Some(Command::SetDifficulty(Difficulty::Easy))
            }
            (KeyModifiers::NONE, KeyCode::Char('2')) => {
                Some(Command::SetDifficulty(Difficulty::Medium))
            }
            (KeyModifiers::NONE, KeyCode::Char('3')) => {
                Some(Command::SetDifficulty(Difficulty::Hard))
            }
            (_, KeyCode::Tab) => Some(Command::NextDifficulty),
            (_, KeyCode::BackTab) => Some(Command::PrevDifficulty),
            _ => None,
        }
    }
}
