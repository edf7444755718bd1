use crate::audio::Sound;
use crate::command::Command;
use crate::consts;
use crate::game::{Board, Game, GameState, InputEvent};
use crate::highscore::Storage;
use crate::util::{get_display_area, EnumExt};
use crossterm::event::{poll, read, Event};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
    Terminal,
};
use std::io;
use std::time::Instant;

pub(crate) type TerminalGame = Game<Board, Storage, Sound>;

#[derive(Clone, Debug)]
pub(crate) struct App {
    game: TerminalGame,
    quitting: bool,
}

impl App {
    pub(crate) fn new(game: TerminalGame) -> App {
        App {
            game,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
            self.process_input()?;
        }
        log::info!("Quitting");
        Ok(())
    }

    /// Run a tick if one is due; otherwise wait for the next event, but no
    /// longer than until the next tick.
    fn process_input(&mut self) -> io::Result<()> {
        let now = Instant::now();
        if self.game.poll_timer(now) {
            return Ok(());
        }
        match self.game.time_until_tick(now) {
            Some(wait) => {
                if poll(wait)? {
                    self.handle_event(read()?);
                }
            }
            None => self.handle_event(read()?),
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let now = Instant::now();
        if event == Event::FocusLost {
            if self.game.state() == GameState::Running {
                self.game.toggle_pause(now);
            }
            return;
        }
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        let input = match cmd {
            Command::Quit => {
                self.quitting = true;
                return;
            }
            Command::Up => InputEvent::Up,
            Command::Down => InputEvent::Down,
            Command::Left => InputEvent::Left,
            Command::Right => InputEvent::Right,
            Command::Start => InputEvent::Start,
            Command::Pause => InputEvent::PauseToggle,
            Command::SetDifficulty(level) => InputEvent::DifficultyChange(level),
            Command::NextDifficulty => {
                let Some(level) = self.game.difficulty().next() else {
                    return;
                };
                InputEvent::DifficultyChange(level)
            }
            Command::PrevDifficulty => {
                let Some(level) = self.game.difficulty().prev() else {
                    return;
                };
                InputEvent::DifficultyChange(level)
            }
        };
        self.game.handle_input(input, now);
    }

    fn status_line(&self) -> Line<'static> {
        let key = |s: &'static str| Span::styled(s, consts::KEY_STYLE);
        match self.game.state() {
            GameState::Idle => Line::from_iter([
                Span::raw(" Press "),
                key("Enter"),
                Span::raw(" to start"),
            ]),
            GameState::Running => Line::default(),
            GameState::Paused => Line::from_iter([
                Span::raw(" PAUSED: "),
                key("Space"),
                Span::raw(" to resume"),
            ]),
            GameState::Over => Line::from_iter([
                Span::raw(" Press "),
                key("Enter"),
                Span::raw(" to play again"),
            ]),
        }
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(
                " Score: {}  Best: {}  Speed: {}",
                self.game.score(),
                self.game.high_score(),
                self.game.difficulty().label()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);
        self.game.view().render(board_area, buf);
        self.status_line().render(status_area, buf);
        Line::from_iter([
            Span::raw(" "),
            Span::styled("Space", consts::KEY_STYLE),
            Span::raw(" pause  "),
            Span::styled("1-3", consts::KEY_STYLE),
            Span::raw(" speed  "),
            Span::styled("Tab", consts::KEY_STYLE),
            Span::raw(" faster  "),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(" quit"),
        ])
        .render(help_area, buf);
    }
}
