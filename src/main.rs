mod app;
mod audio;
mod command;
mod config;
mod consts;
mod game;
mod highscore;
mod logging;
mod util;
use crate::app::App;
use crate::audio::Sound;
use crate::config::Config;
use crate::game::{Board, Difficulty, Game};
use crate::util::error_chain;
use anyhow::Context;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use lexopt::{Arg, Parser, ValueExt};
use log::LevelFilter;
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: gridsnake [<options>]

Play Snake in the terminal.

Options:
  -c, --config <PATH>        Read configuration from the given file
  -d, --difficulty <LEVEL>   Start at the given difficulty (easy, medium, hard)
      --log-level <LEVEL>    Log at the given level (off, error, warn, info,
                             debug, trace)
      --mute                 Do not ring the terminal bell
  -h, --help                 Display this help message and exit
  -V, --version              Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Mode {
    Run(Arguments),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    difficulty: Option<Difficulty>,
    log_level: Option<LevelFilter>,
    mute: bool,
}

impl Mode {
    fn from_parser(mut parser: Parser) -> Result<Mode, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Mode::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Mode::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('d') | Arg::Long("difficulty") => {
                    args.difficulty = Some(parser.value()?.parse()?);
                }
                Arg::Long("log-level") => {
                    args.log_level = Some(parser.value()?.parse()?);
                }
                Arg::Long("mute") => args.mute = true,
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Mode::Run(args))
    }
}

fn main() -> ExitCode {
    match Mode::from_parser(Parser::from_env()) {
        Ok(Mode::Run(args)) => match run(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("gridsnake: {e:#}");
                ExitCode::from(2)
            }
        },
        Ok(Mode::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Mode::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    let config = match args.config {
        Some(ref path) => Config::load(path, false),
        None => Config::default_path().and_then(|path| Config::load(&path, true)),
    }
    .context("failed to load configuration")?;

    let log_level = args.log_level.unwrap_or(config.logging.level);
    if let Some(path) = config.log_file() {
        if let Err(e) = logging::init(&path, log_level) {
            eprintln!(
                "gridsnake: warning: logging disabled: {}: {}",
                path.display(),
                error_chain(&e)
            );
        }
    }
    log::info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));

    let mut settings = config.game_settings();
    if let Some(level) = args.difficulty {
        settings.difficulty = level;
    }
    let sound = Sound::new(config.game.sound && !args.mute);
    let game = Game::new(
        settings,
        Board::new(consts::GRID_SIZE),
        config.high_score_store(),
        sound,
        rand::rng(),
    );

    let terminal = ratatui::init();
    let r = crossterm::execute!(io::stdout(), EnableFocusChange)
        .and_then(|()| App::new(game).run(terminal));
    let _ = crossterm::execute!(io::stdout(), DisableFocusChange);
    ratatui::restore();
    match r {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(e).context("terminal I/O failed"),
    }
}
