mod board;
mod difficulty;
mod direction;
mod food;
mod grid;
mod scheduler;
mod snake;
pub(crate) use self::board::Board;
pub(crate) use self::difficulty::Difficulty;
pub(crate) use self::direction::Direction;
pub(crate) use self::food::FoodPlacement;
pub(crate) use self::grid::{Cell, GridSize};
pub(crate) use self::snake::SnakeStart;
use self::food::Food;
use self::scheduler::Scheduler;
use self::snake::Snake;
use crate::audio::AudioCue;
use crate::consts;
use crate::highscore::HighScoreStore;
use crate::util::error_chain;
use rand::Rng;
use std::time::{Duration, Instant};

/// Where the game draws itself
pub(crate) trait Renderer {
    /// Show the snake (head first) and the food
    fn render(&mut self, segments: &[Cell], food: Cell);

    /// Show the end-of-session summary
    fn render_game_over(&mut self, score: u32, high_score: u32);
}

/// Player inputs understood by [`Game`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum InputEvent {
    Up,
    Down,
    Left,
    Right,
    PauseToggle,
    Start,
    DifficultyChange(Difficulty),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameState {
    /// No session has been started yet
    Idle,
    Running,
    Paused,
    /// The snake hit a wall or itself
    Over,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct GameSettings {
    pub(crate) difficulty: Difficulty,
    pub(crate) food_placement: FoodPlacement,
}

/// The game controller.  It owns the current session's snake and food, the
/// tick timer, and the score, and it is the only thing that arms or disarms
/// the timer.
#[derive(Clone, Debug)]
pub(crate) struct Game<V, S, A, R = rand::rngs::ThreadRng> {
    rng: R,
    grid: GridSize,
    snake: Snake,
    food: Food,
    score: u32,
    high_score: u32,
    state: GameState,
    difficulty: Difficulty,
    food_placement: FoodPlacement,
    scheduler: Scheduler,
    view: V,
    store: S,
    audio: A,
}

impl<V: Renderer, S: HighScoreStore, A: AudioCue, R: Rng> Game<V, S, A, R> {
    /// Create an idle game.  The best score is read from `store` once, here;
    /// if it cannot be read, it is taken to be zero.
    pub(crate) fn new(settings: GameSettings, view: V, mut store: S, audio: A, mut rng: R) -> Self {
        let high_score = match store.get_high_score() {
            Ok(score) => score.unwrap_or(0),
            Err(e) => {
                log::warn!("{}; assuming no best score", error_chain(&e));
                0
            }
        };
        log::debug!("Loaded best score: {high_score}");
        let grid = consts::GRID_SIZE;
        let food = Food::new(grid, &mut rng);
        Game {
            rng,
            grid,
            snake: Snake::new(consts::SNAKE_START),
            food,
            score: 0,
            high_score,
            state: GameState::Idle,
            difficulty: settings.difficulty,
            food_placement: settings.food_placement,
            scheduler: Scheduler::new(),
            view,
            store,
            audio,
        }
    }

    pub(crate) fn handle_input(&mut self, event: InputEvent, now: Instant) {
        match event {
            InputEvent::Up => self.turn(Direction::Up),
            InputEvent::Down => self.turn(Direction::Down),
            InputEvent::Left => self.turn(Direction::Left),
            InputEvent::Right => self.turn(Direction::Right),
            InputEvent::PauseToggle => self.toggle_pause(now),
            InputEvent::Start => self.start(now),
            InputEvent::DifficultyChange(level) => self.set_difficulty(level, now),
        }
    }

    /// Begin a fresh session.  Ignored while a session is running.
    pub(crate) fn start(&mut self, now: Instant) {
        if self.state == GameState::Running {
            log::debug!("Ignoring start request: game already running");
            return;
        }
        self.snake = Snake::new(consts::SNAKE_START);
        let occupied = self.snake.segments();
        self.food
            .respawn(self.food_placement, self.grid, &occupied, &mut self.rng);
        self.score = 0;
        self.state = GameState::Running;
        let handle = self.scheduler.arm(self.difficulty.interval(), now);
        log::info!(
            "Started new game at difficulty {} (timer {handle:?})",
            self.difficulty
        );
        self.render();
    }

    /// Suspend or resume the running session.  Does nothing if no session
    /// is in progress.
    pub(crate) fn toggle_pause(&mut self, now: Instant) {
        match self.state {
            GameState::Running => {
                self.scheduler.disarm();
                self.state = GameState::Paused;
                log::debug!("Paused with score {}", self.score);
            }
            GameState::Paused => {
                let handle = self.scheduler.arm(self.difficulty.interval(), now);
                self.state = GameState::Running;
                log::debug!("Resumed (timer {handle:?})");
            }
            GameState::Idle | GameState::Over => (),
        }
    }

    /// Change the tick rate.  A running session switches to the new rate
    /// immediately; otherwise it applies from the next time the timer is
    /// armed.  Selecting the current level leaves the timer untouched.
    pub(crate) fn set_difficulty(&mut self, level: Difficulty, now: Instant) {
        if level == self.difficulty {
            return;
        }
        self.difficulty = level;
        if self.state == GameState::Running {
            let handle = self.scheduler.arm(level.interval(), now);
            log::debug!("Difficulty changed to {level} mid-game (timer {handle:?})");
        } else {
            log::debug!("Difficulty changed to {level}");
        }
    }

    /// Run a tick if the timer says one is due.  Returns whether a tick ran.
    pub(crate) fn poll_timer(&mut self, now: Instant) -> bool {
        if self.scheduler.poll(now).is_some() {
            self.tick();
            true
        } else {
            false
        }
    }

    /// How long until the next tick is due, or `None` if the timer is not
    /// armed
    pub(crate) fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_due(now)
    }

    /// Advance the simulation by one step
    pub(crate) fn tick(&mut self) {
        if self.state != GameState::Running {
            return;
        }
        self.snake.advance();
        if self.snake.check_collision(self.grid.width, self.grid.height) {
            self.game_over();
            return;
        }
        if self.snake.head() == self.food.position {
            self.snake.grow();
            let occupied = self.snake.segments();
            self.food
                .respawn(self.food_placement, self.grid, &occupied, &mut self.rng);
            self.score = self.score.saturating_add(consts::FOOD_REWARD);
            log::debug!(
                "Ate food at {}; score is now {}; next food at {}",
                self.snake.head(),
                self.score,
                self.food.position
            );
            if let Err(e) = self.audio.play_eat_cue() {
                log::debug!("Could not play eat cue: {e}");
            }
        }
        self.render();
    }

    fn turn(&mut self, direction: Direction) {
        if !matches!(self.state, GameState::Running | GameState::Paused) {
            return;
        }
        if !self.snake.request_direction(direction) {
            log::trace!(
                "Ignoring turn {direction}: opposite of current direction {}",
                self.snake.direction()
            );
        }
    }

    fn game_over(&mut self) {
        self.scheduler.disarm();
        self.state = GameState::Over;
        log::info!(
            "Game over: collision at {} with score {} and length {}",
            self.snake.head(),
            self.score,
            self.snake.len()
        );
        if self.score > self.high_score {
            self.high_score = self.score;
            log::info!("New best score: {}", self.high_score);
            if let Err(e) = self.store.set_high_score(self.high_score) {
                log::warn!("{}", error_chain(&e));
            }
        }
        self.view.render_game_over(self.score, self.high_score);
    }

    fn render(&mut self) {
        let segments = self.snake.segments();
        self.view.render(&segments, self.food.position);
    }
}

impl<V, S, A, R> Game<V, S, A, R> {
    pub(crate) fn state(&self) -> GameState {
        self.state
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.high_score
    }

    pub(crate) fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub(crate) fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscore::{LoadError, MemoryStore, SaveError};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;
    use std::io;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    struct RecordingView {
        frames: Vec<(Vec<Cell>, Cell)>,
        game_overs: Vec<(u32, u32)>,
    }

    impl Renderer for RecordingView {
        fn render(&mut self, segments: &[Cell], food: Cell) {
            self.frames.push((segments.to_vec(), food));
        }

        fn render_game_over(&mut self, score: u32, high_score: u32) {
            self.game_overs.push((score, high_score));
        }
    }

    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    struct CountingAudio(usize);

    impl AudioCue for CountingAudio {
        fn play_eat_cue(&mut self) -> io::Result<()> {
            self.0 += 1;
            Ok(())
        }
    }

    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    struct BrokenSpeaker;

    impl AudioCue for BrokenSpeaker {
        fn play_eat_cue(&mut self) -> io::Result<()> {
            Err(io::Error::other("no speakers"))
        }
    }

    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    struct BrokenStore {
        writes: usize,
    }

    impl HighScoreStore for BrokenStore {
        fn get_high_score(&mut self) -> Result<Option<u32>, LoadError> {
            Err(LoadError::read(io::Error::other("disk on fire")))
        }

        fn set_high_score(&mut self, _score: u32) -> Result<(), SaveError> {
            self.writes += 1;
            Err(SaveError::write(io::Error::other("disk on fire")))
        }
    }

    type TestGame<S = MemoryStore, A = CountingAudio> = Game<RecordingView, S, A, ChaCha12Rng>;

    fn new_game_with<S: HighScoreStore, A: AudioCue>(store: S, audio: A) -> TestGame<S, A> {
        Game::new(
            GameSettings::default(),
            RecordingView::default(),
            store,
            audio,
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        )
    }

    fn new_game() -> TestGame {
        new_game_with(MemoryStore::new(), CountingAudio::default())
    }

    fn set_snake<S, A>(game: &mut TestGame<S, A>, segments: &[Cell], direction: Direction) {
        let (&head, body) = segments.split_first().unwrap();
        game.snake = Snake {
            head,
            body: body.iter().copied().collect::<VecDeque<_>>(),
            direction,
            pending: direction,
            growing: false,
        };
    }

    #[test]
    fn new_game_is_idle() {
        let game = new_game_with(MemoryStore::with_score(20), CountingAudio::default());
        assert_eq!(game.state(), GameState::Idle);
        assert_eq!(game.high_score(), 20);
        assert_eq!(game.score(), 0);
        assert_eq!(game.time_until_tick(Instant::now()), None);
        assert!(game.view().frames.is_empty());
    }

    #[test]
    fn tick_while_idle_does_nothing() {
        let mut game = new_game();
        game.tick();
        assert_eq!(game.snake.segments(), [consts::SNAKE_START.head]);
        assert!(!game.poll_timer(Instant::now() + Duration::from_secs(10)));
    }

    #[test]
    fn start_initializes_session() {
        let mut game = new_game();
        let t0 = Instant::now();
        game.start(t0);
        assert_eq!(game.state(), GameState::Running);
        assert_eq!(game.snake.segments(), [Cell::new(10, 10)]);
        assert_eq!(game.snake.direction(), Direction::Right);
        assert_eq!(game.score(), 0);
        assert_eq!(game.scheduler.interval(), Some(Duration::from_millis(150)));
        assert_eq!(game.time_until_tick(t0), Some(Duration::from_millis(150)));
        assert!(game.grid.contains(game.food.position));
        assert_ne!(game.food.position, Cell::new(10, 10));
        assert_eq!(
            game.view().frames,
            [(vec![Cell::new(10, 10)], game.food.position)]
        );
    }

    #[test]
    fn first_tick_moves_right() {
        let mut game = new_game();
        let t0 = Instant::now();
        game.start(t0);
        game.food.position = Cell::new(0, 0);
        assert!(!game.poll_timer(t0 + Duration::from_millis(149)));
        assert!(game.poll_timer(t0 + Duration::from_millis(150)));
        assert_eq!(game.snake.segments(), [Cell::new(11, 10)]);
        assert_eq!(
            game.view().frames.last(),
            Some(&(vec![Cell::new(11, 10)], Cell::new(0, 0)))
        );
    }

    #[test]
    fn eating_food() {
        let mut game = new_game();
        game.start(Instant::now());
        game.food.position = Cell::new(11, 10);
        game.tick();
        assert_eq!(game.score(), 10);
        assert!(game.snake.growing);
        assert_eq!(game.audio, CountingAudio(1));
        assert!(game.grid.contains(game.food.position));
        assert_ne!(game.food.position, Cell::new(11, 10));
        game.food.position = Cell::new(0, 0);
        game.tick();
        assert_eq!(game.snake.segments(), [Cell::new(12, 10), Cell::new(11, 10)]);
        assert_eq!(game.snake.len(), 2);
        assert_eq!(game.score(), 10);
    }

    #[test]
    fn wall_collision_saves_new_best() {
        let mut game = new_game_with(MemoryStore::with_score(20), CountingAudio::default());
        game.start(Instant::now());
        game.score = 30;
        game.food.position = Cell::new(0, 0);
        set_snake(&mut game, &[Cell::new(19, 10)], Direction::Right);
        game.tick();
        assert_eq!(game.snake.head(), Cell::new(20, 10));
        assert_eq!(game.state(), GameState::Over);
        assert_eq!(game.high_score(), 30);
        assert_eq!(game.store.get_high_score().unwrap(), Some(30));
        assert_eq!(game.view().game_overs, [(30, 30)]);
        assert!(!game.scheduler.is_armed());
        assert!(!game.poll_timer(Instant::now() + Duration::from_secs(10)));
    }

    #[test]
    fn lower_score_keeps_old_best() {
        let mut game = new_game_with(MemoryStore::with_score(50), CountingAudio::default());
        game.start(Instant::now());
        game.score = 30;
        set_snake(&mut game, &[Cell::new(0, 3)], Direction::Left);
        game.tick();
        assert_eq!(game.state(), GameState::Over);
        assert_eq!(game.high_score(), 50);
        assert_eq!(game.store.get_high_score().unwrap(), Some(50));
        assert_eq!(game.view().game_overs, [(30, 50)]);
    }

    #[test]
    fn self_collision_ends_game() {
        let mut game = new_game();
        game.start(Instant::now());
        game.food.position = Cell::new(0, 0);
        set_snake(
            &mut game,
            &[
                Cell::new(5, 5),
                Cell::new(6, 5),
                Cell::new(6, 4),
                Cell::new(5, 4),
                Cell::new(4, 4),
            ],
            Direction::Up,
        );
        game.tick();
        assert_eq!(game.state(), GameState::Over);
    }

    #[test]
    fn pause_halts_ticks() {
        let mut game = new_game();
        let t0 = Instant::now();
        game.start(t0);
        game.food.position = Cell::new(0, 0);
        game.toggle_pause(t0 + Duration::from_millis(50));
        assert_eq!(game.state(), GameState::Paused);
        assert_eq!(game.time_until_tick(t0), None);
        for secs in 1..5 {
            assert!(!game.poll_timer(t0 + Duration::from_secs(secs)));
        }
        game.tick();
        assert_eq!(game.snake.head(), Cell::new(10, 10));
        let t1 = t0 + Duration::from_secs(5);
        game.toggle_pause(t1);
        assert_eq!(game.state(), GameState::Running);
        assert!(!game.poll_timer(t1 + Duration::from_millis(100)));
        assert!(game.poll_timer(t1 + Duration::from_millis(150)));
        assert_eq!(game.snake.head(), Cell::new(11, 10));
    }

    #[test]
    fn pause_is_noop_when_idle_or_over() {
        let mut game = new_game();
        let now = Instant::now();
        game.toggle_pause(now);
        assert_eq!(game.state(), GameState::Idle);
        game.start(now);
        set_snake(&mut game, &[Cell::new(0, 0)], Direction::Up);
        game.tick();
        assert_eq!(game.state(), GameState::Over);
        game.handle_input(InputEvent::PauseToggle, now);
        assert_eq!(game.state(), GameState::Over);
        assert!(!game.scheduler.is_armed());
    }

    #[test]
    fn start_while_running_is_ignored() {
        let mut game = new_game();
        let now = Instant::now();
        game.start(now);
        game.food.position = Cell::new(0, 0);
        game.tick();
        game.start(now);
        assert_eq!(game.snake.head(), Cell::new(11, 10));
        assert_eq!(game.view().frames.len(), 2);
    }

    #[test]
    fn start_after_game_over_resets() {
        let mut game = new_game();
        let now = Instant::now();
        game.start(now);
        game.score = 40;
        set_snake(
            &mut game,
            &[Cell::new(19, 2), Cell::new(18, 2)],
            Direction::Right,
        );
        game.tick();
        assert_eq!(game.state(), GameState::Over);
        game.handle_input(InputEvent::Start, now);
        assert_eq!(game.state(), GameState::Running);
        assert_eq!(game.score(), 0);
        assert_eq!(game.high_score(), 40);
        assert_eq!(game.snake.segments(), [consts::SNAKE_START.head]);
        assert!(game.scheduler.is_armed());
    }

    #[test]
    fn start_while_paused_resets() {
        let mut game = new_game();
        let now = Instant::now();
        game.start(now);
        game.food.position = Cell::new(0, 0);
        game.tick();
        game.toggle_pause(now);
        game.start(now);
        assert_eq!(game.state(), GameState::Running);
        assert_eq!(game.snake.segments(), [consts::SNAKE_START.head]);
        assert!(game.scheduler.is_armed());
    }

    #[test]
    fn difficulty_change_while_running_rearms() {
        let mut game = new_game();
        let t0 = Instant::now();
        game.start(t0);
        game.food.position = Cell::new(0, 0);
        let t1 = t0 + Duration::from_millis(100);
        game.handle_input(InputEvent::DifficultyChange(Difficulty::Hard), t1);
        assert_eq!(game.difficulty(), Difficulty::Hard);
        assert_eq!(game.state(), GameState::Running);
        assert_eq!(game.scheduler.interval(), Some(Duration::from_millis(70)));
        assert!(!game.poll_timer(t0 + Duration::from_millis(150)));
        assert!(game.poll_timer(t1 + Duration::from_millis(70)));
        assert_eq!(game.snake.segments(), [Cell::new(11, 10)]);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn reselecting_current_difficulty_keeps_deadline() {
        let mut game = new_game();
        let t0 = Instant::now();
        game.start(t0);
        game.food.position = Cell::new(0, 0);
        game.handle_input(
            InputEvent::DifficultyChange(Difficulty::Easy),
            t0 + Duration::from_millis(100),
        );
        assert_eq!(game.time_until_tick(t0), Some(Duration::from_millis(150)));
        assert!(game.poll_timer(t0 + Duration::from_millis(150)));
        assert_eq!(game.snake.head(), Cell::new(11, 10));
    }

    #[test]
    fn repeated_difficulty_key_does_not_stall() {
        let mut game = new_game();
        let t0 = Instant::now();
        game.start(t0);
        game.food.position = Cell::new(0, 0);
        let mut ticks = 0;
        for step in 1..=30 {
            let now = t0 + Duration::from_millis(30 * step);
            game.handle_input(InputEvent::DifficultyChange(Difficulty::Easy), now);
            if game.poll_timer(now) {
                ticks += 1;
            }
        }
        assert_eq!(game.state(), GameState::Running);
        assert!(ticks >= 5, "only {ticks} ticks in 900ms");
    }

    #[test]
    fn difficulty_change_while_paused_applies_on_resume() {
        let mut game = new_game();
        let t0 = Instant::now();
        game.start(t0);
        game.toggle_pause(t0);
        game.set_difficulty(Difficulty::Medium, t0);
        assert!(!game.scheduler.is_armed());
        game.toggle_pause(t0);
        assert_eq!(game.scheduler.interval(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn difficulty_set_before_start_is_used() {
        let mut game = new_game();
        let now = Instant::now();
        game.set_difficulty(Difficulty::Hard, now);
        assert!(!game.scheduler.is_armed());
        game.start(now);
        assert_eq!(game.scheduler.interval(), Some(Duration::from_millis(70)));
    }

    #[test]
    fn reversal_input_is_dropped() {
        let mut game = new_game();
        let now = Instant::now();
        game.start(now);
        game.food.position = Cell::new(0, 0);
        game.handle_input(InputEvent::Left, now);
        game.tick();
        game.tick();
        assert_eq!(game.snake.head(), Cell::new(12, 10));
        assert_eq!(game.state(), GameState::Running);
    }

    #[test]
    fn turn_applies_on_following_tick() {
        let mut game = new_game();
        let now = Instant::now();
        game.start(now);
        game.food.position = Cell::new(0, 0);
        game.handle_input(InputEvent::Up, now);
        game.tick();
        assert_eq!(game.snake.head(), Cell::new(11, 10));
        game.tick();
        assert_eq!(game.snake.head(), Cell::new(11, 9));
    }

    #[test]
    fn turn_while_paused_applies_after_resume() {
        let mut game = new_game();
        let t0 = Instant::now();
        game.start(t0);
        game.food.position = Cell::new(0, 0);
        game.toggle_pause(t0);
        game.handle_input(InputEvent::Up, t0);
        assert_eq!(game.snake.pending, Direction::Up);
        game.tick();
        assert_eq!(game.snake.head(), Cell::new(10, 10));
        game.toggle_pause(t0);
        game.tick();
        assert_eq!(game.snake.head(), Cell::new(11, 10));
        game.tick();
        assert_eq!(game.snake.head(), Cell::new(11, 9));
    }

    #[test]
    fn input_while_idle_is_ignored() {
        let mut game = new_game();
        game.handle_input(InputEvent::Up, Instant::now());
        assert_eq!(game.snake.pending, Direction::Right);
    }

    #[test]
    fn broken_store_is_not_fatal() {
        let mut game = new_game_with(BrokenStore::default(), CountingAudio::default());
        assert_eq!(game.high_score(), 0);
        game.start(Instant::now());
        game.score = 10;
        set_snake(&mut game, &[Cell::new(10, 0)], Direction::Up);
        game.tick();
        assert_eq!(game.state(), GameState::Over);
        assert_eq!(game.high_score(), 10);
        assert_eq!(game.store.writes, 1);
        assert_eq!(game.view().game_overs, [(10, 10)]);
    }

    #[test]
    fn broken_audio_is_not_fatal() {
        let mut game = new_game_with(MemoryStore::new(), BrokenSpeaker);
        game.start(Instant::now());
        game.food.position = Cell::new(11, 10);
        game.tick();
        assert_eq!(game.state(), GameState::Running);
        assert_eq!(game.score(), 10);
        assert!(game.snake.growing);
    }

    #[test]
    fn food_placement_anywhere_is_honored() {
        let settings = GameSettings {
            food_placement: FoodPlacement::Anywhere,
            ..GameSettings::default()
        };
        let mut game: TestGame = Game::new(
            settings,
            RecordingView::default(),
            MemoryStore::new(),
            CountingAudio::default(),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        );
        game.start(Instant::now());
        assert_eq!(game.food_placement, FoodPlacement::Anywhere);
        assert!(game.grid.contains(game.food.position));
    }

    /// Play many random games, checking that the snake only ever grows by one
    /// segment, and only on the tick after eating.
    #[test]
    fn length_changes_only_after_eating() {
        let mut game = new_game();
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED ^ 0xFFFF);
        let now = Instant::now();
        let inputs = [
            InputEvent::Up,
            InputEvent::Down,
            InputEvent::Left,
            InputEvent::Right,
        ];
        let mut games_played = 0;
        let mut meals = 0;
        game.start(now);
        let mut ate_last_tick = false;
        for _ in 0..5000 {
            if game.state() == GameState::Over {
                games_played += 1;
                game.start(now);
                ate_last_tick = false;
            }
            if rng.random_ratio(1, 4) {
                let event = inputs[rng.random_range(0..inputs.len())];
                game.handle_input(event, now);
            }
            let before_len = game.snake.len();
            let before_score = game.score();
            game.tick();
            if game.state() == GameState::Over {
                continue;
            }
            let expected = before_len + usize::from(ate_last_tick);
            assert_eq!(game.snake.len(), expected);
            ate_last_tick = game.score() > before_score;
            if ate_last_tick {
                meals += 1;
                assert_eq!(game.score(), before_score + consts::FOOD_REWARD);
            }
        }
        assert!(games_played > 0);
        assert!(meals > 0);
    }
}
