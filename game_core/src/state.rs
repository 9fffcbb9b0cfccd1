use hecs::{Entity, World};

use crate::systems::{ingest_input, move_paddles};
use crate::{
    create_ball, create_paddle, step, Ball, Config, ConfigError, Events, GameRng, InputState, Key,
    Paddle, Playfield, Score, Session, SessionAction, Side, TransitionResult,
};

/// Everything one match needs, owned in one place
pub struct GameState {
    world: World,
    pub field: Playfield,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input: InputState,
    session: Session,
    pub rng: GameRng,
    player: Entity,
    ai: Entity,
    ball: Entity,
}

impl GameState {
    /// New idle game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(Config::default(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: Config, seed: u64) -> Self {
        let field = Playfield::new(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let player = create_paddle(&mut world, Side::Player, &config);
        let ai = create_paddle(&mut world, Side::Ai, &config);

        let mut ball = Ball::new(field.center(), glam::Vec2::ZERO, config.ball_radius, 0.0);
        ball.reset(field.center(), &config, &mut rng);
        let ball = create_ball(&mut world, ball.pos, ball.vel, &config);

        Self {
            world,
            field,
            config,
            score: Score::new(),
            events: Events::new(),
            input: InputState::new(),
            session: Session::new(),
            rng,
            player,
            ai,
            ball,
        }
    }

    /// Start (from idle) or restart (after a win)
    ///
    /// Zeroes the scores and serves a fresh ball. Paddles keep their
    /// positions.
    pub fn handle(&mut self, action: SessionAction) -> TransitionResult {
        let result = self.session.transition(action);
        if result.success && matches!(action, SessionAction::Start | SessionAction::Restart) {
            self.score.reset();
            self.events.clear();
            self.reset_ball();
        }
        result
    }

    pub fn start(&mut self) -> TransitionResult {
        self.handle(SessionAction::Start)
    }

    pub fn restart(&mut self) -> TransitionResult {
        self.handle(SessionAction::Restart)
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.key_up(key);
    }

    /// Keyboard paddle movement, applied every tick in every session state
    pub fn move_player(&mut self) {
        ingest_input(&mut self.world, &self.input);
        move_paddles(&mut self.world, &self.config);
    }

    /// Physics for one tick. Does nothing unless the session is running.
    pub fn update(&mut self) {
        if !self.session.is_running() {
            return;
        }

        step(
            &mut self.world,
            &self.field,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        if let Some(side) = self.score.has_winner(self.config.win_score) {
            self.session.transition(SessionAction::Win(side));
            self.events.game_over = true;
        }
    }

    /// One full tick: input, then physics
    pub fn tick(&mut self) {
        self.move_player();
        self.update();
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn winner_message(&self) -> Option<String> {
        self.session.winner_message()
    }

    pub fn ball(&self) -> Ball {
        *self
            .world
            .get::<&Ball>(self.ball)
            .expect("ball entity lives as long as the game")
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        let entity = match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        };
        *self
            .world
            .get::<&Paddle>(entity)
            .expect("paddle entities live as long as the game")
    }

    pub fn ball_mut(&mut self) -> hecs::RefMut<'_, Ball> {
        self.world
            .get::<&mut Ball>(self.ball)
            .expect("ball entity lives as long as the game")
    }

    fn reset_ball(&mut self) {
        let center = self.field.center();
        let config = &self.config;
        let rng = &mut self.rng;
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.reset(center, config, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SessionState;
    use glam::Vec2;

    #[test]
    fn test_new_game_is_idle() {
        let state = GameState::new(1);
        assert_eq!(state.session().state(), SessionState::Idle);
        assert_eq!(state.ball().pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.paddle(Side::Player).pos, Vec2::new(10.0, 250.0));
        assert_eq!(state.paddle(Side::Ai).pos, Vec2::new(775.0, 250.0));
    }

    #[test]
    fn test_update_is_noop_when_idle() {
        let mut state = GameState::new(1);
        let ball = state.ball();
        let ai = state.paddle(Side::Ai);

        for _ in 0..10 {
            state.update();
        }

        assert_eq!(state.ball().pos, ball.pos);
        assert_eq!(state.ball().vel, ball.vel);
        assert_eq!(state.paddle(Side::Ai).pos, ai.pos);
        assert_eq!(state.score, Score::new());
    }

    #[test]
    fn test_player_moves_while_idle() {
        let mut state = GameState::new(1);
        state.key_down(Key::Up);
        state.tick();
        assert_eq!(state.paddle(Side::Player).pos.y, 242.0);
        assert_eq!(state.ball().pos, Vec2::new(400.0, 300.0), "Ball waits for start");
    }

    #[test]
    fn test_start_resets_scores_and_ball() {
        let mut state = GameState::new(1);
        state.score = Score { player: 3, ai: 2 };
        state.ball_mut().pos = Vec2::new(100.0, 100.0);

        assert!(state.start().success);
        assert!(state.is_running());
        assert_eq!(state.score, Score::new());
        assert_eq!(state.ball().pos, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let mut state = GameState::new(1);
        state.start();
        state.score.ai = 2;
        assert!(!state.start().success);
        assert_eq!(state.score.ai, 2, "Rejected start must not reset the score");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config {
            paddle_height: -1.0,
            ..Config::default()
        };
        assert!(GameState::with_config(config, 1).is_err());
    }

    #[test]
    fn test_nan_paddle_height_never_reaches_tick() {
        let config = Config {
            paddle_height: f32::NAN,
            ..Config::default()
        };
        assert!(matches!(
            GameState::with_config(config, 1),
            Err(ConfigError::PaddleHeight(_))
        ));
    }

    #[test]
    fn test_bad_frame_delta_rejected_before_loop() {
        for max_frame_delta in [-1.0, f32::NAN] {
            let config = Config {
                max_frame_delta,
                ..Config::default()
            };
            assert!(matches!(
                GameState::with_config(config, 1),
                Err(ConfigError::FrameDelta(_))
            ));
        }
    }

    #[test]
    fn test_custom_config_plays() {
        let config = Config {
            field_width: 400.0,
            field_height: 300.0,
            paddle_height: 60.0,
            ..Config::default()
        };
        let mut state = GameState::with_config(config, 1).unwrap();
        state.start();
        state.key_down(Key::Down);
        for _ in 0..100 {
            state.tick();
        }
        assert_eq!(state.paddle(Side::Player).pos.y, 240.0);
        let ai_y = state.paddle(Side::Ai).pos.y;
        assert!((0.0..=240.0).contains(&ai_y));
    }
}
