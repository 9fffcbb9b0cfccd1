use glam::Vec2;

use crate::map::Aabb;
use crate::Config;

/// Which end of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player, // Left, keyboard controlled
    Ai,     // Right, tracks the ball
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Ai => "AI",
        }
    }
}

/// RGBA colour, 0..1 per channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);
    pub const BLACK: Color = Color([0.0, 0.0, 0.0, 1.0]);
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // Top-left corner
    pub size: Vec2,
    pub speed: f32,
    pub color: Color,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        let speed = match side {
            Side::Player => config.player_speed,
            Side::Ai => config.ai_speed,
        };
        Self {
            side,
            pos: Vec2::new(config.paddle_x(side), config.paddle_start_y()),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            speed,
            color: Color::WHITE,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Centre
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32, // Scalar speed, applied to `vel` only on a paddle bounce
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed,
            color: Color::WHITE,
        }
    }

    /// Reset ball to center with random serve direction
    pub fn reset(&mut self, center: Vec2, config: &Config, rng: &mut crate::GameRng) {
        use rand::Rng;

        self.pos = center;
        self.speed = config.ball_speed_initial;

        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let dy = rng.0.gen_range(-1.0f32..1.0) * config.ball_serve_dy;
        self.vel = Vec2::new(dir * config.ball_serve_dx, dy);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::around_circle(self.pos, self.radius)
    }
}

/// Movement intent for the keyboard paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marks a paddle steered by proportional ball tracking
#[derive(Debug, Clone, Copy)]
pub struct AiTracker {
    pub gain: f32,
}

impl AiTracker {
    pub fn new(gain: f32) -> Self {
        Self { gain }
    }
}
