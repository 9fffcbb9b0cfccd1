/// Game tuning parameters for Pong
///
/// Distances are logical surface units, velocities are units per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // Gap between paddle and side edge
    pub const PLAYER_SPEED: f32 = 8.0;
    pub const AI_SPEED: f32 = 6.0;
    pub const AI_TRACKING: f32 = 0.1; // Fraction of the gap closed per tick

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_INITIAL: f32 = 7.0;
    pub const BALL_SPEED_INCREASE: f32 = 0.5; // Added on every paddle hit
    pub const BALL_SERVE_DX: f32 = 5.0;
    pub const BALL_SERVE_DY: f32 = 5.0; // dy drawn from [-5, 5)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    // Score
    pub const WIN_SCORE: u8 = 5;

    // Net and HUD
    pub const NET_WIDTH: f32 = 2.0;
    pub const NET_DASH: f32 = 10.0;
    pub const NET_SPACING: f32 = 15.0;
    pub const SCORE_TEXT_Y: f32 = 50.0;
    pub const SCORE_TEXT_SIZE: f32 = 45.0;

    // Loop
    pub const TICKS_PER_SECOND: u32 = 60;
    pub const MAX_FRAME_DELTA: f32 = 0.25;
    pub const MAX_TICKS_PER_FRAME: u32 = 5;
}
