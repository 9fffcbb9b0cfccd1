use crate::params::Params;
use thiserror::Error;

/// Rejected tuning values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("playfield must have a positive finite size, got {width}x{height}")]
    EmptyField { width: f32, height: f32 },
    #[error("paddle height must be positive and fit the playfield, got {0}")]
    PaddleHeight(f32),
    #[error("paddle width must be positive, got {0}")]
    PaddleWidth(f32),
    #[error("ball radius must be positive, got {0}")]
    BallRadius(f32),
    #[error("{name} must be finite and non-negative, got {value}")]
    OutOfRange { name: &'static str, value: f32 },
    #[error("net dash and spacing must be positive, got {dash}/{spacing}")]
    Net { dash: f32, spacing: f32 },
    #[error("win score must be at least 1")]
    WinScore,
    #[error("tick rate must be at least 1")]
    TickRate,
    #[error("max frame delta must be positive and finite, got {0}")]
    FrameDelta(f32),
    #[error("max ticks per frame must be at least 1")]
    TicksPerFrame,
}

fn positive(x: f32) -> bool {
    x.is_finite() && x > 0.0
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub player_speed: f32,
    pub ai_speed: f32,
    pub ai_tracking: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increase: f32,
    pub ball_serve_dx: f32,
    pub ball_serve_dy: f32,
    pub max_bounce_angle: f32,
    pub net_width: f32,
    pub net_dash: f32,
    pub net_spacing: f32,
    pub score_text_y: f32,
    pub score_text_size: f32,
    pub win_score: u8,
    pub ticks_per_second: u32,
    pub max_frame_delta: f32,
    pub max_ticks_per_frame: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            player_speed: Params::PLAYER_SPEED,
            ai_speed: Params::AI_SPEED,
            ai_tracking: Params::AI_TRACKING,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_serve_dx: Params::BALL_SERVE_DX,
            ball_serve_dy: Params::BALL_SERVE_DY,
            max_bounce_angle: Params::MAX_BOUNCE_ANGLE,
            net_width: Params::NET_WIDTH,
            net_dash: Params::NET_DASH,
            net_spacing: Params::NET_SPACING,
            score_text_y: Params::SCORE_TEXT_Y,
            score_text_size: Params::SCORE_TEXT_SIZE,
            win_score: Params::WIN_SCORE,
            ticks_per_second: Params::TICKS_PER_SECOND,
            max_frame_delta: Params::MAX_FRAME_DELTA,
            max_ticks_per_frame: Params::MAX_TICKS_PER_FRAME,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject values that would make the hit-offset division, the clamp
    /// ranges or the frame clock degenerate. NaN fails every check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.field_width) || !positive(self.field_height) {
            return Err(ConfigError::EmptyField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if !positive(self.paddle_height) || self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleHeight(self.paddle_height));
        }
        if !positive(self.paddle_width) {
            return Err(ConfigError::PaddleWidth(self.paddle_width));
        }
        if !positive(self.ball_radius) {
            return Err(ConfigError::BallRadius(self.ball_radius));
        }

        let non_negative = [
            ("paddle margin", self.paddle_margin),
            ("player speed", self.player_speed),
            ("ai speed", self.ai_speed),
            ("ai tracking", self.ai_tracking),
            ("initial ball speed", self.ball_speed_initial),
            ("ball speed increase", self.ball_speed_increase),
            ("serve dx", self.ball_serve_dx),
            ("serve dy", self.ball_serve_dy),
            ("max bounce angle", self.max_bounce_angle),
            ("net width", self.net_width),
            ("score text size", self.score_text_size),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::OutOfRange { name, value });
            }
        }
        if !self.score_text_y.is_finite() {
            return Err(ConfigError::OutOfRange {
                name: "score text y",
                value: self.score_text_y,
            });
        }
        if !positive(self.net_dash) || !positive(self.net_spacing) {
            return Err(ConfigError::Net {
                dash: self.net_dash,
                spacing: self.net_spacing,
            });
        }

        if self.win_score == 0 {
            return Err(ConfigError::WinScore);
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::TickRate);
        }
        if !positive(self.max_frame_delta) {
            return Err(ConfigError::FrameDelta(self.max_frame_delta));
        }
        if self.max_ticks_per_frame == 0 {
            return Err(ConfigError::TicksPerFrame);
        }
        Ok(())
    }

    /// Left edge of the paddle on the given side
    pub fn paddle_x(&self, side: crate::Side) -> f32 {
        match side {
            crate::Side::Player => self.paddle_margin,
            crate::Side::Ai => self.field_width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Top edge of a paddle centred vertically
    pub fn paddle_start_y(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp paddle top edge to the playfield
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.field_height - self.paddle_height)
    }

    /// Seconds covered by one simulation tick
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.ticks_per_second as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 10.0, "Player paddle X position");
        assert_eq!(config.paddle_x(Side::Ai), 775.0, "AI paddle X position");
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-20.0), 0.0);
        assert_eq!(config.clamp_paddle_y(1000.0), 500.0);
        assert_eq!(config.clamp_paddle_y(250.0), 250.0);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::new().validate(), Ok(()));
        assert_eq!(Config::new().paddle_start_y(), 250.0);
    }

    #[test]
    fn test_zero_paddle_height_rejected() {
        let config = Config {
            paddle_height: 0.0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::PaddleHeight(0.0)));
    }

    #[test]
    fn test_zero_win_score_rejected() {
        let config = Config {
            win_score: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::WinScore));
    }

    #[test]
    fn test_nan_sizes_rejected() {
        let config = Config {
            paddle_height: f32::NAN,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::PaddleHeight(h)) if h.is_nan()));

        let config = Config {
            field_width: f32::NAN,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyField { .. })));

        let config = Config {
            ball_radius: f32::INFINITY,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::BallRadius(_))));
    }

    #[test]
    fn test_frame_loop_settings_rejected() {
        for delta in [-1.0, 0.0, f32::NAN, f32::INFINITY] {
            let config = Config {
                max_frame_delta: delta,
                ..Config::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::FrameDelta(_))),
                "max_frame_delta {} accepted",
                delta
            );
        }

        let config = Config {
            max_ticks_per_frame: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TicksPerFrame));
    }

    #[test]
    fn test_speeds_and_gains_must_be_finite() {
        let config = Config {
            ai_tracking: f32::NAN,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { name: "ai tracking", .. })
        ));

        let config = Config {
            player_speed: -8.0,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::OutOfRange {
                name: "player speed",
                value: -8.0
            })
        );
    }

    #[test]
    fn test_zero_net_spacing_rejected() {
        let config = Config {
            net_spacing: 0.0,
            ..Config::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Net {
                dash: 10.0,
                spacing: 0.0
            })
        );
    }
}
