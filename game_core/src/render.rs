//! Frame drawing
//!
//! `render` reads a [`GameState`] and issues draw calls against a
//! [`Surface`]. Backends decide how those calls reach the screen.

use glam::Vec2;

use crate::{Color, GameState, Side};

/// A 2D drawing target in playfield units, origin top-left, y down.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// `pos` is the left end of the text baseline
    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);
}

/// Draw the whole frame: background, net, scores, paddles, ball
pub fn render<S: Surface>(state: &GameState, surface: &mut S) {
    let field = &state.field;
    let config = &state.config;

    surface.clear(Color::BLACK);

    for dash in field.net_dashes(config.net_dash, config.net_spacing, config.net_width) {
        surface.fill_rect(dash.min, dash.size(), Color::WHITE);
    }

    surface.fill_text(
        &state.score.player.to_string(),
        Vec2::new(field.width / 4.0, config.score_text_y),
        config.score_text_size,
        Color::WHITE,
    );
    surface.fill_text(
        &state.score.ai.to_string(),
        Vec2::new(3.0 * field.width / 4.0, config.score_text_y),
        config.score_text_size,
        Color::WHITE,
    );

    for side in [Side::Player, Side::Ai] {
        let paddle = state.paddle(side);
        surface.fill_rect(paddle.pos, paddle.size, paddle.color);
    }

    let ball = state.ball();
    surface.fill_circle(ball.pos, ball.radius, ball.color);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect { pos: Vec2, size: Vec2, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Text { text: String, pos: Vec2, size: f32, color: Color },
}

/// Surface that records calls instead of drawing them
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rects(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { pos, size, .. } => Some((*pos, *size)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn clear(&mut self, color: Color) {
        // A clear hides everything before it
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect { pos, size, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Score};

    #[test]
    fn test_frame_starts_with_black_clear() {
        let state = GameState::new(3);
        let mut list = DrawList::new();
        render(&state, &mut list);
        assert_eq!(list.commands[0], DrawCommand::Clear(Color::BLACK));
    }

    #[test]
    fn test_frame_contents() {
        let mut state = GameState::new(3);
        state.score = Score { player: 2, ai: 4 };
        let mut list = DrawList::new();
        render(&state, &mut list);

        // 41 net dashes + 2 paddles
        assert_eq!(list.rects().count(), 43);
        assert!(list.rects().any(|r| r == (Vec2::new(10.0, 250.0), Vec2::new(15.0, 100.0))));
        assert!(list.rects().any(|r| r == (Vec2::new(775.0, 250.0), Vec2::new(15.0, 100.0))));

        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["2", "4"]);

        let ball = state.ball();
        assert_eq!(
            list.commands.last(),
            Some(&DrawCommand::Circle {
                center: ball.pos,
                radius: 10.0,
                color: Color::WHITE,
            })
        );
    }

    #[test]
    fn test_score_text_positions() {
        let state = GameState::new(3);
        let mut list = DrawList::new();
        render(&state, &mut list);

        let positions: Vec<Vec2> = list
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { pos, .. } => Some(*pos),
                _ => None,
            })
            .collect();
        assert_eq!(positions, vec![Vec2::new(200.0, 50.0), Vec2::new(600.0, 50.0)]);
    }

    #[test]
    fn test_hud_follows_config() {
        let config = Config {
            field_width: 400.0,
            field_height: 300.0,
            net_spacing: 30.0,
            score_text_y: 20.0,
            score_text_size: 24.0,
            ..Config::default()
        };
        let state = GameState::with_config(config, 3).unwrap();
        let mut list = DrawList::new();
        render(&state, &mut list);

        // Net at y = 0, 30, ..., 300 plus two paddles
        assert_eq!(list.rects().count(), 11 + 2);
        assert!(list.rects().any(|r| r == (Vec2::new(199.0, 0.0), Vec2::new(2.0, 10.0))));

        let texts: Vec<(Vec2, f32)> = list
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { pos, size, .. } => Some((*pos, *size)),
                _ => None,
            })
            .collect();
        assert_eq!(
            texts,
            vec![(Vec2::new(100.0, 20.0), 24.0), (Vec2::new(300.0, 20.0), 24.0)]
        );
    }

    #[test]
    fn test_render_does_not_mutate() {
        let state = GameState::new(3);
        let before = (state.ball().pos, state.paddle(Side::Ai).pos, state.score);
        let mut list = DrawList::new();
        render(&state, &mut list);
        render(&state, &mut list);
        assert_eq!(before, (state.ball().pos, state.paddle(Side::Ai).pos, state.score));
    }
}
