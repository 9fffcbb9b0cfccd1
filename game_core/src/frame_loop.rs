//! Fixed-tick game loop
//!
//! Display refreshes arrive at whatever rate the host manages. The clock
//! turns their timestamps into whole simulation ticks so the physics always
//! advances in identical steps, then the frame is drawn once.

use crate::{render, Config, GameState, Surface};

/// Converts frame timestamps into a number of fixed ticks
#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_seconds: f32,
    max_frame_delta: f32,
    max_ticks_per_frame: u32,
    accumulator: f32,
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(config: &Config) -> Self {
        Self {
            tick_seconds: config.tick_seconds(),
            max_frame_delta: config.max_frame_delta,
            max_ticks_per_frame: config.max_ticks_per_frame.max(1),
            accumulator: 0.0,
            last_ms: None,
        }
    }

    /// Number of ticks owed for a frame at `now_ms`.
    ///
    /// The first frame only primes the clock. Long stalls are clamped to
    /// `max_frame_delta` and at most `max_ticks_per_frame` ticks run per
    /// frame; leftover time is dropped rather than replayed later.
    pub fn advance(&mut self, now_ms: f64) -> u32 {
        let last = match self.last_ms.replace(now_ms) {
            Some(last) => last,
            None => return 0,
        };

        // Clamp dt to prevent large jumps (and clock going backwards)
        let dt = (((now_ms - last) / 1000.0) as f32).clamp(0.0, self.max_frame_delta);
        self.accumulator += dt;

        let mut ticks = 0;
        while self.accumulator >= self.tick_seconds && ticks < self.max_ticks_per_frame {
            self.accumulator -= self.tick_seconds;
            ticks += 1;
        }
        if ticks == self.max_ticks_per_frame {
            self.accumulator = self.accumulator.min(self.tick_seconds);
        }
        ticks
    }
}

/// Run the ticks owed at `now_ms`, then draw one frame
pub fn run_frame<S: Surface>(
    state: &mut GameState,
    clock: &mut FrameClock,
    now_ms: f64,
    surface: &mut S,
) -> u32 {
    let ticks = clock.advance(now_ms);
    for _ in 0..ticks {
        state.tick();
    }
    render(state, surface);
    ticks
}

/// Deterministic headless loop: tick and draw until the session stops
/// running or `max_ticks` have elapsed. Returns the ticks run.
pub fn run_ticks<S: Surface>(state: &mut GameState, max_ticks: u32, surface: &mut S) -> u32 {
    let mut ticks = 0;
    while state.is_running() && ticks < max_ticks {
        state.tick();
        render(state, surface);
        ticks += 1;
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DrawList;

    #[test]
    fn test_first_frame_primes_clock() {
        let mut clock = FrameClock::new(&Config::new());
        assert_eq!(clock.advance(1000.0), 0);
    }

    #[test]
    fn test_one_tick_per_refresh_at_60hz() {
        let mut clock = FrameClock::new(&Config::new());
        clock.advance(0.0);
        let mut total = 0;
        for frame in 1..=60 {
            total += clock.advance(frame as f64 * 1000.0 / 60.0 + 0.01);
        }
        assert_eq!(total, 60);
    }

    #[test]
    fn test_fast_display_accumulates() {
        let mut clock = FrameClock::new(&Config::new());
        clock.advance(0.0);
        // 120 Hz display: roughly every other frame ticks
        let mut total = 0;
        for frame in 1..=120 {
            total += clock.advance(frame as f64 * 1000.0 / 120.0 + 0.01);
        }
        assert!((59..=60).contains(&total), "got {}", total);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = FrameClock::new(&Config::new());
        clock.advance(0.0);
        assert_eq!(clock.advance(10_000.0), 5);
        // Leftover time is capped at one tick, not replayed
        assert!(clock.accumulator <= clock.tick_seconds);
        assert_eq!(clock.advance(10_000.0 + 1000.0 / 60.0 + 0.01), 2);
    }

    #[test]
    fn test_clock_going_backwards() {
        let mut clock = FrameClock::new(&Config::new());
        clock.advance(500.0);
        assert_eq!(clock.advance(100.0), 0);
    }

    #[test]
    fn test_run_ticks_needs_running_session() {
        let mut state = GameState::new(5);
        let mut list = DrawList::new();
        assert_eq!(run_ticks(&mut state, 100, &mut list), 0);
        assert!(list.commands.is_empty());

        state.start();
        assert_eq!(run_ticks(&mut state, 100, &mut list), 100);
        assert!(!list.commands.is_empty());
    }

    #[test]
    fn test_run_frame_renders_even_without_ticks() {
        let mut state = GameState::new(5);
        let mut clock = FrameClock::new(&state.config);
        let mut list = DrawList::new();
        assert_eq!(run_frame(&mut state, &mut clock, 0.0, &mut list), 0);
        assert!(!list.commands.is_empty());
    }
}
