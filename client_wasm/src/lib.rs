//! WebGPU client for Pong
//!
//! Engine-free rendering using wgpu for the WebGPU API. The simulation,
//! session rules and frame loop live in `game_core`; this crate supplies the
//! drawing backend, the keyboard bridge and the JS exports.

#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod camera;
mod input;
mod logger;
mod mesh;
mod text;

#[cfg(target_arch = "wasm32")]
mod renderer;

#[cfg(target_arch = "wasm32")]
pub use bindings::*;

#[cfg(target_arch = "wasm32")]
mod bindings {
    use std::cell::RefCell;

    use game_core::{run_frame, FrameClock, GameState, Session};
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use crate::renderer::Renderer;
    use crate::{input, logger};

    /// Main client state
    pub struct Client {
        renderer: Renderer,
        game: GameState,
        clock: FrameClock,
    }

    impl Client {
        pub async fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
            let mut seed = [0u8; 8];
            getrandom::getrandom(&mut seed)
                .map_err(|e| JsValue::from_str(&format!("Failed to seed RNG: {}", e)))?;

            let game = GameState::new(u64::from_le_bytes(seed));
            let clock = FrameClock::new(&game.config);
            let renderer = Renderer::new(canvas, game.field.width, game.field.height)
                .await
                .map_err(|e| JsValue::from_str(&e))?;

            log::info!(
                "Pong client ready ({}x{} canvas)",
                renderer.size.0,
                renderer.size.1
            );
            Ok(Self {
                renderer,
                game,
                clock,
            })
        }

        /// Run owed ticks for this display refresh, then draw
        pub fn frame(&mut self, now_ms: f64) -> Result<(), JsValue> {
            let was_running = self.game.is_running();
            run_frame(&mut self.game, &mut self.clock, now_ms, &mut self.renderer);

            if was_running && self.game.session().is_ended() {
                if let Some(message) = self.game.winner_message() {
                    log::info!("{}", message);
                }
            }

            self.renderer.present().map_err(|e| JsValue::from_str(&e))
        }

        pub fn apply_action(&mut self, name: &str) -> Result<bool, JsValue> {
            let action = Session::parse_action(name)
                .ok_or_else(|| JsValue::from_str(&format!("Unknown action: {}", name)))?;
            Ok(self.game.handle(action).success)
        }
    }

    thread_local! {
        static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
    }

    fn with_client<T>(f: impl FnOnce(&mut Client) -> Result<T, JsValue>) -> Result<T, JsValue> {
        CLIENT.with(|cell| match cell.borrow_mut().as_mut() {
            Some(client) => f(client),
            None => Err(JsValue::from_str("Client not initialized")),
        })
    }

    #[wasm_bindgen]
    pub fn init_client(canvas: HtmlCanvasElement) -> js_sys::Promise {
        console_error_panic_hook::set_once();
        logger::init(log::LevelFilter::Info);

        wasm_bindgen_futures::future_to_promise(async move {
            let client = Client::new(canvas).await?;
            CLIENT.with(|cell| *cell.borrow_mut() = Some(client));
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Returns true when `key` is one of the paddle keys
    #[wasm_bindgen]
    pub fn key_down(key: &str) -> Result<bool, JsValue> {
        with_client(|client| Ok(input::apply_key(&mut client.game, key, true)))
    }

    #[wasm_bindgen]
    pub fn key_up(key: &str) -> Result<bool, JsValue> {
        with_client(|client| Ok(input::apply_key(&mut client.game, key, false)))
    }

    /// Feed a DOM keyboard event; paddle keys don't scroll the page
    #[wasm_bindgen]
    pub fn handle_key_event(event: KeyboardEvent, pressed: bool) -> Result<(), JsValue> {
        let handled = with_client(|client| {
            Ok(input::apply_key(&mut client.game, &event.key(), pressed))
        })?;
        if handled {
            event.prevent_default();
        }
        Ok(())
    }

    #[wasm_bindgen]
    pub fn start_game() -> Result<bool, JsValue> {
        with_client(|client| client.apply_action("START"))
    }

    #[wasm_bindgen]
    pub fn restart_game() -> Result<bool, JsValue> {
        with_client(|client| client.apply_action("RESTART"))
    }

    #[wasm_bindgen]
    pub fn frame(now_ms: f64) -> Result<(), JsValue> {
        with_client(|client| client.frame(now_ms))
    }

    /// `"Idle"`, `"Running"` or `"Ended"`
    #[wasm_bindgen]
    pub fn session_state() -> Result<String, JsValue> {
        with_client(|client| Ok(client.game.session().state_string()))
    }

    /// `[player, ai]`
    #[wasm_bindgen]
    pub fn scores() -> Result<Vec<u8>, JsValue> {
        with_client(|client| Ok(vec![client.game.score.player, client.game.score.ai]))
    }

    #[wasm_bindgen]
    pub fn winner_message() -> Result<Option<String>, JsValue> {
        with_client(|client| Ok(client.game.winner_message()))
    }

    #[wasm_bindgen]
    pub fn resize(width: u32, height: u32) -> Result<(), JsValue> {
        with_client(|client| {
            client.renderer.resize(width, height);
            Ok(())
        })
    }
}
