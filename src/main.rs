//! Column Shooter entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use column_shooter::renderer::CanvasSurface;
    use column_shooter::sim::GameEngine;
    use column_shooter::{GameSettings, Viewport};

    /// Game instance holding the engine and its draw surface
    struct Game {
        engine: GameEngine,
        surface: CanvasSurface,
        last_time: f64,
    }

    impl Game {
        fn frame(&mut self, time: f64) {
            // First frame has no previous timestamp
            let delta = if self.last_time > 0.0 {
                (time - self.last_time) as f32
            } else {
                0.0
            };
            self.last_time = time;

            let viewport = self.engine.viewport();
            self.surface.clear(viewport.width, viewport.height);
            self.engine.render(&mut self.surface, delta);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Column Shooter starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas1")
            .ok_or("canvas #canvas1 not found")?
            .dyn_into()?;

        let width = window.inner_width()?.as_f64().unwrap_or(800.0);
        let height = window.inner_height()?.as_f64().unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let viewport = Viewport::new(width as f32, height as f32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into()?;
        let mut surface = CanvasSurface::new(ctx);
        surface.load_images(&document);

        let config = canvas.get_attribute("data-config");
        let mut settings = GameSettings::from_json_or_default(config.as_deref());
        if settings.seed.is_none() {
            settings.seed = Some(js_sys::Date::now() as u64);
        }

        let engine = GameEngine::new(settings, viewport)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let game = Rc::new(RefCell::new(Game {
            engine,
            surface,
            last_time: 0.0,
        }));

        setup_input_handlers(&window, game.clone())?;
        request_animation_frame(game);

        log::info!("Column Shooter running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        for name in ["keydown", "keyup"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut()
                    .engine
                    .handle_key_event(&event.type_(), &event.key());
            });
            window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            game.borrow_mut().engine.handle_pointer_event(
                &event.type_(),
                event.client_x() as f32,
                event.client_y() as f32,
            );
        });
        window.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window disappeared, stopping game loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Column Shooter (native) starting...");
    log::info!("Native mode runs a headless session - build for wasm32 to play");

    if let Err(e) = headless::run() {
        log::error!("Headless run failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use column_shooter::renderer::DrawList;
    use column_shooter::sim::GameEngine;
    use column_shooter::{ConfigError, GameSettings, Viewport};

    /// Frame delta in milliseconds (60 Hz)
    const FRAME_MS: f32 = 1000.0 / 60.0;

    /// Scripted session: move, fire a volley, let everything fly
    pub fn run() -> Result<(), ConfigError> {
        let settings = match std::env::args().nth(1) {
            Some(path) => match std::fs::read_to_string(&path) {
                Ok(json) => GameSettings::from_json(&json)?,
                Err(e) => {
                    log::warn!("Could not read {}: {}, using defaults", path, e);
                    GameSettings::default()
                }
            },
            None => GameSettings::default(),
        };

        let mut engine = GameEngine::new(settings, Viewport::new(800.0, 600.0))?;
        let mut surface = DrawList::new();

        let script: &[(u64, &str, &str)] = &[
            (10, "keydown", "ArrowDown"),
            (40, "keyup", "ArrowDown"),
            (45, "keydown", " "),
            (46, "keydown", " "),
            (47, "keydown", "ArrowUp"),
            (48, "keydown", " "),
            (60, "keyup", "ArrowUp"),
            (61, "keydown", "ArrowLeft"),
            (62, "keydown", " "),
            (70, "keyup", "ArrowLeft"),
            (120, "keydown", "d"),
        ];

        for frame in 0..600u64 {
            for &(_, name, key) in script.iter().filter(|(at, _, _)| *at == frame) {
                engine.handle_key_event(name, key);
            }
            surface.clear();
            engine.render(&mut surface, FRAME_MS);
        }

        let snapshot = engine.snapshot();
        log::info!(
            "Ran {} frames: {} projectiles in flight, {} columns active, {} draw calls last frame",
            snapshot.frame,
            snapshot.projectiles_active,
            snapshot.columns_active,
            surface.len()
        );
        Ok(())
    }
}
