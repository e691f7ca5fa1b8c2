//! Neon Drift entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement};

    use neon_drift::consts::MAX_FRAME_DT;
    use neon_drift::render::{CanvasSurface, draw_frame};
    use neon_drift::sim::{Action, GameEvent, GameState, GameStatus, InputState, tick};
    use neon_drift::storage::LocalStorage;
    use neon_drift::{BestScore, Settings};

    const READY_MSG: &str =
        "Use WASD or Arrow keys to dodge the neon hazards and grab energy orbs. Tap to start.";
    const PLAYING_MSG: &str = "Stay alive and collect glowing energy orbs!";
    const PAUSED_MSG: &str = "Paused — press Space to continue.";
    const HIT_MSG: &str = "Ouch! Avoid the hazard.";
    const PICKUP_MSG: &str = "Nice! Energy boost collected.";
    const GAME_OVER_MSG: &str = "Game Over! Press R, Space, or tap to restart.";

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        best: BestScore,
        settings: Settings,
        surface: CanvasSurface,
        last_time: f64,
    }

    impl Game {
        /// Advance one frame and react to simulation events
        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                (((time - self.last_time) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT)
            } else {
                0.0
            };
            self.last_time = time;

            let was_playing = self.state.status == GameStatus::Playing;
            tick(&mut self.state, &self.input, dt);

            for event in self.state.events.drain(..) {
                match event {
                    GameEvent::LifeLost { remaining } => {
                        if remaining > 0 {
                            set_message(HIT_MSG);
                        }
                    }
                    GameEvent::PickupCollected => set_message(PICKUP_MSG),
                    GameEvent::GameOver { final_score } => {
                        self.best.record(final_score as f64, &LocalStorage);
                        set_message(GAME_OVER_MSG);
                    }
                }
            }

            if !was_playing && self.state.status == GameStatus::Playing {
                set_message(PLAYING_MSG);
            }
        }

        fn render(&mut self) {
            draw_frame(&self.state, &self.settings, &mut self.surface);
        }

        /// Mirror score/best/lives into the HUD
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            set_text(&document, "hud-score", &self.state.displayed_score.to_string());
            set_text(&document, "hud-best", &self.best.value().to_string());
            set_text(&document, "hud-lives", &self.state.lives.to_string());
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }

    fn set_message(text: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            set_text(&document, "message", text);
        }
    }

    /// Size the backing store to the canvas client box
    fn fit_canvas(canvas: &HtmlCanvasElement) -> (f32, f32) {
        let width = (canvas.client_width().max(1)) as u32;
        let height = (canvas.client_height().max(1)) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        (width as f32, height as f32)
    }

    /// True for key events aimed at text-entry controls
    fn targets_text_entry(event: &web_sys::KeyboardEvent) -> bool {
        event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA"))
            .unwrap_or(false)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Neon Drift starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("no #canvas element, not starting");
            return;
        };

        // Without a 2D context the frame loop never starts; the page
        // stays inert instead of crashing.
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
        else {
            log::error!("no 2d context, not starting");
            return;
        };

        let (width, height) = fit_canvas(&canvas);
        let seed = js_sys::Date::now() as u64;
        let best = BestScore::load(&LocalStorage);
        let settings = Settings::load(&LocalStorage);

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(width, height, seed),
            input: InputState::default(),
            best,
            settings,
            surface: CanvasSurface::new(ctx, width, height),
            last_time: 0.0,
        }));

        set_message(READY_MSG);
        log::info!("game initialized with seed {seed}, best {}", best.value());

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(&canvas, game.clone());
        setup_auto_pause(game.clone());

        request_animation_frame(game);

        log::info!("Neon Drift running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard press
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if event.repeat() || targets_text_entry(&event) {
                    return;
                }
                let Some(action) = Action::from_code(&event.code()) else {
                    return;
                };
                let mut g = game.borrow_mut();
                match action {
                    Action::PauseToggle => {
                        event.prevent_default();
                        match g.state.status {
                            GameStatus::GameOver => g.state.restart(),
                            _ => {
                                g.state.toggle_pause();
                                if g.state.status == GameStatus::Paused {
                                    set_message(PAUSED_MSG);
                                }
                            }
                        }
                    }
                    Action::Restart => g.state.restart(),
                    _ => g.input.apply(action, true),
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard release
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(action) = Action::from_code(&event.code()) {
                    game.borrow_mut().input.apply(action, false);
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer/tap (re)starts from non-playing states
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::PointerEvent| {
                game.borrow_mut().state.pointer_pressed();
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = fit_canvas(&canvas);
            let mut g = game.borrow_mut();
            g.state.resize(width, height);
            g.surface.set_size(width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut g = game.borrow_mut();
                if g.state.status == GameStatus::Playing {
                    g.state.toggle_pause();
                    set_message(PAUSED_MSG);
                    log::info!("auto-paused (tab hidden)");
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neon_drift::render::{RecordingSurface, draw_frame};
    use neon_drift::sim::{GameState, InputState, tick};
    use neon_drift::storage::MemoryStore;
    use neon_drift::{BestScore, Settings};

    env_logger::init();
    log::info!("Neon Drift (native) starting...");
    log::info!("Native mode runs a headless demo - serve the wasm build for the web version");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1);

    let store = MemoryStore::new();
    let settings = Settings::load(&store);
    let mut best = BestScore::load(&store);
    let mut state = GameState::new(800.0, 600.0, seed);
    state.restart();

    // Thirty simulated seconds, weaving left and right
    let mut input = InputState::default();
    for frame in 0..(30 * 60) {
        input.left = (frame / 120) % 2 == 0;
        input.right = !input.left;
        tick(&mut state, &input, 1.0 / 60.0);
        state.events.clear();
    }

    best.record(state.score, &store);

    let mut surface = RecordingSurface::new(800.0, 600.0);
    draw_frame(&state, &settings, &mut surface);

    println!(
        "demo run: seed {seed}, status {:?}, score {}, lives {}, best {}",
        state.status,
        state.displayed_score,
        state.lives,
        best.value()
    );
    println!(
        "frame draws {} commands ({} hazards, {} pickups on screen)",
        surface.commands.len(),
        state.hazards.len(),
        state.pickups.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
