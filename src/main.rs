//! Claw Machine entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use claw_machine::renderer::RenderState;
    use claw_machine::reward::{END_PAGE, RevealFooter};
    use claw_machine::sim::{Control, GameState, autopilot, scene, tick};
    use claw_machine::{GiftCatalog, RewardOverlay, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        settings: Settings,
        overlay: RewardOverlay,
        catalog: GiftCatalog,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(settings: Settings, seed: u64) -> Self {
            Self {
                state: scene::build(&settings, seed),
                render_state: None,
                settings,
                overlay: RewardOverlay::new(),
                catalog: GiftCatalog::builtin(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run one simulation tick and route its events to the overlay
        fn update(&mut self, time: f64) {
            if self.settings.demo_mode {
                self.state.controls = autopilot::demo_controls(&self.state);
            }
            tick(&mut self.state);

            let events = self.state.drain_events();
            if self.overlay.handle_events(&events) {
                log::info!("Revealing reward #{}", self.overlay.reveal_index);
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update reward overlay and HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.query_selector("#hud-gifts .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.gifts.len().to_string()));
            }

            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    let _ = el.set_attribute("class", "hud-item");
                    el.set_text_content(Some(&format!("{} fps", self.fps)));
                } else {
                    let _ = el.set_attribute("class", "hud-item hidden");
                }
            }

            let Some(panel) = document.get_element_by_id("reward") else {
                return;
            };
            let Some(entry) = self.overlay.current(&self.catalog) else {
                let _ = panel.set_attribute("class", "hidden");
                return;
            };
            let _ = panel.set_attribute("class", "");

            if let Some(el) = document.get_element_by_id("reward-image") {
                let _ = el.set_attribute("src", &entry.image);
                let _ = el.set_attribute("alt", &entry.name);
            }
            if let Some(el) = document.get_element_by_id("reward-name") {
                el.set_text_content(Some(&entry.name));
            }
            if let Some(el) = document.get_element_by_id("reward-describe") {
                el.set_text_content(Some(&entry.describe));
            }

            let footer = document.get_element_by_id("reward-footer");
            let end_link = document.get_element_by_id("reward-end");
            match self.overlay.footer() {
                RevealFooter::MoreToCome { remaining } => {
                    if let Some(el) = footer {
                        let _ = el.set_attribute("class", "");
                        el.set_text_content(Some(&format!(
                            "{} more until the special gift",
                            remaining
                        )));
                    }
                    if let Some(el) = end_link {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
                RevealFooter::Terminal => {
                    if let Some(el) = footer {
                        let _ = el.set_attribute("class", "hidden");
                    }
                    if let Some(el) = end_link {
                        let _ = el.set_attribute("class", "");
                        let _ = el.set_attribute("href", END_PAGE);
                    }
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Claw Machine starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let seed = settings.seed_or(js_sys::Date::now() as u64);
        let keyboard = settings.keyboard_controls;
        let game = Rc::new(RefCell::new(Game::new(settings, seed)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_joystick(game.clone());
        if keyboard {
            setup_keyboard(game.clone());
        }
        setup_reward_close(game.clone());
        setup_focus_release(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Claw Machine running!");
    }

    /// Wire a DOM event on `el` to a named joystick event
    fn bind_hold(
        el: &web_sys::Element,
        game: &Rc<RefCell<Game>>,
        name: &'static str,
        event: &str,
        active: bool,
    ) {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            if event.type_().starts_with("touch") {
                event.prevent_default();
            }
            if !game.borrow_mut().state.controls.apply_named(name, active) {
                log::warn!("Unknown joystick control: {}", name);
            }
        });
        let _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// On-screen joystick: one button per control, id `btn-<name>`
    fn setup_joystick(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for control in Control::ALL {
            let name = control.name();
            let id = format!("btn-{}", name);
            let Some(btn) = document.get_element_by_id(&id) else {
                log::warn!("Missing joystick button #{}", id);
                continue;
            };
            for event in ["touchstart", "mousedown"] {
                bind_hold(&btn, &game, name, event, true);
            }
            for event in ["touchend", "touchcancel", "mouseup", "mouseleave"] {
                bind_hold(&btn, &game, name, event, false);
            }
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "i" | "I" => {
                        let demo = g.settings.toggle_demo_mode();
                        g.state.controls.clear();
                        g.settings.save();
                        log::info!("Demo mode: {}", demo);
                    }
                    "Escape" => g.overlay.dismiss(),
                    key => {
                        if let Some(control) = Control::from_key(key) {
                            event.prevent_default();
                            g.state.controls.set(control, true);
                        }
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(control) = Control::from_key(&event.key()) {
                    game.borrow_mut().state.controls.set(control, false);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_reward_close(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("reward-close") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                g.overlay.dismiss();
                log::info!("Reward dismissed, next reveal #{}", g.overlay.reveal_index);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Release held controls when the window loses focus
    fn setup_focus_release(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().state.controls.clear();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
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
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use claw_machine::reward::RevealFooter;
    use claw_machine::sim::{GameEvent, autopilot, scene, tick};
    use claw_machine::{GiftCatalog, RewardOverlay, Settings};

    /// Demo runs give up after this many ticks (~5 minutes at 60 Hz)
    const MAX_DEMO_TICKS: u64 = 60 * 60 * 5;

    env_logger::init();
    log::info!("Claw Machine (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let settings = Settings::load_from(path.as_deref());
    let seed = settings.seed_or(
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default(),
    );

    let mut state = scene::build(&settings, seed);
    let catalog = GiftCatalog::builtin();
    let mut overlay = RewardOverlay::new();

    while !state.gifts.is_empty() && state.time_ticks < MAX_DEMO_TICKS {
        state.controls = autopilot::demo_controls(&state);
        tick(&mut state);

        let events = state.drain_events();
        if !events.iter().any(|e| matches!(e, GameEvent::GiftCaptured { .. })) {
            continue;
        }
        overlay.handle_events(&events);
        if let Some(entry) = overlay.current(&catalog) {
            let footer = match overlay.footer() {
                RevealFooter::MoreToCome { remaining } => {
                    format!("{} more until the special gift", remaining)
                }
                RevealFooter::Terminal => "special gift reached".to_string(),
            };
            println!(
                "tick {:>6}: reward #{} {} - {} ({})",
                state.time_ticks, overlay.reveal_index, entry.name, entry.describe, footer
            );
        }
        // Headless player dismisses immediately
        overlay.dismiss();
    }

    println!(
        "Captured {} of {} gifts in {} ticks (seed {})",
        state.captured_count(),
        state.initial_gift_count,
        state.time_ticks,
        seed
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
