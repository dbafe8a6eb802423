//! Skyledge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, FocusEvent, HtmlElement, KeyboardEvent, Window};

    use skyledge::consts::{CANVAS_ID, OVERLAY_ID, TUNING_ID};
    use skyledge::platform::{StartupError, web};
    use skyledge::renderer::{RenderState, ShapeBatch, TextAlign, TextRun};
    use skyledge::{FrameDriver, Tuning};

    /// DOM spans mirroring the text runs of the last frame
    struct TextOverlay {
        document: Document,
        root: Option<HtmlElement>,
        spans: Vec<HtmlElement>,
        shown: Vec<TextRun>,
    }

    impl TextOverlay {
        fn new(document: &Document) -> Self {
            let root = document
                .get_element_by_id(OVERLAY_ID)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if root.is_none() {
                log::warn!("No #{} element, text will not be shown", OVERLAY_ID);
            }
            Self {
                document: document.clone(),
                root,
                spans: Vec::new(),
                shown: Vec::new(),
            }
        }

        fn sync(&mut self, runs: &[TextRun]) {
            let Some(root) = &self.root else {
                return;
            };
            // HUD text rarely changes between frames
            if self.shown.as_slice() == runs {
                return;
            }

            while self.spans.len() < runs.len() {
                let Some(span) = self
                    .document
                    .create_element("span")
                    .ok()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                else {
                    return;
                };
                let style = span.style();
                let _ = style.set_property("position", "absolute");
                let _ = style.set_property("white-space", "pre");
                let _ = style.set_property("line-height", "1");
                let _ = style.set_property("font-family", "Arial, sans-serif");
                if root.append_child(&span).is_err() {
                    return;
                }
                self.spans.push(span);
            }

            for (i, span) in self.spans.iter().enumerate() {
                match runs.get(i) {
                    Some(run) => show_run(span, run),
                    None => {
                        let _ = span.style().set_property("display", "none");
                    }
                }
            }
            self.shown = runs.to_vec();
        }
    }

    fn show_run(span: &HtmlElement, run: &TextRun) {
        let shift = match run.align {
            TextAlign::Left => "0",
            TextAlign::Center => "-50%",
            TextAlign::Right => "-100%",
        };
        span.set_text_content(Some(&run.text));

        let style = span.style();
        let _ = style.set_property("display", "block");
        let _ = style.set_property("left", &format!("{}px", run.pos.x));
        // Run position is the text baseline
        let _ = style.set_property("top", &format!("{}px", run.pos.y - run.size));
        let _ = style.set_property("font-size", &format!("{}px", run.size));
        let _ = style.set_property("color", &run.color.to_css());
        let _ = style.set_property("transform", &format!("translateX({shift})"));
    }

    /// Game instance holding all state
    struct Game {
        window: Window,
        driver: FrameDriver,
        batch: ShapeBatch,
        render_state: RenderState,
        overlay: TextOverlay,
    }

    impl Game {
        fn frame(&mut self, now_ms: f64) {
            self.driver.frame(now_ms, &mut self.batch);

            match self.render_state.render(&self.batch) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }

            self.overlay.sync(&self.batch.texts);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger unavailable: {e}").into());
        }

        log::info!("Skyledge starting...");

        match start().await {
            Ok(game) => {
                request_animation_frame(game);
                log::info!("Skyledge running!");
            }
            // No surface, no loop
            Err(e) => log::error!("Startup failed: {e}"),
        }
    }

    async fn start() -> Result<Rc<RefCell<Game>>, StartupError> {
        let window = web::window()?;
        let document = web::document(&window)?;
        let canvas = web::canvas(&document, CANVAS_ID)?;

        let tuning = match web::inline_text(&document, TUNING_ID) {
            Some(json) => Tuning::from_json_or_default(&json),
            None => Tuning::default(),
        };
        let viewport = Vec2::new(tuning.canvas_width, tuning.canvas_height);

        // Backing store follows the pixel ratio, layout stays in canvas units
        let dpr = window.device_pixel_ratio().max(1.0);
        let width = (viewport.x as f64 * dpr).round() as u32;
        let height = (viewport.y as f64 * dpr).round() as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let style = canvas.style();
        let _ = style.set_property("width", &format!("{}px", viewport.x));
        let _ = style.set_property("height", &format!("{}px", viewport.y));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| StartupError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| StartupError::NoAdapter(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, viewport).await?;

        let game = Rc::new(RefCell::new(Game {
            window: window.clone(),
            driver: FrameDriver::new(tuning),
            batch: ShapeBatch::default(),
            render_state,
            overlay: TextOverlay::new(&document),
        }));

        setup_input_handlers(&window, game.clone());

        Ok(game)
    }

    fn setup_input_handlers(window: &Window, game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                // Bound keys must not scroll the page
                if game.borrow_mut().driver.key_down(&event.code()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().driver.key_up(&event.code()) {
                    event.prevent_default();
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key-up events are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: FocusEvent| {
                game.borrow_mut().driver.release_all();
                log::debug!("Window blurred, input released");
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = game.borrow().window.clone();
        let closure = Closure::once(move |_timestamp: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
            return;
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let now_ms = web::now_ms(&g.window);
            g.frame(now_ms);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    web_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run of the simulation with scripted input
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use skyledge::consts::FRAME_MS;
    use skyledge::renderer::ShapeBatch;
    use skyledge::sim::TickEvent;
    use skyledge::{Action, FrameDriver, Tuning};

    pub const DEFAULT_FRAMES: u64 = 1800;

    /// Run right then left in two-second legs, hop now and then, fire at will
    fn script(frame: u64) -> [(Action, bool); 5] {
        let rightward = (frame / 120) % 2 == 0;
        [
            (Action::MoveRight, rightward),
            (Action::MoveLeft, !rightward),
            (Action::Jump, frame % 45 < 2),
            (Action::Attack, true),
            (Action::Reset, true),
        ]
    }

    #[derive(Debug, Default)]
    struct Tally {
        shots: u32,
        kills: u32,
        hits: u32,
        falls: u32,
        game_overs: u32,
    }

    pub fn run(tuning: Tuning, frames: u64) {
        let mut driver = FrameDriver::new(tuning);
        let mut batch = ShapeBatch::default();
        let mut tally = Tally::default();

        for frame in 0..frames {
            for (action, held) in script(frame) {
                driver.latch_mut().set(action, held);
            }

            let now_ms = frame as f64 * FRAME_MS;
            for event in driver.frame(now_ms, &mut batch) {
                match event {
                    TickEvent::ProjectileFired { .. } => tally.shots += 1,
                    TickEvent::EnemyKilled { .. } => tally.kills += 1,
                    TickEvent::PlayerHit { .. } => tally.hits += 1,
                    TickEvent::PlayerFell { .. } => tally.falls += 1,
                    TickEvent::GameOver { .. } => tally.game_overs += 1,
                }
            }
        }

        let state = driver.state();
        log::info!("Demo finished after {} frames: {:?}", driver.frames(), tally);
        log::info!(
            "Final score {}, health {}/{}, {} enemies left, last frame {} triangles",
            state.score,
            state.player.health,
            state.player.max_health,
            state.living_enemies(),
            batch.triangle_count()
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use skyledge::Tuning;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Skyledge (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}, using defaults", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };
    let frames = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(demo::DEFAULT_FRAMES);

    demo::run(tuning, frames);
}
