//! Pursuit Field entry point
//!
//! Handles platform-specific initialization and runs the loop driver.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use pursuit_field::driver::Frontend;
    use pursuit_field::renderer::{RenderState, Vertex};
    use pursuit_field::{LoopState, Settings, SimulationContext};

    /// Canvas frontend: presents through wgpu, closes on page hide
    struct CanvasFrontend {
        render_state: RenderState,
        close_requested: bool,
    }

    impl Frontend for CanvasFrontend {
        fn close_requested(&mut self) -> bool {
            self.close_requested
        }

        fn present(&mut self, scene: &[Vertex]) {
            match self.render_state.render(scene) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    /// Session plus the frontend it draws to
    struct Game {
        ctx: SimulationContext,
        frontend: CanvasFrontend,
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Pursuit Field starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let canvas: HtmlCanvasElement = match document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into().ok())
        {
            Some(canvas) => canvas,
            None => {
                log::error!("No #canvas element");
                return;
            }
        };

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let ctx = match SimulationContext::new(settings, seed) {
            Ok(ctx) => ctx,
            Err(e) => {
                log::error!("Startup failed: {}", e);
                return;
            }
        };

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas)) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to create surface: {}", e);
                return;
            }
        };

        let adapter = match instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
        {
            Ok(adapter) => adapter,
            Err(e) => {
                log::error!("Failed to get adapter: {}", e);
                return;
            }
        };

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = match RenderState::new(surface, &adapter, width, height).await {
            Ok(render_state) => render_state,
            Err(e) => {
                log::error!("Failed to create device: {}", e);
                return;
            }
        };

        let game = Rc::new(RefCell::new(Game {
            ctx,
            frontend: CanvasFrontend {
                render_state,
                close_requested: false,
            },
        }));

        setup_close_handler(game.clone());

        // Start loop
        request_animation_frame(game);

        log::info!("Pursuit Field running!");
    }

    /// Leaving the page is the close request
    fn setup_close_handler(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().frontend.close_requested = true;
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let state = {
            let mut g = game.borrow_mut();
            let Game { ctx, frontend } = &mut *g;
            // time is ms since page load
            ctx.poll(time / 1000.0, frontend)
        };

        if state == LoopState::Running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pursuit_field::driver::{HeadlessFrontend, run_blocking};
    use pursuit_field::{Settings, SimulationContext};

    env_logger::init();
    log::info!("Pursuit Field (native, headless) starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });
    let mut frontend = HeadlessFrontend::new(settings.headless_frames);

    let result = SimulationContext::new(settings, seed)
        .and_then(|mut ctx| run_blocking(&mut ctx, &mut frontend));

    match result {
        Ok(()) => log::info!("Closed after {} frames", frontend.presented()),
        Err(e) => {
            if e.is_setup_error() {
                log::error!("Startup failed: {}", e);
            } else {
                log::error!("Simulation stopped: {}", e);
            }
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
