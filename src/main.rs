//! Drift Ball entry point
//!
//! Mounts the canvas and drives the frame loop in the browser; natively it
//! runs a headless simulation and logs what it would draw.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use drift_ball::Settings;
    use drift_ball::consts::CONTAINER_ID;
    use drift_ball::platform::HostError;
    use drift_ball::platform::web::{WebSurface, find_container};
    use drift_ball::renderer::{RenderStyle, render};
    use drift_ball::sim::{PerlinNoise, SimState, tick};

    /// Animation instance holding all state
    struct App {
        state: SimState,
        noise: PerlinNoise,
        settings: Settings,
        style: RenderStyle,
        surface: WebSurface,
    }

    impl App {
        fn mount(container_id: &str) -> Result<Self, HostError> {
            let container = find_container(container_id)?;
            let settings = Settings::load(&container);
            let surface = WebSurface::mount(container, &settings)?;

            let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
            let state = SimState::new(seed, surface.size(), &settings.tuning);
            log::info!("Simulation initialized with seed: {}", seed);

            Ok(Self {
                state,
                noise: PerlinNoise::new(seed),
                style: RenderStyle::from_settings(&settings),
                settings,
                surface,
            })
        }

        /// Advance one frame
        fn update(&mut self) {
            tick(&mut self.state, &self.noise, &self.settings.tuning);
        }

        /// Draw the current frame
        fn render(&mut self) {
            if let Err(e) = render(
                &mut self.surface,
                &self.state.ball,
                self.state.size,
                &self.style,
            ) {
                log::warn!("Render error: {}", e);
            }
        }

        /// Follow the container's new width
        fn on_resize(&mut self) {
            let size = self.surface.measure(&self.settings);
            if size == self.state.size {
                return;
            }
            if let Err(e) = self.surface.resize(size) {
                log::warn!("Canvas resize failed: {}", e);
                return;
            }
            self.state.resize(size);
            log::debug!("Resized to {}x{}", size.width, size.height);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        let app = match App::mount(CONTAINER_ID) {
            Ok(app) => Rc::new(RefCell::new(app)),
            Err(e) => {
                log::warn!("Skipping animation: {}", e);
                return;
            }
        };

        setup_resize_handler(app.clone());
        request_animation_frame(app);

        log::info!("Drift Ball running!");
    }

    fn setup_resize_handler(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window, resize tracking disabled");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().on_resize();
        });
        if let Err(e) =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        {
            log::warn!("Resize listener not registered: {:?}", e);
        }
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::warn!("No window, animation stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            frame(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::warn!("Animation frame request failed, stopping: {:?}", e);
        }
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            a.update();
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Ticks to simulate when no count is given
#[cfg(not(target_arch = "wasm32"))]
const DEMO_TICKS: u64 = 1200;
/// Container width the demo pretends to measure
#[cfg(not(target_arch = "wasm32"))]
const DEMO_WIDTH: f64 = 640.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use drift_ball::Settings;
    use drift_ball::platform::surface_size;
    use drift_ball::renderer::{DrawList, RenderStyle, render};
    use drift_ball::sim::{PerlinNoise, SimState, tick};

    env_logger::init();
    log::info!("Drift Ball (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to see the animation");

    let ticks = match std::env::args().nth(1).map(|arg| arg.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::warn!("Invalid tick count ({}), using {}", e, DEMO_TICKS);
            DEMO_TICKS
        }
        None => DEMO_TICKS,
    };

    let settings = Settings::default();
    let seed = settings.seed.unwrap_or(0);
    let size = surface_size(DEMO_WIDTH, &settings);
    let noise = PerlinNoise::new(seed);
    let style = RenderStyle::from_settings(&settings);
    let mut state = SimState::new(seed, size, &settings.tuning);
    let mut frame = DrawList::new();

    for _ in 0..ticks {
        tick(&mut state, &noise, &settings.tuning);
        // DrawList never fails
        let Ok(()) = render(&mut frame, &state.ball, state.size, &style);

        if state.time_ticks % 60 == 0 {
            let ball = &state.ball;
            log::info!(
                "tick {:>5}: pos=({:6.1}, {:6.1}) speed={:.2} bounced={} draws={}",
                state.time_ticks,
                ball.pos.x,
                ball.pos.y,
                ball.vel.length(),
                ball.has_bounced,
                frame.len()
            );
        }
    }

    log::info!("Finished {} ticks on a {}x{} surface", ticks, size.width, size.height);
}
