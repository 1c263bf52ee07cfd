//! NBL simulator entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, HtmlElement, KeyboardEvent, MouseEvent};

    use glam::Vec2;
    use nbl_sim::consts::SIM_DT;
    use nbl_sim::hud::{BannerChange, TASK_COMPLETE_LABEL};
    use nbl_sim::parallax::{Parallax, ParallaxTransform, ViewRect};
    use nbl_sim::renderer::{RenderState, scene};
    use nbl_sim::sim::{Bounds, SimEvent, SimState, TickInput, tick};
    use nbl_sim::{HeldKeys, StatusBanner, TickClock, Tuning};

    /// Session instance holding all host-side state
    struct Game {
        tuning: Tuning,
        state: SimState,
        bounds: Bounds,
        keys: HeldKeys,
        clock: TickClock,
        banner: StatusBanner,
        render_state: Option<RenderState>,
        last_time: f64,
        task_label: Option<Element>,
        status_message: Option<HtmlElement>,
    }

    impl Game {
        fn new(tuning: Tuning, bounds: Bounds) -> Self {
            let document = web_sys::window().and_then(|w| w.document());
            let task_label = document
                .as_ref()
                .and_then(|d| d.get_element_by_id("taskTargetName"));
            let status_message = document
                .as_ref()
                .and_then(|d| d.get_element_by_id("statusMessage"))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if task_label.is_none() {
                log::warn!("#taskTargetName not found - task label disabled");
            }
            if status_message.is_none() {
                log::warn!("#statusMessage not found - completion message disabled");
            }

            Self {
                state: SimState::new(&tuning, bounds),
                banner: StatusBanner::new(tuning.message_hide_secs),
                tuning,
                bounds,
                keys: HeldKeys::new(),
                clock: TickClock::new(),
                render_state: None,
                last_time: 0.0,
                task_label,
                status_message,
            }
        }

        /// Run simulation ticks and advance the message countdown
        fn update(&mut self, dt: f32) {
            let ticks = self.clock.advance(dt);
            if self.state.is_complete() {
                // Completed sessions are frozen; only the message countdown runs
                self.update_banner(dt);
                return;
            }
            for _ in 0..ticks {
                let input = TickInput::new(self.keys.controls(), self.bounds);
                if let Some(SimEvent::TaskComplete { tick: at }) = tick(&mut self.state, &input) {
                    log::info!("Station-keeping complete on tick {}", at);
                    self.on_task_complete();
                }
            }

            self.update_banner(dt);
        }

        fn update_banner(&mut self, dt: f32) {
            if self.banner.is_visible() && self.banner.update(dt) == Some(BannerChange::Hidden) {
                self.set_status_visible(false);
            }
        }

        fn on_task_complete(&mut self) {
            if let Some(label) = &self.task_label {
                label.set_text_content(Some(TASK_COMPLETE_LABEL));
            }
            if let Some(el) = &self.status_message {
                el.set_inner_html(self.banner.message());
            }
            self.banner.show();
            self.set_status_visible(true);
        }

        fn set_status_visible(&self, visible: bool) {
            if let Some(el) = &self.status_message {
                let style = el.style();
                let _ = style.set_property("visibility", if visible { "visible" } else { "hidden" });
                let _ = style.set_property("opacity", if visible { "1" } else { "0" });
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = scene::build(&self.state, self.bounds);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size;
                        let logical = render_state.logical_size;
                        render_state.resize(w, h, logical);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Match the canvas backing store to its CSS size and re-place actors
        fn resize(&mut self, canvas: &HtmlCanvasElement) {
            let (bounds, width, height) = canvas_size(canvas);
            canvas.set_width(width);
            canvas.set_height(height);
            self.bounds = bounds;
            self.state.relayout(&self.tuning, bounds);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height, (bounds.width, bounds.height));
            }
        }
    }

    /// CSS-pixel bounds plus the physical backing-store size
    fn canvas_size(canvas: &HtmlCanvasElement) -> (Bounds, u32, u32) {
        let dpr = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        let client_w = canvas.client_width().max(1);
        let client_h = canvas.client_height().max(1);
        (
            Bounds::new(client_w as f32, client_h as f32),
            (client_w as f64 * dpr) as u32,
            (client_h as f64 * dpr) as u32,
        )
    }

    /// Tuning from the canvas `data-tuning` attribute, defaults otherwise
    fn load_tuning(canvas: &HtmlCanvasElement) -> Tuning {
        match canvas.get_attribute("data-tuning") {
            Some(json) => match Tuning::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from data-tuning");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring data-tuning: {}", e);
                    Tuning::default()
                }
            },
            None => {
                log::info!("Using default tuning");
                Tuning::default()
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("NBL simulator starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("spaceCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = load_tuning(&canvas);
        setup_parallax(&document, &tuning);

        let (bounds, width, height) = canvas_size(&canvas);
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game::new(tuning, bounds)));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            (bounds.width, bounds.height),
        )
        .await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());
        setup_resize(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("NBL simulator running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.press(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.release(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyup never arrives once focus is gone
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().keys.clear();
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize(&canvas);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_parallax(document: &web_sys::Document, tuning: &Tuning) {
        let cupola = document.query_selector(".cupola-view").ok().flatten();
        let video = document
            .get_element_by_id("cupolaVideo")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let (Some(cupola), Some(video)) = (cupola, video) else {
            log::warn!("Cupola view not found - parallax disabled");
            return;
        };

        let parallax = Parallax::from_tuning(tuning);

        {
            let cupola_clone = cupola.clone();
            let video = video.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = cupola_clone.get_bounding_client_rect();
                let view = ViewRect {
                    left: rect.left() as f32,
                    top: rect.top() as f32,
                    width: rect.width() as f32,
                    height: rect.height() as f32,
                };
                let pointer = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                apply_parallax(&video, &parallax.follow(pointer, view));
            });
            let _ = cupola
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                apply_parallax(&video, &ParallaxTransform::rest());
            });
            let _ = cupola
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn apply_parallax(video: &HtmlElement, transform: &ParallaxTransform) {
        let style = video.style();
        let _ = style.set_property("transition", transform.transition);
        let _ = style.set_property("transform", &transform.css_transform());
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

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
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
    env_logger::init();
    log::info!("NBL simulator (native) starting...");
    log::info!("Native mode has no renderer - run with `trunk serve` for the web version");

    run_headless_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Park the astronaut on the target and hold until the task completes
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_session() {
    use nbl_sim::Tuning;
    use nbl_sim::sim::{Bounds, SimEvent, SimState, TickInput, tick};

    let tuning = Tuning::default();
    let bounds = Bounds::new(1280.0, 720.0);
    let mut state = SimState::new(&tuning, bounds);
    state.astronaut.pos = state.target.pos;

    let input = TickInput::idle(bounds);
    let limit = u64::from(tuning.required_stability_ticks) * 2;
    while !state.is_complete() && state.time_ticks < limit {
        if let Some(SimEvent::TaskComplete { tick: at }) = tick(&mut state, &input) {
            log::info!("Task complete after {} ticks", at);
            return;
        }
    }
    log::warn!("Task did not complete within {} ticks", limit);
}
