//! Ray Sweep entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    use ray_sweep::Point;
    use ray_sweep::renderer::{CanvasRenderer, draw_frame};
    use ray_sweep::settings::SweepConfig;
    use ray_sweep::sim::{PhaseChange, SweepState, tick};

    /// Page instance holding all state
    struct App {
        state: SweepState,
        renderer: CanvasRenderer,
        /// A frame callback is already queued
        frame_pending: bool,
    }

    impl App {
        /// Run one tick and draw it; returns whether to keep looping
        fn step(&mut self) -> bool {
            let outcome = tick(&mut self.state);
            draw_frame(&mut self.renderer, &self.state);
            outcome.requests_next_frame()
        }

        fn redraw(&mut self) {
            draw_frame(&mut self.renderer, &self.state);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Ray Sweep starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let config = SweepConfig::load();
        canvas.set_width(config.canvas_width);
        canvas.set_height(config.canvas_height);

        let renderer = CanvasRenderer::new(&canvas).expect("no 2d context");
        let app = Rc::new(RefCell::new(App {
            state: SweepState::new(config),
            renderer,
            frame_pending: false,
        }));

        setup_canvas_clicks(&canvas, app.clone());
        setup_clear_button(app.clone());

        let running = {
            let mut a = app.borrow_mut();
            a.redraw();
            a.state.is_running()
        };
        if running {
            request_animation_frame(app);
        }

        log::info!("Ray Sweep running!");
    }

    fn setup_canvas_clicks(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let target = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let point = Point::new(
                event.client_x() as f64 - rect.left(),
                event.client_y() as f64 - rect.top(),
            );

            let change = {
                let mut a = app.borrow_mut();
                let change = a.state.click(point);
                if change.is_some() && !a.state.is_running() {
                    // No loop is drawing; show the vertex now
                    a.redraw();
                }
                change
            };

            if change == Some(PhaseChange::Armed) {
                request_animation_frame(app.clone());
            }
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_clear_button(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("clear") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                // A queued frame still runs and draws the stopped page
                app.borrow_mut().state.reset();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::warn!("No #clear button; reset unavailable");
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            if a.frame_pending {
                return;
            }
            a.frame_pending = true;
        }

        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>) {
        let keep_going = {
            let mut a = app.borrow_mut();
            a.frame_pending = false;
            a.step()
        };

        if keep_going {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ray_sweep::normalize_degrees;
    use ray_sweep::renderer::{FrameRecorder, draw_frame};
    use ray_sweep::settings::SweepConfig;
    use ray_sweep::sim::{SweepState, TickOutcome, tick};

    env_logger::init();
    log::info!("Ray Sweep (native) starting...");
    log::info!("Native mode runs one headless revolution - run with `trunk serve` for the web version");

    let config = SweepConfig::load();
    // validate() bounds angle_step below, so this stays finite
    let ticks = (360.0 / config.angle_step).ceil() as usize;
    let mut state = SweepState::new(config);
    let mut recorder = FrameRecorder::new();

    let mut hits = 0usize;
    let mut misses = Vec::new();
    for _ in 0..ticks {
        match tick(&mut state) {
            TickOutcome::Advanced { hit: Some(_), .. } => hits += 1,
            TickOutcome::Advanced { angle, hit: None } => misses.push(normalize_degrees(angle)),
            TickOutcome::Halted => break,
        }
    }
    draw_frame(&mut recorder, &state);

    let summary = serde_json::json!({
        "ticks": state.time_ticks,
        "hits": hits,
        "miss_angles": misses,
        "next_angle": normalize_degrees(state.angle),
        "history_len": state.history.len(),
        "latest_height": state.history.latest(),
        "frame_commands": recorder.commands().len(),
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Could not encode summary: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
