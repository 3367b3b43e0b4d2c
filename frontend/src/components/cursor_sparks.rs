use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

const FRAME_MS: u32 = 16;
const MAX_SPARKS: usize = 120;
const SPARK_LIFE: f64 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spark {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub age: f64,
    pub life: f64,
}

impl Spark {
    /// `angle` in radians, `speed` in px/s.
    pub fn new(x: f64, y: f64, angle: f64, speed: f64) -> Self {
        Self { x, y, vx: angle.cos() * speed, vy: angle.sin() * speed, age: 0.0, life: SPARK_LIFE }
    }

    /// Advances by `dt` seconds; false once the spark has burnt out.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.age += dt;
        self.x += self.vx * dt;
        self.y += self.vy * dt;
        // gravity
        self.vy += 220.0 * dt;
        self.age < self.life
    }

    pub fn alpha(&self) -> f64 {
        (1.0 - self.age / self.life).clamp(0.0, 1.0)
    }
}

/// Ticks every spark, drops the dead ones and caps the total.
pub fn advance_sparks(sparks: &mut Vec<Spark>, dt: f64) {
    sparks.retain_mut(|spark| spark.tick(dt));
    if sparks.len() > MAX_SPARKS {
        let excess = sparks.len() - MAX_SPARKS;
        sparks.drain(..excess);
    }
}

#[allow(deprecated)]
fn draw(ctx: &CanvasRenderingContext2d, sparks: &[Spark], width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_fill_style(&JsValue::from_str("#ffd36e"));
    for spark in sparks {
        ctx.set_global_alpha(spark.alpha());
        ctx.begin_path();
        if ctx.arc(spark.x, spark.y, 1.6, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }
}

#[function_component(CursorSparks)]
pub fn cursor_sparks() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let sparks: Rc<RefCell<Vec<Spark>>> = Rc::new(RefCell::new(Vec::new()));
                let mut interval = None;
                let mut listener: Option<Closure<dyn Fn(MouseEvent)>> = None;

                let window = web_sys::window();
                let canvas = canvas_ref.cast::<HtmlCanvasElement>();
                let ctx = canvas.as_ref().and_then(|canvas| {
                    canvas
                        .get_context("2d")
                        .ok()
                        .flatten()?
                        .dyn_into::<CanvasRenderingContext2d>()
                        .ok()
                });

                if let (Some(window), Some(canvas), Some(ctx)) = (window.clone(), canvas, ctx) {
                    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                    canvas.set_width(width as u32);
                    canvas.set_height(height as u32);

                    let on_move = {
                        let sparks = sparks.clone();
                        Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                            let mut sparks = sparks.borrow_mut();
                            for _ in 0..3 {
                                let angle = js_sys::Math::random() * TAU;
                                let speed = 40.0 + js_sys::Math::random() * 80.0;
                                sparks.push(Spark::new(e.client_x() as f64, e.client_y() as f64, angle, speed));
                            }
                        })
                    };
                    if window
                        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
                        .is_ok()
                    {
                        listener = Some(on_move);
                    }

                    let sparks = sparks.clone();
                    let dt = FRAME_MS as f64 / 1000.0;
                    interval = Some(Interval::new(FRAME_MS, move || {
                        let mut sparks = sparks.borrow_mut();
                        advance_sparks(&mut sparks, dt);
                        draw(&ctx, &sparks, width, height);
                    }));
                }

                move || {
                    drop(interval);
                    if let (Some(window), Some(listener)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "mousemove",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="cursor-sparks" aria-hidden="true"></canvas>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparks_fade_and_die() {
        let mut spark = Spark::new(0.0, 0.0, 0.0, 100.0);
        assert_eq!(spark.alpha(), 1.0);
        assert!(spark.tick(0.3));
        assert!((spark.alpha() - 0.5).abs() < 1e-9);
        assert!(spark.x > 0.0);
        assert!(!spark.tick(0.3));
        assert_eq!(spark.alpha(), 0.0);
    }

    #[test]
    fn dead_sparks_are_removed() {
        let mut sparks = vec![Spark::new(0.0, 0.0, 0.0, 1.0), Spark { age: 0.59, ..Spark::new(0.0, 0.0, 0.0, 1.0) }];
        advance_sparks(&mut sparks, 0.05);
        assert_eq!(sparks.len(), 1);
    }

    #[test]
    fn spark_count_is_capped() {
        let mut sparks = vec![Spark::new(0.0, 0.0, 0.0, 1.0); MAX_SPARKS + 30];
        advance_sparks(&mut sparks, 0.01);
        assert_eq!(sparks.len(), MAX_SPARKS);
    }
}
