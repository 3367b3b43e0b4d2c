use std::f64::consts::TAU;

use gloo_timers::callback::Interval;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const FRAME_MS: u32 = 33;
const LINK_DISTANCE: f64 = 120.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Particle {
    /// Builds a particle from five uniform samples in [0, 1).
    pub fn from_samples(samples: [f64; 5], width: f64, height: f64) -> Self {
        let [x, y, vx, vy, r] = samples;
        Self {
            x: x * width,
            y: y * height,
            vx: (vx - 0.5) * 30.0,
            vy: (vy - 0.5) * 30.0,
            radius: 0.8 + r * 1.8,
        }
    }

    /// Moves by `dt` seconds and wraps around the edges.
    pub fn step(&mut self, dt: f64, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.x = (self.x + self.vx * dt).rem_euclid(width);
        self.y = (self.y + self.vy * dt).rem_euclid(height);
    }
}

/// Opacity of the line joining two particles, None when too far apart.
pub fn link_alpha(a: &Particle, b: &Particle, max_distance: f64) -> Option<f64> {
    let distance = (a.x - b.x).hypot(a.y - b.y);
    (distance < max_distance).then(|| (1.0 - distance / max_distance) * 0.4)
}

#[allow(deprecated)]
fn draw(ctx: &CanvasRenderingContext2d, particles: &[Particle], width: f64, height: f64, color: &str) {
    ctx.clear_rect(0.0, 0.0, width, height);
    let color = JsValue::from_str(color);
    ctx.set_fill_style(&color);
    ctx.set_stroke_style(&color);

    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            if let Some(alpha) = link_alpha(a, b, LINK_DISTANCE) {
                ctx.set_global_alpha(alpha);
                ctx.begin_path();
                ctx.move_to(a.x, a.y);
                ctx.line_to(b.x, b.y);
                ctx.stroke();
            }
        }
    }

    ctx.set_global_alpha(0.8);
    for p in particles {
        ctx.begin_path();
        if ctx.arc(p.x, p.y, p.radius, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticleFieldProps {
    #[prop_or(60)]
    pub count: usize,
    #[prop_or(AttrValue::from("#ffffff"))]
    pub color: AttrValue,
}

#[function_component(ParticleField)]
pub fn particle_field(props: &ParticleFieldProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let count = props.count;
        let color = props.color.clone();
        use_effect_with_deps(
            move |_| {
                let mut interval = None;
                let context = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                    canvas.set_width(canvas.client_width().max(1) as u32);
                    canvas.set_height(canvas.client_height().max(1) as u32);
                    let ctx = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()?
                        .dyn_into::<CanvasRenderingContext2d>()
                        .ok()?;
                    Some((canvas, ctx))
                });

                if let Some((canvas, ctx)) = context {
                    let (width, height) = (canvas.width() as f64, canvas.height() as f64);
                    let mut particles: Vec<Particle> = (0..count)
                        .map(|_| {
                            let samples = [(); 5].map(|_| js_sys::Math::random());
                            Particle::from_samples(samples, width, height)
                        })
                        .collect();
                    let dt = FRAME_MS as f64 / 1000.0;
                    interval = Some(Interval::new(FRAME_MS, move || {
                        for p in particles.iter_mut() {
                            p.step(dt, width, height);
                        }
                        draw(&ctx, &particles, width, height, &color);
                    }));
                }

                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="particle-field" aria-hidden="true"></canvas>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_wrap_around_edges() {
        let mut p = Particle { x: 99.0, y: 1.0, vx: 10.0, vy: -10.0, radius: 1.0 };
        p.step(0.5, 100.0, 50.0);
        assert!((p.x - 4.0).abs() < 1e-9);
        assert!((p.y - 46.0).abs() < 1e-9);
    }

    #[test]
    fn zero_sized_canvas_does_not_move_particles() {
        let mut p = Particle { x: 1.0, y: 1.0, vx: 10.0, vy: 10.0, radius: 1.0 };
        p.step(1.0, 0.0, 0.0);
        assert_eq!(p.x, 1.0);
    }

    #[test]
    fn samples_map_into_the_canvas() {
        let p = Particle::from_samples([0.5, 0.25, 0.5, 0.0, 0.0], 200.0, 100.0);
        assert_eq!((p.x, p.y), (100.0, 25.0));
        assert_eq!(p.vx, 0.0);
        assert_eq!(p.vy, -15.0);
        assert!(p.radius > 0.0);
    }

    #[test]
    fn only_close_particles_are_linked() {
        let a = Particle { x: 0.0, y: 0.0, vx: 0.0, vy: 0.0, radius: 1.0 };
        let near = Particle { x: 30.0, y: 40.0, ..a };
        let far = Particle { x: 300.0, y: 0.0, ..a };
        let alpha = link_alpha(&a, &near, 100.0).unwrap();
        assert!((alpha - 0.2).abs() < 1e-9);
        assert!(link_alpha(&a, &far, 100.0).is_none());
    }
}
