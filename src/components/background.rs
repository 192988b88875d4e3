use std::f64::consts::TAU;

use gloo_timers::callback::Interval;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const FRAME_MS: u32 = 33;
const PARTICLE_COUNT: usize = 70;
const LINK_DISTANCE: f64 = 130.0;
const WAVE_LAYERS: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BackgroundStyle {
    Particles,
    Waves,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Particle {
    pub fn spawn(width: f64, height: f64, mut random: impl FnMut() -> f64) -> Self {
        Self {
            x: random() * width,
            y: random() * height,
            vx: (random() - 0.5) * 0.8,
            vy: (random() - 0.5) * 0.8,
            radius: 1.0 + random() * 2.0,
        }
    }

    /// Advance one frame, bouncing off the canvas edges.
    pub fn step(&mut self, width: f64, height: f64) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
            self.x = self.x.clamp(0.0, width);
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
            self.y = self.y.clamp(0.0, height);
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Opacity of the line joining two particles; zero beyond `max`.
pub fn link_alpha(distance: f64, max: f64) -> f64 {
    if distance >= max {
        0.0
    } else {
        (1.0 - distance / max) * 0.4
    }
}

/// Vertical offset of a wave layer at horizontal position `x` and time `t`.
pub fn wave_offset(x: f64, t: f64, layer: usize) -> f64 {
    let layer = layer as f64;
    let amplitude = 18.0 + layer * 10.0;
    let frequency = 0.006 - layer * 0.0012;
    let speed = 0.02 + layer * 0.01;
    amplitude * (x * frequency + t * speed + layer * 1.7).sin()
}

enum Scene {
    Particles(Vec<Particle>),
    Waves { time: f64 },
}

impl Scene {
    fn new(style: BackgroundStyle, width: f64, height: f64) -> Self {
        match style {
            BackgroundStyle::Particles => Scene::Particles(
                (0..PARTICLE_COUNT)
                    .map(|_| Particle::spawn(width, height, web_sys::js_sys::Math::random))
                    .collect(),
            ),
            BackgroundStyle::Waves => Scene::Waves { time: 0.0 },
        }
    }

    fn tick(&mut self, width: f64, height: f64) {
        match self {
            Scene::Particles(particles) => {
                for particle in particles.iter_mut() {
                    particle.step(width, height);
                }
            }
            Scene::Waves { time } => *time += 1.0,
        }
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
        ctx.clear_rect(0.0, 0.0, width, height);
        match self {
            Scene::Particles(particles) => {
                for (i, a) in particles.iter().enumerate() {
                    for b in &particles[i + 1..] {
                        let alpha = link_alpha(a.distance_to(b), LINK_DISTANCE);
                        if alpha > 0.0 {
                            ctx.set_stroke_style(&JsValue::from_str(&format!(
                                "rgba(126, 178, 255, {:.3})",
                                alpha
                            )));
                            ctx.begin_path();
                            ctx.move_to(a.x, a.y);
                            ctx.line_to(b.x, b.y);
                            ctx.stroke();
                        }
                    }
                }
                ctx.set_fill_style(&JsValue::from_str("rgba(255, 255, 255, 0.7)"));
                for p in particles {
                    ctx.begin_path();
                    let _ = ctx.arc(p.x, p.y, p.radius, 0.0, TAU);
                    ctx.fill();
                }
            }
            Scene::Waves { time } => {
                for layer in 0..WAVE_LAYERS {
                    let baseline = height * (0.55 + layer as f64 * 0.12);
                    ctx.set_fill_style(&JsValue::from_str(&format!(
                        "rgba(30, 144, 255, {:.2})",
                        0.08 + layer as f64 * 0.05
                    )));
                    ctx.begin_path();
                    ctx.move_to(0.0, height);
                    let mut x = 0.0;
                    while x <= width {
                        ctx.line_to(x, baseline + wave_offset(x, *time, layer));
                        x += 8.0;
                    }
                    ctx.line_to(width, height);
                    ctx.close_path();
                    ctx.fill();
                }
            }
        }
    }
}

fn fit_to_window(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let (width, height) = web_sys::window()
        .map(|w| {
            (
                w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1280.0),
                w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(800.0),
            )
        })
        .unwrap_or((1280.0, 800.0));
    if canvas.width() != width as u32 || canvas.height() != height as u32 {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }
    (width, height)
}

#[derive(Properties, PartialEq)]
pub struct AnimatedBackgroundProps {
    pub style: BackgroundStyle,
}

#[function_component(AnimatedBackground)]
pub fn animated_background(props: &AnimatedBackgroundProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |style| {
                let mut interval = None;
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let context = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
                    if let Some(context) = context {
                        let (width, height) = fit_to_window(&canvas);
                        let mut scene = Scene::new(*style, width, height);
                        interval = Some(Interval::new(FRAME_MS, move || {
                            let (width, height) = fit_to_window(&canvas);
                            scene.tick(width, height);
                            scene.draw(&context, width, height);
                        }));
                    }
                }
                // Dropping the interval stops the animation.
                move || drop(interval)
            },
            props.style,
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="animated-background"
            style="position: fixed; top: 0; left: 0; width: 100%; height: 100vh; z-index: -1; pointer-events: none;"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_bounce_back_inside_the_canvas() {
        let mut p = Particle { x: 99.5, y: 10.0, vx: 1.0, vy: -20.0, radius: 1.0 };
        p.step(100.0, 50.0);
        assert_eq!(p.x, 100.0);
        assert_eq!(p.vx, -1.0);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.vy, 20.0);
    }

    #[test]
    fn spawned_particles_start_inside_the_canvas() {
        let mut rolls = [0.0, 0.999, 0.5, 0.5, 1.0].into_iter().cycle();
        let p = Particle::spawn(200.0, 100.0, || rolls.next().unwrap());
        assert!((0.0..=200.0).contains(&p.x));
        assert!((0.0..=100.0).contains(&p.y));
        assert_eq!(p.vx, 0.0);
        assert!(p.radius >= 1.0 && p.radius <= 3.0);
    }

    #[test]
    fn links_fade_with_distance() {
        assert_eq!(link_alpha(LINK_DISTANCE, LINK_DISTANCE), 0.0);
        assert!(link_alpha(10.0, LINK_DISTANCE) > link_alpha(100.0, LINK_DISTANCE));
        assert!((link_alpha(0.0, LINK_DISTANCE) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn wave_offsets_stay_within_layer_amplitude() {
        for layer in 0..WAVE_LAYERS {
            let amplitude = 18.0 + layer as f64 * 10.0;
            for x in (0..2000).step_by(37) {
                assert!(wave_offset(x as f64, 12.0, layer).abs() <= amplitude);
            }
        }
    }
}
