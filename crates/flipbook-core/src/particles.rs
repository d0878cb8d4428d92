//! Heart-shaped cursor trail.
//!
//! Particles are spawned in pairs on pointer movement, drift at a constant
//! velocity with a slight wobble, shrink every frame and are dropped once
//! they are too small to see. Drawing is delegated to the caller so the same
//! simulation runs on the host in tests and against a canvas in the browser.

use crate::constants::*;
use glam::Vec2;
use rand::Rng;

/// One segment of the heart outline in the 150x150 design box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo([f64; 2]),
    CubicTo([f64; 2], [f64; 2], [f64; 2]),
}

pub const HEART_PATH: [PathSegment; 7] = [
    PathSegment::MoveTo([75.0, 40.0]),
    PathSegment::CubicTo([75.0, 37.0], [70.0, 25.0], [50.0, 25.0]),
    PathSegment::CubicTo([20.0, 25.0], [20.0, 62.5], [20.0, 62.5]),
    PathSegment::CubicTo([20.0, 80.0], [40.0, 102.0], [75.0, 120.0]),
    PathSegment::CubicTo([110.0, 102.0], [130.0, 80.0], [130.0, 62.5]),
    PathSegment::CubicTo([130.0, 62.5], [130.0, 25.0], [100.0, 25.0]),
    PathSegment::CubicTo([85.0, 25.0], [75.0, 37.0], [75.0, 40.0]),
];

#[derive(Clone, Debug)]
pub struct TrailParams {
    pub per_move: usize,
    pub size_min: f32,
    pub size_max: f32,
    pub speed_max: f32,
    pub hue_min: f32,
    pub hue_span: f32,
    pub rotation_span: f32,
    pub spin_span: f32,
    pub shrink_per_tick: f32,
    pub min_size: f32,
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            per_move: PARTICLES_PER_MOVE,
            size_min: PARTICLE_SIZE_MIN,
            size_max: PARTICLE_SIZE_MAX,
            speed_max: PARTICLE_SPEED_MAX,
            hue_min: PARTICLE_HUE_MIN,
            hue_span: PARTICLE_HUE_SPAN,
            rotation_span: PARTICLE_ROTATION_SPAN,
            spin_span: PARTICLE_SPIN_SPAN,
            shrink_per_tick: PARTICLE_SHRINK_PER_TICK,
            min_size: PARTICLE_MIN_SIZE,
        }
    }
}

// uniform in [-span/2, span/2)
fn centered<R: Rng + ?Sized>(rng: &mut R, span: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * span
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub hue: f32,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(position: Vec2, params: &TrailParams, rng: &mut R) -> Self {
        Self {
            position,
            size: rng.gen_range(params.size_min..params.size_max),
            velocity: Vec2::new(
                rng.gen_range(-params.speed_max..params.speed_max),
                rng.gen_range(-params.speed_max..params.speed_max),
            ),
            hue: rng.gen_range(params.hue_min..params.hue_min + params.hue_span),
            rotation: centered(rng, params.rotation_span),
            rotation_speed: centered(rng, params.spin_span),
        }
    }

    pub fn update(&mut self, params: &TrailParams) {
        self.position += self.velocity;
        self.rotation += self.rotation_speed;
        if self.size > params.min_size {
            self.size -= params.shrink_per_tick;
        }
    }

    #[inline]
    pub fn is_alive(&self, params: &TrailParams) -> bool {
        self.size > params.min_size
    }

    /// Scale factor applied to the heart design box.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.size as f64 / HEART_UNIT
    }

    pub fn css_color(&self) -> String {
        format!("hsl({:.1},100%,75%)", self.hue)
    }
}

#[derive(Clone, Debug)]
pub struct ParticleTrail {
    pub params: TrailParams,
    particles: Vec<Particle>,
    cursor: Vec2,
}

impl Default for ParticleTrail {
    fn default() -> Self {
        Self::new(TrailParams::default())
    }
}

impl ParticleTrail {
    pub fn new(params: TrailParams) -> Self {
        Self {
            params,
            particles: Vec::new(),
            cursor: Vec2::from(CURSOR_OFFSCREEN),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn on_pointer_move<R: Rng + ?Sized>(&mut self, x: f32, y: f32, rng: &mut R) {
        self.cursor = Vec2::new(x, y);
        for _ in 0..self.params.per_move {
            let p = Particle::spawn(self.cursor, &self.params, rng);
            self.particles.push(p);
        }
    }

    /// Advance every particle one frame, hand it to `draw`, then drop the
    /// ones that have shrunk away. Order is insertion order.
    pub fn tick(&mut self, mut draw: impl FnMut(&Particle)) {
        let params = &self.params;
        self.particles.retain_mut(|p| {
            p.update(params);
            draw(p);
            p.is_alive(params)
        });
    }
}
