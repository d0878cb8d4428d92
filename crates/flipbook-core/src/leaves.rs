use crate::constants::{LEAF_COUNT, LEAF_HUE};
use rand::Rng;

#[derive(Clone, Debug)]
pub struct LeafParams {
    pub count: usize,
    pub duration_s: (f32, f32),
    pub delay_max_s: f32,
    pub opacity: (f32, f32),
    pub size_px: (f32, f32),
    pub lightness: (f32, f32),
}

impl Default for LeafParams {
    fn default() -> Self {
        Self {
            count: LEAF_COUNT,
            duration_s: (7.0, 15.0),
            delay_max_s: 10.0,
            opacity: (0.4, 1.0),
            size_px: (5.0, 15.0),
            lightness: (75.0, 90.0),
        }
    }
}

/// Randomized placement and styling of one background leaf. The fall itself
/// is a CSS animation; this only picks its parameters.
#[derive(Clone, Debug)]
pub struct Leaf {
    pub left_vw: f32,
    pub duration_s: f32,
    pub delay_s: f32,
    pub opacity: f32,
    pub size_px: f32,
    pub lightness: f32,
}

fn in_range<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    rng.gen_range(lo..hi)
}

impl Leaf {
    pub fn random<R: Rng + ?Sized>(params: &LeafParams, rng: &mut R) -> Self {
        Self {
            left_vw: rng.gen_range(0.0..100.0),
            duration_s: in_range(rng, params.duration_s),
            delay_s: rng.gen_range(0.0..params.delay_max_s),
            opacity: in_range(rng, params.opacity),
            size_px: in_range(rng, params.size_px),
            lightness: in_range(rng, params.lightness),
        }
    }

    /// Inline style properties as `(name, value)` pairs. The delay is negative
    /// so leaves start mid-fall instead of all entering at the top.
    pub fn style(&self) -> [(&'static str, String); 7] {
        [
            ("left", format!("{:.2}vw", self.left_vw)),
            ("animation-duration", format!("{:.2}s", self.duration_s)),
            ("animation-delay", format!("-{:.2}s", self.delay_s)),
            ("opacity", format!("{:.3}", self.opacity)),
            ("width", format!("{:.2}px", self.size_px)),
            ("height", format!("{:.2}px", self.size_px)),
            (
                "background-color",
                format!("hsl({:.0},100%,{:.1}%)", LEAF_HUE, self.lightness),
            ),
        ]
    }
}

pub fn scatter<R: Rng + ?Sized>(params: &LeafParams, rng: &mut R) -> Vec<Leaf> {
    (0..params.count).map(|_| Leaf::random(params, rng)).collect()
}
