// Host-side tests for falling-leaf parameters.

use flipbook_core::{scatter, Leaf, LeafParams};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn scatter_spawns_configured_count() {
    let mut rng = StdRng::seed_from_u64(11);
    let leaves = scatter(&LeafParams::default(), &mut rng);
    assert_eq!(leaves.len(), 50);
}

#[test]
fn leaves_stay_within_ranges() {
    let mut rng = StdRng::seed_from_u64(12);
    let params = LeafParams::default();
    for _ in 0..500 {
        let leaf = Leaf::random(&params, &mut rng);
        assert!(leaf.left_vw >= 0.0 && leaf.left_vw < 100.0);
        assert!(leaf.duration_s >= 7.0 && leaf.duration_s < 15.0);
        assert!(leaf.delay_s >= 0.0 && leaf.delay_s < 10.0);
        assert!(leaf.opacity >= 0.4 && leaf.opacity < 1.0);
        assert!(leaf.size_px >= 5.0 && leaf.size_px < 15.0);
        assert!(leaf.lightness >= 75.0 && leaf.lightness < 90.0);
    }
}

#[test]
fn style_uses_negative_delay_and_square_size() {
    let leaf = Leaf {
        left_vw: 12.5,
        duration_s: 9.0,
        delay_s: 3.25,
        opacity: 0.5,
        size_px: 8.0,
        lightness: 80.0,
    };
    let style = leaf.style();
    let get = |name: &str| {
        style
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    };
    assert_eq!(get("left"), "12.50vw");
    assert_eq!(get("animation-duration"), "9.00s");
    assert_eq!(get("animation-delay"), "-3.25s");
    assert_eq!(get("width"), get("height"));
    assert_eq!(get("background-color"), "hsl(330,100%,80.0%)");
}
