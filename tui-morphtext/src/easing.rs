//! Easing curves for the morph clock and the per-channel selectors in
//! [`MorphConfig`](crate::MorphConfig).
//!
//! Every curve maps `[0, 1]` to `[0, 1]` monotonically, with `f(0) = 0` and
//! `f(1) = 1`. Custom selectors must hold the same bounds or the composited
//! opacity and scale values drift outside their documented ranges.

pub fn linear(t: f32) -> f32 {
    t
}

pub fn ease_in(t: f32) -> f32 {
    t * t
}

pub fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

pub fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_EPSILON: f32 = 1e-6;

/// CSS `cubic-bezier(x1, y1, x2, y2)` semantics, for selectors the built-in
/// curves cannot express.
pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> impl Fn(f32) -> f32 {
    move |t| sample_axis(solve_for_t(t, x1, x2), y1, y2)
}

/// One axis of a cubic bezier anchored at (0,0) and (1,1).
fn sample_axis(t: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - t;

    3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
}

fn axis_slope(t: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - t;

    3.0 * inv * inv * p1 + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

fn solve_for_t(x: f32, x1: f32, x2: f32) -> f32 {
    let mut t = x;

    for _ in 0..NEWTON_ITERATIONS {
        let residual = sample_axis(t, x1, x2) - x;

        if residual.abs() < NEWTON_EPSILON {
            return t;
        }

        let slope = axis_slope(t, x1, x2);

        if slope.abs() < NEWTON_EPSILON {
            break;
        }

        t -= residual / slope;
    }

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_boundaries(f: impl Fn(f32) -> f32) {
        assert!(f(0.0).abs() < 1e-6, "f(0) = {}, expected 0", f(0.0));
        assert!((f(1.0) - 1.0).abs() < 1e-6, "f(1) = {}, expected 1", f(1.0));
    }

    fn assert_monotonic(f: impl Fn(f32) -> f32) {
        let mut prev = f(0.0);

        for i in 1..=100 {
            let t = i as f32 / 100.0;
            let val = f(t);
            assert!(val >= prev - 1e-6, "non-monotonic at t={t}: {prev} > {val}");
            prev = val;
        }
    }

    #[test]
    fn linear_is_identity() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((linear(t) - t).abs() < 1e-6);
        }
    }

    #[test]
    fn builtin_boundaries() {
        assert_boundaries(ease_in);
        assert_boundaries(ease_out);
        assert_boundaries(ease_in_out);
        assert_boundaries(ease_in_cubic);
        assert_boundaries(ease_out_cubic);
    }

    #[test]
    fn builtin_monotonic() {
        assert_monotonic(ease_in);
        assert_monotonic(ease_out);
        assert_monotonic(ease_in_out);
        assert_monotonic(ease_in_cubic);
        assert_monotonic(ease_out_cubic);
    }

    #[test]
    fn ease_in_lags_linear() {
        assert!(ease_in(0.25) < 0.25);
        assert!(ease_in_cubic(0.25) < ease_in(0.25));
    }

    #[test]
    fn ease_out_leads_linear() {
        assert!(ease_out(0.25) > 0.25);
        assert!(ease_out_cubic(0.25) > ease_out(0.25));
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);

        for i in 0..=10 {
            let t = i as f32 / 20.0;
            let mirrored = 1.0 - ease_in_out(1.0 - t);
            assert!((ease_in_out(t) - mirrored).abs() < 1e-5);
        }
    }

    #[test]
    fn cubic_bezier_boundaries() {
        assert_boundaries(cubic_bezier(0.25, 0.1, 0.25, 1.0));
    }

    #[test]
    fn cubic_bezier_with_diagonal_controls_is_linear() {
        let ease = cubic_bezier(0.0, 0.0, 1.0, 1.0);

        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((ease(t) - t).abs() < 0.01, "at t={t}: {}", ease(t));
        }
    }
}
