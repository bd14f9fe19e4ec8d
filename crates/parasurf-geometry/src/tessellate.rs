//! Uniform sampling of parametric curves into polylines.

use parasurf_math::Point2;

use crate::curve::ParametricCurve;

/// Upper bound on the parameter steps of one sampled curve.
pub const MAX_STEPS: usize = 4096;

/// Number of parameter steps for a requested segment count.
///
/// Fractional counts round up; anything below 1 or non-finite becomes 1, so
/// callers never divide by zero. Counts above [`MAX_STEPS`] are capped.
pub fn step_count(segments: f64) -> usize {
    if !segments.is_finite() || segments < 1.0 {
        1
    } else if segments >= MAX_STEPS as f64 {
        MAX_STEPS
    } else {
        segments.ceil() as usize
    }
}

/// Sample `curve` at `steps + 1` evenly spaced parameters across its domain.
///
/// Parameters are computed from the step index rather than accumulated, so
/// the final sample sits exactly on the domain end.
pub fn sample_uniform(curve: &dyn ParametricCurve, steps: usize) -> Vec<Point2> {
    let steps = steps.max(1);
    let (t_min, t_max) = curve.domain();
    (0..=steps)
        .map(|k| {
            let t = if k == steps {
                t_max
            } else {
                t_min + (t_max - t_min) * k as f64 / steps as f64
            };
            curve.point_at(t)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::BezierCurve;
    use parasurf_math::dvec2;

    #[test]
    fn test_step_count_rounding() {
        assert_eq!(step_count(4.0), 4);
        assert_eq!(step_count(4.2), 5);
        assert_eq!(step_count(0.5), 1);
        assert_eq!(step_count(-3.0), 1);
        assert_eq!(step_count(f64::NAN), 1);
        assert_eq!(step_count(f64::INFINITY), 1);
    }

    #[test]
    fn test_step_count_cap() {
        assert_eq!(step_count(4095.5), MAX_STEPS);
        assert_eq!(step_count(MAX_STEPS as f64 + 0.5), MAX_STEPS);
        assert_eq!(step_count(1e30), MAX_STEPS);
        assert_eq!(step_count(f64::MAX), MAX_STEPS);
    }

    #[test]
    fn test_sample_line() {
        let line = BezierCurve::new(vec![dvec2(0.0, 0.0), dvec2(10.0, 0.0)]);
        let points = sample_uniform(&line, 4);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], dvec2(0.0, 0.0));
        assert!((points[2] - dvec2(5.0, 0.0)).length() < 1e-12);
        assert_eq!(points[4], dvec2(10.0, 0.0));
    }

    #[test]
    fn test_zero_steps_still_samples_both_ends() {
        let line = BezierCurve::new(vec![dvec2(0.0, 0.0), dvec2(1.0, 1.0)]);
        assert_eq!(sample_uniform(&line, 0).len(), 2);
    }
}
