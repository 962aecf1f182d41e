// File: crates/trend-core/src/smooth.rs
// Summary: Cardinal spline sampling used to apply the line `tension` option.

/// Sample a cardinal spline through `points`.
///
/// `tension` plays the role of the charting option of the same name: 0 keeps
/// the straight polyline, larger values round the corners. Each segment is
/// expanded into `samples_per_segment` steps; the original points are kept
/// exactly at segment boundaries, so the curve always passes through the data.
pub fn cardinal_spline(
    points: &[(f64, f64)],
    tension: f64,
    samples_per_segment: usize,
) -> Vec<(f64, f64)> {
    let n = points.len();
    if n < 3 || tension <= 0.0 || samples_per_segment < 2 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity((n - 1) * samples_per_segment + 1);
    for i in 0..n - 1 {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(n - 1)];

        // Tangents of the Hermite segment, scaled by tension.
        let m1 = (tension * (p2.0 - p0.0), tension * (p2.1 - p0.1));
        let m2 = (tension * (p3.0 - p1.0), tension * (p3.1 - p1.1));

        for s in 0..samples_per_segment {
            let u = s as f64 / samples_per_segment as f64;
            let u2 = u * u;
            let u3 = u2 * u;
            let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
            let h10 = u3 - 2.0 * u2 + u;
            let h01 = -2.0 * u3 + 3.0 * u2;
            let h11 = u3 - u2;
            out.push((
                h00 * p1.0 + h10 * m1.0 + h01 * p2.0 + h11 * m2.0,
                h00 * p1.1 + h10 * m1.1 + h01 * p2.1 + h11 * m2.1,
            ));
        }
    }
    out.push(points[n - 1]);
    out
}
