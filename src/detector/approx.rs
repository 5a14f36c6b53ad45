use crate::models::PointI;

/// Compress a closed pixel chain to the end points of its straight runs.
///
/// A vertex is dropped when the step entering it equals the step leaving it,
/// so horizontal, vertical and diagonal runs keep only their end points.
/// Chains of one or two points are returned unchanged.
pub fn approx_simple(chain: &[PointI]) -> Vec<PointI> {
    let n = chain.len();
    if n <= 2 {
        return chain.to_vec();
    }

    (0..n)
        .filter(|&i| {
            let prev = chain[(i + n - 1) % n];
            let here = chain[i];
            let next = chain[(i + 1) % n];
            prev.delta(&here) != here.delta(&next)
        })
        .map(|i| chain[i])
        .collect()
}
