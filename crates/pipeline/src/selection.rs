//! Weighted random selection.

use rand::Rng;

/// Floor applied to weights that are zero, negative or not finite, so every
/// candidate keeps a small non-zero chance.
pub const MIN_WEIGHT: f64 = 1e-6;

/// Draw an index with probability proportional to its weight.
///
/// Returns `None` only when `weights` is empty. A single weight always
/// yields index 0 without consuming randomness.
pub fn select_weighted<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Option<usize> {
    match weights.len() {
        0 => return None,
        1 => return Some(0),
        _ => {}
    }

    let floored: Vec<f64> = weights.iter().map(|&w| floor_weight(w)).collect();
    let sum: f64 = floored.iter().sum();
    let draw = rng.random::<f64>() * sum;

    let mut cumulative = 0.0;
    for (idx, weight) in floored.iter().enumerate() {
        cumulative += weight;
        if cumulative >= draw {
            return Some(idx);
        }
    }

    // Rounding can leave the running sum just short of the draw
    Some(floored.len() - 1)
}

fn floor_weight(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        MIN_WEIGHT
    }
}
