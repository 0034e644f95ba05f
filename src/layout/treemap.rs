//! Weighted binary-split treemap.
//!
//! Each leaf receives a share of the area proportional to its weight, clamped
//! into a `[min, max]` fraction band. The rectangle is then split recursively:
//! the ordered leaves are cut into the two contiguous groups whose shares are
//! closest to equal, and the rectangle is cut across its longer axis in that
//! ratio. Leaves keep their input order, so the first category ends up
//! top-left.

use super::geometry::Rect;

/// Turn raw weights into area fractions that sum to 1.
///
/// Shares are proportional to weight, except that a leaf whose proportional
/// share falls outside `[min_fraction, max_fraction]` is pinned to the
/// violated bound and the remaining area is spread over the free leaves
/// (a clamped water-fill). Bounds that cannot be met for `n` leaves are
/// relaxed to `1/n`. Non-finite or non-positive weights are pinned to the
/// minimum.
pub fn clamp_shares(weights: &[f64], min_fraction: f64, max_fraction: f64) -> Vec<f64> {
    let n = weights.len();
    if n == 0 {
        return Vec::new();
    }
    let even = 1.0 / n as f64;
    let lo = if min_fraction.is_finite() {
        min_fraction.clamp(0.0, even)
    } else {
        0.0
    };
    let hi = if max_fraction.is_finite() && max_fraction > 0.0 {
        max_fraction.clamp(even, 1.0)
    } else {
        1.0
    };

    let weights: Vec<f64> = weights
        .iter()
        .map(|w| if w.is_finite() && *w > 0.0 { *w } else { 0.0 })
        .collect();
    let filled = |level: f64| -> f64 { weights.iter().map(|w| (w * level).clamp(lo, hi)).sum() };

    // `filled` grows with the water level; find the level where it reaches 1.
    let lightest = weights.iter().copied().filter(|w| *w > 0.0).fold(f64::INFINITY, f64::min);
    let shares = if lightest.is_finite() && filled(hi / lightest) >= 1.0 {
        let (mut low, mut high) = (0.0, hi / lightest);
        for _ in 0..200 {
            let mid = 0.5 * (low + high);
            if filled(mid) < 1.0 {
                low = mid;
            } else {
                high = mid;
            }
        }
        settle(&weights, high, lo, hi)
    } else {
        weights.iter().map(|w| if *w > 0.0 { hi } else { lo }).collect()
    };

    let total: f64 = shares.iter().sum();
    if total > 0.0 {
        shares.into_iter().map(|s| s / total).collect()
    } else {
        vec![even; n]
    }
}

/// Pin leaves at `level` to their bound and give the free ones exactly the
/// area that is left, so pinned shares stay on their bound.
fn settle(weights: &[f64], level: f64, lo: f64, hi: f64) -> Vec<f64> {
    let mut shares: Vec<Option<f64>> = weights
        .iter()
        .map(|w| {
            let s = w * level;
            if s <= lo {
                Some(lo)
            } else if s >= hi {
                Some(hi)
            } else {
                None
            }
        })
        .collect();
    let fixed: f64 = shares.iter().flatten().sum();
    let free_weight: f64 = weights
        .iter()
        .zip(&shares)
        .filter(|(_, s)| s.is_none())
        .map(|(w, _)| *w)
        .sum();
    let remaining = (1.0 - fixed).max(0.0);
    for (w, s) in weights.iter().zip(shares.iter_mut()) {
        if s.is_none() {
            *s = Some(w / free_weight * remaining);
        }
    }
    shares.into_iter().map(|s| s.unwrap_or(lo)).collect()
}

/// Partition `bounds` into one rectangle per share, in input order.
pub fn partition(shares: &[f64], bounds: Rect) -> Vec<Rect> {
    let mut out = vec![Rect::default(); shares.len()];
    let items: Vec<usize> = (0..shares.len()).collect();
    split(&items, shares, bounds, &mut out);
    out
}

fn split(items: &[usize], shares: &[f64], rect: Rect, out: &mut [Rect]) {
    match items {
        [] => {}
        [only] => out[*only] = rect,
        _ => {
            let total: f64 = items.iter().map(|&i| shares[i]).sum();
            let (at, left) = balanced_split(items, shares, total);
            let fraction = if total > 0.0 {
                left / total
            } else {
                at as f64 / items.len() as f64
            };
            let (a, b) = rect.split_longer(fraction);
            split(&items[..at], shares, a, out);
            split(&items[at..], shares, b, out);
        }
    }
}

/// Index in `1..items.len()` where the prefix sum is closest to half the
/// total, with that prefix sum. The first best index wins ties.
fn balanced_split(items: &[usize], shares: &[f64], total: f64) -> (usize, f64) {
    let mut acc = 0.0;
    let mut best = (1, shares[items[0]]);
    let mut best_diff = f64::INFINITY;
    for (k, &i) in items.iter().enumerate().take(items.len() - 1) {
        acc += shares[i];
        let diff = (total - 2.0 * acc).abs();
        if diff < best_diff {
            best_diff = diff;
            best = (k + 1, acc);
        }
    }
    best
}
