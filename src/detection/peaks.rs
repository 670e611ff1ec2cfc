use crate::error::{Result, SegmentationError};
use crate::types::{PeakProminence, TroughPair};

/// Find the local minima closest to `peak_index` on each side.
///
/// A peak at either edge of the curve has no enclosing trough on that side, so
/// the degenerate pair `(peak_index, peak_index)` is returned and a warning is
/// logged. This also makes curves of length one or two well defined.
///
/// Comparisons are strict, so plateaus never stop a scan; it walks past them.
pub fn find_closest_troughs(peak_index: usize, curve: &[f32]) -> Result<TroughPair> {
    let n = curve.len();
    if peak_index >= n {
        return Err(SegmentationError::PeakOutOfRange {
            index: peak_index,
            len: n,
        });
    }

    if peak_index == 0 || peak_index == n - 1 {
        tracing::warn!(
            peak_index,
            curve_len = n,
            "peaks: peak index is at the edge of the curve"
        );
        return Ok(TroughPair {
            left: peak_index,
            right: peak_index,
        });
    }

    Ok(TroughPair {
        left: left_trough(peak_index, curve),
        right: right_trough(peak_index, curve),
    })
}

fn left_trough(peak_index: usize, curve: &[f32]) -> usize {
    let found = (1..peak_index)
        .rev()
        .find(|&i| curve[i] < curve[i + 1] && curve[i] < curve[i - 1]);
    let left = found.unwrap_or(peak_index);

    // The edge itself can be the real minimum.
    if left == 1 && curve[0] < curve[1] {
        0
    } else if left == peak_index && curve[0] < curve[peak_index] {
        0
    } else {
        left
    }
}

fn right_trough(peak_index: usize, curve: &[f32]) -> usize {
    let n = curve.len();
    let found =
        (peak_index + 1..n - 1).find(|&i| curve[i] < curve[i + 1] && curve[i] < curve[i - 1]);
    let right = found.unwrap_or(peak_index);

    if right == n - 2 && curve[n - 1] < curve[n - 2] {
        n - 1
    } else if right == peak_index && curve[n - 1] < curve[peak_index] {
        n - 1
    } else {
        right
    }
}

/// Height of the peak above the higher of its two enclosing troughs.
pub fn calculate_peak_prominence(peak_index: usize, curve: &[f32]) -> Result<PeakProminence> {
    let troughs = find_closest_troughs(peak_index, curve)?;
    let trough_height = curve[troughs.left].max(curve[troughs.right]);
    Ok(PeakProminence {
        peak: peak_index,
        prominence: curve[peak_index] - trough_height,
        troughs,
    })
}

/// Score every candidate peak and order them by descending prominence.
///
/// Ties keep the order of `candidates`.
pub fn rank_peaks(candidates: &[usize], curve: &[f32]) -> Result<Vec<PeakProminence>> {
    let mut ranked = candidates
        .iter()
        .map(|&peak| calculate_peak_prominence(peak, curve))
        .collect::<Result<Vec<_>>>()?;
    ranked.sort_by(|a, b| b.prominence.total_cmp(&a.prominence));
    Ok(ranked)
}
