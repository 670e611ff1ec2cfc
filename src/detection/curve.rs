use crate::error::{Result, SegmentationError};

/// Convert signed 16-bit PCM to floats in [-1, 1).
pub fn pcm16_to_f32(samples: &[i16]) -> Vec<f32> {
    const SCALE: f32 = 1.0 / 32_768.0;
    samples.iter().map(|&s| s as f32 * SCALE).collect()
}

/// Window of `width` samples around `middle`, zero-filled past either edge.
///
/// The window covers `middle - floor(width / 2)` up to (excluding)
/// `middle + ceil(width / 2)`.
pub fn slice_with_zero_padding(curve: &[f32], width: usize, middle: usize) -> Vec<f32> {
    let before = width / 2;
    let start = middle as isize - before as isize;

    (0..width)
        .map(|offset| {
            let idx = start + offset as isize;
            if idx < 0 {
                0.0
            } else {
                curve.get(idx as usize).copied().unwrap_or(0.0)
            }
        })
        .collect()
}

/// Shrink `curve` to `num_samples` points, keeping the maximum of each window
/// so that no peak disappears.
pub fn downsample_preserve_maxima(curve: &[f32], num_samples: usize) -> Result<Vec<f32>> {
    if num_samples == 0 {
        return Err(SegmentationError::invalid_input(
            "num_samples must be greater than zero",
        ));
    }

    let n_points = curve.len();
    let step = n_points as f64 / num_samples as f64;
    let mut compressed = Vec::with_capacity(num_samples);

    for i in 0..num_samples {
        let start = (i as f64 * step) as usize;
        let end = (((i + 1) as f64 * step) as usize).min(n_points);
        if start >= n_points {
            break;
        }
        let window = &curve[start..end];
        if let Some(max) = window.iter().copied().reduce(f32::max) {
            compressed.push(max);
        }
    }

    if compressed.len() < num_samples {
        if let Some(&last) = curve.last() {
            compressed.push(last);
        }
    }

    if compressed.len() != num_samples {
        return Err(SegmentationError::invalid_input(format!(
            "downsampled curve length {} not equal to num_samples {num_samples}",
            compressed.len()
        )));
    }
    Ok(compressed)
}
