use crate::error::{Result, SegmentationError};
use crate::types::{Segment, Timestamp};

/// Pair each intro with the news event that closes its program.
///
/// Unequal lengths mean consolidation upstream went wrong, so this is a
/// structural error rather than something to paper over.
pub fn build_segments(intros: &[Timestamp], news: &[Timestamp]) -> Result<Vec<Segment>> {
    if intros.len() != news.len() {
        return Err(SegmentationError::LengthMismatch {
            intros: intros.len(),
            news: news.len(),
        });
    }
    Ok(intros
        .iter()
        .zip(news)
        .map(|(&start, &end)| Segment::new(start, end))
        .collect())
}

/// Extend every segment's end by `pad` seconds without running into the next
/// segment. The last segment always gets the full pad.
pub fn pad_segments(segments: &[Segment], pad: f64) -> Vec<Segment> {
    let mut padded: Vec<Segment> = segments
        .windows(2)
        .map(|pair| {
            let (cur, next) = (pair[0], pair[1]);
            let end = if next.start - cur.end >= pad {
                cur.end + pad
            } else {
                next.start
            };
            Segment::new(cur.start, end)
        })
        .collect();
    if let Some(last) = segments.last() {
        padded.push(Segment::new(last.start, last.end + pad));
    }
    padded
}

/// Cap segment ends at the recording's duration.
pub fn clamp_to_duration(segments: &[Segment], total_time: f64) -> Vec<Segment> {
    segments
        .iter()
        .map(|seg| Segment::new(seg.start, seg.end.min(total_time)))
        .collect()
}

pub fn remove_zero_length(segments: Vec<Segment>) -> Vec<Segment> {
    segments
        .into_iter()
        .filter(|seg| !seg.is_zero_length())
        .collect()
}
