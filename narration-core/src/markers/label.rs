//! Label-driven template construction.
//!
//! Normal placement takes its template straight from the chapter; these
//! helpers cover sessions that only know verse labels or a chunk count.

use narration_types::AudioMarker;
use regex::Regex;

use crate::error::MarkerError;

/// Parse `"7"` or `"7-9"` into an inclusive verse range.
pub fn parse_verse_label(label: &str) -> Result<(u32, u32), MarkerError> {
    let re = Regex::new(r"^(\d+)(?:-(\d+))?$")
        .map_err(|_| MarkerError::InvalidLabel(label.to_string()))?;
    let caps = re
        .captures(label.trim())
        .ok_or_else(|| MarkerError::InvalidLabel(label.to_string()))?;

    let number = |i: usize| -> Result<Option<u32>, MarkerError> {
        caps.get(i)
            .map(|m| m.as_str().parse::<u32>())
            .transpose()
            .map_err(|_| MarkerError::InvalidLabel(label.to_string()))
    };

    let start = number(1)?.ok_or_else(|| MarkerError::InvalidLabel(label.to_string()))?;
    let end = number(2)?.unwrap_or(start);
    Ok((start, end))
}

/// Unplaced verse markers, one per label, in label order.
pub fn verse_template<S: AsRef<str>>(labels: &[S]) -> Result<Vec<AudioMarker>, MarkerError> {
    labels
        .iter()
        .map(|label| {
            let (start, end) = parse_verse_label(label.as_ref())?;
            Ok(AudioMarker::verse_range(start, end, 0))
        })
        .collect()
}

/// Chunk markers `1..=count` at frame zero.
pub fn chunk_template(count: usize) -> Vec<AudioMarker> {
    (1..=count as u32).map(|n| AudioMarker::chunk(n, 0)).collect()
}
