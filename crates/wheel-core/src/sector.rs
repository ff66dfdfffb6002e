//! Sector layout: weighted entries to contiguous angular sectors.

use serde::Serialize;

use crate::{Entry, WheelError};

/// One full revolution, in degrees.
pub const FULL_TURN: f64 = 360.0;

/// The angular slice of the wheel assigned to one entry.
///
/// Always derived from the current pool, never stored: any pool
/// mutation is followed by a fresh [`layout`] call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sector {
    pub entry: Entry,
    pub start_angle: f64,
    pub end_angle: f64,
    pub span: f64,
}

/// Convert weighted entries into contiguous sectors starting at 0.
///
/// Each entry's span is `360 * tickets / total_tickets`, assigned in
/// input order with no gaps. An empty input yields an empty layout
/// (no wheel to draw or spin). An entry with zero tickets is rejected
/// rather than laid out as a zero-width slice, which would be drawn
/// yet unselectable.
///
/// Deterministic and side-effect free: identical input yields
/// bit-identical angles.
pub fn layout(entries: &[Entry]) -> Result<Vec<Sector>, WheelError> {
    if entries.is_empty() {
        return Ok(Vec::new());
    }

    let mut total: u64 = 0;
    for entry in entries {
        if entry.tickets == 0 {
            return Err(WheelError::InvalidEntry {
                name: entry.name.clone(),
            });
        }
        total += u64::from(entry.tickets);
    }

    tracing::debug!(
        entries = entries.len(),
        total_tickets = total,
        "Laying out wheel sectors"
    );

    let mut sectors = Vec::with_capacity(entries.len());
    let mut start = 0.0_f64;
    for entry in entries {
        let span = FULL_TURN * f64::from(entry.tickets) / total as f64;
        sectors.push(Sector {
            entry: entry.clone(),
            start_angle: start,
            end_angle: start + span,
            span,
        });
        start += span;
    }

    Ok(sectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, u32)]) -> Vec<Entry> {
        pairs
            .iter()
            .map(|(name, tickets)| Entry::new(*name, *tickets))
            .collect()
    }

    #[test]
    fn empty_input_yields_empty_layout() {
        assert_eq!(layout(&[]).unwrap(), Vec::new());
    }

    #[test]
    fn equal_weights_split_evenly() {
        let sectors = layout(&entries(&[("A", 1), ("B", 1)])).unwrap();
        assert_eq!(sectors.len(), 2);
        assert_eq!(sectors[0].start_angle, 0.0);
        assert_eq!(sectors[0].end_angle, 180.0);
        assert_eq!(sectors[1].start_angle, 180.0);
        assert_eq!(sectors[1].end_angle, 360.0);
    }

    #[test]
    fn spans_are_proportional_to_tickets() {
        let sectors = layout(&entries(&[("A", 3), ("B", 1)])).unwrap();
        assert_eq!(sectors[0].span, 270.0);
        assert_eq!(sectors[1].span, 90.0);
    }

    #[test]
    fn sectors_are_contiguous_in_input_order() {
        let sectors = layout(&entries(&[("A", 2), ("B", 5), ("C", 1), ("D", 7)])).unwrap();

        assert_eq!(sectors[0].start_angle, 0.0);
        for pair in sectors.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        let names: Vec<&str> = sectors.iter().map(|s| s.entry.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn spans_sum_to_full_turn() {
        let sectors = layout(&entries(&[("A", 1), ("B", 2), ("C", 3), ("D", 7), ("E", 11)])).unwrap();
        let sum: f64 = sectors.iter().map(|s| s.span).sum();
        assert!((sum - FULL_TURN).abs() < 1e-9, "spans sum to {sum}");
    }

    #[test]
    fn layout_is_bit_identical_on_identical_input() {
        let pool = entries(&[("A", 1), ("B", 2), ("C", 3)]);
        assert_eq!(layout(&pool).unwrap(), layout(&pool).unwrap());
    }

    #[test]
    fn zero_tickets_are_rejected() {
        let err = layout(&entries(&[("A", 1), ("B", 0)])).unwrap_err();
        assert_eq!(err, WheelError::InvalidEntry { name: "B".into() });
    }
}
