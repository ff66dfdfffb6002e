//! Winner resolution: mapping a cumulative rotation to the sector
//! under the fixed pointer.

use crate::sector::{FULL_TURN, Sector};
use crate::{Entry, WheelError};

/// Return the entry occupying the pointer at the given rotation.
///
/// The layout sweeps with increasing angle while the wheel visually
/// spins clockwise, so the look-up angle inverts the normalized
/// rotation: `(360 - rotation mod 360) mod 360`. Sectors match on the
/// half-open `[start, end)` interval, which puts a look-up angle equal
/// to a shared boundary into the next sector (the trailing `mod 360`
/// folds a look-up of exactly 360 back to the first sector). If float
/// rounding leaves the look-up angle past the last sector's end, the
/// last sector is the documented fallback.
///
/// Pure and O(n); called once per animation frame.
pub fn resolve(rotation_degrees: f64, sectors: &[Sector]) -> Result<&Entry, WheelError> {
    let last = sectors.last().ok_or(WheelError::EmptyPool)?;

    let lookup = (FULL_TURN - rotation_degrees.rem_euclid(FULL_TURN)) % FULL_TURN;
    for sector in sectors {
        if lookup >= sector.start_angle && lookup < sector.end_angle {
            return Ok(&sector.entry);
        }
    }

    Ok(&last.entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sector::layout;

    fn entries(pairs: &[(&str, u32)]) -> Vec<Entry> {
        pairs
            .iter()
            .map(|(name, tickets)| Entry::new(*name, *tickets))
            .collect()
    }

    #[test]
    fn empty_sectors_fail() {
        assert_eq!(resolve(0.0, &[]).unwrap_err(), WheelError::EmptyPool);
    }

    #[test]
    fn zero_rotation_resolves_first_entry() {
        let sectors = layout(&entries(&[("A", 1), ("B", 1)])).unwrap();
        assert_eq!(resolve(0.0, &sectors).unwrap().name, "A");
    }

    #[test]
    fn half_turn_boundary_belongs_to_next_sector() {
        let sectors = layout(&entries(&[("A", 1), ("B", 1)])).unwrap();
        // look-up angle lands exactly on B's start
        assert_eq!(resolve(180.0, &sectors).unwrap().name, "B");
    }

    #[test]
    fn clockwise_rotation_walks_sectors_backwards() {
        let sectors = layout(&entries(&[("A", 1), ("B", 1)])).unwrap();
        // a hair short of a full turn leaves the pointer just inside A
        assert_eq!(resolve(359.999, &sectors).unwrap().name, "A");
        // a hair past the half turn re-enters A
        assert_eq!(resolve(180.001, &sectors).unwrap().name, "A");
        // a hair before the half turn sits in B
        assert_eq!(resolve(179.999, &sectors).unwrap().name, "B");
    }

    #[test]
    fn weighted_pool_resolves_by_span() {
        let sectors = layout(&entries(&[("A", 3), ("B", 1)])).unwrap();
        // A spans [0, 270), B spans [270, 360); look-up of 45 is 315
        assert_eq!(resolve(45.0, &sectors).unwrap().name, "B");
        // look-up of 100 is 260, inside A
        assert_eq!(resolve(100.0, &sectors).unwrap().name, "A");
    }

    #[test]
    fn resolution_is_periodic_in_full_turns() {
        let sectors = layout(&entries(&[("A", 2), ("B", 3), ("C", 5)])).unwrap();
        for rotation in [0.0, 17.5, 123.4, 300.0, 359.0] {
            let base = resolve(rotation, &sectors).unwrap().name.clone();
            for k in 1..=5 {
                let shifted = rotation + FULL_TURN * f64::from(k);
                assert_eq!(resolve(shifted, &sectors).unwrap().name, base);
            }
        }
    }

    #[test]
    fn rounding_gap_falls_back_to_last_sector() {
        // Hand-built layout whose last sector ends short of 360, the
        // way accumulated float error can leave it.
        let sectors = vec![
            Sector {
                entry: Entry::new("A", 1),
                start_angle: 0.0,
                end_angle: 180.0,
                span: 180.0,
            },
            Sector {
                entry: Entry::new("B", 1),
                start_angle: 180.0,
                end_angle: 359.999,
                span: 179.999,
            },
        ];
        // look-up angle lands in the gap between 359.999 and 360
        assert_eq!(resolve(1e-4, &sectors).unwrap().name, "B");
    }

    #[test]
    fn lookup_of_exactly_full_turn_wraps_to_first_sector() {
        let sectors = layout(&entries(&[("A", 1), ("B", 1)])).unwrap();
        // a rotation this small makes 360 - r round to exactly 360,
        // which the trailing modulo folds back to 0
        assert_eq!(resolve(1e-300, &sectors).unwrap().name, "A");
    }

    #[test]
    fn resolve_does_not_mutate_sectors() {
        let sectors = layout(&entries(&[("A", 1), ("B", 1)])).unwrap();
        let before = sectors.clone();
        let _ = resolve(42.0, &sectors).unwrap();
        assert_eq!(sectors, before);
    }
}
