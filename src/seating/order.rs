//! Seat-order normalization.
//!
//! Players arrive (and take turns) in one order, but the table is drawn
//! in another: the local player sits at the bottom and the remaining
//! seats are filled so that turn-order neighbors face each other. For
//! 3 and 4 players that means swapping display positions 1 and 2; for
//! 0-2 players arrival order already is display order.
//!
//! The swap is its own inverse, so applying it to an already-normalized
//! sequence restores arrival order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Largest table the layout convention covers.
pub const MAX_SEATS: usize = 4;

/// Display position for each arrival index, by player count.
const LAYOUTS: [&[usize]; MAX_SEATS + 1] = [
    &[],
    &[0],
    &[0, 1],
    &[0, 2, 1],
    &[0, 2, 1, 3],
];

/// Seat-order normalization failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SeatingError {
    /// More players than the layout convention can seat.
    #[error("cannot seat {0} players at a table of {max}", max = MAX_SEATS)]
    TableOverflow(usize),
}

/// Get the display permutation for a table of `count` players.
///
/// The returned slice maps display position to arrival index.
/// Counts above [`MAX_SEATS`] have no defined layout.
///
/// ```
/// use lobby_view::seating::seat_permutation;
///
/// assert_eq!(seat_permutation(2).unwrap(), &[0, 1]);
/// assert_eq!(seat_permutation(4).unwrap(), &[0, 2, 1, 3]);
/// assert!(seat_permutation(5).is_err());
/// ```
pub fn seat_permutation(count: usize) -> Result<&'static [usize], SeatingError> {
    LAYOUTS
        .get(count)
        .copied()
        .ok_or(SeatingError::TableOverflow(count))
}

/// Reorder arrival-ordered player identifiers into display order.
///
/// Returns a new sequence; the input slice is never touched. The
/// inline capacity matches [`MAX_SEATS`], so no allocation occurs for
/// any valid table.
///
/// ```
/// use lobby_view::seating::display_order;
///
/// let seats = display_order(&["a", "b", "c"]).unwrap();
/// assert_eq!(seats.as_slice(), &["a", "c", "b"]);
/// ```
pub fn display_order<T: Clone>(
    arrival: &[T],
) -> Result<SmallVec<[T; MAX_SEATS]>, SeatingError> {
    let layout = seat_permutation(arrival.len())?;
    Ok(layout.iter().map(|&i| arrival[i].clone()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table() {
        let seats: SmallVec<[u64; MAX_SEATS]> = display_order(&[]).unwrap();
        assert!(seats.is_empty());
    }

    #[test]
    fn test_identity_up_to_two() {
        assert_eq!(display_order(&[7u64]).unwrap().as_slice(), &[7]);
        assert_eq!(display_order(&[7u64, 9]).unwrap().as_slice(), &[7, 9]);
    }

    #[test]
    fn test_three_seats_swap() {
        let seats = display_order(&["a", "b", "c"]).unwrap();
        assert_eq!(seats.as_slice(), &["a", "c", "b"]);
    }

    #[test]
    fn test_four_seats_swap() {
        let seats = display_order(&["a", "b", "c", "d"]).unwrap();
        assert_eq!(seats.as_slice(), &["a", "c", "b", "d"]);
    }

    #[test]
    fn test_table_overflow() {
        let err = display_order(&[1u64, 2, 3, 4, 5]).unwrap_err();
        assert_eq!(err, SeatingError::TableOverflow(5));
        assert_eq!(
            format!("{}", err),
            "cannot seat 5 players at a table of 4"
        );
    }

    #[test]
    fn test_input_untouched() {
        let arrival = vec!["a", "b", "c"];
        let _ = display_order(&arrival).unwrap();
        assert_eq!(arrival, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_permutation_covers_every_count() {
        for count in 0..=MAX_SEATS {
            let layout = seat_permutation(count).unwrap();
            assert_eq!(layout.len(), count);

            // Each arrival index appears exactly once.
            let mut seen = vec![false; count];
            for &i in layout {
                assert!(!seen[i]);
                seen[i] = true;
            }
        }
    }

    #[test]
    fn test_normalization_is_involution() {
        for arrival in [vec![10u64, 20, 30], vec![10, 20, 30, 40]] {
            let once = display_order(&arrival).unwrap();
            let twice = display_order(once.as_slice()).unwrap();
            assert_eq!(twice.as_slice(), arrival.as_slice());
        }
    }
}
