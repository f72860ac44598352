//! Seat-order normalization for table layout.

pub mod order;

pub use order::{display_order, seat_permutation, SeatingError, MAX_SEATS};
