//! Pure sequence algorithms backing lane reorders and item relocation.
//!
//! These functions know nothing about the board; they operate on plain
//! sequences and index arithmetic so their behavior can be pinned down
//! in isolation.

/// Moves the element at `from` to position `to`, shifting everything in
/// between by one.
///
/// This is a remove-then-reinsert splice, not a swap: all other
/// elements keep their relative order. Out-of-range indices are clamped
/// to the sequence bounds, and `from == to` leaves the sequence
/// untouched.
///
/// # Examples
/// ```
/// use slate_core::domain::reorder::array_move;
///
/// let mut lanes = vec!["a", "b", "c"];
/// array_move(&mut lanes, 0, 2);
/// assert_eq!(lanes, vec!["b", "c", "a"]);
/// ```
pub fn array_move<T>(seq: &mut Vec<T>, from: usize, to: usize) {
    if seq.is_empty() {
        return;
    }
    let from = from.min(seq.len() - 1);
    let to = to.min(seq.len() - 1);
    if from == to {
        return;
    }

    let element = seq.remove(from);
    seq.insert(to, element);
}

/// Maps a position within one lane's member sequence to an insertion
/// index in the flat item sequence.
///
/// `member_positions` holds the flat-sequence indices of the
/// destination lane's members, in order, after the moved item has been
/// lifted out. A `target_index` at or past the member count appends
/// after the lane's last member, or at `sequence_len` when the lane is
/// empty.
pub fn lane_insertion_index(
    member_positions: &[usize],
    target_index: usize,
    sequence_len: usize,
) -> usize {
    if target_index < member_positions.len() {
        member_positions[target_index]
    } else {
        member_positions
            .last()
            .map(|last| last + 1)
            .unwrap_or(sequence_len)
    }
}
