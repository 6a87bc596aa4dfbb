//! Target index arithmetic shared by command and folder moves.
//!
//! A requested index names the slot the moved item occupies once the move
//! completes. `after` shifts the request one slot further and an absent
//! index means "append". Moving within one container frees the item's old
//! slot, so the container offers `len - 1` positions for the item: requests
//! past the original position are clamped, never decremented. In particular
//! a request for `source_index + 1` lands the item immediately after its old
//! successor, and a request for the end stays at the end.

use tracing::trace;

use cmdtree_core::types::DropPosition;

/// Compute the final insertion index.
///
/// `destination_len` is the length of the destination collection before the
/// item is removed from its source. `same_container` is true when source and
/// destination are the same collection.
pub fn resolve_target_index(
    requested: Option<usize>,
    position: DropPosition,
    destination_len: usize,
    same_container: bool,
) -> usize {
    let base = requested.unwrap_or(destination_len);
    let base = match position {
        DropPosition::After => base.saturating_add(1),
        DropPosition::Before | DropPosition::Into => base,
    };
    let upper = if same_container {
        destination_len.saturating_sub(1)
    } else {
        destination_len
    };
    let index = base.min(upper);
    trace!(
        ?requested,
        %position,
        destination_len,
        same_container,
        index,
        "Resolved target index"
    );
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_by_default() {
        assert_eq!(resolve_target_index(None, DropPosition::Into, 3, false), 3);
        assert_eq!(resolve_target_index(None, DropPosition::Before, 3, true), 2);
        assert_eq!(resolve_target_index(None, DropPosition::Into, 0, false), 0);
    }

    #[test]
    fn test_after_increments() {
        assert_eq!(resolve_target_index(Some(0), DropPosition::After, 3, false), 1);
        assert_eq!(resolve_target_index(Some(1), DropPosition::After, 4, true), 2);
    }

    #[test]
    fn test_same_container_is_clamped_not_shifted() {
        // [cmd-1, cmd-2, cmd-3]: cmd-1 to index 2 ends last.
        assert_eq!(resolve_target_index(Some(2), DropPosition::Before, 3, true), 2);
        // Moving to the original length stays at the end.
        assert_eq!(resolve_target_index(Some(3), DropPosition::Before, 3, true), 2);
        assert_eq!(resolve_target_index(Some(9), DropPosition::After, 3, true), 2);
    }

    #[test]
    fn test_cross_container_clamp() {
        assert_eq!(resolve_target_index(Some(7), DropPosition::Before, 2, false), 2);
        assert_eq!(resolve_target_index(Some(usize::MAX), DropPosition::After, 2, false), 2);
    }
}
