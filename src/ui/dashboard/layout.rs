//! Dashboard layout math
//!
//! Pure geometry helpers for the two-column composition. The renderer only
//! applies the split once both terminal dimensions are known; before that
//! it stacks everything in a single column.

/// Computes left/right column widths from the total terminal width.
///
/// The left column takes 30% (rounded), the right column the remainder;
/// both are floored at 10 columns.
pub fn compute_columns(total: u16) -> (u16, u16) {
    let left = ((total as f64) * 0.3).round() as u16;
    let left = left.max(10);
    let right = total.saturating_sub(left).max(10);
    (left, right)
}

/// Visible width assigned to each list widget, reserving border columns.
pub fn widget_width(left_column: u16) -> u16 {
    left_column.saturating_sub(2)
}

/// Height assigned to the detail panel, reserving rows for borders and the
/// help line.
pub fn detail_height(total_height: u16) -> u16 {
    total_height.saturating_sub(6)
}
