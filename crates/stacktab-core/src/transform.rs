use crate::breakdown::{DecomposeMode, decompose};
use crate::row::{DisplayRow, Row};
use crate::stack_table::StackTable;

/// Report columns stripped from every row before display.
const DROPPED_FIELDS: &[&str] = &["Missing", "Available"];

/// Turn an input row into its display form.
///
/// Drops the Missing/Available columns, then replaces a present total
/// with its breakdown using the row's item name for the capacity lookup.
/// Rows without a total pass through with only the column removal
/// applied. Total and infallible.
pub fn transform_row(row: Row, table: &StackTable, mode: DecomposeMode) -> DisplayRow {
    let Row {
        item,
        total,
        mut extras,
    } = row;

    extras.retain(|(name, _)| !DROPPED_FIELDS.contains(&name.as_str()));

    let breakdown = total.map(|total| {
        let capacity = table.lookup(item.as_deref().unwrap_or(""));
        // Upstream coercion yields floats; negative totals are out of
        // contract and clamp to zero.
        decompose(total.max(0.0).trunc() as u64, capacity, mode)
    });

    DisplayRow {
        item,
        breakdown,
        extras,
    }
}
