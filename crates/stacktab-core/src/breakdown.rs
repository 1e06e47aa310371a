use serde::Serialize;

/// Stacks held by one shulker box.
pub const STACKS_PER_SHULKER: u64 = 27;

/// Which unit decomposition to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecomposeMode {
    /// Stacks and items only.
    Flat,
    /// Shulker boxes, stacks, and items.
    Shulkered,
}

/// A raw total expressed in Minecraft units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Breakdown {
    /// Present only when decomposed with [`DecomposeMode::Shulkered`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shulker_boxes: Option<u64>,
    pub stacks: u64,
    pub items: u64,
}

/// Decompose a total into units of `capacity` items per stack.
///
/// `capacity` must be positive; [`crate::StackTable`] guarantees this for
/// every capacity it hands out. Integer division truncates, so the
/// invariants `items < capacity` and (shulkered) `stacks < 27` hold for
/// any input.
pub fn decompose(total: u64, capacity: u64, mode: DecomposeMode) -> Breakdown {
    debug_assert!(capacity > 0);

    let raw_stacks = total / capacity;
    let items = total % capacity;

    match mode {
        DecomposeMode::Flat => Breakdown {
            shulker_boxes: None,
            stacks: raw_stacks,
            items,
        },
        DecomposeMode::Shulkered => Breakdown {
            shulker_boxes: Some(raw_stacks / STACKS_PER_SHULKER),
            stacks: raw_stacks % STACKS_PER_SHULKER,
            items,
        },
    }
}
