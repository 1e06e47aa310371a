pub mod breakdown;
pub mod error;
pub mod pager;
pub mod row;
pub mod stack_table;
pub mod transform;

pub use breakdown::{Breakdown, DecomposeMode, decompose};
pub use error::{Error, Result};
pub use pager::{Pager, PagerState, Termination};
pub use row::{CellValue, DisplayRow, Row};
pub use stack_table::StackTable;
pub use transform::transform_row;
