//! Advent of Code puzzle solutions
//!
//! One module per puzzle, laid out as `year_YYYY/dayDD_slug.rs`. Every day module opens
//! with the same three-line doc header (event year, `Day N: Title`, problem URL), which
//! the README generator reads, and derives `AutoRegisterSolver` so the runner picks it
//! up from the plugin inventory.

pub mod utils;
pub mod year_2015;
pub mod year_2025;
