/// MysticNUM version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Matrix positions, in tabulation order.
pub const MATRIX_POSITIONS: std::ops::RangeInclusive<u8> = 1..=9;

/// Accepted birth year range (inclusive).
pub const MIN_YEAR: u32 = 1900;
pub const MAX_YEAR: u32 = 2100;

/// Years at or after this use `first + 19` for the third number.
pub const MILLENNIUM_YEAR: u32 = 2000;

/// Literal addend (and extra derived entry) for births from 2000 on.
pub const MILLENNIUM_ADDEND: u32 = 19;

/// Years at or after this get one extra digit 9 in the sequence.
pub const EXTRA_NINE_YEAR: u32 = 2020;

/// Repeat counts above this share the same interpretation key.
pub const MAX_KEY_REPEATS: u32 = 5;

/// Rendered value of an empty matrix cell.
pub const EMPTY_CELL: &str = "—";

/// Fallback text for a personal/ancestral task missing from the task table.
pub const NO_DATA: &str = "No data";

/// Product line printed in export footers.
pub const PRODUCT_LINE: &str = "MysticNUM Complete";
