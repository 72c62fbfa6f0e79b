/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss, and for turning the
/// language's 1-based indices and array sizes into `usize` offsets.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or an error if the value is out of range.
pub mod num;
