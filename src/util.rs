/// Numeric conversion helpers.
///
/// Integer arithmetic in the language falls back to floating point whenever
/// a result does not fit in an `i64`. The helpers here perform those
/// conversions in one place so the lossy casts are easy to audit.
pub mod num;
/// Source text, cursor positions and spans.
///
/// Every token, AST node, value and error carries a [`position::Span`] so
/// that failures can be traced back to the exact characters that caused
/// them.
pub mod position;
