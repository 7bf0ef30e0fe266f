/// Numeric conversion helpers.
///
/// Literal parsing for the radix prefixes the command language accepts,
/// integer to float promotion, and shift count validation.
pub mod num;
