/// Reorders the bits of `value` according to a 1-indexed position table.
///
/// Positions count from the most significant bit of a `source_width`-bit
/// value, so output bit 0 (the most significant bit of the result) comes
/// from position `table[0]`. The result is `table.len()` bits wide; one
/// routine serves the 64-, 56-, 48- and 32-bit tables.
pub fn permute(value: u64, source_width: u32, table: &[u8]) -> u64 {
    let mut output = 0u64;
    for &position in table {
        output = (output << 1) | ((value >> (source_width - u32::from(position))) & 1);
    }
    output
}
