/// Wrap an arbitrary signed value into the 1-based cyclic range
/// `[1, modulus]`. Unlike a single conditional +/- modulus step, this is
/// correct for values any number of periods out of range.
pub fn wrap_1_based(value: i16, modulus: u8) -> u8 {
    ((value - 1).rem_euclid(i16::from(modulus)) + 1) as u8
}
