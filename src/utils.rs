/// Rotates `offset` by `shift` inside a ring of `modulus` slots.
///
/// Any `shift` is accepted, negative or larger than the ring; the result
/// always lands in `0..modulus`.
pub fn wrap_offset(offset: u8, shift: i64, modulus: u8) -> u8 {
    let modulus = i64::from(modulus);
    let shift = shift.rem_euclid(modulus);

    ((i64::from(offset) + shift) % modulus) as u8
}
