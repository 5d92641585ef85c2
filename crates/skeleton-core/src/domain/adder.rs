/// Add two 8-bit integers.
///
/// The result is widened to `i16`, whose range strictly contains every
/// possible `i8 + i8`, so the addition never overflows.
///
/// ```
/// use skeleton_core::domain::add;
///
/// assert_eq!(add(i8::MAX, i8::MAX), 254);
/// assert_eq!(add(i8::MIN, i8::MIN), -256);
/// ```
pub fn add(a: i8, b: i8) -> i16 {
    i16::from(a) + i16::from(b)
}
