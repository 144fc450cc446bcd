
/// Checks if two floats are within `tol` of each other.
/// 
pub fn approx_eq(a: f32, b: f32, tol: f32) -> bool {
    libm::fabsf(a - b) <= tol
}

/// Checks if a float lies within `tol` of its nearest integer, returns that integer if it does.
/// 
pub fn nearest_integer(value: f32, tol: f32) -> Option<i32> {
    let rounded = libm::roundf(value);
    if approx_eq(value, rounded, tol) {
        Some(rounded as i32)
    } else {
        None
    }
}
