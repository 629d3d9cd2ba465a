//! Point mass: the observation is the hidden state's value itself.

/// `1` when `x` equals `value` exactly, else `0`.
pub fn pmf(x: f64, value: f64) -> f64 {
    if x == value { 1.0 } else { 0.0 }
}

/// The point-mass location is structural, never estimated.
pub fn grad(_x: f64, _value: f64) -> [f64; 1] {
    [0.0]
}
