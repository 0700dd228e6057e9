#[macro_use]
pub mod macros;
pub mod float_ext;
pub mod log_setup;
pub mod toggle;

pub const EPSILON: f64 = 1e-6;

pub fn is_debug() -> bool {
    cfg!(debug_assertions)
}
