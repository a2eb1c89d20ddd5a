pub mod color;
pub mod math;

#[cfg(feature = "gradient")]
pub mod gradient;
