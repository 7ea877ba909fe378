/// The `Value` enum and its conversions and printing rules.
pub mod core;
