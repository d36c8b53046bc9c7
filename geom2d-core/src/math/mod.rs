pub mod interval;
pub mod is_zero;
