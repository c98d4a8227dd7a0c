//! Command implementations for the OxiLZ executables.

pub mod decode;
pub mod encode;

pub use decode::cmd_decode;
pub use encode::cmd_encode;
