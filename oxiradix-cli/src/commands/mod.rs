//! Command implementations for OxiRadix CLI.

pub mod analyze;
pub mod decode;
pub mod encode;
pub mod info;
pub mod verify;

pub use analyze::cmd_analyze;
pub use decode::cmd_decode;
pub use encode::cmd_encode;
pub use info::cmd_info;
pub use verify::cmd_verify;
