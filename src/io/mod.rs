mod error;
mod intel_hex;

pub use error::DecodeError;
pub use intel_hex::{parse_intel_hex, write_intel_hex};
