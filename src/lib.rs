pub mod combine;
pub mod config;
pub mod error;
pub mod image;
pub mod io;
pub mod record;

pub use combine::{
    CombineOutcome, combine_files, combine_files_with_policy, combine_hex_files, post_build,
};
pub use config::{
    CombineConfig, DEFAULT_BOOTLOADER, DEFAULT_OUTPUT, OverlapPolicy, firmware_hex_path,
};
pub use error::{Error, ErrorKind, ImageRole};
pub use image::{Image, Overlap, merge_images};
pub use io::{DecodeError, parse_intel_hex, write_intel_hex};
pub use record::HexRecord;
