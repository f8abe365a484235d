//! Bootloader + firmware combining.
//!
//! Pipeline for one run:
//! 1. Check both inputs exist
//! 2. Parse the bootloader, then the firmware
//! 3. Merge into address order (bootloader first on ties)
//! 4. Apply the overlap policy
//! 5. Render the whole output, then write it in one go

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::config::firmware_hex_path;
use crate::{
    CombineConfig, Error, Image, ImageRole, OverlapPolicy, parse_intel_hex, write_intel_hex,
};

/// Summary of a successful combine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineOutcome {
    pub output: PathBuf,
    pub bootloader_records: usize,
    pub firmware_records: usize,
    pub records: usize,
    pub total_bytes: usize,
    /// CRC-32 of all data bytes in merged order.
    pub crc32: u32,
}

/// Combine two Intel-HEX files into `output`, using the default overlap policy.
pub fn combine_files(
    bootloader: &Path,
    firmware: &Path,
    output: &Path,
) -> Result<CombineOutcome, Error> {
    combine_files_with_policy(bootloader, firmware, output, OverlapPolicy::default())
}

pub fn combine_files_with_policy(
    bootloader: &Path,
    firmware: &Path,
    output: &Path,
    policy: OverlapPolicy,
) -> Result<CombineOutcome, Error> {
    ensure_exists(ImageRole::Bootloader, bootloader)?;
    ensure_exists(ImageRole::Firmware, firmware)?;

    let boot_image = load_image(ImageRole::Bootloader, bootloader)?;
    let fw_image = load_image(ImageRole::Firmware, firmware)?;
    let bootloader_records = boot_image.len();
    let firmware_records = fw_image.len();

    let merged = boot_image.merge(fw_image);
    check_overlaps(&merged, policy)?;

    let text = write_intel_hex(&merged);
    if let Err(source) = std::fs::write(output, text) {
        let _ = std::fs::remove_file(output);
        return Err(Error::Io {
            role: ImageRole::Output,
            path: output.to_path_buf(),
            source,
        });
    }

    let outcome = CombineOutcome {
        output: output.to_path_buf(),
        bootloader_records,
        firmware_records,
        records: merged.len(),
        total_bytes: merged.total_bytes(),
        crc32: merged.crc32(),
    };
    info!(
        output = %outcome.output.display(),
        records = outcome.records,
        bytes = outcome.total_bytes,
        crc32 = %format!("{:08X}", outcome.crc32),
        "combined hex written"
    );
    Ok(outcome)
}

/// Boolean form of [`combine_files`]: logs the failure and returns `false`.
pub fn combine_hex_files(bootloader: &Path, firmware: &Path, output: &Path) -> bool {
    match combine_files(bootloader, firmware, output) {
        Ok(_) => true,
        Err(e) => {
            error!("error combining hex files: {e}");
            false
        }
    }
}

/// Combine the configured bootloader with the hex image built from `elf`.
///
/// The `.hex` sibling of `elf` must already exist; producing it from the ELF
/// is left to the build system.
pub fn post_build(config: &CombineConfig, elf: &Path) -> Result<CombineOutcome, Error> {
    let bootloader = config.bootloader_path();
    let firmware = firmware_hex_path(elf);
    let output = config.output_path();
    debug!(
        bootloader = %bootloader.display(),
        firmware = %firmware.display(),
        output = %output.display(),
        "post-build combine"
    );
    combine_files_with_policy(&bootloader, &firmware, &output, config.overlap_policy)
}

fn ensure_exists(role: ImageRole, path: &Path) -> Result<(), Error> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::MissingFile {
            role,
            path: path.to_path_buf(),
        })
    }
}

fn load_image(role: ImageRole, path: &Path) -> Result<Image, Error> {
    let content = std::fs::read(path).map_err(|source| Error::Io {
        role,
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_intel_hex(&content).map_err(|source| Error::Decode {
        role,
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        %role,
        path = %path.display(),
        records = image.len(),
        bytes = image.total_bytes(),
        "parsed hex file"
    );
    Ok(image)
}

fn check_overlaps(image: &Image, policy: OverlapPolicy) -> Result<(), Error> {
    if policy == OverlapPolicy::Allow {
        return Ok(());
    }

    let records = image.records();
    for overlap in image.overlaps() {
        let first = &records[overlap.first];
        let second = &records[overlap.second];
        if policy == OverlapPolicy::Reject {
            return Err(Error::Overlap {
                first_start: first.address as u32,
                first_end: first.end_address(),
                second_start: second.address as u32,
                second_end: second.end_address(),
            });
        }
        warn!(
            "overlapping records {:#06X}..{:#06X} and {:#06X}..{:#06X}",
            first.address,
            first.end_address(),
            second.address,
            second.end_address()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HexRecord;

    #[test]
    fn test_check_overlaps_policies() {
        let image = Image::with_records(vec![
            HexRecord::new(0x0000, vec![0x00; 0x10]),
            HexRecord::new(0x0008, vec![0x00; 0x10]),
        ]);
        assert!(check_overlaps(&image, OverlapPolicy::Allow).is_ok());
        assert!(check_overlaps(&image, OverlapPolicy::Warn).is_ok());
        assert!(matches!(
            check_overlaps(&image, OverlapPolicy::Reject),
            Err(Error::Overlap {
                first_start: 0x0000,
                first_end: 0x0010,
                second_start: 0x0008,
                second_end: 0x0018,
            })
        ));
    }

    #[test]
    fn test_ensure_exists_reports_role() {
        let path = Path::new("/nonexistent/hexcombine/firmware.hex");
        assert!(matches!(
            ensure_exists(ImageRole::Firmware, path),
            Err(Error::MissingFile {
                role: ImageRole::Firmware,
                ..
            })
        ));
    }
}
