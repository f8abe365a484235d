use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::io::DecodeError;

/// Which file of a combine run an error concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRole {
    Bootloader,
    Firmware,
    Output,
}

impl fmt::Display for ImageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bootloader => "bootloader",
            Self::Firmware => "firmware",
            Self::Output => "output",
        };
        f.write_str(name)
    }
}

/// Flat classification of [`Error`], for callers that only branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingFile,
    Decode,
    Io,
    Overlap,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{role} file not found: {}", path.display())]
    MissingFile { role: ImageRole, path: PathBuf },

    #[error("failed to decode {role} file {}: {source}", path.display())]
    Decode {
        role: ImageRole,
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("I/O error on {role} file {}: {source}", path.display())]
    Io {
        role: ImageRole,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "overlapping records: {first_start:#06X}..{first_end:#06X} and {second_start:#06X}..{second_end:#06X}"
    )]
    Overlap {
        first_start: u32,
        first_end: u32,
        second_start: u32,
        second_end: u32,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingFile { .. } => ErrorKind::MissingFile,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Io { .. } => ErrorKind::Io,
            Self::Overlap { .. } => ErrorKind::Overlap,
        }
    }

    /// The file the error concerns, if any.
    pub fn role(&self) -> Option<ImageRole> {
        match self {
            Self::MissingFile { role, .. } | Self::Decode { role, .. } | Self::Io { role, .. } => {
                Some(*role)
            }
            Self::Overlap { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_message() {
        let err = Error::MissingFile {
            role: ImageRole::Bootloader,
            path: PathBuf::from("boot/bootloader.hex"),
        };
        assert_eq!(err.kind(), ErrorKind::MissingFile);
        assert_eq!(err.role(), Some(ImageRole::Bootloader));
        assert_eq!(
            err.to_string(),
            "bootloader file not found: boot/bootloader.hex"
        );
    }

    #[test]
    fn test_decode_message_names_line() {
        let err = Error::Decode {
            role: ImageRole::Firmware,
            path: PathBuf::from("firmware.hex"),
            source: DecodeError::InvalidHexDigit { line: 7, char: 'Z' },
        };
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(
            err.to_string(),
            "failed to decode firmware file firmware.hex: invalid hex digit at line 7: 'Z'"
        );
    }

    #[test]
    fn test_overlap_message() {
        let err = Error::Overlap {
            first_start: 0x0000,
            first_end: 0x0200,
            second_start: 0x01F0,
            second_end: 0x0210,
        };
        assert_eq!(err.role(), None);
        assert_eq!(
            err.to_string(),
            "overlapping records: 0x0000..0x0200 and 0x01F0..0x0210"
        );
    }
}
