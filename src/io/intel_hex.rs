use std::fmt::Write;

use super::DecodeError;
use crate::{HexRecord, Image};

const RECORD_DATA: u8 = 0x00;
const RECORD_EOF: u8 = 0x01;

/// Hex digits before the data field: byte count, address, record type.
const HEADER_DIGITS: usize = 8;

/// Parse Intel-HEX input into its data records, in file order.
///
/// Lines not starting with `:` are skipped. Parsing stops at the first
/// end-of-file record. Extended address and start address records are
/// skipped without affecting later addresses. Checksums are not verified.
pub fn parse_intel_hex(input: &[u8]) -> Result<Image, DecodeError> {
    let text = std::str::from_utf8(input).map_err(|e| DecodeError::InvalidRecord {
        line: 1 + input[..e.valid_up_to()]
            .iter()
            .filter(|&&b| b == b'\n')
            .count(),
        message: format!("invalid UTF-8: {e}"),
    })?;

    let mut image = Image::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1;
        let line = line.trim();

        let Some(hex) = line.strip_prefix(':') else {
            continue;
        };
        let hex = hex.as_bytes();

        if hex.len() < HEADER_DIGITS {
            return Err(DecodeError::Truncated {
                line: line_num,
                expected: HEADER_DIGITS,
                actual: hex.len(),
            });
        }

        let byte_count = hex_byte(hex, 0, line_num)? as usize;
        let address = u16::from_be_bytes([
            hex_byte(hex, 2, line_num)?,
            hex_byte(hex, 4, line_num)?,
        ]);
        let record_type = hex_byte(hex, 6, line_num)?;

        match record_type {
            RECORD_DATA => {
                let needed = HEADER_DIGITS + byte_count * 2;
                if hex.len() < needed {
                    return Err(DecodeError::Truncated {
                        line: line_num,
                        expected: needed,
                        actual: hex.len(),
                    });
                }
                let data = (0..byte_count)
                    .map(|i| hex_byte(hex, HEADER_DIGITS + i * 2, line_num))
                    .collect::<Result<Vec<u8>, _>>()?;
                image.push(HexRecord::new(address, data));
            }
            RECORD_EOF => break,
            _ => {}
        }
    }

    Ok(image)
}

/// Write records as Intel-HEX text, one data record per `HexRecord`, in the
/// given order, followed by a single end-of-file record.
///
/// Records are not split: a record holding more than 255 bytes produces a
/// byte-count field wider than two digits.
pub fn write_intel_hex(image: &Image) -> String {
    let mut output = String::new();
    for rec in image.records() {
        write_record(&mut output, RECORD_DATA, rec.address, &rec.data);
    }
    write_record(&mut output, RECORD_EOF, 0, &[]);
    output
}

fn write_record(output: &mut String, record_type: u8, address: u16, data: &[u8]) {
    let byte_count = data.len();
    let addr_bytes = address.to_be_bytes();

    let mut checksum: u8 = 0;
    checksum = checksum.wrapping_add(byte_count as u8);
    checksum = checksum.wrapping_add(addr_bytes[0]);
    checksum = checksum.wrapping_add(addr_bytes[1]);
    checksum = checksum.wrapping_add(record_type);
    for &b in data {
        checksum = checksum.wrapping_add(b);
    }
    checksum = checksum.wrapping_neg();

    // Writing into a String cannot fail.
    let _ = write!(output, ":{byte_count:02X}{address:04X}{record_type:02X}");
    for &b in data {
        let _ = write!(output, "{b:02X}");
    }
    let _ = writeln!(output, "{checksum:02X}");
}

fn hex_byte(hex: &[u8], offset: usize, line_num: usize) -> Result<u8, DecodeError> {
    let high = hex_digit(hex[offset], line_num)?;
    let low = hex_digit(hex[offset + 1], line_num)?;
    Ok((high << 4) | low)
}

fn hex_digit(b: u8, line_num: usize) -> Result<u8, DecodeError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        _ => Err(DecodeError::InvalidHexDigit {
            line: line_num,
            char: b as char,
        }),
    }
}
