/// One contiguous chunk of data, as carried by a single Intel-HEX data record.
///
/// `address` is the 16-bit load offset from the record line. Extended address
/// records are not modelled, so this is never a full linear address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexRecord {
    pub address: u16,
    pub data: Vec<u8>,
}

impl HexRecord {
    pub fn new(address: u16, data: Vec<u8>) -> Self {
        debug_assert!(
            data.len() <= u8::MAX as usize,
            "record data exceeds 255 bytes"
        );
        Self { address, data }
    }

    /// One past the last byte covered by this record.
    pub fn end_address(&self) -> u32 {
        self.address as u32 + self.data.len() as u32
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn overlaps(&self, other: &HexRecord) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        (self.address as u32) < other.end_address()
            && (other.address as u32) < self.end_address()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_address_past_16_bits() {
        let rec = HexRecord::new(0xFFF0, vec![0; 0x20]);
        assert_eq!(rec.end_address(), 0x10010);
    }

    #[test]
    fn test_overlaps() {
        let a = HexRecord::new(0x100, vec![0x01, 0x02, 0x03]);
        let b = HexRecord::new(0x102, vec![0xFF]);
        let c = HexRecord::new(0x103, vec![0xFF]);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_empty_never_overlaps() {
        let a = HexRecord::new(0x100, vec![0x01, 0x02]);
        let empty = HexRecord::new(0x100, vec![]);
        assert!(!a.overlaps(&empty));
    }
}
