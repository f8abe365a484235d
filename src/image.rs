use crate::HexRecord;

/// A pair of records whose byte ranges intersect, by index into the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    pub first: usize,
    pub second: usize,
}

/// An ordered collection of records describing sparse regions of a 16-bit
/// memory space.
///
/// Records are kept exactly as given: no sorting, coalescing or overlap
/// resolution happens unless a method says so. Use `merge` to combine two
/// images into address order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    records: Vec<HexRecord>,
}

impl Image {
    pub fn new() -> Self {
        Self { records: vec![] }
    }

    pub fn with_records(records: Vec<HexRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[HexRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<HexRecord> {
        self.records
    }

    pub fn push(&mut self, record: HexRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.records.iter().map(|r| r.len()).sum()
    }

    pub fn min_address(&self) -> Option<u16> {
        self.records.iter().map(|r| r.address).min()
    }

    /// Exclusive end of the highest record.
    pub fn end_address(&self) -> Option<u32> {
        self.records.iter().map(|r| r.end_address()).max()
    }

    /// Concatenate `self` followed by `other`, then stable-sort by address.
    ///
    /// Records sharing an address keep their relative order, so on a tie the
    /// records of `self` come first. Nothing is deduplicated or trimmed.
    pub fn merge(self, other: Image) -> Image {
        let mut records = self.records;
        records.extend(other.records);
        records.sort_by_key(|r| r.address);
        Image { records }
    }

    /// Every pair of records whose byte ranges intersect.
    pub fn overlaps(&self) -> Vec<Overlap> {
        let mut order: Vec<usize> = (0..self.records.len()).collect();
        order.sort_by_key(|&i| self.records[i].address);

        let mut found = Vec::new();
        for (pos, &i) in order.iter().enumerate() {
            let rec = &self.records[i];
            for &j in &order[pos + 1..] {
                let next = &self.records[j];
                if next.address as u32 >= rec.end_address() {
                    break;
                }
                if rec.overlaps(next) {
                    found.push(Overlap {
                        first: i.min(j),
                        second: i.max(j),
                    });
                }
            }
        }
        found.sort_by_key(|o| (o.first, o.second));
        found
    }

    /// CRC-32 (ISO-HDLC) over all data bytes in record order.
    pub fn crc32(&self) -> u32 {
        const CRC: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);
        let mut digest = CRC.digest();
        for rec in &self.records {
            digest.update(&rec.data);
        }
        digest.finalize()
    }
}

/// Merge a bootloader image with a firmware image into address order.
pub fn merge_images(bootloader: Image, firmware: Image) -> Image {
    bootloader.merge(firmware)
}
