// The tile archive is a simple container: a record count, a table of
// offsets into the data region, and the packed tile records themselves.
use crate::error::{Error, Result};

pub struct TilesetArchive {
    tiles: Vec<Vec<u8>>,
}

impl TilesetArchive {
    /// Deserialise a tile archive from bytes
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < 4 {
            return Err(Error::MalformedArchive {
                expected: 4,
                actual: data.len(),
            });
        }

        // First 4 bytes are the record count, then one offset per record
        let count = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;

        let table_end = 4 + count * 4;
        if data.len() < table_end {
            return Err(Error::MalformedArchive {
                expected: table_end,
                actual: data.len(),
            });
        }

        let mut offsets = Vec::with_capacity(count);
        for i in 0..count {
            let entry = 4 + i * 4;
            offsets.push(u32::from_le_bytes([
                data[entry],
                data[entry + 1],
                data[entry + 2],
                data[entry + 3],
            ]) as usize);
        }

        // Offsets are relative to the data region that follows the table.
        // Each record runs to the next offset; the last runs to end of input.
        let region = &data[table_end..];

        let mut tiles = Vec::with_capacity(count);
        for i in 0..count {
            let start = offsets[i];
            let end = if i + 1 < count {
                offsets[i + 1]
            } else {
                region.len()
            };

            if end < start || end > region.len() {
                return Err(Error::OffsetTableCorrupt(format!(
                    "record {} spans {}..{} in a {} byte data region",
                    i,
                    start,
                    end,
                    region.len()
                )));
            }

            tiles.push(region[start..end].to_vec());
        }

        Ok(TilesetArchive { tiles })
    }

    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.tiles.get(index).map(|v| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<u8>> {
        self.tiles.iter()
    }
}

// Allow direct indexing
impl std::ops::Index<usize> for TilesetArchive {
    type Output = Vec<u8>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tiles[index]
    }
}

// Iterator support
impl<'a> IntoIterator for &'a TilesetArchive {
    type Item = &'a Vec<u8>;
    type IntoIter = std::slice::Iter<'a, Vec<u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_archive(tiles: &[&[u8]]) -> Vec<u8> {
        let mut data = (tiles.len() as u32).to_le_bytes().to_vec();
        let mut offset = 0u32;
        for tile in tiles {
            data.extend_from_slice(&offset.to_le_bytes());
            offset += tile.len() as u32;
        }
        for tile in tiles {
            data.extend_from_slice(tile);
        }
        data
    }

    #[test]
    fn test_split_preserves_count_and_order() {
        let tiles: [&[u8]; 3] = [&[1, 2, 3], &[4, 5], &[6, 7, 8, 9]];
        let data = build_archive(&tiles);

        let archive = TilesetArchive::from_bytes(&data).unwrap();

        assert_eq!(archive.len(), 3);
        assert_eq!(archive.get(0), Some(&[1u8, 2, 3][..]));
        assert_eq!(archive.get(1), Some(&[4u8, 5][..]));
        assert_eq!(archive.get(2), Some(&[6u8, 7, 8, 9][..]));
    }

    #[test]
    fn test_slices_reconstruct_data_region() {
        let tiles: [&[u8]; 3] = [&[1, 2, 3], &[4, 5], &[6, 7, 8, 9]];
        let data = build_archive(&tiles);

        let archive = TilesetArchive::from_bytes(&data).unwrap();

        let rebuilt: Vec<u8> = archive.iter().flatten().copied().collect();
        assert_eq!(rebuilt, data[4 + 4 * 3..]);
    }

    #[test]
    fn test_empty_archive() {
        let data = 0u32.to_le_bytes().to_vec();

        let archive = TilesetArchive::from_bytes(&data).unwrap();

        assert!(archive.is_empty());
    }

    #[test]
    fn test_truncated_header_rejected() {
        let result = TilesetArchive::from_bytes(&[1, 2]);

        assert!(matches!(result, Err(Error::MalformedArchive { .. })));
    }

    #[test]
    fn test_missing_offset_table_rejected() {
        // Declares 4 records but the table itself is absent
        let data = 4u32.to_le_bytes().to_vec();

        let result = TilesetArchive::from_bytes(&data);

        assert!(matches!(
            result,
            Err(Error::MalformedArchive {
                expected: 20,
                actual: 4
            })
        ));
    }

    #[test]
    fn test_decreasing_offsets_rejected() {
        let mut data = 2u32.to_le_bytes().to_vec();
        data.extend_from_slice(&4u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&[0u8; 8]);

        let result = TilesetArchive::from_bytes(&data);

        assert!(matches!(result, Err(Error::OffsetTableCorrupt(_))));
    }

    #[test]
    fn test_offset_past_region_rejected() {
        let mut data = 1u32.to_le_bytes().to_vec();
        data.extend_from_slice(&10u32.to_le_bytes());
        data.extend_from_slice(&[0u8; 4]);

        let result = TilesetArchive::from_bytes(&data);

        assert!(matches!(result, Err(Error::OffsetTableCorrupt(_))));
    }
}
