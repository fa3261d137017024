// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

use log::{trace, warn};

pub const HEADER_SIZE: usize = 4;
pub const END_OF_TABLE: u8 = 127;

/// One structure of the table, with its string table already split
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawStructure<'a> {
    pub kind: u8,
    /// Header plus formatted area, excluding the string table
    pub length: u8,
    pub handle: u16,
    /// Formatted area after the 4 byte header
    pub body: &'a [u8],
    pub strings: Vec<String>,
}

impl<'a> RawStructure<'a> {
    /// Resolve a 1-based string reference. `0` and out of range indices give
    /// an empty string.
    pub fn string(&self, index: u8) -> String {
        match usize::from(index).checked_sub(1) {
            Some(i) => self.strings.get(i).cloned().unwrap_or_default(),
            None => String::new(),
        }
    }
}

/// Iterator over the structures of a raw table. Stops at end-of-table, at
/// the end of the buffer, or at the first structure whose header is unusable.
#[derive(Clone, Debug)]
pub struct Structures<'a> {
    data: &'a [u8],
    offset: usize,
    done: bool,
    truncated: bool,
}

impl<'a> Structures<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            done: false,
            truncated: false,
        }
    }

    /// `true` once the walk stopped on a malformed or cut-off header
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    fn stop_truncated(&mut self, reason: &str) {
        warn!("structure table truncated at offset {:#x}: {}", self.offset, reason);
        self.truncated = true;
        self.done = true;
    }
}

/// Split the string table starting at `data[0]`. Returns the strings and
/// the number of bytes consumed, terminator included.
fn split_strings(data: &[u8]) -> (Vec<String>, usize) {
    let mut strings = Vec::new();

    // No strings at all, just the double NUL
    if data.starts_with(&[0, 0]) {
        return (strings, 2);
    }

    let mut offset = 0;
    while offset < data.len() {
        match data[offset..].iter().position(|b| *b == 0) {
            Some(0) => {
                // Second NUL of the terminator
                return (strings, offset + 1);
            }
            Some(end) => {
                let bytes = &data[offset..offset + end];
                strings.push(String::from_utf8_lossy(bytes).into_owned());
                offset += end + 1;
            }
            None => {
                // Unterminated, keep what is there
                strings.push(String::from_utf8_lossy(&data[offset..]).into_owned());
                offset = data.len();
            }
        }
    }
    (strings, offset)
}

impl<'a> Iterator for Structures<'a> {
    type Item = RawStructure<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let rest = &self.data[self.offset..];
        if rest.is_empty() {
            self.done = true;
            return None;
        }
        if rest.len() < HEADER_SIZE {
            self.stop_truncated("partial header");
            return None;
        }

        let kind = rest[0];
        let length = rest[1];
        let handle = u16::from_le_bytes([rest[2], rest[3]]);
        if usize::from(length) < HEADER_SIZE {
            self.stop_truncated("length shorter than header");
            return None;
        }
        if usize::from(length) > rest.len() {
            self.stop_truncated("length runs past end of buffer");
            return None;
        }

        let body = &rest[HEADER_SIZE..usize::from(length)];
        let (strings, consumed) = split_strings(&rest[usize::from(length)..]);
        trace!(
            "structure type {} handle {:#06x} length {} with {} strings",
            kind,
            handle,
            length,
            strings.len()
        );

        self.offset += usize::from(length) + consumed;
        if kind == END_OF_TABLE || self.offset >= self.data.len() {
            self.done = true;
        }

        Some(RawStructure {
            kind,
            length,
            handle,
            body,
            strings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_are_split_on_nul() {
        let (strings, consumed) = split_strings(b"Acme\0Board-X\0\0trailing");
        assert_eq!(strings, vec!["Acme", "Board-X"]);
        assert_eq!(consumed, 14);
    }

    #[test]
    fn empty_string_table() {
        let (strings, consumed) = split_strings(&[0, 0, 1, 2]);
        assert!(strings.is_empty());
        assert_eq!(consumed, 2);
    }

    #[test]
    fn unterminated_string_table() {
        let (strings, consumed) = split_strings(b"Acme\0Boa");
        assert_eq!(strings, vec!["Acme", "Boa"]);
        assert_eq!(consumed, 8);

        let (strings, consumed) = split_strings(b"Acme\0");
        assert_eq!(strings, vec!["Acme"]);
        assert_eq!(consumed, 5);
    }

    #[test]
    fn string_lookup_is_forgiving() {
        let structure = RawStructure {
            kind: 2,
            length: 4,
            handle: 0,
            body: &[],
            strings: vec!["Acme".to_string(), "Board-X".to_string()],
        };
        assert_eq!(structure.string(2), "Board-X");
        assert_eq!(structure.string(0), "");
        assert_eq!(structure.string(99), "");
    }

    #[test]
    fn walk_stops_at_end_of_table() {
        let data = [
            1, 4, 0x00, 0x01, 0, 0, // type 1, no strings
            127, 4, 0x02, 0x00, 0, 0, // end-of-table
            2, 4, 0x03, 0x00, 0, 0, // never reached
        ];
        let mut walker = Structures::new(&data);
        let kinds: Vec<u8> = walker.by_ref().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![1, 127]);
        assert!(!walker.truncated());
    }

    #[test]
    fn walk_stops_on_overlong_structure() {
        let data = [
            1, 4, 0x00, 0x01, 0, 0, // type 1
            2, 40, 0x00, 0x02, 0, 0, // claims 40 bytes
        ];
        let mut walker = Structures::new(&data);
        let structures: Vec<_> = walker.by_ref().collect();
        assert_eq!(structures.len(), 1);
        assert_eq!(structures[0].handle, 0x0100);
        assert!(walker.truncated());
    }

    #[test]
    fn walk_stops_on_short_length() {
        let data = [3, 2, 0, 0, 0, 0];
        let mut walker = Structures::new(&data);
        assert!(walker.next().is_none());
        assert!(walker.truncated());
    }

    #[test]
    fn walk_is_restartable() {
        let data = [1, 4, 0, 0, b'A', 0, 0, 127, 4, 0, 0, 0, 0];
        let first: Vec<_> = Structures::new(&data).collect();
        let second: Vec<_> = Structures::new(&data).collect();
        assert_eq!(first, second);
        assert_eq!(first[0].strings, vec!["A"]);
    }
}
