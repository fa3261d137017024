// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

#![allow(dead_code)]

use smbios_info::{SmbiosInfo, SmbiosParser};

/// Assembles a structure table byte by byte
#[derive(Default)]
pub struct TableBuilder {
    data: Vec<u8>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a structure whose length covers exactly `body`
    pub fn structure(mut self, kind: u8, handle: u16, body: &[u8], strings: &[&str]) -> Self {
        let length = u8::try_from(4 + body.len()).unwrap();
        self.data.push(kind);
        self.data.push(length);
        self.data.extend_from_slice(&handle.to_le_bytes());
        self.data.extend_from_slice(body);
        if strings.is_empty() {
            self.data.extend_from_slice(&[0, 0]);
        } else {
            for string in strings {
                self.data.extend_from_slice(string.as_bytes());
                self.data.push(0);
            }
            self.data.push(0);
        }
        self
    }

    pub fn end_of_table(self) -> Self {
        self.structure(127, 0xfeff, &[], &[])
    }

    /// Append bytes as they are
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.data.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }
}

/// Little endian helpers for building structure bodies
pub struct Body(Vec<u8>);

impl Body {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn u8(mut self, value: u8) -> Self {
        self.0.push(value);
        self
    }

    pub fn u16(mut self, value: u16) -> Self {
        self.0.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn u32(mut self, value: u32) -> Self {
        self.0.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn u64(mut self, value: u64) -> Self {
        self.0.extend_from_slice(&value.to_le_bytes());
        self
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Self {
        self.0.extend_from_slice(bytes);
        self
    }

    pub fn zeros(mut self, count: usize) -> Self {
        self.0.resize(self.0.len() + count, 0);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.0
    }
}

pub fn parse_version(data: &[u8], major: u8, minor: u8) -> SmbiosInfo {
    let mut parser = SmbiosParser::new();
    let table = parser
        .load(data, data.len())
        .unwrap()
        .with_version(major, minor);
    parser.parse(&table).unwrap()
}

pub fn parse(data: &[u8]) -> SmbiosInfo {
    parse_version(data, 3, 4)
}

/// Type 1 body of a 2.4 table, 27 bytes with its header
pub fn system_body() -> Vec<u8> {
    Body::new()
        .u8(1) // manufacturer
        .u8(2) // product name
        .u8(0) // version
        .u8(0) // serial number
        .bytes(&[
            0x33, 0x22, 0x11, 0x00, 0x55, 0x44, 0x77, 0x66, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
            0xee, 0xff,
        ])
        .u8(0x06) // power switch
        .u8(0) // sku
        .u8(0) // family
        .build()
}
