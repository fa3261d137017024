// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

use plain::Plain;
use std::mem;

use crate::error::{Error, SourceError};

const ANCHOR_21: &[u8; 4] = b"_SM_";
const ANCHOR_30: &[u8; 5] = b"_SM3_";
const INTERMEDIATE_ANCHOR: &[u8; 5] = b"_DMI_";

/// Supplies the raw structure table, in whatever platform specific way
pub trait RawTableSource {
    fn fetch(&mut self) -> Result<FirmwareTable, SourceError>;
}

/// Structure table as handed over by firmware, with the version it reported
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FirmwareTable {
    pub data: Vec<u8>,
    pub major_version: u8,
    pub minor_version: u8,
}

#[repr(packed)]
#[derive(Clone, Default, Debug, Copy)]
#[allow(dead_code)]
struct RsmbHeader {
    calling_method: u8,
    major_version: u8,
    minor_version: u8,
    dmi_revision: u8,
    length: u32,
}

unsafe impl Plain for RsmbHeader {}

#[repr(packed)]
#[derive(Clone, Default, Debug, Copy)]
#[allow(dead_code)]
struct EntryPoint21 {
    anchor: [u8; 4],
    checksum: u8,
    length: u8,
    major_version: u8,
    minor_version: u8,
    max_structure_size: u16,
    revision: u8,
    formatted_area: [u8; 5],
    intermediate_anchor: [u8; 5],
    intermediate_checksum: u8,
    table_length: u16,
    table_address: u32,
    structure_count: u16,
    bcd_revision: u8,
}

unsafe impl Plain for EntryPoint21 {}

#[repr(packed)]
#[derive(Clone, Default, Debug, Copy)]
#[allow(dead_code)]
struct EntryPoint30 {
    anchor: [u8; 5],
    checksum: u8,
    length: u8,
    major_version: u8,
    minor_version: u8,
    docrev: u8,
    revision: u8,
    reserved: u8,
    table_max_size: u32,
    table_address: u64,
}

unsafe impl Plain for EntryPoint30 {}

fn checksum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, item| sum.wrapping_add(*item))
}

impl FirmwareTable {
    pub fn new(data: Vec<u8>, major_version: u8, minor_version: u8) -> Self {
        Self {
            data,
            major_version,
            minor_version,
        }
    }

    /// Unpack the blob returned by `GetSystemFirmwareTable('RSMB', ..)`, which
    /// prefixes the structure table with an 8 byte header
    pub fn from_rsmb(blob: &[u8]) -> Result<Self, Error> {
        let mut header = RsmbHeader::default();
        plain::copy_from_bytes(&mut header, blob)
            .map_err(|_| Error::TableLoad("RSMB blob is shorter than its header".to_string()))?;

        let start = mem::size_of::<RsmbHeader>();
        let length = header.length as usize;
        let data = blob.get(start..start + length).ok_or_else(|| {
            Error::InvalidInput(format!(
                "RSMB header declares {} bytes but only {} follow",
                length,
                blob.len() - start
            ))
        })?;

        Ok(Self::new(
            data.to_vec(),
            header.major_version,
            header.minor_version,
        ))
    }

    /// Pair a structure table with a 2.1 (`_SM_`) or 3.0 (`_SM3_`) entry point,
    /// such as `/sys/firmware/dmi/tables/smbios_entry_point`
    pub fn from_entry_point(entry_point: &[u8], data: Vec<u8>) -> Result<Self, Error> {
        if entry_point.starts_with(ANCHOR_30) {
            let mut ep = EntryPoint30::default();
            plain::copy_from_bytes(&mut ep, entry_point)
                .map_err(|_| Error::Parse("truncated SMBIOS 3.0 entry point".to_string()))?;
            let length = usize::from(ep.length);
            if length < mem::size_of::<EntryPoint30>() || length > entry_point.len() {
                return Err(Error::Parse(format!(
                    "SMBIOS 3.0 entry point length {} is inconsistent",
                    length
                )));
            }
            if checksum(&entry_point[..length]) != 0 {
                return Err(Error::Parse("SMBIOS 3.0 entry point checksum mismatch".to_string()));
            }
            Ok(Self::new(data, ep.major_version, ep.minor_version))
        } else if entry_point.starts_with(ANCHOR_21) {
            let mut ep = EntryPoint21::default();
            plain::copy_from_bytes(&mut ep, entry_point)
                .map_err(|_| Error::Parse("truncated SMBIOS 2.1 entry point".to_string()))?;
            // Some firmware reports 0x1e, a known SMBIOS 2.1 erratum
            let length = match ep.length {
                0x1e => 0x1f,
                length => usize::from(length),
            };
            if length < mem::size_of::<EntryPoint21>() || length > entry_point.len() {
                return Err(Error::Parse(format!(
                    "SMBIOS 2.1 entry point length {} is inconsistent",
                    length
                )));
            }
            if checksum(&entry_point[..length]) != 0 {
                return Err(Error::Parse("SMBIOS 2.1 entry point checksum mismatch".to_string()));
            }
            let intermediate_anchor = ep.intermediate_anchor;
            if &intermediate_anchor != INTERMEDIATE_ANCHOR {
                return Err(Error::Parse("missing _DMI_ intermediate anchor".to_string()));
            }
            if checksum(&entry_point[0x10..0x1f]) != 0 {
                return Err(Error::Parse(
                    "SMBIOS 2.1 intermediate checksum mismatch".to_string(),
                ));
            }
            Ok(Self::new(data, ep.major_version, ep.minor_version))
        } else {
            Err(Error::Parse("unrecognized entry point anchor".to_string()))
        }
    }
}

/// A structure table accepted by [`SmbiosParser::load`](crate::SmbiosParser::load)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTable {
    data: Vec<u8>,
    major_version: u8,
    minor_version: u8,
}

impl RawTable {
    pub(crate) fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            major_version: 0,
            minor_version: 0,
        }
    }

    /// Attach the version reported by firmware. `0.0` means unknown.
    pub fn with_version(mut self, major_version: u8, minor_version: u8) -> Self {
        self.major_version = major_version;
        self.minor_version = minor_version;
        self
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn version(&self) -> (u8, u8) {
        (self.major_version, self.minor_version)
    }
}
