// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

mod common;

use common::{system_body, TableBuilder};
use smbios_info::{Error, FirmwareTable};

fn fix_checksum(bytes: &mut [u8], range: std::ops::Range<usize>, at: usize) {
    bytes[at] = 0;
    let sum = bytes[range].iter().fold(0u8, |sum, b| sum.wrapping_add(*b));
    bytes[at] = 0u8.wrapping_sub(sum);
}

fn entry_point_30() -> Vec<u8> {
    let mut ep = b"_SM3_".to_vec();
    ep.extend_from_slice(&[0, 0x18, 3, 4, 0, 1, 0]);
    ep.extend_from_slice(&0x1000u32.to_le_bytes());
    ep.extend_from_slice(&0x7a45_f000u64.to_le_bytes());
    fix_checksum(&mut ep, 0..0x18, 5);
    ep
}

fn entry_point_21(length: u8) -> Vec<u8> {
    let mut ep = b"_SM_".to_vec();
    ep.extend_from_slice(&[0, length, 2, 8]);
    ep.extend_from_slice(&0x0100u16.to_le_bytes());
    ep.extend_from_slice(&[0, 0, 0, 0, 0, 0]);
    ep.extend_from_slice(b"_DMI_");
    ep.push(0);
    ep.extend_from_slice(&0x0800u16.to_le_bytes());
    ep.extend_from_slice(&0x000f_0000u32.to_le_bytes());
    ep.extend_from_slice(&42u16.to_le_bytes());
    ep.push(0x28);
    fix_checksum(&mut ep, 0x10..0x1f, 0x15);
    fix_checksum(&mut ep, 0..0x1f, 4);
    ep
}

#[test]
fn entry_point_version() {
    let table = FirmwareTable::from_entry_point(&entry_point_30(), vec![1, 2, 3]).unwrap();
    assert_eq!((table.major_version, table.minor_version), (3, 4));
    assert_eq!(table.data, vec![1, 2, 3]);

    let table = FirmwareTable::from_entry_point(&entry_point_21(0x1f), Vec::new()).unwrap();
    assert_eq!((table.major_version, table.minor_version), (2, 8));

    // Length erratum of some 2.1 firmware
    let table = FirmwareTable::from_entry_point(&entry_point_21(0x1e), Vec::new()).unwrap();
    assert_eq!((table.major_version, table.minor_version), (2, 8));
}

#[test]
fn entry_point_is_verified() {
    let mut ep = entry_point_30();
    ep[7] = 5;
    assert!(matches!(
        FirmwareTable::from_entry_point(&ep, Vec::new()),
        Err(Error::Parse(_))
    ));

    let mut ep = entry_point_21(0x1f);
    ep[0x10] = b'X';
    assert!(FirmwareTable::from_entry_point(&ep, Vec::new()).is_err());

    assert!(FirmwareTable::from_entry_point(b"_SM3_", Vec::new()).is_err());
    assert!(FirmwareTable::from_entry_point(b"junk", Vec::new()).is_err());
}

#[test]
fn rsmb_blob() {
    let data = TableBuilder::new()
        .structure(1, 0x0100, &system_body(), &["Acme Corp", "Model Z"])
        .end_of_table()
        .build();
    let mut blob = vec![0, 3, 2, 0];
    blob.extend_from_slice(&(data.len() as u32).to_le_bytes());
    blob.extend_from_slice(&data);

    let table = FirmwareTable::from_rsmb(&blob).unwrap();
    assert_eq!((table.major_version, table.minor_version), (3, 2));
    assert_eq!(table.data, data);

    assert!(matches!(
        FirmwareTable::from_rsmb(&blob[..6]),
        Err(Error::TableLoad(_))
    ));
    assert!(matches!(
        FirmwareTable::from_rsmb(&blob[..blob.len() - 1]),
        Err(Error::InvalidInput(_))
    ));
}
