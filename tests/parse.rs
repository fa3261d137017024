// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

mod common;

use common::{parse, parse_version, system_body, Body, TableBuilder};
use smbios_info::{
    Error, FirmwareTable, RawTableSource, SmbiosParser, SourceError, SourceErrorKind,
};

fn system_table() -> Vec<u8> {
    TableBuilder::new()
        .structure(1, 0x0100, &system_body(), &["Acme Corp", "Model Z"])
        .end_of_table()
        .build()
}

#[test]
fn system_information() {
    let data = system_table();
    let mut parser = SmbiosParser::new();
    let table = parser.load(&data, data.len()).unwrap();
    let info = parser.parse(&table).unwrap();

    assert_eq!(info.system.manufacturer, "Acme Corp");
    assert_eq!(info.system.product_name, "Model Z");
    assert_eq!(info.system.version, "");
    assert_eq!(info.system.wake_up_type, 0x06);
    assert!(info.processors.is_empty());
    assert_eq!(info.bios, smbios_info::BiosInfo::default());
    assert_eq!(parser.last_error(), "");
}

#[test]
fn uuid_byte_order_follows_version() {
    let data = system_table();
    assert_eq!(
        parse_version(&data, 2, 6).system.uuid,
        "00112233-4455-6677-8899-AABBCCDDEEFF"
    );
    assert_eq!(
        parse_version(&data, 0, 0).system.uuid,
        "00112233-4455-6677-8899-AABBCCDDEEFF"
    );
    assert_eq!(
        parse_version(&data, 2, 5).system.uuid,
        "33221100-5544-7766-8899-AABBCCDDEEFF"
    );
}

#[test]
fn parse_is_idempotent() {
    let data = system_table();
    let mut parser = SmbiosParser::new();
    let table = parser.load(&data, data.len()).unwrap();
    let first = parser.parse(&table).unwrap();
    let second = parser.parse(&table).unwrap();
    assert_eq!(first, second);
}

#[test]
fn structures_are_counted() {
    let data = TableBuilder::new()
        .structure(1, 0x0100, &system_body(), &["Acme Corp"])
        // Vendor specific
        .structure(0xdd, 0x0101, &[1, 2, 3], &["OEM"])
        // System with a body too short to decode
        .structure(1, 0x0102, &[1, 2], &[])
        .end_of_table()
        .build();
    let info = parse(&data);
    let stats = &info.stats;

    assert_eq!(stats.structures, 4);
    assert_eq!(stats.decoded, 1);
    assert_eq!(stats.skipped, 2);
    assert_eq!(stats.warnings.len(), 1);
    assert_eq!(stats.warnings[0].handle, 0x0102);
    assert_eq!(stats.warnings[0].length, 6);
    assert_eq!(
        stats.decoded + stats.skipped + stats.warnings.len(),
        stats.structures
    );
    assert!(!stats.truncated);
    assert_eq!(info.system.manufacturer, "Acme Corp");
}

#[test]
fn first_singleton_wins() {
    let data = TableBuilder::new()
        .structure(1, 0x0100, &system_body(), &["First"])
        .structure(1, 0x0101, &system_body(), &["Second"])
        .end_of_table()
        .build();
    let info = parse(&data);
    assert_eq!(info.system.manufacturer, "First");
    assert_eq!(info.stats.decoded, 2);
}

#[test]
fn truncated_table_keeps_earlier_structures() {
    let data = TableBuilder::new()
        .structure(1, 0x0100, &system_body(), &["Acme Corp"])
        // Claims 0x40 bytes, only the header follows
        .raw(&[4, 0x40, 0x00, 0x04])
        .build();
    let info = parse(&data);
    assert_eq!(info.system.manufacturer, "Acme Corp");
    assert_eq!(info.stats.structures, 1);
    assert!(info.stats.truncated);
}

#[test]
fn table_without_end_marker() {
    let data = TableBuilder::new()
        .structure(1, 0x0100, &system_body(), &["Acme Corp"])
        .build();
    let info = parse(&data);
    assert_eq!(info.stats.structures, 1);
    assert!(!info.stats.truncated);
}

#[test]
fn oem_strings_in_table_order() {
    let data = TableBuilder::new()
        .structure(11, 0x0b00, &[2], &["Build 42", "Line 7"])
        .structure(11, 0x0b01, &[1], &["Tail", "ignored"])
        .end_of_table()
        .build();
    let info = parse(&data);
    assert_eq!(info.oem_strings, vec!["Build 42", "Line 7", "Tail"]);
}

#[test]
fn collections_keep_table_order() {
    let slot = |designation: u8, id: u16| {
        Body::new()
            .u8(designation)
            .u8(0xb6) // PCIe Gen 3 x16
            .u8(0x0d)
            .u8(0x03)
            .u8(0x04)
            .u16(id)
            .u8(0)
            .build()
    };
    let data = TableBuilder::new()
        .structure(9, 0x0900, &slot(1, 1), &["SLOT1"])
        .structure(9, 0x0901, &slot(1, 2), &["SLOT2"])
        .end_of_table()
        .build();
    let info = parse(&data);
    let designations: Vec<&str> = info
        .system_slots
        .iter()
        .map(|slot| slot.slot_designation.as_str())
        .collect();
    assert_eq!(designations, vec!["SLOT1", "SLOT2"]);
    assert_eq!(info.system_slots[1].slot_id, 2);
}

#[test]
fn load_rejects_bad_input() {
    let mut parser = SmbiosParser::new();
    assert!(matches!(parser.load(&[], 0), Err(Error::TableLoad(_))));
    assert!(!parser.last_error().is_empty());

    assert!(matches!(
        parser.load(&[1, 2, 3], 4),
        Err(Error::InvalidInput(_))
    ));
    assert!(parser.last_error().contains("length is 4"));
}

#[test]
fn parse_rejects_table_without_structures() {
    let mut parser = SmbiosParser::new();
    // Shorter than one header
    let table = parser.load(&[1, 2], 2).unwrap();
    assert!(matches!(parser.parse(&table), Err(Error::Parse(_))));
    assert!(parser.last_error().contains("no structures"));

    let data = system_table();
    let table = parser.load(&data, data.len()).unwrap();
    parser.parse(&table).unwrap();
    assert_eq!(parser.last_error(), "");
}

struct DeniedSource;

impl RawTableSource for DeniedSource {
    fn fetch(&mut self) -> Result<FirmwareTable, SourceError> {
        Err(SourceError::new(
            SourceErrorKind::AccessDenied,
            "access to the firmware table was denied",
        ))
    }
}

struct MemorySource(Vec<u8>);

impl RawTableSource for MemorySource {
    fn fetch(&mut self) -> Result<FirmwareTable, SourceError> {
        Ok(FirmwareTable::new(self.0.clone(), 2, 5))
    }
}

#[test]
fn load_from_source() {
    let mut parser = SmbiosParser::new();
    let err = parser.load_from(&mut DeniedSource).unwrap_err();
    assert!(matches!(err, Error::TableLoad(_)));
    assert!(parser.last_error().contains("denied"));
    assert!(parser.last_error().contains("run as root"));

    let mut source = MemorySource(system_table());
    let table = parser.load_from(&mut source).unwrap();
    assert_eq!(table.version(), (2, 5));
    let info = parser.parse(&table).unwrap();
    assert_eq!((info.major_version, info.minor_version), (2, 5));
    assert_eq!(info.system.product_name, "Model Z");
}

#[test]
fn empty_source_is_a_load_error() {
    let mut parser = SmbiosParser::new();
    let mut source = MemorySource(Vec::new());
    assert!(matches!(
        parser.load_from(&mut source),
        Err(Error::TableLoad(_))
    ));
}
