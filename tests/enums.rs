// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

use smbios_info::enums;

#[test]
fn chassis_type() {
    assert_eq!(enums::chassis_type(0x0a), "Notebook");
    // Lock bit is ignored
    assert_eq!(enums::chassis_type(0x80 | 0x03), "Desktop");
    assert_eq!(enums::chassis_type(0x40), enums::OUT_OF_SPEC);
    assert_eq!(enums::chassis_type(0), enums::UNKNOWN);
    assert!(!enums::chassis_type(255).is_empty());
}

#[test]
fn every_value_has_text() {
    for value in 0..=u8::MAX {
        for text in [
            enums::chassis_type(value),
            enums::processor_type(value),
            enums::memory_type(value),
            enums::form_factor(value),
            enums::cache_type(value),
            enums::connector_type(value),
            enums::port_type(value),
            enums::battery_chemistry(value),
            enums::slot_type(value),
            enums::probe_location(value),
            enums::probe_status(value),
            enums::cooling_device_type(value),
        ] {
            assert!(!text.is_empty(), "value {:#04x}", value);
        }
    }
}

#[test]
fn lookups() {
    assert_eq!(enums::processor_type(0x03), "Central Processor");
    assert_eq!(enums::memory_type(0x1a), "DDR4");
    assert_eq!(enums::memory_type(0x22), "DDR5");
    assert_eq!(enums::memory_type(0x30), enums::OUT_OF_SPEC);
    assert_eq!(enums::form_factor(0x0d), "SODIMM");
    assert_eq!(enums::cache_type(0x05), "Unified");
    assert_eq!(enums::connector_type(0x12), "Access Bus (USB)");
    assert_eq!(enums::port_type(0x10), "USB");
    assert_eq!(enums::battery_chemistry(0x06), "Lithium-ion");
    assert_eq!(enums::slot_type(0xb6), "PCI Express Gen 3 x16");
    assert_eq!(enums::processor_family(0x101), "ARMv8");
    assert_eq!(enums::processor_family(0x4242), enums::UNKNOWN);
    assert_eq!(enums::probe_location(0x63), "Processor");
    assert_eq!(enums::probe_status(0x63), "OK");
}

#[test]
fn flag_expansion() {
    assert_eq!(
        enums::bios_characteristics(1 << 7 | 1 << 11),
        vec!["PCI is supported", "BIOS is upgradeable"]
    );
    assert_eq!(
        enums::bios_characteristics(1 << 3 | 1 << 7),
        vec!["BIOS characteristics not supported"]
    );
    assert_eq!(
        enums::processor_characteristics(0x00fc),
        vec![
            "64-bit capable",
            "Multi-Core",
            "Hardware Thread",
            "Execute Protection",
            "Enhanced Virtualization",
            "Power/Performance Control",
        ]
    );
    assert!(enums::baseboard_features(0).is_empty());
    assert_eq!(
        enums::cache_configuration(0x0181),
        "L2, Not Socketed, Internal, Enabled, Write Back"
    );
}
