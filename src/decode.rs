// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

//! Formatted areas of the supported structure types, and their decoding into
//! the records of [`crate::info`].
//!
//! Each layout below describes the newest revision handled. Older firmware
//! emits a prefix of it, so every layout is read zero padded and fields past
//! the structure length are only trusted once the length covers them.

use plain::Plain;
use std::mem;
use uuid::Uuid;

use crate::{error::DecodeWarning, info::*, walker::RawStructure};

pub const BIOS: u8 = 0;
pub const SYSTEM: u8 = 1;
pub const BASEBOARD: u8 = 2;
pub const ENCLOSURE: u8 = 3;
pub const PROCESSOR: u8 = 4;
pub const CACHE: u8 = 7;
pub const PORT_CONNECTOR: u8 = 8;
pub const SYSTEM_SLOT: u8 = 9;
pub const OEM_STRINGS: u8 = 11;
pub const MEMORY_ARRAY: u8 = 16;
pub const MEMORY_DEVICE: u8 = 17;
pub const PORTABLE_BATTERY: u8 = 22;
pub const VOLTAGE_PROBE: u8 = 26;
pub const COOLING_DEVICE: u8 = 27;
pub const TEMPERATURE_PROBE: u8 = 28;

#[repr(packed)]
#[derive(Clone, Default, Debug, Copy)]
struct Bios31 {
    vendor: u8,
    version: u8,
    starting_segment: u16,
    release_date: u8,
    rom_size: u8,
    characteristics: u64,
    // SMBIOS 2.4
    characteristics_ext1: u8,
    characteristics_ext2: u8,
    major_release: u8,
    minor_release: u8,
    ec_major_release: u8,
    ec_minor_release: u8,
    // SMBIOS 3.1
    extended_rom_size: u16,
}

unsafe impl Plain for Bios31 {}

#[repr(packed)]
#[derive(Clone, Default, Debug, Copy)]
struct System24 {
    manufacturer: u8,
    product_name: u8,
    version: u8,
    serial_number: u8,
    // SMBIOS 2.1
    uuid: [u8; 16],
    wake_up_type: u8,
    // SMBIOS 2.4
    sku_number: u8,
    family: u8,
}

unsafe impl Plain for System24 {}

#[repr(packed)]
#[derive(Clone, Default, Debug, Copy)]
#[allow(dead_code)]
struct Baseboard {
    manufacturer: u8,
    product: u8,
    version: u8,
    serial_number: u8,
    asset_tag: u8,
    feature_flags: u8,
    location_in_chassis: u8,
    chassis_handle: u16,
    board_type: u8,
    contained_object_count: u8,
}

unsafe impl Plain for Baseboard {}

#[repr(packed)]
#[derive(Clone, Default, Debug, Copy)]
struct Enclosure23 {
    manufacturer: u8,
    chassis_type: u8,
    version: u8,
    serial_number: u8,
    asset_tag: u8,
    // SMBIOS 2.1
    bootup_state: u8,
    power_supply_state: u8,
    thermal_state: u8,
    security_status: u8,
    // SMBIOS 2.3
    oem_defined: u32,
    height: u8,
    power_cords: u8,
    contained_element_count: u8,
    contained_element_length: u8,
}

unsafe impl Plain for Enclosure23 {}

#[repr(packed)]
#[derive(Clone, Default, Debug, Copy)]
struct Processor30 {
    socket_designation: u8,
    processor_type: u8,
    processor_family: u8,
    manufacturer: u8,
    processor_id: u64,
    version: u8,
    voltage: u8,
    external_clock: u16,
    max_speed: u16,
    current_speed: u16,
    status: u8,
    upgrade: u8,
    // SMBIOS 2.1
    l1_cache_handle: u16,
    l2_cache_handle: u16,
    l3_cache_handle: u16,
    // SMBIOS 2.3
    serial_number: u8,
    asset_tag: u8,
    part_number: u8,
    // SMBIOS 2.5
    core_count: u8,
    core_enabled: u8,
    thread_count: u8,
    characteristics: u16,
    // SMBIOS 2.6
    processor_family_2: u16,
    // SMBIOS 3.0
    core_count_2: u16,
    core_enabled_2: u16,
    thread_count_2: u16,
}

unsafe impl Plain for Processor30 {}

#[repr(packed)]
#[derive(Clone, Default, Debug, Copy)]
struct Cache31 {
    socket_designation: u8,
    configuration: u16,
    maximum_size: u16,
    installed_size: u16,
    supported_sram_type: u16,
    current_sram_type: u16,
    // SMBIOS 2.1
    speed: u8,
    error_correction_type: u8,
    system_cache_type: u8,
    associativity: u8,
    // SMBIOS 3.1
    maximum_size_2: u32,
    installed_size_2: u32,
}

unsafe impl Plain for Cache31 {}

#[repr(packed)]
#[derive(Clone, Default, Debug, Copy)]
struct PortConnector {
    internal_reference_designator: u8,
    internal_connector_type: u8,
    external_reference_designator: u8,
    external_connector_type: u8,
    port_type: u8,
}

unsafe impl Plain for PortConnector {}

#[repr(packed)]
#[derive(Clone, Default, Debug, Copy)]
struct SystemSlot26 {
    slot_designation: u8,
    slot_type: u8,
    slot_data_bus_width: u8,
    current_usage: u8,
    slot_length: u8,
    slot_id: u16,
    characteristics_1: u8,
    // SMBIOS 2.1
    characteristics_2: u8,
    // SMBIOS 2.6
    segment_group: u16,
    bus_number: u8,
    device_function_number: u8,
}

unsafe impl Plain for SystemSlot26 {}

#[repr(packed)]
#[derive(Clone, Default, Debug, Copy)]
struct MemoryArray27 {
    location: u8,
    use_: u8,
    memory_error_correction: u8,
    maximum_capacity: u32,
    error_information_handle: u16,
    number_of_memory_devices: u16,
    // SMBIOS 2.7
    extended_maximum_capacity: u64,
}

unsafe impl Plain for MemoryArray27 {}

#[repr(packed)]
#[derive(Clone, Default, Debug, Copy)]
struct MemoryDevice28 {
    array_handle: u16,
    error_information_handle: u16,
    total_width: u16,
    data_width: u16,
    size: u16,
    form_factor: u8,
    device_set: u8,
    device_locator: u8,
    bank_locator: u8,
    memory_type: u8,
    type_detail: u16,
    // SMBIOS 2.3
    speed: u16,
    manufacturer: u8,
    serial_number: u8,
    asset_tag: u8,
    part_number: u8,
    // SMBIOS 2.6
    attributes: u8,
    // SMBIOS 2.7
    extended_size: u32,
    configured_speed: u16,
    // SMBIOS 2.8
    minimum_voltage: u16,
    maximum_voltage: u16,
    configured_voltage: u16,
}

unsafe impl Plain for MemoryDevice28 {}

#[repr(packed)]
#[derive(Clone, Default, Debug, Copy)]
#[allow(dead_code)]
struct PortableBattery22 {
    location: u8,
    manufacturer: u8,
    manufacture_date: u8,
    serial_number: u8,
    device_name: u8,
    device_chemistry: u8,
    design_capacity: u16,
    design_voltage: u16,
    sbds_version: u8,
    maximum_error: u8,
    // SMBIOS 2.2
    sbds_serial_number: u16,
    sbds_manufacture_date: u16,
    sbds_device_chemistry: u8,
    design_capacity_multiplier: u8,
    oem_specific: u32,
}

unsafe impl Plain for PortableBattery22 {}

/// Shared by voltage (26) and temperature (28) probes
#[repr(packed)]
#[derive(Clone, Default, Debug, Copy)]
struct Probe {
    description: u8,
    location_and_status: u8,
    maximum_value: u16,
    minimum_value: u16,
    resolution: u16,
    tolerance: u16,
    accuracy: u16,
    oem_defined: u32,
    nominal_value: u16,
}

unsafe impl Plain for Probe {}

#[repr(packed)]
#[derive(Clone, Default, Debug, Copy)]
struct CoolingDevice27 {
    temperature_probe_handle: u16,
    device_type_and_status: u8,
    cooling_unit_group: u8,
    oem_defined: u32,
    nominal_speed: u16,
    // SMBIOS 2.7
    description: u8,
}

unsafe impl Plain for CoolingDevice27 {}

/// Read `T` from the start of `body`, zero filling whatever the body lacks
fn read<T: Plain + Default + Copy>(body: &[u8]) -> T {
    let mut bytes = vec![0; mem::size_of::<T>()];
    let len = body.len().min(bytes.len());
    bytes[..len].copy_from_slice(&body[..len]);

    plain::from_bytes::<T>(&bytes)
        .map(|raw| *raw)
        .unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Bios(BiosInfo),
    System(SystemInfo),
    Baseboard(BaseboardInfo),
    SystemEnclosure(SystemEnclosureInfo),
    Processor(ProcessorInfo),
    Cache(CacheInfo),
    PortConnector(PortConnectorInfo),
    SystemSlot(SystemSlotInfo),
    OemStrings(Vec<String>),
    PhysicalMemoryArray(PhysicalMemoryArrayInfo),
    MemoryDevice(MemoryDeviceInfo),
    Battery(BatteryInfo),
    VoltageProbe(VoltageProbeInfo),
    CoolingDevice(CoolingDeviceInfo),
    TemperatureProbe(TemperatureProbeInfo),
}

/// Result of decoding a single structure
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Decoded(Record),
    /// Type is not decoded by this crate
    Skipped(u8),
    Warning(DecodeWarning),
}

/// Smallest structure length, header included, accepted for a decoded type
fn minimum_length(kind: u8) -> Option<u8> {
    Some(match kind {
        BIOS => 0x12,
        SYSTEM => 0x08,
        BASEBOARD => 0x08,
        ENCLOSURE => 0x09,
        PROCESSOR => 0x1a,
        CACHE => 0x0f,
        PORT_CONNECTOR => 0x09,
        SYSTEM_SLOT => 0x0c,
        OEM_STRINGS => 0x05,
        MEMORY_ARRAY => 0x0f,
        MEMORY_DEVICE => 0x15,
        PORTABLE_BATTERY => 0x10,
        VOLTAGE_PROBE | TEMPERATURE_PROBE => 0x14,
        COOLING_DEVICE => 0x0c,
        _ => return None,
    })
}

/// Decode one structure. `version` is the SMBIOS version reported by
/// firmware, `(0, 0)` if unknown.
pub fn decode(structure: &RawStructure, version: (u8, u8)) -> Outcome {
    let minimum = match minimum_length(structure.kind) {
        Some(minimum) => minimum,
        None => return Outcome::Skipped(structure.kind),
    };
    if structure.length < minimum {
        return Outcome::Warning(DecodeWarning {
            kind: structure.kind,
            handle: structure.handle,
            length: structure.length,
            reason: format!("shorter than the minimum length {:#04x}", minimum),
        });
    }

    let record = match structure.kind {
        BIOS => Record::Bios(bios(structure)),
        SYSTEM => Record::System(system(structure, version)),
        BASEBOARD => Record::Baseboard(baseboard(structure)),
        ENCLOSURE => Record::SystemEnclosure(enclosure(structure)),
        PROCESSOR => Record::Processor(processor(structure)),
        CACHE => Record::Cache(cache(structure)),
        PORT_CONNECTOR => Record::PortConnector(port_connector(structure)),
        SYSTEM_SLOT => Record::SystemSlot(system_slot(structure)),
        OEM_STRINGS => Record::OemStrings(oem_strings(structure)),
        MEMORY_ARRAY => Record::PhysicalMemoryArray(memory_array(structure)),
        MEMORY_DEVICE => Record::MemoryDevice(memory_device(structure)),
        PORTABLE_BATTERY => Record::Battery(battery(structure)),
        VOLTAGE_PROBE => Record::VoltageProbe(voltage_probe(structure)),
        COOLING_DEVICE => Record::CoolingDevice(cooling_device(structure)),
        TEMPERATURE_PROBE => Record::TemperatureProbe(temperature_probe(structure)),
        kind => return Outcome::Skipped(kind),
    };
    Outcome::Decoded(record)
}

fn bios(s: &RawStructure) -> BiosInfo {
    let raw: Bios31 = read(s.body);

    let rom_size = raw.rom_size;
    let extended = raw.extended_rom_size;
    let rom_size_kb = if rom_size == 0xff && s.length >= 0x1a {
        // Bits 15:14 select MB or GB, bits 13:0 the size
        let size = u64::from(extended & 0x3fff);
        match extended >> 14 {
            0 => size * 1024,
            1 => size * 1024 * 1024,
            _ => 0,
        }
    } else {
        (u64::from(rom_size) + 1) * 64
    };

    BiosInfo {
        vendor: s.string(raw.vendor),
        version: s.string(raw.version),
        release_date: s.string(raw.release_date),
        starting_segment: raw.starting_segment,
        rom_size,
        rom_size_kb,
        characteristics: raw.characteristics,
        characteristics_ext: u16::from_le_bytes([
            raw.characteristics_ext1,
            raw.characteristics_ext2,
        ]),
        major_release: raw.major_release,
        minor_release: raw.minor_release,
        ec_major_release: raw.ec_major_release,
        ec_minor_release: raw.ec_minor_release,
    }
}

/// UUID fields are little endian from SMBIOS 2.6 onwards
fn format_uuid(bytes: [u8; 16], version: (u8, u8)) -> String {
    let uuid = if version == (0, 0) || version >= (2, 6) {
        Uuid::from_bytes_le(bytes)
    } else {
        Uuid::from_bytes(bytes)
    };
    format!("{:X}", uuid.hyphenated())
}

fn system(s: &RawStructure, version: (u8, u8)) -> SystemInfo {
    let raw: System24 = read(s.body);

    let uuid = if s.length >= 0x19 {
        format_uuid(raw.uuid, version)
    } else {
        String::new()
    };

    SystemInfo {
        manufacturer: s.string(raw.manufacturer),
        product_name: s.string(raw.product_name),
        version: s.string(raw.version),
        serial_number: s.string(raw.serial_number),
        uuid,
        wake_up_type: raw.wake_up_type,
        sku_number: s.string(raw.sku_number),
        family: s.string(raw.family),
    }
}

fn baseboard(s: &RawStructure) -> BaseboardInfo {
    let raw: Baseboard = read(s.body);
    BaseboardInfo {
        manufacturer: s.string(raw.manufacturer),
        product: s.string(raw.product),
        version: s.string(raw.version),
        serial_number: s.string(raw.serial_number),
        asset_tag: s.string(raw.asset_tag),
        feature_flags: raw.feature_flags,
        location_in_chassis: s.string(raw.location_in_chassis),
        chassis_handle: raw.chassis_handle,
        board_type: raw.board_type,
    }
}

fn enclosure(s: &RawStructure) -> SystemEnclosureInfo {
    let raw: Enclosure23 = read(s.body);

    // SKU (2.7) follows the variable length contained element list
    let sku_number = if s.length >= 0x15 {
        let elements =
            usize::from(raw.contained_element_count) * usize::from(raw.contained_element_length);
        // Offset within the body, header excluded
        let offset = 0x15 - 4 + elements;
        s.body
            .get(offset)
            .map(|index| s.string(*index))
            .unwrap_or_default()
    } else {
        String::new()
    };

    SystemEnclosureInfo {
        manufacturer: s.string(raw.manufacturer),
        chassis_type: raw.chassis_type,
        version: s.string(raw.version),
        serial_number: s.string(raw.serial_number),
        asset_tag: s.string(raw.asset_tag),
        bootup_state: raw.bootup_state,
        power_supply_state: raw.power_supply_state,
        thermal_state: raw.thermal_state,
        security_status: raw.security_status,
        oem_defined: raw.oem_defined,
        height: raw.height,
        power_cords: raw.power_cords,
        sku_number,
    }
}

fn processor(s: &RawStructure) -> ProcessorInfo {
    let raw: Processor30 = read(s.body);

    let processor_family = raw.processor_family;
    let family = if processor_family == 0xfe && s.length >= 0x2a {
        raw.processor_family_2
    } else {
        u16::from(processor_family)
    };

    // 3.0 moved counts past 255 into 16-bit fields, flagged by 0xff
    let count = |short: u8, long: u16| {
        if short == 0xff && s.length >= 0x30 {
            long
        } else {
            u16::from(short)
        }
    };

    ProcessorInfo {
        socket_designation: s.string(raw.socket_designation),
        processor_type: raw.processor_type,
        processor_family,
        family,
        manufacturer: s.string(raw.manufacturer),
        processor_id: raw.processor_id,
        version: s.string(raw.version),
        voltage: raw.voltage,
        external_clock: raw.external_clock,
        max_speed: raw.max_speed,
        current_speed: raw.current_speed,
        status: raw.status,
        upgrade: raw.upgrade,
        l1_cache_handle: raw.l1_cache_handle,
        l2_cache_handle: raw.l2_cache_handle,
        l3_cache_handle: raw.l3_cache_handle,
        serial_number: s.string(raw.serial_number),
        asset_tag: s.string(raw.asset_tag),
        part_number: s.string(raw.part_number),
        core_count: count(raw.core_count, raw.core_count_2),
        core_enabled: count(raw.core_enabled, raw.core_enabled_2),
        thread_count: count(raw.thread_count, raw.thread_count_2),
        characteristics: raw.characteristics,
    }
}

/// 16-bit cache size: bit 15 selects 64 KB granularity
fn cache_size(raw: u16) -> u64 {
    let size = u64::from(raw & 0x7fff);
    if raw & 0x8000 != 0 {
        size * 64
    } else {
        size
    }
}

/// 32-bit cache size: bit 31 selects 64 KB granularity
fn cache_size_2(raw: u32) -> u64 {
    let size = u64::from(raw & 0x7fff_ffff);
    if raw & 0x8000_0000 != 0 {
        size * 64
    } else {
        size
    }
}

fn cache(s: &RawStructure) -> CacheInfo {
    let raw: Cache31 = read(s.body);

    let maximum_size = raw.maximum_size;
    let installed_size = raw.installed_size;
    let extended = s.length >= 0x1b;
    let maximum_size_kb = if maximum_size == 0xffff && extended {
        cache_size_2(raw.maximum_size_2)
    } else {
        cache_size(maximum_size)
    };
    let installed_size_kb = if installed_size == 0xffff && extended {
        cache_size_2(raw.installed_size_2)
    } else {
        cache_size(installed_size)
    };

    CacheInfo {
        socket_designation: s.string(raw.socket_designation),
        configuration: raw.configuration,
        maximum_size,
        installed_size,
        maximum_size_kb,
        installed_size_kb,
        supported_sram_type: raw.supported_sram_type,
        current_sram_type: raw.current_sram_type,
        speed: raw.speed,
        error_correction_type: raw.error_correction_type,
        system_cache_type: raw.system_cache_type,
        associativity: raw.associativity,
    }
}

fn port_connector(s: &RawStructure) -> PortConnectorInfo {
    let raw: PortConnector = read(s.body);
    PortConnectorInfo {
        internal_reference_designator: s.string(raw.internal_reference_designator),
        internal_connector_type: raw.internal_connector_type,
        external_reference_designator: s.string(raw.external_reference_designator),
        external_connector_type: raw.external_connector_type,
        port_type: raw.port_type,
    }
}

fn system_slot(s: &RawStructure) -> SystemSlotInfo {
    let raw: SystemSlot26 = read(s.body);
    SystemSlotInfo {
        slot_designation: s.string(raw.slot_designation),
        slot_type: raw.slot_type,
        slot_data_bus_width: raw.slot_data_bus_width,
        current_usage: raw.current_usage,
        slot_length: raw.slot_length,
        slot_id: raw.slot_id,
        characteristics_1: raw.characteristics_1,
        characteristics_2: raw.characteristics_2,
        segment_group: raw.segment_group,
        bus_number: raw.bus_number,
        device_function_number: raw.device_function_number,
    }
}

fn oem_strings(s: &RawStructure) -> Vec<String> {
    let count = usize::from(s.body[0]);
    s.strings.iter().take(count).cloned().collect()
}

fn memory_array(s: &RawStructure) -> PhysicalMemoryArrayInfo {
    let raw: MemoryArray27 = read(s.body);

    let maximum_capacity = raw.maximum_capacity;
    let maximum_capacity_kb = if maximum_capacity == 0x8000_0000 {
        if s.length >= 0x17 {
            raw.extended_maximum_capacity / 1024
        } else {
            0
        }
    } else {
        u64::from(maximum_capacity)
    };

    PhysicalMemoryArrayInfo {
        location: raw.location,
        use_: raw.use_,
        memory_error_correction: raw.memory_error_correction,
        maximum_capacity,
        maximum_capacity_kb,
        error_information_handle: raw.error_information_handle,
        number_of_memory_devices: raw.number_of_memory_devices,
    }
}

/// Resolve the memory device size fields to MB
fn memory_size_mb(size: u16, extended_size: Option<u32>) -> u32 {
    match size {
        0 | 0xffff => 0,
        0x7fff => extended_size.map_or(0, |size| size & 0x7fff_ffff),
        size if size & 0x8000 != 0 => u32::from(size & 0x7fff) / 1024,
        size => u32::from(size),
    }
}

fn memory_device(s: &RawStructure) -> MemoryDeviceInfo {
    let raw: MemoryDevice28 = read(s.body);

    let size = raw.size;
    let extended_size = if s.length >= 0x20 {
        Some(raw.extended_size)
    } else {
        None
    };

    MemoryDeviceInfo {
        array_handle: raw.array_handle,
        error_information_handle: raw.error_information_handle,
        total_width: raw.total_width,
        data_width: raw.data_width,
        size,
        size_mb: memory_size_mb(size, extended_size),
        form_factor: raw.form_factor,
        device_set: raw.device_set,
        device_locator: s.string(raw.device_locator),
        bank_locator: s.string(raw.bank_locator),
        memory_type: raw.memory_type,
        type_detail: raw.type_detail,
        speed: raw.speed,
        manufacturer: s.string(raw.manufacturer),
        serial_number: s.string(raw.serial_number),
        asset_tag: s.string(raw.asset_tag),
        part_number: s.string(raw.part_number),
        attributes: raw.attributes,
        configured_speed: raw.configured_speed,
        minimum_voltage: raw.minimum_voltage,
        maximum_voltage: raw.maximum_voltage,
        configured_voltage: raw.configured_voltage,
    }
}

fn battery(s: &RawStructure) -> BatteryInfo {
    let raw: PortableBattery22 = read(s.body);
    BatteryInfo {
        location: s.string(raw.location),
        manufacturer: s.string(raw.manufacturer),
        manufacture_date: s.string(raw.manufacture_date),
        serial_number: s.string(raw.serial_number),
        device_name: s.string(raw.device_name),
        device_chemistry: raw.device_chemistry,
        design_capacity: raw.design_capacity,
        design_voltage: raw.design_voltage,
        sbds_version: s.string(raw.sbds_version),
        maximum_error: raw.maximum_error,
        sbds_serial_number: raw.sbds_serial_number,
        sbds_manufacture_date: raw.sbds_manufacture_date,
        sbds_device_chemistry: s.string(raw.sbds_device_chemistry),
        design_capacity_multiplier: raw.design_capacity_multiplier,
    }
}

/// Nominal value is only present past the base structure length
fn probe(s: &RawStructure) -> Probe {
    let mut raw: Probe = read(s.body);
    if s.length < 0x16 {
        raw.nominal_value = PROBE_UNKNOWN;
    }
    raw
}

fn voltage_probe(s: &RawStructure) -> VoltageProbeInfo {
    let raw = probe(s);
    VoltageProbeInfo {
        description: s.string(raw.description),
        location_and_status: raw.location_and_status,
        maximum_value: raw.maximum_value,
        minimum_value: raw.minimum_value,
        resolution: raw.resolution,
        tolerance: raw.tolerance,
        accuracy: raw.accuracy,
        oem_defined: raw.oem_defined,
        nominal_value: raw.nominal_value,
    }
}

fn temperature_probe(s: &RawStructure) -> TemperatureProbeInfo {
    let raw = probe(s);
    TemperatureProbeInfo {
        description: s.string(raw.description),
        location_and_status: raw.location_and_status,
        maximum_value: raw.maximum_value,
        minimum_value: raw.minimum_value,
        resolution: raw.resolution,
        tolerance: raw.tolerance,
        accuracy: raw.accuracy,
        oem_defined: raw.oem_defined,
        nominal_value: raw.nominal_value,
    }
}

fn cooling_device(s: &RawStructure) -> CoolingDeviceInfo {
    let raw: CoolingDevice27 = read(s.body);
    let nominal_speed = if s.length >= 0x0e {
        raw.nominal_speed
    } else {
        PROBE_UNKNOWN
    };
    CoolingDeviceInfo {
        temperature_probe_handle: raw.temperature_probe_handle,
        device_type_and_status: raw.device_type_and_status,
        cooling_unit_group: raw.cooling_unit_group,
        oem_defined: raw.oem_defined,
        nominal_speed,
        description: s.string(raw.description),
    }
}
