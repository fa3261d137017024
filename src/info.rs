// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

use serde::Serialize;

use crate::error::DecodeWarning;

/// Probe readings use `0x8000` for "unknown"
pub const PROBE_UNKNOWN: u16 = 0x8000;

fn probe_value(raw: u16, divisor: f64) -> Option<f64> {
    if raw == PROBE_UNKNOWN {
        None
    } else {
        Some(f64::from(raw as i16) / divisor)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BiosInfo {
    pub vendor: String,
    pub version: String,
    pub release_date: String,
    pub starting_segment: u16,
    /// Raw ROM size byte, `(n + 1) * 64` KB
    pub rom_size: u8,
    pub rom_size_kb: u64,
    pub characteristics: u64,
    pub characteristics_ext: u16,
    pub major_release: u8,
    pub minor_release: u8,
    pub ec_major_release: u8,
    pub ec_minor_release: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub manufacturer: String,
    pub product_name: String,
    pub version: String,
    pub serial_number: String,
    pub uuid: String,
    pub wake_up_type: u8,
    pub sku_number: String,
    pub family: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BaseboardInfo {
    pub manufacturer: String,
    pub product: String,
    pub version: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub feature_flags: u8,
    pub location_in_chassis: String,
    pub chassis_handle: u16,
    pub board_type: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SystemEnclosureInfo {
    pub manufacturer: String,
    /// Bit 7 is the chassis lock, bits 6:0 the chassis type
    pub chassis_type: u8,
    pub version: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub bootup_state: u8,
    pub power_supply_state: u8,
    pub thermal_state: u8,
    pub security_status: u8,
    pub oem_defined: u32,
    /// In rack units, `0` if unspecified
    pub height: u8,
    pub power_cords: u8,
    pub sku_number: String,
}

impl SystemEnclosureInfo {
    pub fn lock_present(&self) -> bool {
        self.chassis_type & 0x80 != 0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProcessorInfo {
    pub socket_designation: String,
    pub processor_type: u8,
    /// Raw family byte, `0xfe` defers to `family`
    pub processor_family: u8,
    /// Family with the 2.6 extension applied
    pub family: u16,
    pub manufacturer: String,
    pub processor_id: u64,
    pub version: String,
    pub voltage: u8,
    pub external_clock: u16,
    pub max_speed: u16,
    pub current_speed: u16,
    pub status: u8,
    pub upgrade: u8,
    pub l1_cache_handle: u16,
    pub l2_cache_handle: u16,
    pub l3_cache_handle: u16,
    pub serial_number: String,
    pub asset_tag: String,
    pub part_number: String,
    pub core_count: u16,
    pub core_enabled: u16,
    pub thread_count: u16,
    pub characteristics: u16,
}

impl ProcessorInfo {
    pub fn socket_populated(&self) -> bool {
        self.status & 0x40 != 0
    }

    /// Current voltage in volts, if the legacy bit mask form is not used
    pub fn voltage_volts(&self) -> Option<f64> {
        if self.voltage & 0x80 != 0 {
            Some(f64::from(self.voltage & 0x7f) / 10.0)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PhysicalMemoryArrayInfo {
    pub location: u8,
    #[serde(rename = "use")]
    pub use_: u8,
    pub memory_error_correction: u8,
    /// Raw capacity in KB, `0x8000_0000` defers to the extended field
    pub maximum_capacity: u32,
    pub maximum_capacity_kb: u64,
    pub error_information_handle: u16,
    pub number_of_memory_devices: u16,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemoryDeviceInfo {
    pub array_handle: u16,
    pub error_information_handle: u16,
    pub total_width: u16,
    pub data_width: u16,
    /// Raw size field: `0xffff` unknown, `0x7fff` extended, bit 15 KB units
    pub size: u16,
    pub size_mb: u32,
    pub form_factor: u8,
    pub device_set: u8,
    pub device_locator: String,
    pub bank_locator: String,
    pub memory_type: u8,
    pub type_detail: u16,
    /// MT/s
    pub speed: u16,
    pub manufacturer: String,
    pub serial_number: String,
    pub asset_tag: String,
    pub part_number: String,
    pub attributes: u8,
    pub configured_speed: u16,
    /// Millivolts
    pub minimum_voltage: u16,
    pub maximum_voltage: u16,
    pub configured_voltage: u16,
}

impl MemoryDeviceInfo {
    pub fn populated(&self) -> bool {
        self.size != 0
    }

    /// Rank, from the low nibble of the attributes
    pub fn rank(&self) -> u8 {
        self.attributes & 0x0f
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CacheInfo {
    pub socket_designation: String,
    pub configuration: u16,
    pub maximum_size: u16,
    pub installed_size: u16,
    pub maximum_size_kb: u64,
    pub installed_size_kb: u64,
    pub supported_sram_type: u16,
    pub current_sram_type: u16,
    /// Nanoseconds
    pub speed: u8,
    pub error_correction_type: u8,
    pub system_cache_type: u8,
    pub associativity: u8,
}

impl CacheInfo {
    /// Cache level, 1 based
    pub fn level(&self) -> u8 {
        (self.configuration & 0x07) as u8 + 1
    }

    pub fn enabled(&self) -> bool {
        self.configuration & 0x80 != 0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PortConnectorInfo {
    pub internal_reference_designator: String,
    pub internal_connector_type: u8,
    pub external_reference_designator: String,
    pub external_connector_type: u8,
    pub port_type: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SystemSlotInfo {
    pub slot_designation: String,
    pub slot_type: u8,
    pub slot_data_bus_width: u8,
    pub current_usage: u8,
    pub slot_length: u8,
    pub slot_id: u16,
    pub characteristics_1: u8,
    pub characteristics_2: u8,
    pub segment_group: u16,
    pub bus_number: u8,
    pub device_function_number: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BatteryInfo {
    pub location: String,
    pub manufacturer: String,
    pub manufacture_date: String,
    pub serial_number: String,
    pub device_name: String,
    pub device_chemistry: u8,
    pub design_capacity: u16,
    /// Millivolts
    pub design_voltage: u16,
    pub sbds_version: String,
    pub maximum_error: u8,
    pub sbds_serial_number: u16,
    pub sbds_manufacture_date: u16,
    pub sbds_device_chemistry: String,
    pub design_capacity_multiplier: u8,
}

impl BatteryInfo {
    /// Design capacity in mWh, `None` if unknown
    pub fn design_capacity_mwh(&self) -> Option<u32> {
        if self.design_capacity == 0 {
            return None;
        }
        let multiplier = u32::from(self.design_capacity_multiplier.max(1));
        Some(u32::from(self.design_capacity) * multiplier)
    }

    /// SBDS manufacture date as `(year, month, day)`
    pub fn sbds_date(&self) -> Option<(u16, u8, u8)> {
        let date = self.sbds_manufacture_date;
        if date == 0 {
            return None;
        }
        Some((
            1980 + (date >> 9),
            ((date >> 5) & 0x0f) as u8,
            (date & 0x1f) as u8,
        ))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TemperatureProbeInfo {
    pub description: String,
    pub location_and_status: u8,
    /// 1/10 degree Celsius
    pub maximum_value: u16,
    pub minimum_value: u16,
    /// 1/1000 degree Celsius
    pub resolution: u16,
    /// 1/10 degree Celsius
    pub tolerance: u16,
    /// 1/100 percent
    pub accuracy: u16,
    pub oem_defined: u32,
    pub nominal_value: u16,
}

impl TemperatureProbeInfo {
    pub fn location(&self) -> u8 {
        self.location_and_status & 0x1f
    }

    pub fn status(&self) -> u8 {
        self.location_and_status >> 5
    }

    pub fn maximum_celsius(&self) -> Option<f64> {
        probe_value(self.maximum_value, 10.0)
    }

    pub fn minimum_celsius(&self) -> Option<f64> {
        probe_value(self.minimum_value, 10.0)
    }

    pub fn nominal_celsius(&self) -> Option<f64> {
        probe_value(self.nominal_value, 10.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VoltageProbeInfo {
    pub description: String,
    pub location_and_status: u8,
    /// Millivolts
    pub maximum_value: u16,
    pub minimum_value: u16,
    /// 1/10 millivolt
    pub resolution: u16,
    pub tolerance: u16,
    pub accuracy: u16,
    pub oem_defined: u32,
    pub nominal_value: u16,
}

impl VoltageProbeInfo {
    pub fn location(&self) -> u8 {
        self.location_and_status & 0x1f
    }

    pub fn status(&self) -> u8 {
        self.location_and_status >> 5
    }

    pub fn maximum_volts(&self) -> Option<f64> {
        probe_value(self.maximum_value, 1000.0)
    }

    pub fn minimum_volts(&self) -> Option<f64> {
        probe_value(self.minimum_value, 1000.0)
    }

    pub fn nominal_volts(&self) -> Option<f64> {
        probe_value(self.nominal_value, 1000.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CoolingDeviceInfo {
    pub temperature_probe_handle: u16,
    pub device_type_and_status: u8,
    pub cooling_unit_group: u8,
    pub oem_defined: u32,
    /// RPM, `0x8000` if unknown
    pub nominal_speed: u16,
    pub description: String,
}

impl CoolingDeviceInfo {
    pub fn device_type(&self) -> u8 {
        self.device_type_and_status & 0x1f
    }

    pub fn status(&self) -> u8 {
        self.device_type_and_status >> 5
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Structures walked, end-of-table included
    pub structures: usize,
    pub decoded: usize,
    /// Unsupported types, counted but not decoded
    pub skipped: usize,
    pub warnings: Vec<DecodeWarning>,
    /// The walk ended on a cut-off or malformed header
    pub truncated: bool,
}

/// Everything decoded from one structure table
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SmbiosInfo {
    pub major_version: u8,
    pub minor_version: u8,
    pub bios: BiosInfo,
    pub system: SystemInfo,
    pub baseboard: BaseboardInfo,
    pub system_enclosure: SystemEnclosureInfo,
    pub physical_memory_array: PhysicalMemoryArrayInfo,
    pub processors: Vec<ProcessorInfo>,
    pub memory_devices: Vec<MemoryDeviceInfo>,
    pub caches: Vec<CacheInfo>,
    pub port_connectors: Vec<PortConnectorInfo>,
    pub system_slots: Vec<SystemSlotInfo>,
    pub batteries: Vec<BatteryInfo>,
    pub temperature_probes: Vec<TemperatureProbeInfo>,
    pub voltage_probes: Vec<VoltageProbeInfo>,
    pub cooling_devices: Vec<CoolingDeviceInfo>,
    pub oem_strings: Vec<String>,
    pub stats: ParseStats,
}

impl SmbiosInfo {
    /// Installed memory over all populated devices
    pub fn total_memory_mb(&self) -> u64 {
        self.memory_devices
            .iter()
            .map(|device| u64::from(device.size_mb))
            .sum()
    }
}
