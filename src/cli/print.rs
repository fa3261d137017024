// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

use smbios_info::{enums, SmbiosInfo};
use std::{
    fmt::Display,
    io::{self, Write},
};

const LABEL_WIDTH: usize = 20;
const PORT_LABEL_WIDTH: usize = 25;

struct Printer<W: Write> {
    out: W,
}

impl<W: Write> Printer<W> {
    fn section(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "=== {} ===", name)
    }

    fn item(&mut self, name: &str, index: usize) -> io::Result<()> {
        writeln!(self.out, "--- {} {} ---", name, index + 1)
    }

    fn field<T: Display>(&mut self, label: &str, value: T) -> io::Result<()> {
        self.field_at(LABEL_WIDTH, label, value)
    }

    fn field_at<T: Display>(&mut self, width: usize, label: &str, value: T) -> io::Result<()> {
        let label = format!("{}:", label);
        writeln!(self.out, "{:<width$} {}", label, value, width = width)
    }

    fn flags(&mut self, label: &str, flags: &[&str]) -> io::Result<()> {
        if flags.is_empty() {
            return self.field(label, "None");
        }
        self.field(label, flags[0])?;
        for flag in &flags[1..] {
            writeln!(self.out, "{:<width$} {}", "", flag, width = LABEL_WIDTH)?;
        }
        Ok(())
    }

    fn empty(&mut self, what: &str) -> io::Result<()> {
        writeln!(self.out, "No {} information available.", what)?;
        writeln!(self.out)
    }

    fn end(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }
}

fn gib(mb: u64) -> String {
    format!("{} MB ({:.2} GB)", mb, mb as f64 / 1024.0)
}

fn optional<T: Display>(value: Option<T>, unit: &str) -> String {
    match value {
        Some(value) => format!("{:.1} {}", value, unit),
        None => enums::UNKNOWN.to_string(),
    }
}

/// Render `info` as the aligned text report of `smbios-info print`
pub fn write_report<W: Write>(out: W, info: &SmbiosInfo) -> io::Result<()> {
    let mut p = Printer { out };

    writeln!(
        p.out,
        "SMBIOS {}.{}",
        info.major_version, info.minor_version
    )?;
    p.end()?;

    let bios = &info.bios;
    p.section("BIOS Information")?;
    p.field("Vendor", &bios.vendor)?;
    p.field("Version", &bios.version)?;
    p.field("Release Date", &bios.release_date)?;
    p.field("Major Release", bios.major_release)?;
    p.field("Minor Release", bios.minor_release)?;
    p.field("ROM Size", format!("{} KB", bios.rom_size_kb))?;
    p.flags(
        "Characteristics",
        &enums::bios_characteristics(bios.characteristics),
    )?;
    p.flags(
        "Extensions",
        &enums::bios_characteristics_ext(bios.characteristics_ext),
    )?;
    p.end()?;

    let system = &info.system;
    p.section("System Information")?;
    p.field("Manufacturer", &system.manufacturer)?;
    p.field("Product Name", &system.product_name)?;
    p.field("Version", &system.version)?;
    p.field("Serial Number", &system.serial_number)?;
    p.field("UUID", &system.uuid)?;
    p.field("SKU Number", &system.sku_number)?;
    p.field("Family", &system.family)?;
    p.field("Wake-up Type", enums::wake_up_type(system.wake_up_type))?;
    p.end()?;

    let baseboard = &info.baseboard;
    p.section("Baseboard Information")?;
    p.field("Manufacturer", &baseboard.manufacturer)?;
    p.field("Product", &baseboard.product)?;
    p.field("Version", &baseboard.version)?;
    p.field("Serial Number", &baseboard.serial_number)?;
    p.field("Asset Tag", &baseboard.asset_tag)?;
    p.flags("Features", &enums::baseboard_features(baseboard.feature_flags))?;
    p.field("Location", &baseboard.location_in_chassis)?;
    p.field("Board Type", enums::board_type(baseboard.board_type))?;
    p.end()?;

    let enclosure = &info.system_enclosure;
    p.section("System Enclosure Information")?;
    p.field("Manufacturer", &enclosure.manufacturer)?;
    p.field("Version", &enclosure.version)?;
    p.field("Serial Number", &enclosure.serial_number)?;
    p.field("Asset Tag", &enclosure.asset_tag)?;
    p.field("Chassis Type", enums::chassis_type(enclosure.chassis_type))?;
    p.field(
        "Lock",
        if enclosure.lock_present() { "Present" } else { "Not Present" },
    )?;
    p.field("Bootup State", enums::chassis_state(enclosure.bootup_state))?;
    p.field(
        "Power Supply State",
        enums::chassis_state(enclosure.power_supply_state),
    )?;
    p.field("Thermal State", enums::chassis_state(enclosure.thermal_state))?;
    p.field(
        "Security Status",
        enums::chassis_security_status(enclosure.security_status),
    )?;
    p.field("Height", format!("{} U", enclosure.height))?;
    p.field("SKU Number", &enclosure.sku_number)?;
    p.end()?;

    p.section("Processor Information")?;
    if info.processors.is_empty() {
        p.empty("processor")?;
    }
    for (i, cpu) in info.processors.iter().enumerate() {
        p.item("Processor", i)?;
        p.field("Socket", &cpu.socket_designation)?;
        p.field("Manufacturer", &cpu.manufacturer)?;
        p.field("Version", &cpu.version)?;
        p.field("Type", enums::processor_type(cpu.processor_type))?;
        p.field("Family", enums::processor_family(cpu.family))?;
        p.field("Processor ID", format!("{:#x}", cpu.processor_id))?;
        p.field("Upgrade", enums::processor_upgrade(cpu.upgrade))?;
        p.field("Voltage", optional(cpu.voltage_volts(), "V"))?;
        p.field("Max Speed", format!("{} MHz", cpu.max_speed))?;
        p.field("Current Speed", format!("{} MHz", cpu.current_speed))?;
        p.field(
            "Populated",
            if cpu.socket_populated() { "Yes" } else { "No" },
        )?;
        p.field("Core Count", cpu.core_count)?;
        p.field("Core Enabled", cpu.core_enabled)?;
        p.field("Thread Count", cpu.thread_count)?;
        p.field("Serial Number", &cpu.serial_number)?;
        p.field("Asset Tag", &cpu.asset_tag)?;
        p.field("Part Number", &cpu.part_number)?;
        p.flags(
            "Characteristics",
            &enums::processor_characteristics(cpu.characteristics),
        )?;
        p.end()?;
    }

    let array = &info.physical_memory_array;
    p.section("Physical Memory Array")?;
    p.field("Location", enums::memory_array_location(array.location))?;
    p.field("Use", enums::memory_array_use(array.use_))?;
    p.field(
        "Error Correction",
        enums::error_correction_type(array.memory_error_correction),
    )?;
    p.field("Max Capacity", gib(array.maximum_capacity_kb / 1024))?;
    p.field("Num Devices", array.number_of_memory_devices)?;
    p.end()?;

    p.section("Memory Information")?;
    if info.memory_devices.is_empty() {
        p.empty("memory")?;
    } else {
        for (i, mem) in info.memory_devices.iter().enumerate() {
            p.item("Memory Device", i)?;
            p.field("Device Locator", &mem.device_locator)?;
            p.field("Bank Locator", &mem.bank_locator)?;
            if !mem.populated() {
                p.field("Size", "No Module Installed")?;
                p.end()?;
                continue;
            }
            p.field("Manufacturer", &mem.manufacturer)?;
            p.field("Size", gib(u64::from(mem.size_mb)))?;
            p.field("Speed", format!("{} MT/s", mem.speed))?;
            p.field("Configured Speed", format!("{} MT/s", mem.configured_speed))?;
            p.field("Type", enums::memory_type(mem.memory_type))?;
            p.field("Form Factor", enums::form_factor(mem.form_factor))?;
            p.flags("Type Detail", &enums::memory_type_detail(mem.type_detail))?;
            p.field("Rank", mem.rank())?;
            p.field("Serial Number", &mem.serial_number)?;
            p.field("Asset Tag", &mem.asset_tag)?;
            p.field("Part Number", &mem.part_number)?;
            p.end()?;
        }

        writeln!(p.out, "--- Memory Summary ---")?;
        p.field("Total Memory", gib(info.total_memory_mb()))?;
        p.field("Memory Modules", info.memory_devices.len())?;
        p.end()?;
    }

    p.section("Cache Information")?;
    if info.caches.is_empty() {
        p.empty("cache")?;
    }
    for (i, cache) in info.caches.iter().enumerate() {
        p.item("Cache", i)?;
        p.field("Socket", &cache.socket_designation)?;
        p.field(
            "Configuration",
            enums::cache_configuration(cache.configuration),
        )?;
        p.field("Max Size", format!("{} KB", cache.maximum_size_kb))?;
        p.field("Installed Size", format!("{} KB", cache.installed_size_kb))?;
        p.field("Speed", format!("{} ns", cache.speed))?;
        p.field(
            "Error Correction",
            enums::error_correction_type(cache.error_correction_type),
        )?;
        p.field("System Type", enums::cache_type(cache.system_cache_type))?;
        p.field(
            "Associativity",
            enums::cache_associativity(cache.associativity),
        )?;
        p.end()?;
    }

    p.section("Port Connector Information")?;
    if info.port_connectors.is_empty() {
        p.empty("port connector")?;
    }
    for (i, port) in info.port_connectors.iter().enumerate() {
        p.item("Port Connector", i)?;
        p.field_at(
            PORT_LABEL_WIDTH,
            "Internal Designator",
            &port.internal_reference_designator,
        )?;
        p.field_at(
            PORT_LABEL_WIDTH,
            "External Designator",
            &port.external_reference_designator,
        )?;
        p.field_at(
            PORT_LABEL_WIDTH,
            "Internal Type",
            enums::connector_type(port.internal_connector_type),
        )?;
        p.field_at(
            PORT_LABEL_WIDTH,
            "External Type",
            enums::connector_type(port.external_connector_type),
        )?;
        p.field_at(PORT_LABEL_WIDTH, "Port Type", enums::port_type(port.port_type))?;
        p.end()?;
    }

    p.section("System Slot Information")?;
    if info.system_slots.is_empty() {
        p.empty("system slot")?;
    }
    for (i, slot) in info.system_slots.iter().enumerate() {
        p.item("System Slot", i)?;
        p.field("Designation", &slot.slot_designation)?;
        p.field("Type", enums::slot_type(slot.slot_type))?;
        p.field(
            "Data Bus Width",
            enums::slot_data_bus_width(slot.slot_data_bus_width),
        )?;
        p.field("Current Usage", enums::slot_usage(slot.current_usage))?;
        p.field("Slot Length", enums::slot_length(slot.slot_length))?;
        p.field("Slot ID", slot.slot_id)?;
        p.field(
            "Bus Address",
            format!(
                "{:04x}:{:02x}:{:02x}.{:x}",
                slot.segment_group,
                slot.bus_number,
                slot.device_function_number >> 3,
                slot.device_function_number & 0x07
            ),
        )?;
        p.end()?;
    }

    p.section("Battery Information")?;
    if info.batteries.is_empty() {
        p.empty("battery")?;
    }
    for (i, battery) in info.batteries.iter().enumerate() {
        p.item("Battery", i)?;
        p.field("Location", &battery.location)?;
        p.field("Manufacturer", &battery.manufacturer)?;
        match battery.sbds_date() {
            Some((year, month, day)) => p.field(
                "Manufacture Date",
                format!("{:04}-{:02}-{:02}", year, month, day),
            )?,
            None => p.field("Manufacture Date", &battery.manufacture_date)?,
        }
        p.field("Serial Number", &battery.serial_number)?;
        p.field("Device Name", &battery.device_name)?;
        p.field("Chemistry", enums::battery_chemistry(battery.device_chemistry))?;
        match battery.design_capacity_mwh() {
            Some(capacity) => p.field("Design Capacity", format!("{} mWh", capacity))?,
            None => p.field("Design Capacity", enums::UNKNOWN)?,
        }
        p.field("Design Voltage", format!("{} mV", battery.design_voltage))?;
        p.end()?;
    }

    p.section("Temperature Probe Information")?;
    if info.temperature_probes.is_empty() {
        p.empty("temperature probe")?;
    }
    for (i, probe) in info.temperature_probes.iter().enumerate() {
        p.item("Temperature Probe", i)?;
        p.field("Description", &probe.description)?;
        p.field(
            "Location",
            enums::probe_location(probe.location_and_status),
        )?;
        p.field("Status", enums::probe_status(probe.location_and_status))?;
        p.field("Maximum Value", optional(probe.maximum_celsius(), "°C"))?;
        p.field("Minimum Value", optional(probe.minimum_celsius(), "°C"))?;
        p.field("Nominal Value", optional(probe.nominal_celsius(), "°C"))?;
        p.end()?;
    }

    p.section("Voltage Probe Information")?;
    if info.voltage_probes.is_empty() {
        p.empty("voltage probe")?;
    }
    for (i, probe) in info.voltage_probes.iter().enumerate() {
        p.item("Voltage Probe", i)?;
        p.field("Description", &probe.description)?;
        p.field(
            "Location",
            enums::probe_location(probe.location_and_status),
        )?;
        p.field("Status", enums::probe_status(probe.location_and_status))?;
        p.field("Maximum Value", optional(probe.maximum_volts(), "V"))?;
        p.field("Minimum Value", optional(probe.minimum_volts(), "V"))?;
        p.field("Nominal Value", optional(probe.nominal_volts(), "V"))?;
        p.end()?;
    }

    p.section("Cooling Device Information")?;
    if info.cooling_devices.is_empty() {
        p.empty("cooling device")?;
    }
    for (i, device) in info.cooling_devices.iter().enumerate() {
        p.item("Cooling Device", i)?;
        p.field("Description", &device.description)?;
        p.field(
            "Type",
            enums::cooling_device_type(device.device_type_and_status),
        )?;
        p.field("Status", enums::probe_status(device.device_type_and_status))?;
        p.field("Unit Group", device.cooling_unit_group)?;
        if device.nominal_speed == smbios_info::PROBE_UNKNOWN {
            p.field("Nominal Speed", enums::UNKNOWN)?;
        } else {
            p.field("Nominal Speed", format!("{} rpm", device.nominal_speed))?;
        }
        p.end()?;
    }

    p.section("OEM Strings")?;
    if info.oem_strings.is_empty() {
        p.empty("OEM string")?;
    }
    for (i, string) in info.oem_strings.iter().enumerate() {
        p.field(&format!("String {}", i + 1), string)?;
    }

    p.out.flush()
}

pub fn run(info: &SmbiosInfo) -> io::Result<()> {
    let stdout = io::stdout();
    write_report(stdout.lock(), info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smbios_info::{MemoryDeviceInfo, PortConnectorInfo, SystemInfo};

    fn report(info: &SmbiosInfo) -> String {
        let mut out = Vec::new();
        write_report(&mut out, info).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn system_section_is_aligned() {
        let info = SmbiosInfo {
            system: SystemInfo {
                manufacturer: "Acme Corp".to_string(),
                product_name: "Model Z".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let text = report(&info);
        assert!(text.contains("=== System Information ===\n"));
        assert!(text.contains("Manufacturer:        Acme Corp\n"));
        assert!(text.contains("Product Name:        Model Z\n"));
        assert!(text.contains("No processor information available.\n"));
    }

    #[test]
    fn memory_summary_counts_every_device() {
        let info = SmbiosInfo {
            memory_devices: vec![
                MemoryDeviceInfo {
                    size: 8192,
                    size_mb: 8192,
                    ..Default::default()
                },
                MemoryDeviceInfo::default(),
            ],
            ..Default::default()
        };
        let text = report(&info);
        assert!(text.contains("Total Memory:        8192 MB (8.00 GB)\n"));
        assert!(text.contains("Memory Modules:      2\n"));
        assert!(text.contains("Size:                No Module Installed\n"));
    }

    #[test]
    fn port_labels_are_wider() {
        let info = SmbiosInfo {
            port_connectors: vec![PortConnectorInfo {
                internal_reference_designator: "J1".to_string(),
                port_type: 0x10,
                ..Default::default()
            }],
            ..Default::default()
        };
        let text = report(&info);
        assert!(text.contains("Internal Designator:      J1\n"));
        assert!(text.contains("Port Type:                USB\n"));
    }
}
