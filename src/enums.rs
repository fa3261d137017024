// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

//! Display strings for the enumerated and bit mask fields of the records.
//! Every function accepts any raw value.

pub const UNKNOWN: &str = "Unknown";
pub const OUT_OF_SPEC: &str = "Out of spec range";

/// Chassis type, the lock bit (7) is ignored
pub fn chassis_type(value: u8) -> &'static str {
    match value & 0x7f {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "Desktop",
        0x04 => "Low Profile Desktop",
        0x05 => "Pizza Box",
        0x06 => "Mini Tower",
        0x07 => "Tower",
        0x08 => "Portable",
        0x09 => "Laptop",
        0x0a => "Notebook",
        0x0b => "Hand Held",
        0x0c => "Docking Station",
        0x0d => "All In One",
        0x0e => "Sub Notebook",
        0x0f => "Space-saving",
        0x10 => "Lunch Box",
        0x11 => "Main Server Chassis",
        0x12 => "Expansion Chassis",
        0x13 => "Sub Chassis",
        0x14 => "Bus Expansion Chassis",
        0x15 => "Peripheral Chassis",
        0x16 => "RAID Chassis",
        0x17 => "Rack Mount Chassis",
        0x18 => "Sealed-case PC",
        0x19 => "Multi-system Chassis",
        0x1a => "Compact PCI",
        0x1b => "Advanced TCA",
        0x1c => "Blade",
        0x1d => "Blade Enclosure",
        0x1e => "Tablet",
        0x1f => "Convertible",
        0x20 => "Detachable",
        0x21 => "IoT Gateway",
        0x22 => "Embedded PC",
        0x23 => "Mini PC",
        0x24 => "Stick PC",
        0x25..=0x7f => OUT_OF_SPEC,
        _ => UNKNOWN,
    }
}

/// Bootup, power supply and thermal state of the enclosure
pub fn chassis_state(value: u8) -> &'static str {
    match value {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "Safe",
        0x04 => "Warning",
        0x05 => "Critical",
        0x06 => "Non-recoverable",
        _ => OUT_OF_SPEC,
    }
}

pub fn chassis_security_status(value: u8) -> &'static str {
    match value {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "None",
        0x04 => "External Interface Locked Out",
        0x05 => "External Interface Enabled",
        _ => OUT_OF_SPEC,
    }
}

pub fn wake_up_type(value: u8) -> &'static str {
    match value {
        0x00 => "Reserved",
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "APM Timer",
        0x04 => "Modem Ring",
        0x05 => "LAN Remote",
        0x06 => "Power Switch",
        0x07 => "PCI PME#",
        0x08 => "AC Power Restored",
        _ => OUT_OF_SPEC,
    }
}

pub fn board_type(value: u8) -> &'static str {
    match value {
        0x01 => "Unknown",
        0x02 => "Other",
        0x03 => "Server Blade",
        0x04 => "Connectivity Switch",
        0x05 => "System Management Module",
        0x06 => "Processor Module",
        0x07 => "I/O Module",
        0x08 => "Memory Module",
        0x09 => "Daughter Board",
        0x0a => "Motherboard",
        0x0b => "Processor+Memory Module",
        0x0c => "Processor+I/O Module",
        0x0d => "Interconnect Board",
        _ => OUT_OF_SPEC,
    }
}

pub fn processor_type(value: u8) -> &'static str {
    match value {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "Central Processor",
        0x04 => "Math Processor",
        0x05 => "DSP Processor",
        0x06 => "Video Processor",
        _ => UNKNOWN,
    }
}

/// Processor family, as resolved through the 2.6 extension field
pub fn processor_family(value: u16) -> &'static str {
    match value {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "8086",
        0x04 => "80286",
        0x05 => "Intel386",
        0x06 => "Intel486",
        0x07 => "8087",
        0x08 => "80287",
        0x09 => "80387",
        0x0a => "80487",
        0x0b => "Pentium",
        0x0c => "Pentium Pro",
        0x0d => "Pentium II",
        0x0e => "Pentium MMX",
        0x0f => "Celeron",
        0x10 => "Pentium II Xeon",
        0x11 => "Pentium III",
        0x12 => "M1",
        0x13 => "M2",
        0x14 => "Celeron M",
        0x15 => "Pentium 4 HT",
        0x18 => "Duron",
        0x19 => "K5",
        0x1a => "K6",
        0x1b => "K6-2",
        0x1c => "K6-3",
        0x1d => "Athlon",
        0x1e => "AMD29000",
        0x1f => "K6-2+",
        0x28 => "Core Duo",
        0x29 => "Core Duo Mobile",
        0x2a => "Core Solo Mobile",
        0x2b => "Atom",
        0x2c => "Core M",
        0x2d => "Core m3",
        0x2e => "Core m5",
        0x2f => "Core m7",
        0x38 => "Turion II Ultra Dual-Core Mobile M",
        0x39 => "Turion II Dual-Core Mobile M",
        0x3a => "Athlon II Dual-Core M",
        0x3b => "Opteron 6100",
        0x3c => "Opteron 4100",
        0x3d => "Opteron 6200",
        0x3e => "Opteron 4200",
        0x3f => "FX",
        0x83 => "Athlon 64",
        0x84 => "Opteron",
        0x85 => "Sempron",
        0x86 => "Turion 64",
        0x87 => "Dual-Core Opteron",
        0x88 => "Athlon 64 X2",
        0x89 => "Turion 64 X2",
        0x8a => "Quad-Core Opteron",
        0x8b => "Third-Generation Opteron",
        0x8c => "Phenom FX",
        0x8d => "Phenom X4",
        0x8e => "Phenom X2",
        0x8f => "Athlon X2",
        0xa1 => "Quad-Core Xeon 3200",
        0xa2 => "Dual-Core Xeon 3000",
        0xa3 => "Quad-Core Xeon 5300",
        0xa4 => "Dual-Core Xeon 5100",
        0xa5 => "Dual-Core Xeon 5000",
        0xa6 => "Dual-Core Xeon LV",
        0xa7 => "Dual-Core Xeon ULV",
        0xa8 => "Dual-Core Xeon 7100",
        0xa9 => "Quad-Core Xeon 5400",
        0xaa => "Quad-Core Xeon",
        0xab => "Dual-Core Xeon 5200",
        0xac => "Dual-Core Xeon 7200",
        0xad => "Quad-Core Xeon 7300",
        0xae => "Quad-Core Xeon 7400",
        0xaf => "Multi-Core Xeon 7400",
        0xb0 => "Pentium III Xeon",
        0xb1 => "Pentium III Speedstep",
        0xb2 => "Pentium 4",
        0xb3 => "Xeon",
        0xb4 => "AS400",
        0xb5 => "Xeon MP",
        0xb6 => "Athlon XP",
        0xb7 => "Athlon MP",
        0xb8 => "Itanium 2",
        0xb9 => "Pentium M",
        0xba => "Celeron D",
        0xbb => "Pentium D",
        0xbc => "Pentium EE",
        0xbd => "Core Solo",
        0xbf => "Core 2 Duo",
        0xc0 => "Core 2 Solo",
        0xc1 => "Core 2 Extreme",
        0xc2 => "Core 2 Quad",
        0xc3 => "Core 2 Extreme Mobile",
        0xc4 => "Core 2 Duo Mobile",
        0xc5 => "Core 2 Solo Mobile",
        0xc6 => "Core i7",
        0xc7 => "Dual-Core Celeron",
        0xcd => "Core i5",
        0xce => "Core i3",
        0xcf => "Core i9",
        0xd6 => "Multi-Core Xeon",
        0xd7 => "Dual-Core Xeon 3xxx",
        0xd8 => "Quad-Core Xeon 3xxx",
        0xda => "Dual-Core Xeon 5xxx",
        0xdb => "Quad-Core Xeon 5xxx",
        0xdd => "Dual-Core Xeon 7xxx",
        0xde => "Quad-Core Xeon 7xxx",
        0xdf => "Multi-Core Xeon 7xxx",
        0xe0 => "Multi-Core Xeon 3400",
        0xe4 => "Opteron 3000",
        0xe5 => "Sempron II",
        0xe6 => "Embedded Opteron Quad-Core",
        0xe7 => "Phenom Triple-Core",
        0xe8 => "Turion Ultra Dual-Core Mobile",
        0xe9 => "Turion Dual-Core Mobile",
        0xea => "Athlon Dual-Core",
        0xeb => "Sempron SI",
        0xec => "Phenom II",
        0xed => "Athlon II",
        0xee => "Six-Core Opteron",
        0xef => "Sempron M",
        0xfe => "Refer to Processor Family 2",
        0x100 => "ARMv7",
        0x101 => "ARMv8",
        0x102 => "ARMv9",
        0x118 => "ARM",
        0x119 => "StrongARM",
        0x12c => "6x86",
        0x12d => "MediaGX",
        0x12e => "MII",
        0x140 => "WinChip",
        0x15e => "DSP",
        0x1f4 => "Video Processor",
        0x200 => "RISC-V RV32",
        0x201 => "RISC-V RV64",
        0x202 => "RISC-V RV128",
        0x258 => "LoongArch",
        0xffff => OUT_OF_SPEC,
        _ => UNKNOWN,
    }
}

/// Legacy processor upgrade / socket
pub fn processor_upgrade(value: u8) -> &'static str {
    match value {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "Daughter Board",
        0x04 => "ZIF Socket",
        0x05 => "Replaceable Piggy Back",
        0x06 => "None",
        0x07 => "LIF Socket",
        0x08 => "Slot 1",
        0x09 => "Slot 2",
        0x0a => "370-pin Socket",
        0x0b => "Slot A",
        0x0c => "Slot M",
        0x0d => "Socket 423",
        0x0e => "Socket A (Socket 462)",
        0x0f => "Socket 478",
        0x10 => "Socket 754",
        0x11 => "Socket 940",
        0x12 => "Socket 939",
        0x13 => "Socket mPGA604",
        0x14 => "Socket LGA771",
        0x15 => "Socket LGA775",
        0x16 => "Socket S1",
        0x17 => "Socket AM2",
        0x18 => "Socket F (1207)",
        0x19 => "Socket LGA1366",
        0x1d => "Socket LGA1156",
        0x24 => "Socket LGA1155",
        0x2d => "Socket LGA2011-3",
        0x31 => "Socket AM4",
        0x32 => "Socket LGA1151",
        0x36 => "Socket LGA2066",
        0x38 => "Socket LGA3647-1",
        0x3b => "Socket LGA1200",
        0x3c => "Socket LGA4189",
        0x3d => "Socket LGA1700",
        0x40 => "Socket AM5",
        _ => UNKNOWN,
    }
}

pub fn memory_type(value: u8) -> &'static str {
    match value {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "DRAM",
        0x04 => "EDRAM",
        0x05 => "VRAM",
        0x06 => "SRAM",
        0x07 => "RAM",
        0x08 => "ROM",
        0x09 => "FLASH",
        0x0a => "EEPROM",
        0x0b => "FEPROM",
        0x0c => "EPROM",
        0x0d => "CDRAM",
        0x0e => "3DRAM",
        0x0f => "SDRAM",
        0x10 => "SGRAM",
        0x11 => "RDRAM",
        0x12 => "DDR",
        0x13 => "DDR2",
        0x14 => "DDR2 FB-DIMM",
        0x15..=0x17 => "Reserved",
        0x18 => "DDR3",
        0x19 => "FBD2",
        0x1a => "DDR4",
        0x1b => "LPDDR",
        0x1c => "LPDDR2",
        0x1d => "LPDDR3",
        0x1e => "LPDDR4",
        0x1f => "Logical non-volatile device",
        0x20 => "HBM",
        0x21 => "HBM2",
        0x22 => "DDR5",
        0x23 => "LPDDR5",
        0x24 => "HBM3",
        0x25..=0xff => OUT_OF_SPEC,
        _ => UNKNOWN,
    }
}

/// Memory device form factor
pub fn form_factor(value: u8) -> &'static str {
    match value {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "SIMM",
        0x04 => "SIP",
        0x05 => "Chip",
        0x06 => "DIP",
        0x07 => "ZIP",
        0x08 => "Proprietary Card",
        0x09 => "DIMM",
        0x0a => "TSOP",
        0x0b => "Row of chips",
        0x0c => "RIMM",
        0x0d => "SODIMM",
        0x0e => "SRIMM",
        0x0f => "FB-DIMM",
        0x10 => "Die",
        0x11 => "CAMM",
        _ => UNKNOWN,
    }
}

pub fn memory_array_location(value: u8) -> &'static str {
    match value {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "System board or motherboard",
        0x04 => "ISA add-on card",
        0x05 => "EISA add-on card",
        0x06 => "PCI add-on card",
        0x07 => "MCA add-on card",
        0x08 => "PCMCIA add-on card",
        0x09 => "Proprietary add-on card",
        0x0a => "NuBus",
        0xa0 => "PC-98/C20 add-on card",
        0xa1 => "PC-98/C24 add-on card",
        0xa2 => "PC-98/E add-on card",
        0xa3 => "PC-98/Local bus add-on card",
        0xa4 => "CXL add-on card",
        _ => UNKNOWN,
    }
}

pub fn memory_array_use(value: u8) -> &'static str {
    match value {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "System memory",
        0x04 => "Video memory",
        0x05 => "Flash memory",
        0x06 => "Non-volatile RAM",
        0x07 => "Cache memory",
        _ => UNKNOWN,
    }
}

/// Error correction of memory arrays and caches
pub fn error_correction_type(value: u8) -> &'static str {
    match value {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "None",
        0x04 => "Parity",
        0x05 => "Single-bit ECC",
        0x06 => "Multi-bit ECC",
        0x07 => "CRC",
        _ => UNKNOWN,
    }
}

/// System cache type
pub fn cache_type(value: u8) -> &'static str {
    match value {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "Instruction",
        0x04 => "Data",
        0x05 => "Unified",
        _ => UNKNOWN,
    }
}

pub fn cache_associativity(value: u8) -> &'static str {
    match value {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "Direct Mapped",
        0x04 => "2-way Set-Associative",
        0x05 => "4-way Set-Associative",
        0x06 => "Fully Associative",
        0x07 => "8-way Set-Associative",
        0x08 => "16-way Set-Associative",
        0x09 => "12-way Set-Associative",
        0x0a => "24-way Set-Associative",
        0x0b => "32-way Set-Associative",
        0x0c => "48-way Set-Associative",
        0x0d => "64-way Set-Associative",
        0x0e => "20-way Set-Associative",
        _ => UNKNOWN,
    }
}

/// Operational mode and location from the cache configuration word
pub fn cache_configuration(value: u16) -> String {
    let level = (value & 0x07) + 1;
    let socketed = if value & 0x08 != 0 { "Socketed" } else { "Not Socketed" };
    let location = match (value >> 5) & 0x03 {
        0 => "Internal",
        1 => "External",
        2 => "Reserved",
        _ => UNKNOWN,
    };
    let enabled = if value & 0x80 != 0 { "Enabled" } else { "Disabled" };
    let mode = match (value >> 8) & 0x03 {
        0 => "Write Through",
        1 => "Write Back",
        2 => "Varies with Memory Address",
        _ => UNKNOWN,
    };
    format!(
        "L{}, {}, {}, {}, {}",
        level, socketed, location, enabled, mode
    )
}

/// Internal and external connector types of port connectors
pub fn connector_type(value: u8) -> &'static str {
    match value {
        0x00 => "None",
        0x01 => "Centronics",
        0x02 => "Mini Centronics",
        0x03 => "Proprietary",
        0x04 => "DB-25 pin male",
        0x05 => "DB-25 pin female",
        0x06 => "DB-15 pin male",
        0x07 => "DB-15 pin female",
        0x08 => "DB-9 pin male",
        0x09 => "DB-9 pin female",
        0x0a => "RJ-11",
        0x0b => "RJ-45",
        0x0c => "50-pin MiniSCSI",
        0x0d => "Mini-DIN",
        0x0e => "Micro-DIN",
        0x0f => "PS/2",
        0x10 => "Infrared",
        0x11 => "HP-HIL",
        0x12 => "Access Bus (USB)",
        0x13 => "SSA SCSI",
        0x14 => "Circular DIN-8 male",
        0x15 => "Circular DIN-8 female",
        0x16 => "On Board IDE",
        0x17 => "On Board Floppy",
        0x18 => "9-pin Dual Inline (pin 10 cut)",
        0x19 => "25-pin Dual Inline (pin 26 cut)",
        0x1a => "50-pin Dual Inline",
        0x1b => "68-pin Dual Inline",
        0x1c => "On Board Sound Input from CD-ROM",
        0x1d => "Mini-Centronics Type-14",
        0x1e => "Mini-Centronics Type-26",
        0x1f => "Mini-jack (headphones)",
        0x20 => "BNC",
        0x21 => "1394",
        0x22 => "SAS/SATA Plug Receptacle",
        0x23 => "USB Type-C Receptacle",
        0xa0 => "PC-98",
        0xa1 => "PC-98Hireso",
        0xa2 => "PC-H98",
        0xa3 => "PC-98Note",
        0xa4 => "PC-98Full",
        0xff => "Other",
        _ => UNKNOWN,
    }
}

pub fn port_type(value: u8) -> &'static str {
    match value {
        0x00 => "None",
        0x01 => "Parallel Port XT/AT Compatible",
        0x02 => "Parallel Port PS/2",
        0x03 => "Parallel Port ECP",
        0x04 => "Parallel Port EPP",
        0x05 => "Parallel Port ECP/EPP",
        0x06 => "Serial Port XT/AT Compatible",
        0x07 => "Serial Port 16450 Compatible",
        0x08 => "Serial Port 16550 Compatible",
        0x09 => "Serial Port 16550A Compatible",
        0x0a => "SCSI Port",
        0x0b => "MIDI Port",
        0x0c => "Joy Stick Port",
        0x0d => "Keyboard Port",
        0x0e => "Mouse Port",
        0x0f => "SSA SCSI",
        0x10 => "USB",
        0x11 => "FireWire (IEEE P1394)",
        0x12 => "PCMCIA Type I",
        0x13 => "PCMCIA Type II",
        0x14 => "PCMCIA Type III",
        0x15 => "Cardbus",
        0x16 => "Access Bus Port",
        0x17 => "SCSI II",
        0x18 => "SCSI Wide",
        0x19 => "PC-98",
        0x1a => "PC-98-Hireso",
        0x1b => "PC-H98",
        0x1c => "Video Port",
        0x1d => "Audio Port",
        0x1e => "Modem Port",
        0x1f => "Network Port",
        0x20 => "SATA",
        0x21 => "SAS",
        0x22 => "MFDP (Multi-Function Display Port)",
        0x23 => "Thunderbolt",
        0xa0 => "8251 Compatible",
        0xa1 => "8251 FIFO Compatible",
        0xff => "Other",
        _ => UNKNOWN,
    }
}

pub fn slot_type(value: u8) -> &'static str {
    match value {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "ISA",
        0x04 => "MCA",
        0x05 => "EISA",
        0x06 => "PCI",
        0x07 => "PC Card (PCMCIA)",
        0x08 => "VL-VESA",
        0x09 => "Proprietary",
        0x0a => "Processor Card Slot",
        0x0b => "Proprietary Memory Card Slot",
        0x0c => "I/O Riser Card Slot",
        0x0d => "NuBus",
        0x0e => "PCI - 66MHz Capable",
        0x0f => "AGP",
        0x10 => "AGP 2X",
        0x11 => "AGP 4X",
        0x12 => "PCI-X",
        0x13 => "AGP 8X",
        0x14 => "M.2 Socket 1-DP",
        0x15 => "M.2 Socket 1-SD",
        0x16 => "M.2 Socket 2",
        0x17 => "M.2 Socket 3",
        0x18 => "MXM Type I",
        0x19 => "MXM Type II",
        0x1a => "MXM Type III (standard connector)",
        0x1b => "MXM Type III (HE connector)",
        0x1c => "MXM Type IV",
        0x1d => "MXM 3.0 Type A",
        0x1e => "MXM 3.0 Type B",
        0x1f => "PCI Express Gen 2 SFF-8639",
        0x20 => "PCI Express Gen 3 SFF-8639",
        0x21 => "PCI Express Mini 52-pin (CEM spec)",
        0x22 => "PCI Express Mini 52-pin (CEM spec) without BSM",
        0x23 => "PCI Express Mini 76-pin (CEM spec)",
        0x24 => "PCI Express Gen 4 SFF-8639",
        0x25 => "PCI Express Gen 5 SFF-8639",
        0x26 => "OCP NIC 3.0 Small Form Factor",
        0x27 => "OCP NIC 3.0 Large Form Factor",
        0x28 => "OCP NIC Prior to 3.0",
        0x30 => "CXL Flexbus 1.0",
        0xa0 => "PC-98/C20",
        0xa1 => "PC-98/C24",
        0xa2 => "PC-98/E",
        0xa3 => "PC-98/Local Bus",
        0xa4 => "PC-98/Card",
        0xa5 => "PCI Express",
        0xa6 => "PCI Express x1",
        0xa7 => "PCI Express x2",
        0xa8 => "PCI Express x4",
        0xa9 => "PCI Express x8",
        0xaa => "PCI Express x16",
        0xab => "PCI Express Gen 2",
        0xac => "PCI Express Gen 2 x1",
        0xad => "PCI Express Gen 2 x2",
        0xae => "PCI Express Gen 2 x4",
        0xaf => "PCI Express Gen 2 x8",
        0xb0 => "PCI Express Gen 2 x16",
        0xb1 => "PCI Express Gen 3",
        0xb2 => "PCI Express Gen 3 x1",
        0xb3 => "PCI Express Gen 3 x2",
        0xb4 => "PCI Express Gen 3 x4",
        0xb5 => "PCI Express Gen 3 x8",
        0xb6 => "PCI Express Gen 3 x16",
        0xb8 => "PCI Express Gen 4",
        0xb9 => "PCI Express Gen 4 x1",
        0xba => "PCI Express Gen 4 x2",
        0xbb => "PCI Express Gen 4 x4",
        0xbc => "PCI Express Gen 4 x8",
        0xbd => "PCI Express Gen 4 x16",
        0xbe => "PCI Express Gen 5",
        0xbf => "PCI Express Gen 5 x1",
        0xc0 => "PCI Express Gen 5 x2",
        0xc1 => "PCI Express Gen 5 x4",
        0xc2 => "PCI Express Gen 5 x8",
        0xc3 => "PCI Express Gen 5 x16",
        0xc4 => "PCI Express Gen 6 and Beyond",
        _ => UNKNOWN,
    }
}

pub fn slot_data_bus_width(value: u8) -> &'static str {
    match value {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "8 bit",
        0x04 => "16 bit",
        0x05 => "32 bit",
        0x06 => "64 bit",
        0x07 => "128 bit",
        0x08 => "x1",
        0x09 => "x2",
        0x0a => "x4",
        0x0b => "x8",
        0x0c => "x12",
        0x0d => "x16",
        0x0e => "x32",
        _ => UNKNOWN,
    }
}

pub fn slot_usage(value: u8) -> &'static str {
    match value {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "Available",
        0x04 => "In use",
        0x05 => "Unavailable",
        _ => UNKNOWN,
    }
}

pub fn slot_length(value: u8) -> &'static str {
    match value {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "Short Length",
        0x04 => "Long Length",
        0x05 => "2.5\" drive form factor",
        0x06 => "3.5\" drive form factor",
        _ => UNKNOWN,
    }
}

pub fn battery_chemistry(value: u8) -> &'static str {
    match value {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "Lead Acid",
        0x04 => "Nickel Cadmium",
        0x05 => "Nickel Metal Hydride",
        0x06 => "Lithium-ion",
        0x07 => "Zinc air",
        0x08 => "Lithium Polymer",
        _ => UNKNOWN,
    }
}

/// Location, bits 4:0 of a probe's location and status byte
pub fn probe_location(value: u8) -> &'static str {
    match value & 0x1f {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "Processor",
        0x04 => "Disk",
        0x05 => "Peripheral Bay",
        0x06 => "System Management Module",
        0x07 => "Motherboard",
        0x08 => "Memory Module",
        0x09 => "Processor Module",
        0x0a => "Power Unit",
        0x0b => "Add-in Card",
        0x0c => "Front Panel Board",
        0x0d => "Back Panel Board",
        0x0e => "Power System Board",
        0x0f => "Drive Back Plane",
        _ => OUT_OF_SPEC,
    }
}

/// Status, bits 7:5 of a probe or cooling device status byte
pub fn probe_status(value: u8) -> &'static str {
    match value >> 5 {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "OK",
        0x04 => "Non-critical",
        0x05 => "Critical",
        0x06 => "Non-recoverable",
        _ => OUT_OF_SPEC,
    }
}

/// Device type, bits 4:0 of a cooling device's type and status byte
pub fn cooling_device_type(value: u8) -> &'static str {
    match value & 0x1f {
        0x01 => "Other",
        0x02 => "Unknown",
        0x03 => "Fan",
        0x04 => "Centrifugal Blower",
        0x05 => "Chip Fan",
        0x06 => "Cabinet Fan",
        0x07 => "Power Supply Fan",
        0x08 => "Heat Pipe",
        0x09 => "Integrated Refrigeration",
        0x10 => "Active Cooling",
        0x11 => "Passive Cooling",
        _ => OUT_OF_SPEC,
    }
}

fn flags<T>(value: T, names: &[(T, &'static str)]) -> Vec<&'static str>
where
    T: Copy + PartialEq + std::ops::BitAnd<Output = T> + Default,
{
    names
        .iter()
        .filter(|(bit, _)| value & *bit != T::default())
        .map(|(_, name)| *name)
        .collect()
}

pub fn bios_characteristics(value: u64) -> Vec<&'static str> {
    if value & (1 << 3) != 0 {
        return vec!["BIOS characteristics not supported"];
    }
    flags(
        value,
        &[
            (1 << 4, "ISA is supported"),
            (1 << 5, "MCA is supported"),
            (1 << 6, "EISA is supported"),
            (1 << 7, "PCI is supported"),
            (1 << 8, "PC Card (PCMCIA) is supported"),
            (1 << 9, "PNP is supported"),
            (1 << 10, "APM is supported"),
            (1 << 11, "BIOS is upgradeable"),
            (1 << 12, "BIOS shadowing is allowed"),
            (1 << 13, "VLB is supported"),
            (1 << 14, "ESCD support is available"),
            (1 << 15, "Boot from CD is supported"),
            (1 << 16, "Selectable boot is supported"),
            (1 << 17, "BIOS ROM is socketed"),
            (1 << 18, "Boot from PC Card (PCMCIA) is supported"),
            (1 << 19, "EDD is supported"),
            (1 << 20, "Japanese floppy for NEC 9800 1.2 MB is supported (int 13h)"),
            (1 << 21, "Japanese floppy for Toshiba 1.2 MB is supported (int 13h)"),
            (1 << 22, "5.25\"/360 kB floppy services are supported (int 13h)"),
            (1 << 23, "5.25\"/1.2 MB floppy services are supported (int 13h)"),
            (1 << 24, "3.5\"/720 kB floppy services are supported (int 13h)"),
            (1 << 25, "3.5\"/2.88 MB floppy services are supported (int 13h)"),
            (1 << 26, "Print screen service is supported (int 5h)"),
            (1 << 27, "8042 keyboard services are supported (int 9h)"),
            (1 << 28, "Serial services are supported (int 14h)"),
            (1 << 29, "Printer services are supported (int 17h)"),
            (1 << 30, "CGA/mono video services are supported (int 10h)"),
            (1 << 31, "NEC PC-98"),
        ],
    )
}

pub fn bios_characteristics_ext(value: u16) -> Vec<&'static str> {
    flags(
        value,
        &[
            (1 << 0, "ACPI is supported"),
            (1 << 1, "USB legacy is supported"),
            (1 << 2, "AGP is supported"),
            (1 << 3, "I2O boot is supported"),
            (1 << 4, "LS-120 boot is supported"),
            (1 << 5, "ATAPI Zip drive boot is supported"),
            (1 << 6, "IEEE 1394 boot is supported"),
            (1 << 7, "Smart battery is supported"),
            (1 << 8, "BIOS boot specification is supported"),
            (1 << 9, "Function key-initiated network boot is supported"),
            (1 << 10, "Targeted content distribution is supported"),
            (1 << 11, "UEFI is supported"),
            (1 << 12, "System is a virtual machine"),
            (1 << 13, "Manufacturing mode is supported"),
            (1 << 14, "Manufacturing mode is enabled"),
        ],
    )
}

pub fn baseboard_features(value: u8) -> Vec<&'static str> {
    flags(
        value,
        &[
            (1 << 0, "Board is a hosting board"),
            (1 << 1, "Board requires at least one daughter board"),
            (1 << 2, "Board is removable"),
            (1 << 3, "Board is replaceable"),
            (1 << 4, "Board is hot swappable"),
        ],
    )
}

pub fn processor_characteristics(value: u16) -> Vec<&'static str> {
    flags(
        value,
        &[
            (1 << 2, "64-bit capable"),
            (1 << 3, "Multi-Core"),
            (1 << 4, "Hardware Thread"),
            (1 << 5, "Execute Protection"),
            (1 << 6, "Enhanced Virtualization"),
            (1 << 7, "Power/Performance Control"),
            (1 << 8, "128-bit Capable"),
            (1 << 9, "Arm64 SoC ID"),
        ],
    )
}

pub fn memory_type_detail(value: u16) -> Vec<&'static str> {
    flags(
        value,
        &[
            (1 << 1, "Other"),
            (1 << 2, "Unknown"),
            (1 << 3, "Fast-paged"),
            (1 << 4, "Static column"),
            (1 << 5, "Pseudo-static"),
            (1 << 6, "RAMBus"),
            (1 << 7, "Synchronous"),
            (1 << 8, "CMOS"),
            (1 << 9, "EDO"),
            (1 << 10, "Window DRAM"),
            (1 << 11, "Cache DRAM"),
            (1 << 12, "Non-volatile"),
            (1 << 13, "Registered (Buffered)"),
            (1 << 14, "Unbuffered (Unregistered)"),
            (1 << 15, "LRDIMM"),
        ],
    )
}
