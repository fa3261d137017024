// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

//! Decoder for the SMBIOS structure table.
//!
//! ```no_run
//! use smbios_info::SmbiosParser;
//!
//! let data = std::fs::read("/sys/firmware/dmi/tables/DMI").unwrap();
//! let mut parser = SmbiosParser::new();
//! let table = parser.load(&data, data.len()).unwrap();
//! let info = parser.parse(&table).unwrap();
//! println!("{}", info.system.manufacturer);
//! ```

mod decode;
pub mod enums;
mod error;
mod info;
mod parser;
mod table;
mod walker;

pub use error::{DecodeWarning, Error, SourceError, SourceErrorKind};
pub use info::*;
pub use parser::SmbiosParser;
pub use table::{FirmwareTable, RawTable, RawTableSource};
