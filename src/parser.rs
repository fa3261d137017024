// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

use log::{debug, warn};

use crate::{
    decode::{self, Outcome, Record},
    error::Error,
    info::SmbiosInfo,
    table::{RawTable, RawTableSource},
    walker::{Structures, END_OF_TABLE},
};

/// Singletons already routed during one parse
#[derive(Default)]
struct Seen {
    bios: bool,
    system: bool,
    baseboard: bool,
    system_enclosure: bool,
    physical_memory_array: bool,
}

/// Keep the first instance of a singleton record, drop the rest
fn first_wins<T>(seen: &mut bool, slot: &mut T, value: T, name: &str, handle: u16) {
    if *seen {
        debug!("dropping duplicate {} structure, handle {:#06x}", name, handle);
    } else {
        *seen = true;
        *slot = value;
    }
}

/// Parser session. Holds nothing but the message of its most recent failure,
/// so separate sessions can be used from separate threads.
#[derive(Clone, Debug, Default)]
pub struct SmbiosParser {
    last_error: String,
}

impl SmbiosParser {
    pub fn new() -> Self {
        Self::default()
    }

    fn fail(&mut self, err: Error) -> Error {
        self.last_error = err.to_string();
        err
    }

    /// Accept `length` bytes of structure table. The version is unknown until
    /// attached with [`RawTable::with_version`].
    pub fn load(&mut self, buffer: &[u8], length: usize) -> Result<RawTable, Error> {
        if buffer.is_empty() || length == 0 {
            return Err(self.fail(Error::TableLoad("structure table is empty".to_string())));
        }
        if buffer.len() != length {
            return Err(self.fail(Error::InvalidInput(format!(
                "buffer holds {} bytes but length is {}",
                buffer.len(),
                length
            ))));
        }
        self.last_error.clear();
        Ok(RawTable::new(buffer.to_vec()))
    }

    /// Fetch the table from `source`, keeping the version it reports
    pub fn load_from(&mut self, source: &mut dyn RawTableSource) -> Result<RawTable, Error> {
        let table = match source.fetch() {
            Ok(table) => table,
            Err(err) => return Err(self.fail(Error::from(err))),
        };
        let length = table.data.len();
        self.load(&table.data, length)
            .map(|raw| raw.with_version(table.major_version, table.minor_version))
    }

    /// Decode every structure of `table` into a fresh [`SmbiosInfo`]
    pub fn parse(&mut self, table: &RawTable) -> Result<SmbiosInfo, Error> {
        let (major_version, minor_version) = table.version();
        let mut info = SmbiosInfo {
            major_version,
            minor_version,
            ..Default::default()
        };
        let mut seen = Seen::default();

        let mut structures = Structures::new(table.data());
        for structure in structures.by_ref() {
            info.stats.structures += 1;
            let handle = structure.handle;

            let record = match decode::decode(&structure, table.version()) {
                Outcome::Decoded(record) => record,
                Outcome::Skipped(kind) => {
                    if kind != END_OF_TABLE {
                        debug!("skipping structure type {}, handle {:#06x}", kind, handle);
                    }
                    info.stats.skipped += 1;
                    continue;
                }
                Outcome::Warning(warning) => {
                    warn!("{}", warning);
                    info.stats.warnings.push(warning);
                    continue;
                }
            };
            info.stats.decoded += 1;

            match record {
                Record::Bios(bios) => {
                    first_wins(&mut seen.bios, &mut info.bios, bios, "BIOS", handle)
                }
                Record::System(system) => {
                    first_wins(&mut seen.system, &mut info.system, system, "system", handle)
                }
                Record::Baseboard(baseboard) => first_wins(
                    &mut seen.baseboard,
                    &mut info.baseboard,
                    baseboard,
                    "baseboard",
                    handle,
                ),
                Record::SystemEnclosure(enclosure) => first_wins(
                    &mut seen.system_enclosure,
                    &mut info.system_enclosure,
                    enclosure,
                    "system enclosure",
                    handle,
                ),
                Record::PhysicalMemoryArray(array) => first_wins(
                    &mut seen.physical_memory_array,
                    &mut info.physical_memory_array,
                    array,
                    "physical memory array",
                    handle,
                ),
                Record::Processor(processor) => info.processors.push(processor),
                Record::Cache(cache) => info.caches.push(cache),
                Record::PortConnector(port) => info.port_connectors.push(port),
                Record::SystemSlot(slot) => info.system_slots.push(slot),
                Record::OemStrings(strings) => info.oem_strings.extend(strings),
                Record::MemoryDevice(device) => info.memory_devices.push(device),
                Record::Battery(battery) => info.batteries.push(battery),
                Record::VoltageProbe(probe) => info.voltage_probes.push(probe),
                Record::CoolingDevice(device) => info.cooling_devices.push(device),
                Record::TemperatureProbe(probe) => info.temperature_probes.push(probe),
            }
        }
        info.stats.truncated = structures.truncated();

        if info.stats.structures == 0 {
            return Err(self.fail(Error::Parse("no structures found".to_string())));
        }

        debug!(
            "parsed {} structures: {} decoded, {} skipped, {} warnings",
            info.stats.structures,
            info.stats.decoded,
            info.stats.skipped,
            info.stats.warnings.len()
        );
        self.last_error.clear();
        Ok(info)
    }

    /// Message of the most recent failure, empty after a success
    pub fn last_error(&self) -> &str {
        &self.last_error
    }
}
