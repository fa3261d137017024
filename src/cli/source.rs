// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

use log::{debug, warn};
use smbios_info::{FirmwareTable, RawTableSource, SourceError, SourceErrorKind};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub const DMI_TABLE: &str = "/sys/firmware/dmi/tables/DMI";
pub const ENTRY_POINT: &str = "smbios_entry_point";

fn read(path: &Path) -> Result<Vec<u8>, SourceError> {
    fs::read(path).map_err(|err| {
        let err = SourceError::from(err);
        SourceError::new(err.kind, format!("failed to read `{}`: {}", path.display(), err.message))
    })
}

/// Structure table stored in a file, either a sysfs style `DMI` export or a
/// Windows `RSMB` dump
pub struct FileSource {
    table_path: PathBuf,
    entry_point_path: Option<PathBuf>,
    rsmb: bool,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(table_path: P) -> Self {
        let table_path = table_path.as_ref().to_path_buf();
        let entry_point_path = table_path.parent().map(|dir| dir.join(ENTRY_POINT));
        Self {
            table_path,
            entry_point_path,
            rsmb: false,
        }
    }

    pub fn entry_point<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.entry_point_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn rsmb(mut self, rsmb: bool) -> Self {
        self.rsmb = rsmb;
        self
    }

    fn entry_point_bytes(&self) -> Option<Vec<u8>> {
        let path = self.entry_point_path.as_ref()?;
        match fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no entry point at `{}`", path.display());
                None
            }
            Err(err) => {
                warn!("failed to read `{}`: {}", path.display(), err);
                None
            }
        }
    }
}

impl RawTableSource for FileSource {
    fn fetch(&mut self) -> Result<FirmwareTable, SourceError> {
        let data = read(&self.table_path)?;

        if self.rsmb {
            return FirmwareTable::from_rsmb(&data)
                .map_err(|err| SourceError::new(SourceErrorKind::Other, err.message()));
        }

        let entry_point = match self.entry_point_bytes() {
            Some(entry_point) => entry_point,
            None => return Ok(FirmwareTable::new(data, 0, 0)),
        };
        match FirmwareTable::from_entry_point(&entry_point, data.clone()) {
            Ok(table) => Ok(table),
            Err(err) => {
                warn!("ignoring entry point, SMBIOS version unknown: {}", err);
                Ok(FirmwareTable::new(data, 0, 0))
            }
        }
    }
}
