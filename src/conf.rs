// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

use once_cell::sync::Lazy;
use std::{env, fs, path::PathBuf};

use crate::cli::source::DMI_TABLE;

const CONF_PATH: &str = "/etc/smbios-info.conf";
const CONF_ENV: &str = "SMBIOS_INFO_CONF";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, serde::Deserialize)]
pub struct SmbiosInfoConf {
    table_path: Option<PathBuf>,
    pub entry_point_path: Option<PathBuf>,
    #[serde(default)]
    pub format: Format,
}

impl SmbiosInfoConf {
    pub fn table_path(&self) -> PathBuf {
        self.table_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DMI_TABLE))
    }
}

fn parse(bytes: &[u8], path: &str) -> SmbiosInfoConf {
    toml::from_slice(bytes).unwrap_or_else(|err| {
        eprintln!("Failed to parse `{}`: {}", path, err);
        SmbiosInfoConf::default()
    })
}

pub fn smbios_info_conf() -> &'static SmbiosInfoConf {
    static CONF: Lazy<SmbiosInfoConf> = Lazy::new(|| {
        let path = env::var(CONF_ENV).unwrap_or_else(|_| CONF_PATH.to_string());
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(_) => {
                return SmbiosInfoConf::default();
            }
        };
        parse(&bytes, &path)
    });
    &CONF
}
