// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

use smbios_info::SmbiosInfo;
use std::io::{self, Write};

pub fn run(info: &SmbiosInfo) -> io::Result<()> {
    let stats = &info.stats;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "SMBIOS {}.{}", info.major_version, info.minor_version)?;
    writeln!(out, "{:<12} {}", "Structures:", stats.structures)?;
    writeln!(out, "{:<12} {}", "Decoded:", stats.decoded)?;
    writeln!(out, "{:<12} {}", "Skipped:", stats.skipped)?;
    writeln!(out, "{:<12} {}", "Warnings:", stats.warnings.len())?;
    for warning in &stats.warnings {
        writeln!(out, "  {}", warning)?;
    }
    if stats.truncated {
        writeln!(out, "Table ended on a truncated structure")?;
    }
    Ok(())
}
