// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

use anyhow::Context;
use smbios_info::SmbiosInfo;
use std::io::{self, Write};

pub fn run(info: &SmbiosInfo) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    serde_json::to_writer_pretty(&mut stdout, info).context("Failed to serialize SMBIOS info")?;
    writeln!(stdout)?;
    Ok(())
}
