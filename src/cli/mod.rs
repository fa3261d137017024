// SPDX-FileCopyrightText: 2022 Hewlett-Packard Development Company, L.P.
//
// SPDX-License-Identifier: GPL-3.0-only

mod json;
mod print;
pub mod source;
mod stats;

use anyhow::Context;
use nix::unistd::Uid;
use smbios_info::{SmbiosInfo, SmbiosParser};
use std::{env, path::PathBuf, process};

use crate::conf::{smbios_info_conf, Format};
use source::FileSource;

const USAGE: &str = "Usage: smbios-info [--rsmb] [print|json|stats] [TABLE_PATH]";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Print,
    Json,
    Stats,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    command: Option<Command>,
    table_path: Option<PathBuf>,
    rsmb: bool,
}

fn parse_args<I: Iterator<Item = String>>(args: I) -> Result<Args, String> {
    let mut parsed = Args::default();
    for arg in args {
        match arg.as_str() {
            "--rsmb" => parsed.rsmb = true,
            "print" if parsed.command.is_none() => parsed.command = Some(Command::Print),
            "json" if parsed.command.is_none() => parsed.command = Some(Command::Json),
            "stats" if parsed.command.is_none() => parsed.command = Some(Command::Stats),
            arg if arg.starts_with('-') => return Err(format!("unknown option `{}`", arg)),
            _ if parsed.table_path.is_none() => parsed.table_path = Some(PathBuf::from(&arg)),
            _ => return Err(format!("unexpected argument `{}`", arg)),
        }
    }
    Ok(parsed)
}

fn fail(message: &str) -> ! {
    eprintln!("smbios-info: {}", message);
    if !Uid::effective().is_root() {
        eprintln!("smbios-info: reading the firmware table usually requires root");
    }
    process::exit(1);
}

fn load(args: &Args) -> SmbiosInfo {
    let conf = smbios_info_conf();
    let table_path = args.table_path.clone().unwrap_or_else(|| conf.table_path());
    let mut source = FileSource::new(&table_path).rsmb(args.rsmb);
    if let Some(entry_point_path) = &conf.entry_point_path {
        source = source.entry_point(entry_point_path);
    }

    let mut parser = SmbiosParser::new();
    let table = match parser.load_from(&mut source) {
        Ok(table) => table,
        Err(_) => fail(parser.last_error()),
    };
    match parser.parse(&table) {
        Ok(info) => info,
        Err(_) => fail(parser.last_error()),
    }
}

pub fn run() -> anyhow::Result<()> {
    let mut args = env::args();
    let _ = args.next();
    let args = match parse_args(args) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("smbios-info: {}", err);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    let command = args.command.unwrap_or(match smbios_info_conf().format {
        Format::Text => Command::Print,
        Format::Json => Command::Json,
    });
    let info = load(&args);

    match command {
        Command::Print => print::run(&info).context("Failed to write report"),
        Command::Json => json::run(&info),
        Command::Stats => stats::run(&info).context("Failed to write stats"),
    }
}
