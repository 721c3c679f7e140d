//! Prints the contracts and routine opcodes the windowing-subsystem checker
//! resolves for a Windows release.
//!
//! ```text
//! shape-dump <release> [service-pack] [number-file] [-v]
//! ```
//!
//! `release` is one of `7`, `vista`, `2003`, `xp`, `2000`.

mod logger;
mod numbers;

use crate::logger::StderrLogger;
use crate::numbers::Numbers;
use log::{LevelFilter, error};
use shape_engine::{Contract, Engine, EngineOptions, OsVersion, Release};
use std::process::ExitCode;
use std::{env, fs};

struct Args {
    version: OsVersion,
    numbers: Option<String>,
    verbose: bool,
}

fn parse_release(text: &str) -> Option<Release> {
    match text.to_ascii_lowercase().as_str() {
        "nt4" => Some(Release::Nt4),
        "2000" | "win2000" => Some(Release::Win2000),
        "xp" => Some(Release::Xp),
        "2003" | "server2003" => Some(Release::Server2003),
        "vista" => Some(Release::Vista),
        "7" | "win7" => Some(Release::Win7),
        _ => None,
    }
}

fn parse_args() -> Option<Args> {
    let mut verbose = false;
    let mut positional = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "-v" {
            verbose = true;
        } else {
            positional.push(arg);
        }
    }
    let mut positional = positional.into_iter();
    let release = parse_release(&positional.next()?)?;
    let service_pack = match positional.next() {
        Some(sp) => sp.parse().ok()?,
        None => 0,
    };
    Some(Args {
        version: OsVersion::new(release, service_pack),
        numbers: positional.next(),
        verbose,
    })
}

fn flags_summary(contract: &Contract) -> String {
    let flags = contract.flags();
    let mut parts = Vec::new();
    if !flags.fully_known() {
        parts.push("partial");
    }
    if flags.ret_zero_fail() {
        parts.push("zero-fail");
    }
    if flags.creates_handle() {
        parts.push("creates");
    }
    if flags.deletes_handle() {
        parts.push("deletes");
    }
    if flags.combined() {
        parts.push("combined");
    }
    if flags.imm32() {
        parts.push("imm32");
    }
    parts.join(",")
}

fn dump(engine: &Engine) {
    println!("# contracts");
    for contract in engine.table().iter() {
        println!(
            "{:<12} {:<48} args={} rules={} handler={} {}",
            contract.id.to_string(),
            contract.name(),
            contract.args(),
            contract.rules().len(),
            if contract.handler.is_some() { "yes" } else { "no" },
            flags_summary(contract)
        );
    }
    println!();
    println!("# routine opcodes ({:?})", engine.opcodes().column());
    for (name, opcode) in engine.opcodes().iter() {
        println!("{opcode:#06X} {name}");
    }
}

fn main() -> ExitCode {
    let Some(args) = parse_args() else {
        eprintln!("usage: shape-dump <7|vista|2003|xp|2000> [service-pack] [number-file] [-v]");
        return ExitCode::FAILURE;
    };
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(err) = StderrLogger::new(level).init() {
        eprintln!("logger: {err}");
    }

    let numbers = match &args.numbers {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => match Numbers::parse(&text) {
                Ok(numbers) => numbers,
                Err(err) => {
                    error!("{path}: {err}");
                    return ExitCode::FAILURE;
                }
            },
            Err(err) => {
                error!("{path}: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Numbers::generated(),
    };

    match shape_win32k::engine(&numbers, args.version, EngineOptions::default()) {
        Ok(engine) => {
            dump(&engine);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}: {err}", args.version);
            ExitCode::FAILURE
        }
    }
}
