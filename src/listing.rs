use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::record::parse_listing_line;

/// Loads a `<hex address> <name>` listing into an address-ordered table.
///
/// Blank lines are skipped. When two lines give the same address the later name wins.
pub fn read_listing(path: &Path) -> Result<BTreeMap<u64, String>> {
    let bytes = fs::read(path).map_err(|e| Error::file_access(path, e))?;
    parse_listing(&String::from_utf8_lossy(&bytes))
}

/// Finds the name at a hex address given as text, with or without a `0x`/`0X` prefix.
pub fn lookup<'a>(registers: &'a BTreeMap<u64, String>, hex: &str) -> Result<&'a str> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    let address =
        u64::from_str_radix(digits, 16).map_err(|_| Error::BadAddress(hex.to_owned()))?;

    registers
        .get(&address)
        .map(String::as_str)
        .ok_or(Error::NoRegister(address))
}

fn parse_listing(text: &str) -> Result<BTreeMap<u64, String>> {
    let mut registers = BTreeMap::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record = parse_listing_line(line).ok_or_else(|| Error::Listing {
            line: index + 1,
            text: line.to_owned(),
        })?;
        if let Some(previous) = registers.insert(record.address, record.name) {
            warn!(
                "line {}: {:04X} was already named {previous}",
                index + 1,
                record.address
            );
        }
    }

    debug!("loaded {} registers", registers.len());
    Ok(registers)
}
