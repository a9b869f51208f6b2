//! Converts PIC18 register name lists (`<name>,<address>`, decimal) into the
//! `<HEX> <name>` listing the disassembler loads, and reads such listings back.

pub mod convert;
pub mod error;
pub mod listing;
pub mod log;
pub mod record;

pub use convert::{convert, read_lines, run, Config, Reporter};
pub use error::{Error, Result};
pub use listing::{lookup, read_listing};
pub use record::{parse_listing_line, Record, ScanError};
