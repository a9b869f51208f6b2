use std::fmt;

/// A register name together with its address, taken from one line of input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub address: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("no `<name>,<address>` pair")]
    NoMatch,

    #[error("address `{0}` does not fit in 64 bits")]
    AddressOverflow(String),
}

/// `[A-Za-z0-9_]`, the ASCII "word" class.
fn is_word(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

impl Record {
    /// Finds the first `<word characters>,<decimal digits>` pair in a line
    ///
    /// Whatever surrounds the pair is ignored, so `"  STATUS,4056 ; flags"` gives `STATUS` at 4056.
    ///
    /// ## Arguments
    ///
    /// * `line` - One line of the register list, with or without its line terminator
    pub fn scan(line: &str) -> Result<Self, ScanError> {
        let bytes = line.as_bytes();
        let mut start = 0;

        while start < bytes.len() {
            if !is_word(bytes[start]) {
                start += 1;
                continue;
            }

            // Every suffix of a word run ends at the same place, so the whole run either
            // starts a match or none of it does.
            let end = start + bytes[start..].iter().take_while(|&&b| is_word(b)).count();
            let followed_by_number = bytes.get(end) == Some(&b',')
                && bytes.get(end + 1).is_some_and(|b| b.is_ascii_digit());

            if followed_by_number {
                let digits_start = end + 1;
                let digits_end = digits_start
                    + bytes[digits_start..]
                        .iter()
                        .take_while(|b| b.is_ascii_digit())
                        .count();
                let digits = &line[digits_start..digits_end];
                let address = digits
                    .parse::<u64>()
                    .map_err(|_| ScanError::AddressOverflow(digits.to_owned()))?;

                return Ok(Record {
                    name: line[start..end].to_owned(),
                    address,
                });
            }

            start = end;
        }

        Err(ScanError::NoMatch)
    }
}

/// Renders the listing form: the address in uppercase hex, zero-padded to at least four digits,
/// then a space and the name.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X} {}", self.address, self.name)
    }
}

/// Reads one listing line (`<hex address> <name>`) back into a record.
///
/// Surrounding whitespace is dropped. Returns `None` unless the rest is exactly two fields
/// separated by one space, the first of them hexadecimal.
pub fn parse_listing_line(text: &str) -> Option<Record> {
    let (hex, name) = text.trim().split_once(' ')?;
    if hex.is_empty() || name.is_empty() || name.contains(' ') {
        return None;
    }

    let address = u64::from_str_radix(hex, 16).ok()?;
    Some(Record {
        name: name.to_owned(),
        address,
    })
}
