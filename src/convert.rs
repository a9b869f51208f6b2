use std::fs::{self, File};
use std::io::{self, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::Record;

/// Where a conversion reads from and writes to.
///
/// Every line of the input must hold a pair, blank ones included. A trailing empty line left by
/// an editor therefore fails the run, after the records above it have been written.
#[derive(Clone, Debug)]
pub struct Config {
    /// Register list, one `<name>,<address>` pair per line
    pub input_path: PathBuf,
    /// Listing to produce; truncated or created at the start of a run
    pub output_path: PathBuf,
}

/// Reads a whole register list into lines, terminators stripped.
///
/// Bytes that are not UTF-8 become U+FFFD. Only ASCII matters to the parser, so a stray Latin-1
/// byte in a comment costs nothing.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|e| Error::file_access(path, e))?;
    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_owned)
        .collect())
}

/// Writes each listing line to the output file and mirrors it on a second stream.
///
/// The output stream is released when the reporter is dropped, whichever way the run ends.
pub struct Reporter<W: Write, E: Write> {
    path: PathBuf,
    out: W,
    echo: E,
}

impl Reporter<BufWriter<File>, Stdout> {
    /// Truncates (or creates) the file at `path` and echoes to standard output.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| Error::file_access(path, e))?;
        Ok(Reporter::new(path, BufWriter::new(file), io::stdout()))
    }
}

impl<W: Write, E: Write> Reporter<W, E> {
    /// ## Arguments
    ///
    /// * `path` - Names `out` in error messages
    /// * `out` - Receives the listing
    /// * `echo` - Receives a copy of every line
    pub fn new(path: impl Into<PathBuf>, out: W, echo: E) -> Self {
        Reporter {
            path: path.into(),
            out,
            echo,
        }
    }

    /// Appends one line, adding the terminator.
    pub fn emit(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}").map_err(|e| Error::file_access(&self.path, e))?;
        writeln!(self.echo, "{line}").map_err(Error::Echo)?;
        Ok(())
    }

    /// Flushes both streams and hands them back.
    pub fn finish(mut self) -> Result<(W, E)> {
        self.out
            .flush()
            .map_err(|e| Error::file_access(&self.path, e))?;
        self.echo.flush().map_err(Error::Echo)?;
        Ok((self.out, self.echo))
    }
}

/// Parses, formats and emits every line in order, stopping at the first line that does not parse.
///
/// Returns the number of records written. Lines before a bad one have already been emitted when
/// the error comes back.
pub fn convert<I, S, W, E>(lines: I, reporter: &mut Reporter<W, E>) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
    E: Write,
{
    let mut count = 0;
    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let record = Record::scan(line).map_err(|source| Error::Parse {
            line: index + 1,
            text: line.to_owned(),
            source,
        })?;
        debug!(name = %record.name, address = record.address, "converted");

        reporter.emit(&record.to_string())?;
        count += 1;
    }

    Ok(count)
}

/// Converts `config.input_path` into `config.output_path`, echoing to standard output.
pub fn run(config: &Config) -> Result<usize> {
    let lines = read_lines(&config.input_path)?;
    let mut reporter = Reporter::create(&config.output_path)?;
    let count = convert(&lines, &mut reporter)?;
    reporter.finish()?;

    info!(
        "wrote {count} registers from {} to {}",
        config.input_path.display(),
        config.output_path.display()
    );
    Ok(count)
}
