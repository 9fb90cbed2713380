/*!
# IO

Reading and writing the plain-text network description format:

```text
c poodle test network
3 2
1 5
2 3
2 1
0 1 4
1 2 6
```

A header line `n m` is followed by `n` computer lines `securityLevel poodleTime`
and `m` connection lines `computerA computerB transmissionTime`. Lines starting
with the comment identifier (default `c`) are skipped.

All value-range rules of [`Computer`] and [`Connection`] are enforced on read;
violations surface as [`ErrorKind::InvalidData`] errors, so the core algorithms
never see an invalid record.
*/

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use crate::{network::*, node::*};

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Premature end of line when parsing {}.", $name)
        );

        let parsed = next.unwrap().parse();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!("Invalid value found. Cannot parse {}.", $name)
        );

        parsed.unwrap()
    }};
}

/// A reader for the network description format
#[derive(Debug, Clone)]
pub struct NetworkReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for NetworkReader {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
        }
    }
}

impl NetworkReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> NetworkReader {
        self.comment_identifier = c.into();
        self
    }

    /// Reads and validates a network description.
    ///
    /// # Errors
    /// Returns an error if the input is truncated, not parseable, or violates
    /// a value-range rule (security level outside `1..=MAX_SECURITY_LEVEL`,
    /// non-positive times, endpoints out of range or equal).
    pub fn try_read_network<R>(&self, reader: R) -> Result<(Vec<Computer>, Vec<Connection>)>
    where
        R: BufRead,
    {
        let mut lines = NonCommentLines {
            lines: reader.lines(),
            comment_identifier: &self.comment_identifier,
        };

        let header = lines.try_next_line()?;
        let mut parts = tokens(&header);
        let num_computers: NumNodes = parse_next_value!(parts, "Number of computers");
        let num_connections: usize = parse_next_value!(parts, "Number of connections");

        let mut computers = Vec::with_capacity(num_computers as usize);
        for _ in 0..num_computers {
            let line = lines.try_next_line()?;
            let mut parts = tokens(&line);

            let security_level: SecurityLevel = parse_next_value!(parts, "Security level");
            let poodle_time: Time = parse_next_value!(parts, "Poodle time");

            raise_error_unless!(
                (1..=MAX_SECURITY_LEVEL).contains(&security_level),
                ErrorKind::InvalidData,
                format!("Invalid security level '{security_level}'")
            );
            raise_error_unless!(
                poodle_time > 0,
                ErrorKind::InvalidData,
                format!("Invalid poodle time '{poodle_time}'")
            );

            computers.push(Computer::new(security_level, poodle_time));
        }

        let mut connections = Vec::with_capacity(num_connections);
        for _ in 0..num_connections {
            let line = lines.try_next_line()?;
            let mut parts = tokens(&line);

            let computer_a: Node = parse_next_value!(parts, "First endpoint");
            let computer_b: Node = parse_next_value!(parts, "Second endpoint");
            let transmission_time: Time = parse_next_value!(parts, "Transmission time");

            raise_error_unless!(
                computer_a < num_computers && computer_b < num_computers,
                ErrorKind::InvalidData,
                format!("Invalid computer number in connection ({computer_a}, {computer_b})")
            );
            raise_error_unless!(
                computer_a != computer_b,
                ErrorKind::InvalidData,
                format!("Connection from computer '{computer_a}' to itself")
            );
            raise_error_unless!(
                transmission_time > 0,
                ErrorKind::InvalidData,
                format!("Invalid transmission time '{transmission_time}'")
            );

            connections.push(Connection::new(computer_a, computer_b, transmission_time));
        }

        Ok((computers, connections))
    }

    /// Reads a network description from a file.
    /// Internally wraps the file in a buffered reader.
    pub fn try_read_network_file<P>(&self, path: P) -> Result<(Vec<Computer>, Vec<Connection>)>
    where
        P: AsRef<Path>,
    {
        self.try_read_network(BufReader::new(File::open(path)?))
    }
}

/// Shorthand for reading a network description with default reader settings
pub fn read_network<R: BufRead>(reader: R) -> Result<(Vec<Computer>, Vec<Connection>)> {
    NetworkReader::default().try_read_network(reader)
}

/// Writes a network description readable by [`NetworkReader`].
///
/// # Errors
/// Returns an error if writing fails (e.g., IO errors).
pub fn write_network<W: Write>(
    computers: &[Computer],
    connections: &[Connection],
    mut writer: W,
) -> Result<()> {
    writeln!(writer, "{} {}", computers.len(), connections.len())?;
    for computer in computers {
        writeln!(writer, "{} {}", computer.security_level, computer.poodle_time)?;
    }
    for con in connections {
        writeln!(
            writer,
            "{} {} {}",
            con.computer_a, con.computer_b, con.transmission_time
        )?;
    }
    Ok(())
}

/// Writes a network description to a file.
/// Internally wraps the file in a buffered writer.
pub fn write_network_file<P: AsRef<Path>>(
    computers: &[Computer],
    connections: &[Connection],
    path: P,
) -> Result<()> {
    write_network(computers, connections, BufWriter::new(File::create(path)?))
}

/// Whitespace-separated non-empty tokens of a line
fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(' ').filter(|t| !t.is_empty())
}

/// Line iterator skipping comments
struct NonCommentLines<'a, R> {
    lines: std::io::Lines<R>,
    comment_identifier: &'a str,
}

impl<R: BufRead> NonCommentLines<'_, R> {
    /// Returns the next non-comment-line or an error if the input ends early
    fn try_next_line(&mut self) -> Result<String> {
        loop {
            match self.lines.next() {
                None => {
                    return Err(io_error!(
                        ErrorKind::InvalidData,
                        "Premature end of network description"
                    ))
                }
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.starts_with(self.comment_identifier) => continue,
                Some(Ok(line)) => return Ok(line),
            }
        }
    }
}
