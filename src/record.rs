use std::fmt;
use std::sync::Arc;

use crate::errors::utf8;

/// Where a record was read from.
#[derive(Debug, Clone, PartialEq)]
pub enum Origin {
    File(String),
    Stdin,
    Bytes,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Origin::*;
        match self {
            File(file) => write!(f, "file: \"{}\"", file),
            Stdin => write!(f, "standard input"),
            Bytes => write!(f, "bytes"),
        }
    }
}

/// A single named sequence from a fasta stream.
///
/// Records only live for one trip through the graph.
#[derive(Debug, Clone)]
pub struct Record {
    name: Vec<u8>,
    description: Vec<u8>,
    seq: Vec<u8>,
    origin: Arc<Origin>,
    idx: usize,
}

impl Record {
    /// Create a record from a raw header line (without the leading `>`) and its sequence.
    ///
    /// The name is everything up to the first whitespace and the rest is kept as the description.
    pub fn from_fasta(header: &[u8], seq: &[u8], origin: Arc<Origin>, idx: usize) -> Self {
        let (name, description) = split_header(header);

        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            seq: seq.to_owned(),
            origin,
            idx,
        }
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }

    pub fn description(&self) -> &[u8] {
        &self.description
    }

    pub fn seq(&self) -> &[u8] {
        &self.seq
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Position of the record in its input stream, starting at zero.
    pub fn idx(&self) -> usize {
        self.idx
    }

    /// Whether the exact byte `base` occurs in the sequence. Case-sensitive.
    pub fn contains_base(&self, base: u8) -> bool {
        memchr::memchr(base, &self.seq).is_some()
    }

    pub fn to_fasta(&self) -> (&[u8], &[u8]) {
        (&self.name, &self.seq)
    }
}

fn split_header(header: &[u8]) -> (&[u8], &[u8]) {
    let header = trim_ascii_whitespace(header);

    match header.iter().position(|c| c.is_ascii_whitespace()) {
        Some(i) => (&header[..i], trim_ascii_whitespace(&header[i..])),
        None => (header, &[][..]),
    }
}

fn trim_ascii_whitespace(b: &[u8]) -> &[u8] {
    let Some(start) = b.iter().position(|c| !c.is_ascii_whitespace()) else {
        return &[];
    };
    let end = b.iter().rposition(|c| !c.is_ascii_whitespace()).unwrap_or(start);
    &b[start..=end]
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "name: {}", utf8(&self.name))?;
        if !self.description.is_empty() {
            writeln!(f, "description: {}", utf8(&self.description))?;
        }
        writeln!(f, "seq:  {}", utf8(&self.seq))?;
        write!(f, "from record {} in {}", self.idx, self.origin)
    }
}
