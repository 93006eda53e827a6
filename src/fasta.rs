use std::fs::File;
use std::io::{self, BufWriter, Write};

use flate2::{write::GzEncoder, Compression};

/// Path that stands for standard input or standard output.
pub const STDIO_PATH: &str = "-";

/// Write one record as a two-line fasta entry. Sequences are never wrapped.
pub fn write_fasta_record(
    writer: &mut (dyn Write + std::marker::Send),
    record: (&[u8], &[u8]),
) -> io::Result<()> {
    writer.write_all(b">")?;
    writer.write_all(record.0)?;
    writer.write_all(b"\n")?;
    writer.write_all(record.1)?;
    writer.write_all(b"\n")
}

/// Output destination for fasta records.
///
/// Gzip output is kept typed so the stream can be finished explicitly instead of on drop.
pub enum FastaWriter {
    Plain(BufWriter<File>),
    Gz(BufWriter<GzEncoder<File>>),
    Other(Box<dyn Write + Send>),
}

impl FastaWriter {
    /// Create (or truncate) an output file, gzip-compressed when the name ends in `.gz`.
    ///
    /// The parent directory must already exist.
    pub fn create(file_path: &str) -> io::Result<Self> {
        let file = File::create(file_path)?;

        if file_path.ends_with(".gz") {
            Ok(FastaWriter::Gz(BufWriter::new(GzEncoder::new(
                file,
                Compression::default(),
            ))))
        } else {
            Ok(FastaWriter::Plain(BufWriter::new(file)))
        }
    }

    /// Flush everything and, for gzip, write the final block and trailer.
    pub fn finish(&mut self) -> io::Result<()> {
        match self {
            FastaWriter::Gz(w) => {
                w.flush()?;
                w.get_mut().try_finish()
            }
            w => w.flush(),
        }
    }
}

impl Write for FastaWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FastaWriter::Plain(w) => w.write(buf),
            FastaWriter::Gz(w) => w.write(buf),
            FastaWriter::Other(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FastaWriter::Plain(w) => w.flush(),
            FastaWriter::Gz(w) => w.flush(),
            FastaWriter::Other(w) => w.flush(),
        }
    }
}
