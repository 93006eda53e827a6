use std::io::Write;
use std::sync::Mutex;

use crate::fasta::*;
use crate::graph::*;

pub struct OutputFastaNode {
    writer: Mutex<FastaWriter>,
    file: Option<String>,
}

impl OutputFastaNode {
    const NAME: &'static str = "writing records to a fasta file";

    /// Write records to a fasta file, gzip-compressed if the name ends with `.gz`.
    ///
    /// The file is created (or truncated) right away, so it exists even if no records are written.
    /// The directory it goes in is not created.
    pub fn new(file: impl AsRef<str>) -> Result<Self> {
        let writer = FastaWriter::create(file.as_ref()).map_err(|e| Error::FileIo {
            file: file.as_ref().to_owned(),
            source: Box::new(e),
        })?;

        Ok(Self {
            writer: Mutex::new(writer),
            file: Some(file.as_ref().to_owned()),
        })
    }

    /// Write records to standard output.
    pub fn to_stdout() -> Self {
        Self::with_writer(std::io::BufWriter::new(std::io::stdout()))
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(FastaWriter::Other(Box::new(writer))),
            file: None,
        }
    }

    fn io_error(&self, e: std::io::Error) -> Error {
        match &self.file {
            Some(file) => Error::FileIo {
                file: file.clone(),
                source: Box::new(e),
            },
            None => Error::BytesIo(Box::new(e)),
        }
    }
}

impl GraphNode for OutputFastaNode {
    fn run(&self, record: Option<Record>) -> Result<(Option<Record>, bool)> {
        let Some(record) = record else { panic!("Expected some record!") };

        {
            let mut writer = self.writer.lock().unwrap();
            write_fasta_record(&mut *writer, record.to_fasta()).map_err(|e| self.io_error(e))?;
        }

        Ok((Some(record), false))
    }

    fn finish(&self) -> Result<()> {
        let mut writer = self.writer.lock().unwrap();
        writer.finish().map_err(|e| self.io_error(e))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
