use needletail::errors::{ParseError, ParseErrorKind};
use needletail::{parse_fastx_file, parse_fastx_reader, parse_fastx_stdin, FastxReader};

use thread_local::*;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::graph::*;

const CHUNK_SIZE: usize = 256;

type FastaReader<'reader> = Box<dyn FastxReader + 'reader>;

pub struct InputFastaNode<'reader> {
    reader: Option<Mutex<FastaReader<'reader>>>,
    buf: ThreadLocal<RefCell<VecDeque<Record>>>,
    origin: Arc<Origin>,
    idx: AtomicUsize,
}

// an input with no bytes at all is an empty stream rather than a parse error
fn non_empty<'reader>(
    reader: std::result::Result<FastaReader<'reader>, ParseError>,
) -> std::result::Result<Option<Mutex<FastaReader<'reader>>>, ParseError> {
    match reader {
        Ok(r) => Ok(Some(Mutex::new(r))),
        Err(e) if matches!(e.kind, ParseErrorKind::EmptyFile) => Ok(None),
        Err(e) => Err(e),
    }
}

impl<'reader> InputFastaNode<'reader> {
    const NAME: &'static str = "InputFastaNode";

    /// Stream records from a fasta file. Compressed files are decompressed on the fly.
    pub fn new(file: impl AsRef<str>) -> Result<Self> {
        let reader = non_empty(parse_fastx_file(file.as_ref())).map_err(|e| Error::FileIo {
            file: file.as_ref().to_owned(),
            source: Box::new(e),
        })?;

        Ok(Self::with_reader(reader, Origin::File(file.as_ref().to_owned())))
    }

    /// Stream records from standard input.
    pub fn from_stdin() -> Result<Self> {
        let reader = non_empty(parse_fastx_stdin()).map_err(|e| Error::BytesIo(Box::new(e)))?;
        Ok(Self::with_reader(reader, Origin::Stdin))
    }

    /// Stream records from a byte slice.
    pub fn from_bytes(bytes: &'reader [u8]) -> Result<Self> {
        let reader = non_empty(parse_fastx_reader(bytes)).map_err(|e| Error::BytesIo(Box::new(e)))?;
        Ok(Self::with_reader(reader, Origin::Bytes))
    }

    fn with_reader(reader: Option<Mutex<FastaReader<'reader>>>, origin: Origin) -> Self {
        Self {
            reader,
            buf: ThreadLocal::new(),
            origin: Arc::new(origin),
            idx: AtomicUsize::new(0),
        }
    }

    fn fill(&self, b: &mut VecDeque<Record>) -> Result<()> {
        let Some(reader) = &self.reader else {
            return Ok(());
        };
        let mut reader = reader.lock().unwrap();

        for _ in 0..CHUNK_SIZE {
            let Some(record) = reader.next() else {
                break;
            };
            let record = record.map_err(|e| Error::ParseRecord {
                origin: (*self.origin).clone(),
                idx: self.idx.load(Ordering::Relaxed),
                source: Box::new(e),
            })?;
            let idx = self.idx.fetch_add(1, Ordering::Relaxed);

            b.push_back(Record::from_fasta(
                record.id(),
                &record.seq(),
                Arc::clone(&self.origin),
                idx,
            ));
        }

        Ok(())
    }
}

impl<'reader> GraphNode for InputFastaNode<'reader> {
    fn run(&self, record: Option<Record>) -> Result<(Option<Record>, bool)> {
        assert!(record.is_none(), "Expected no input records for {}", Self::NAME);

        let buf = self.buf.get_or(|| RefCell::new(VecDeque::with_capacity(CHUNK_SIZE)));
        let mut b = buf.borrow_mut();

        if b.is_empty() {
            self.fill(&mut b)?;
        }

        match b.pop_front() {
            Some(r) => Ok((Some(r), false)),
            None => Ok((None, true)),
        }
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
