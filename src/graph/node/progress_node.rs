use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::graph::*;

/// Number of records between progress messages.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100_000;

pub struct ProgressNode {
    interval: usize,
    count: AtomicUsize,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ProgressNode {
    const NAME: &'static str = "reporting progress";

    /// Report progress to standard error every `interval` records.
    pub fn new(interval: usize) -> Self {
        Self::with_writer(interval, std::io::stderr())
    }

    /// Report progress to an arbitrary writer.
    ///
    /// A message `... <count>` is written for the records numbered 0, `interval`, `2 * interval`, ...
    pub fn with_writer(interval: usize, writer: impl Write + Send + 'static) -> Self {
        assert!(interval >= 1, "Progress interval must be greater than zero");

        Self {
            interval,
            count: AtomicUsize::new(0),
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Number of records seen so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }
}

impl Default for ProgressNode {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRESS_INTERVAL)
    }
}

impl GraphNode for ProgressNode {
    fn run(&self, record: Option<Record>) -> Result<(Option<Record>, bool)> {
        let Some(record) = record else { panic!("Expected some record!") };

        let n = self.count.fetch_add(1, Ordering::Relaxed);

        if n % self.interval == 0 {
            let mut writer = self.writer.lock().unwrap();
            writeln!(writer, "... {n}").map_err(|e| Error::BytesIo(Box::new(e)))?;
        }

        Ok((Some(record), false))
    }

    fn finish(&self) -> Result<()> {
        let mut writer = self.writer.lock().unwrap();
        writer.flush().map_err(|e| Error::BytesIo(Box::new(e)))
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
