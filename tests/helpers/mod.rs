#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use flate2::{write::GzEncoder, Compression};

/// Writer that can be handed to a node and read back after the graph has run.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

pub fn write_gz_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    write_file(dir, name, &gzip_bytes(contents))
}

pub fn gzip_bytes(contents: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(contents).unwrap();
    encoder.finish().unwrap()
}

/// `n` single-line records named `r0`, `r1`, ... with every `n_every`th sequence containing `N`.
pub fn numbered_records(n: usize, n_every: usize) -> Vec<u8> {
    let mut res = Vec::new();
    for i in 0..n {
        let seq = if n_every > 0 && i % n_every == 0 { "ACNT" } else { "ACGT" };
        res.extend_from_slice(format!(">r{i}\n{seq}\n").as_bytes());
    }
    res
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}
