//! Remove fasta records that contain ambiguous bases.
//!
//! # Overview
//! `nfilter` reads fasta records, drops every record whose sequence contains an uppercase `N`,
//! and writes the rest back out as fasta, one header line and one sequence line per record.
//!
//! Parsing is done by [needletail](https://docs.rs/needletail), so multi-line sequences are
//! joined and gzip, bzip2, or xz compressed inputs are read directly.
//!
//! ## Graph API
//! Records flow through a [`Graph`] of operations. Each operation is a node that receives one
//! record at a time and either passes it on or drops it:
//! ```no_run
//! use nfilter::*;
//!
//! let mut graph = Graph::new();
//! graph.add(InputFastaNode::new("in.fa")?);
//! graph.add(ProgressNode::new(DEFAULT_PROGRESS_INTERVAL));
//! graph.add(WithoutBaseNode::new(b'N'));
//! graph.add(OutputFastaNode::new("out.fa")?);
//! graph.run()?;
//! # Ok::<(), nfilter::errors::Error>(())
//! ```
//! This is exactly what [`remove_ambiguous`] does.
//!
//! ## Case sensitivity
//! Only the uppercase byte `N` marks a record for removal. Soft-masked (lowercase) sequence is
//! written unchanged, including any `n`.

pub mod errors;
pub mod fasta;
pub mod filter;
pub mod graph;
pub mod record;

// commonly used functions and types

pub use crate::fasta::*;
pub use crate::filter::*;
pub use crate::graph::node::*;
pub use crate::graph::*;
pub use crate::record::*;
