use std::marker::{Send, Sync};
use std::sync::Arc;

use crate::errors::*;
use crate::record::*;

pub mod node;

/// Computation graph of record operations, where each operation is a node.
///
/// Nodes run in the order they were added. The first node is expected to be an input node that
/// ignores its argument and produces records.
pub struct Graph {
    nodes: Vec<Arc<dyn GraphNode>>,
}

pub trait GraphNode: Send + Sync {
    /// Process a single record.
    ///
    /// Returning `None` drops the record for the rest of the graph and returning `true` signals that
    /// no more records will be produced.
    fn run(&self, record: Option<Record>) -> Result<(Option<Record>, bool)>;

    /// Called once after the last record has gone through the graph.
    fn finish(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str;
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a record operation node to the graph and return the node.
    pub fn add<G: GraphNode + 'static>(&mut self, node: G) -> Arc<G> {
        let a = Arc::new(node);
        let b = Arc::clone(&a);
        self.nodes.push(a);
        b
    }

    /// Run a graph until all records are processed, then finish every node.
    pub fn run(&self) -> Result<()> {
        loop {
            let (_, done) = self.run_one(None)?;
            if done {
                break;
            }
        }

        for node in &self.nodes {
            node.finish()?;
        }

        Ok(())
    }

    /// Run a single record through the graph.
    ///
    /// Returns an additional boolean indicating whether the graph is done executing.
    pub fn run_one(&self, mut curr: Option<Record>) -> Result<(Option<Record>, bool)> {
        for node in &self.nodes {
            let (c, done) = node.run(curr)?;
            curr = c;

            if done {
                return Ok((curr, done));
            }
            if curr.is_none() {
                break;
            }
        }

        Ok((curr, false))
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
