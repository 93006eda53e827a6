use crate::graph::*;

pub struct RetainNode<F: Fn(&Record) -> bool + Send + Sync> {
    predicate: F,
}

impl<F: Fn(&Record) -> bool + Send + Sync> RetainNode<F> {
    const NAME: &'static str = "RetainNode";

    /// Retain only the records where the predicate is true and discard the rest.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

pub struct WithoutBaseNode;

impl WithoutBaseNode {
    /// Retain only the records whose sequence does not contain `base`.
    ///
    /// The comparison is on exact bytes, so `WithoutBaseNode::new(b'N')` keeps sequences with `n`.
    pub fn new(base: u8) -> RetainNode<impl Fn(&Record) -> bool + Send + Sync> {
        RetainNode::new(move |record: &Record| !record.contains_base(base))
    }
}

impl<F: Fn(&Record) -> bool + Send + Sync> GraphNode for RetainNode<F> {
    fn run(&self, record: Option<Record>) -> Result<(Option<Record>, bool)> {
        let Some(record) = record else { panic!("Expected some record!") };

        if (self.predicate)(&record) {
            Ok((Some(record), false))
        } else {
            Ok((None, false))
        }
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
