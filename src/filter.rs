use crate::errors::*;
use crate::fasta::STDIO_PATH;
use crate::graph::node::*;
use crate::graph::*;

/// The ambiguous nucleotide code.
pub const AMBIGUOUS_BASE: u8 = b'N';

/// Copy every record of `input` that has no `N` in its sequence to `output`, in order.
///
/// Progress is reported on standard error every [`DEFAULT_PROGRESS_INTERVAL`] records, counting
/// dropped records too. `-` stands for standard input or standard output.
pub fn remove_ambiguous(input: impl AsRef<str>, output: impl AsRef<str>) -> Result<()> {
    // the output is truncated before the input is opened, even if opening the input fails
    let output = if output.as_ref() == STDIO_PATH {
        OutputFastaNode::to_stdout()
    } else {
        OutputFastaNode::new(output)?
    };

    let mut graph = Graph::new();

    if input.as_ref() == STDIO_PATH {
        graph.add(InputFastaNode::from_stdin()?);
    } else {
        graph.add(InputFastaNode::new(input)?);
    }

    graph.add(ProgressNode::new(DEFAULT_PROGRESS_INTERVAL));
    graph.add(WithoutBaseNode::new(AMBIGUOUS_BASE));
    graph.add(output);

    graph.run()
}
