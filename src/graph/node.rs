/// Graph nodes that process records.

pub mod input_fasta_node;
pub use input_fasta_node::*;

pub mod progress_node;
pub use progress_node::*;

pub mod retain_node;
pub use retain_node::*;

pub mod output_fasta_node;
pub use output_fasta_node::*;
