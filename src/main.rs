use colored::*;

use nfilter::errors::*;
use nfilter::remove_ambiguous;

const USAGE: &str = "nfilter <input> <output>";

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        return Err(Error::Usage(USAGE.to_owned()));
    };

    remove_ambiguous(input, output)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}
