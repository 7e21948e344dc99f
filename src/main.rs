extern crate quotefix;

use quotefix::fixer::fix_file;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "quotefix")]
/// Replaces curly double quotes in a text file with straight single quotes.
struct Opt {
    #[structopt(parse(from_os_str))]
    /// The path to the file to fix.
    file: PathBuf,
}

fn main() {
    let Opt { file } = Opt::from_args();

    match fix_file(&file) {
        Ok(()) => println!("Fixed curly quotes in {}", file.display()),
        Err(err) => {
            eprintln!("\"{}\" - {}", file.display(), err);
            std::process::exit(1);
        }
    }
}
