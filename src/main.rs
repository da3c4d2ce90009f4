use std::path::PathBuf;

use env_logger::Builder;
use log::{debug, error, info, warn, LevelFilter};
use structopt::StructOpt;

use crate::output::Outcome;

mod config;
mod exceptions;
mod filter;
mod fs;
mod io_utils;
mod output;
mod writer;

const USAGE: &str = "Usage: src-dump <input_dir_1> [input_dir_2 ...] <output_file_base>";

#[derive(Debug, StructOpt)]
#[structopt(
    name = "src-dump",
    about = "Dumps the source files of one or more directories into a single text file"
)]
struct Opt {
    #[structopt(
        parse(from_os_str),
        help = "Input directories, followed by the output file base",
        value_name = "PATHS"
    )]
    paths: Vec<PathBuf>,

    #[structopt(short = "v", long = "verbose", help = "Print debug information")]
    verbose: bool,
}

fn main() {
    let opt = Opt::from_args();
    if opt.verbose {
        Builder::new().filter(None, LevelFilter::Debug).init();
    } else {
        Builder::new().filter(None, LevelFilter::Info).init();
    }

    std::process::exit(run(&opt.paths));
}

/// Splits `paths` into input directories and the output base, runs the dump and returns the
/// process exit code.
fn run(paths: &[PathBuf]) -> i32 {
    let (output_base, input_dirs) = match paths.split_last() {
        Some((last, rest)) if !rest.is_empty() => (last, rest),
        _ => {
            println!("{}", USAGE);
            return 1;
        }
    };
    let config = config::Config::new(input_dirs.to_vec(), output_base.clone());

    match output::generate(&config, &mut fs::RealFileSystem) {
        Ok(Outcome::Generated { path, files }) => {
            debug!("{} file(s) written", files);
            info!("Done. Output successfully written to {}", path.display());
            0
        }
        Ok(Outcome::NothingFound { path }) => {
            warn!("No matching files were found to process.");
            debug!("Nothing kept at {}", path.display());
            0
        }
        Err(e) => {
            error!("An unexpected error occurred: {}", e);
            1
        }
    }
}
