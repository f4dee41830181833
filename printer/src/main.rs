use clap::Parser;

use printer::{cli::Args, run_flushed};

fn main() {
    let args = Args::parse();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();

    // process::exit skips destructors, run_flushed has flushed stdout already
    if run_flushed(&args, stdin.lock(), &mut stdout).is_err() {
        std::process::exit(1);
    }
}
