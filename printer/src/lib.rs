//! Reads a map description and prints it as an ASCII grid

pub mod cli;

use std::io::{BufRead, Write};

use common::{debug, warn};
use model::{
    cli::CliFile,
    error::ReadError,
    input::{read_input, Scene},
};

use cli::{Args, OutputFormat};

/// Reads the scene (from `input`, or from the `--cli` file if given) and
/// writes it to `out` in the requested format.
///
/// On failure the error line is written to `out` as well and the error is
/// returned, leaving it to the caller to terminate.
pub fn run<R: BufRead, W: Write>(args: &Args, input: R, out: &mut W) -> Result<(), ReadError> {
    let result = load_scene(args, input).and_then(|scene| write_scene(&scene, args, out));
    if let Err(err) = &result {
        debug!("giving up: {:?}", err);
        writeln!(out, "{}", err)?;
    }
    result
}

/// [run], then flushes `out`. A failed flush is reported on stderr, since
/// `out` can no longer be written to, and counts as a failed run.
pub fn run_flushed<R: BufRead, W: Write>(
    args: &Args,
    input: R,
    out: &mut W,
) -> Result<(), ReadError> {
    let result = run(args, input, out);
    if let Err(err) = out.flush().map_err(ReadError::from) {
        eprintln!("{}", err);
        return result.and(Err(err));
    }
    result
}

fn load_scene<R: BufRead>(args: &Args, input: R) -> Result<Scene, ReadError> {
    match &args.cli {
        Some(cli_path) => {
            if args.skip > 0 {
                warn!("ignoring skip of {} lines when reading {}", args.skip, cli_path);
            }
            CliFile::from_json_file(cli_path)?.into_scene()
        }
        None => read_input(input, args.skip),
    }
}

fn write_scene<W: Write>(scene: &Scene, args: &Args, out: &mut W) -> Result<(), ReadError> {
    match args.output_format() {
        OutputFormat::Map => writeln!(out, "{}", scene.map)?,
        OutputFormat::Cli => writeln!(out, "{}", CliFile::new(scene).to_json_string()?)?,
    }
    Ok(())
}
