use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(
        default_value_t = 0,
        help = "Number of input lines to skip before the configuration line"
    )]
    pub skip: usize,

    #[arg(
        short,
        long,
        help = "Path to scene json file (from 'cli' export), read instead of stdin"
    )]
    pub cli: Option<String>,

    #[arg(long, help = "Output format")]
    pub out: Option<OutputFormat>,
}

impl Args {
    pub fn output_format(&self) -> OutputFormat {
        self.out.clone().unwrap_or(OutputFormat::Map)
    }
}

#[derive(ValueEnum, Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Map,
    Cli,
}
