use std::{path::PathBuf, process};

use clap::{Parser, ValueEnum};
use log::{error, info};
use ynabify::{AccountType, ConvertResult, ConverterBuilder, DateStyle};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DateFormat {
    /// Keep the bank's date text
    Keep,
    /// DD/MM/YY
    Ynab,
}

impl From<DateFormat> for DateStyle {
    fn from(value: DateFormat) -> Self {
        match value {
            DateFormat::Keep => DateStyle::Keep,
            DateFormat::Ynab => DateStyle::Ynab,
        }
    }
}

/// Convert bank CSV exports into YNAB4 compatible CSV files
#[derive(Parser, Debug)]
#[command(name = "ynabify", version)]
struct Cli {
    /// GIROKONTO, VISA or GIROKONTO_NEU
    account_type: String,

    /// Bank export to convert
    file: PathBuf,

    /// Output file (default: <file stem>-ynab.csv next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Input delimiter (auto-detect if not specified)
    #[arg(short, long, value_parser = parse_delimiter)]
    delimiter: Option<u8>,

    /// Lines before the header row
    /// [default: 6 for GIROKONTO and VISA, 4 for GIROKONTO_NEU]
    #[arg(long)]
    skip_lines: Option<usize>,

    /// How dates are written
    #[arg(long, value_enum, default_value_t = DateFormat::Keep)]
    date_format: DateFormat,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b'\\', b't'] => Ok(b'\t'),
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("expected a single ASCII character, got {s:?}")),
    }
}

fn run(cli: Cli) -> ConvertResult<()> {
    // Checked before touching the file system.
    let account_type: AccountType = cli.account_type.parse()?;

    let mut builder = ConverterBuilder::new()
        .filename(&cli.file)
        .account_type(account_type)
        .skip_lines(cli.skip_lines.unwrap_or_else(|| account_type.preamble_lines()))
        .date_style(cli.date_format.into());

    if let Some(delimiter) = cli.delimiter {
        builder = builder.delimiter(delimiter);
    }
    if let Some(output) = &cli.output {
        builder = builder.output(output);
    }

    let written = builder.convert_file()?;
    info!("done: {}", written.display());
    println!("{}", written.display());

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let file = cli.file.clone();

    if let Err(e) = run(cli) {
        error!("conversion of {} failed: {e:?}", file.display());
        eprintln!("Error: {}: {}", file.display(), e);
        process::exit(1);
    }
}
