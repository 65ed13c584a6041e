use clap::{Parser, ValueEnum};
use mt940_parser::{DateMode, Mt940Decoder, ParseError};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "cli_decoder",
    version,
    about = "Декодирует выписку SWIFT MT940 в JSON или CSV.",
    long_about = None,
)]
struct Args {
    /// Входной файл MT940
    #[arg(long)]
    input: PathBuf,

    /// Формат вывода
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    output_format: OutputFormat,

    /// Отклонять несуществующие даты (месяц 13, 30 февраля и т.п.)
    #[arg(long)]
    strict_dates: bool,
}

/// Поддерживаемые форматы вывода
#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    /// вся выписка
    Json,
    /// только проводки
    Csv,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(exit_code(&err));
    }
}

/// 2 - входной текст не является корректной выпиской, 1 - прочие ошибки (файл, вывод)
fn exit_code(err: &ParseError) -> i32 {
    if err.is_decode_error() { 2 } else { 1 }
}

fn run() -> Result<(), ParseError> {
    let args = Args::parse();

    let date_mode = if args.strict_dates {
        DateMode::Strict
    } else {
        DateMode::Lenient
    };

    info!(input = %args.input.display(), ?date_mode, "decoding MT940 file");

    let file = File::open(&args.input)?;
    let statement = Mt940Decoder::new(date_mode).read_statement(file)?;

    let stdout = io::stdout();
    let handle = stdout.lock();

    match args.output_format {
        OutputFormat::Json => statement.write_json(handle)?,
        OutputFormat::Csv => statement.write_csv(handle)?,
    }

    Ok(())
}
