use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::{Path, PathBuf};

use matops::{InputFormat, MatrixPair, Session};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Yaml,
    #[cfg(feature = "json")]
    Json,
}

impl From<Format> for InputFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Text => InputFormat::Text,
            Format::Yaml => InputFormat::Yaml,
            #[cfg(feature = "json")]
            Format::Json => InputFormat::Json,
        }
    }
}

/// Add, multiply and edit a pair of square integer matrices.
#[derive(Debug, Parser)]
#[command(name = "matops", version, about)]
struct Cli {
    /// Input file. Prompted for on stdin when omitted.
    file: Option<PathBuf>,

    /// Input format. Guessed from the file extension by default.
    #[arg(short, long, value_enum)]
    format: Option<Format>,
}

fn load(path: &Path, format: Option<Format>) -> Result<MatrixPair> {
    let pair = match format {
        Some(format) => matops::load_path_as(path, format.into()),
        None => matops::load_path(path),
    };
    pair.with_context(|| format!("cannot load {}", path.display()))
}

fn run(cli: Cli) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    println!("Matrix Operations");
    let path = match cli.file {
        Some(path) => path,
        None => PathBuf::from(session.prompt_filename()?),
    };

    let mut pair = load(&path, cli.format)?;
    let summary = session.run(&mut pair)?;
    log::info!("{:?}", summary);
    Ok(())
}

fn main() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("MATOPS_LOG", "warn"))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
