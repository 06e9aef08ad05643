use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use php_sfc_types::sfc::parse_sfc;
use php_sfc_types::{
    Code, EmbeddedCode, Error, LanguagePlugin, PhpBlockPlugin, PluginOptions, Result,
};

/// Print the context-type suffix generated from `<php>` blocks of Vue
/// single-file components.
#[derive(Debug, Parser)]
#[command(name = "php-sfc-types", version, about)]
struct Cli {
    /// `.vue` files to analyse.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Plugin options file (defaults to ./php-sfc.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log filter, e.g. `debug` or `php_sfc_types=trace`.  Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// The generated TypeScript suffix.
    Text,
    /// The generated codes, mapped fragments included, as JSON.
    Json,
}

#[derive(Serialize)]
struct FileOutput<'a> {
    file: &'a Path,
    codes: Vec<Code>,
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_file(plugin: &PhpBlockPlugin, path: &Path) -> Result<Vec<Code>> {
    let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let sfc = parse_sfc(&source);
    let mut embedded = EmbeddedCode::new("script_ts");
    plugin.resolve_embedded_code(&path.to_string_lossy(), &sfc, &mut embedded);
    Ok(embedded.content)
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let options = PluginOptions::discover(cli.config.as_deref(), &cwd)?;
    let plugin = PhpBlockPlugin::new(options);

    let mut outputs = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let codes = resolve_file(&plugin, path)?;
        tracing::info!(file = %path.display(), codes = codes.len(), "resolved");
        outputs.push(FileOutput { file: path, codes });
    }

    let mut stdout = std::io::stdout().lock();
    let written = match cli.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut stdout, &outputs)?;
            writeln!(stdout)
        }
        Format::Text => outputs.iter().try_for_each(|out| {
            let source = php_sfc_types::codegen::to_source(&out.codes);
            if cli.files.len() > 1 {
                writeln!(stdout, "{}: {}", out.file.display(), source)
            } else {
                writeln!(stdout, "{source}")
            }
        }),
    };
    written.map_err(|source| Error::Io {
        path: PathBuf::from("<stdout>"),
        source,
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("php-sfc-types: {err}");
            ExitCode::FAILURE
        }
    }
}
