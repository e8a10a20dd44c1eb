//! LatexClip - Turn LaTeX math into linear plain text or mathtext.
//!
//! This binary provides the CLI interface to the latexclip converters,
//! reading expressions from arguments, files, or stdin.

mod cli;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, trace, LevelFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};

use latexclip_config::{Config, OutputConfig};
use latexclip_convert::{ExpressionBuffer, TransformSet};
use latexclip_core::Result;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    if cli.list_transforms {
        cli::list_transforms();
        return;
    }

    setup_logging(&cli.log_level);
    info!("LatexClip v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let mut output = config.output;
    cli.apply_overrides(&mut output);
    debug!("Output settings: {:?}", output);

    let transforms = TransformSet::for_mode(output.mode);
    debug!("Transforms: {:?}", transforms.names());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(ref expr) = cli.expr {
        convert_document(expr, &transforms, &output, &mut out)?;
    } else if cli.should_read_stdin() {
        info!("Reading from stdin");
        convert_reader(io::stdin().lock(), &transforms, &output, &mut out)?;
    } else {
        for path in &cli.files {
            info!("Processing file: {}", path.display());
            let reader = BufReader::new(File::open(path)?);
            convert_reader(reader, &transforms, &output, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Load configuration with optional overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load_with_override(cli.config.as_deref())?;
    if let Some(ref config_arg) = cli.config {
        debug!("Merged config override: {}", config_arg);
    }
    Ok(config)
}

/// Convert everything a reader provides.
///
/// In batch mode expressions are emitted as soon as their block ends.
fn convert_reader<R: BufRead, W: Write>(
    mut reader: R,
    transforms: &TransformSet,
    output: &OutputConfig,
    out: &mut W,
) -> Result<()> {
    if !output.batch {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        return convert_document(&input, transforms, output, out);
    }

    let mut buffer = ExpressionBuffer::new();
    for line in reader.lines() {
        let line = line?;
        trace!("Input line: {}", line);
        if let Some(expression) = buffer.push_line(&line) {
            write_expression(&expression, transforms, output, out)?;
            out.flush()?;
        }
    }
    if let Some(expression) = buffer.flush() {
        write_expression(&expression, transforms, output, out)?;
    }

    Ok(())
}

/// Convert an in-memory document.
fn convert_document<W: Write>(
    input: &str,
    transforms: &TransformSet,
    output: &OutputConfig,
    out: &mut W,
) -> Result<()> {
    if output.batch {
        for expression in latexclip_convert::stream::split_expressions(input) {
            write_expression(&expression, transforms, output, out)?;
        }
        return Ok(());
    }

    if input.trim().is_empty() {
        info!("Empty input, nothing to convert");
        return Ok(());
    }
    write_expression(input, transforms, output, out)
}

/// Run every transform over one expression and print the results.
fn write_expression<W: Write>(
    expression: &str,
    transforms: &TransformSet,
    output: &OutputConfig,
    out: &mut W,
) -> Result<()> {
    for (name, converted) in transforms.apply(expression) {
        if output.show_labels() {
            writeln!(out, "{}: {}", name, converted)?;
        } else {
            writeln!(out, "{}", converted)?;
        }
    }
    Ok(())
}
