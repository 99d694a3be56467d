use anyhow::Context;
use clap::{Parser, Subcommand};
use guid_converter::{ConversionOutcome, ConversionRequest, IdentifierForm};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "guid-converter",
    version,
    about = "Convert identifiers between guid and hex form",
    long_about = "Convert 128-bit identifiers between their braced GUID form and their \
    flat 32-character hex form.\n\n\
    USAGE EXAMPLES:\n  \
      # Convert one value\n  \
      guid-converter single -s '{48ED4993-8F51-406E-8501-64809B4EAEC8}' -i guid\n\n  \
      # Convert every line of a file with 4 workers\n  \
      guid-converter file ./hex.txt ./guids.txt -i hex -t 4"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a single value and print the result
    Single {
        /// Value to convert
        #[arg(short = 's', long = "string", value_name = "VALUE")]
        value: String,

        /// Format of the input value
        #[arg(short = 'i', long = "input-format", value_enum)]
        input_format: CliForm,
    },

    /// Convert the content of an input file to an output file
    File {
        /// Full path to the input file
        input_file: PathBuf,

        /// Full path with name of the output file
        output_file: PathBuf,

        /// Format of the values in the input file
        #[arg(short = 'i', long = "input-format", value_enum)]
        input_format: CliForm,

        /// Number of worker threads for the conversion
        #[arg(short = 't', long = "threads", default_value_t = 1)]
        threads: usize,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliForm {
    Guid,
    Hex,
}

impl From<CliForm> for IdentifierForm {
    fn from(f: CliForm) -> Self {
        match f {
            CliForm::Guid => Self::Guid,
            CliForm::Hex => Self::Hex,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose)?;

    let request = match cli.command {
        Command::Single {
            value,
            input_format,
        } => ConversionRequest::single(value, input_format.into()),
        Command::File {
            input_file,
            output_file,
            input_format,
            threads,
        } => ConversionRequest::file(input_file, output_file, input_format.into())
            .workers(threads),
    };

    let outcome = guid_converter::run(request).context("Conversion failed")?;

    if let ConversionOutcome::Single(value) = outcome {
        println!("{value}");
    }

    Ok(())
}

fn setup_tracing(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => EnvFilter::new("guid_converter=info"),
        1 => EnvFilter::new("guid_converter=debug"),
        _ => EnvFilter::new("guid_converter=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(false))
        .init();

    Ok(())
}
