//! Command-line interface: `avrodc --generate <file...> [--include <file...>] --out <file>`.

use avrodc_codegen::{GeneratorConfig, run};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate Python dataclasses from Apache Avro schema files.
#[derive(Parser, Debug)]
#[command(name = "avrodc", version, about)]
pub struct CommandLineInterface {
    /// Schema files to generate dataclasses for, in output order
    #[arg(long, num_args = 1.., required = true)]
    pub generate: Vec<PathBuf>,

    /// Schema files whose named types may be referenced, loaded first
    #[arg(long, num_args = 1..)]
    pub include: Vec<PathBuf>,

    /// Output Python file
    #[arg(long)]
    pub out: PathBuf,

    /// Comment written at the top of the generated module
    #[arg(long)]
    pub header: Option<String>,

    /// Log every registered type and emitted declaration
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl CommandLineInterface {
    /// Parses the process arguments.
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }

    /// Installs the stderr log subscriber.
    ///
    /// `RUST_LOG` takes precedence; otherwise the level is `info`, or
    /// `debug` with `--verbose`.
    pub fn init_logging(&self) {
        let default_level = if self.verbose { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    /// Runs the generation described by the arguments.
    ///
    /// # Errors
    /// Returns an error if any schema fails to load or map, or the output
    /// cannot be written.
    pub fn run(&self) -> anyhow::Result<()> {
        tracing::debug!("{self:?}");
        let config = GeneratorConfig {
            header: self.header.clone(),
        };
        run(&self.generate, &self.include, &self.out, config)?;
        Ok(())
    }
}
