use std::{
    io::{self, BufWriter},
    path::PathBuf,
};

use assetgen_codegen::{EmitSummary, Generator};
use assetgen_core::{Config, OutputFile, is_c_identifier};
use clap::{ArgAction, Parser, builder::NonEmptyStringValueParser};
use eyre::Result;
use tracing::info;

/// Extension trait for exiting on core errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for assetgen_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "assetgen")]
#[command(version)]
#[command(about = "Embed static web assets into a generated C++ registration function")]
pub(crate) struct Cli {
    /// Name of the generated function
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    function: String,

    /// Asset files to embed, in registration order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Asset root stripped from each path to form its registration key [default: nfsd/ui]
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Type of the registry parameter [default: std::shared_ptr<RestRegistry>]
    #[arg(long)]
    registry_type: Option<String>,

    /// Name of the registry parameter [default: restreg]
    #[arg(long, value_parser = parse_identifier)]
    registry_param: Option<String>,

    /// Load root and registry settings from a TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write to this file instead of stdout; it is only replaced on success
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Default log level picked by `-v`/`-q`
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn run(&self) -> Result<()> {
        let config = self.config().unwrap_or_exit();
        let generator = Generator::new(config);

        let summary = self.generate(&generator).unwrap_or_exit();
        let target = match &self.output {
            Some(path) => path.display().to_string(),
            None => "<stdout>".to_string(),
        };
        info!(
            assets = summary.assets,
            bytes = summary.content_bytes,
            output = %target,
            "generated registration function"
        );
        Ok(())
    }

    /// Defaults, then the config file, then explicit flags. The merged result is
    /// validated again since flags bypass the file checks.
    fn config(&self) -> assetgen_core::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(root) = &self.root {
            config.root = root.clone();
        }
        if let Some(registry_type) = &self.registry_type {
            config.registry_type = registry_type.clone();
        }
        if let Some(registry_param) = &self.registry_param {
            config.registry_param = registry_param.clone();
        }

        config.validated()
    }

    fn generate(&self, generator: &Generator) -> assetgen_core::Result<EmitSummary> {
        match &self.output {
            Some(path) => {
                let mut file = OutputFile::create(path)?;
                let summary = generator.emit(&self.function, self.files.as_slice(), &mut file)?;
                file.commit()?;
                Ok(summary)
            }
            None => {
                let stdout = BufWriter::new(io::stdout().lock());
                generator.emit(&self.function, self.files.as_slice(), stdout)
            }
        }
    }
}

fn parse_identifier(s: &str) -> Result<String, String> {
    if is_c_identifier(s) {
        Ok(s.to_string())
    } else {
        Err(format!("'{s}' is not a valid C++ identifier"))
    }
}
