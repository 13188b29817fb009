//! HumoticaOS CLI
//!
//! Prints the protocol stack and reports whether the optional TIBET server is
//! installed.
//!
//! # Environment Variables
//!
//! - `HUMOTICA_LOG`: logging level (trace, debug, info, warn, error)

#[cfg(feature = "cli")]
mod cli {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::{Parser, Subcommand};

    use humotica::settings::default_config_path;
    use humotica::{FacadeConfig, Humotica, StackSnapshot};

    #[derive(Parser)]
    #[command(name = "humotica")]
    #[command(about = "HumoticaOS protocol stack")]
    #[command(version)]
    struct Cli {
        /// JSON configuration file (defaults to the platform config dir)
        #[arg(long, global = true)]
        config: Option<PathBuf>,

        #[command(subcommand)]
        command: Option<Commands>,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// Print the protocol stack
        Info {
            /// Emit a JSON snapshot instead of the text report
            #[arg(long)]
            json: bool,
        },
        /// Report whether the TIBET server is installed
        Probe,
    }

    pub fn run() -> Result<()> {
        humotica::init_tracing();
        let cli = Cli::parse();

        match cli.command.unwrap_or(Commands::Info { json: false }) {
            Commands::Info { json: false } => {
                humotica::info().context("failed to write stack report")?;
            }
            Commands::Info { json: true } => {
                let facade = init_facade(cli.config)?;
                println!("{}", render_json(&facade.snapshot())?);
            }
            Commands::Probe => {
                let facade = init_facade(cli.config)?;
                print!("{}", facade.tibet_status());
            }
        }

        Ok(())
    }

    fn render_json(snapshot: &StackSnapshot<'_>) -> Result<String> {
        serde_json::to_string_pretty(snapshot).context("failed to serialize stack snapshot")
    }

    fn init_facade(config: Option<PathBuf>) -> Result<Humotica> {
        let config = match config.or_else(default_config_path) {
            Some(path) => FacadeConfig::load(&path)
                .with_context(|| format!("failed to load config `{}`", path.display()))?,
            None => FacadeConfig::default(),
        };
        Humotica::init(&config).context("failed to resolve TIBET")
    }

}

#[cfg(feature = "cli")]
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("[humotica] {err:?}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("[humotica] Build with `--features cli` to enable the command-line interface.");
    std::process::exit(1);
}
