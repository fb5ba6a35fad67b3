mod cmd;

use clap::Parser;
use cmd::config::{DemoArgs, Effective};

#[derive(Parser)]
#[command(name = "recordkit-demo", about = "Immutable record builder showcase")]
struct Cli {
    #[command(flatten)]
    args: DemoArgs,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    tracing::debug!(config = %cli.args.config, "loading configuration");
    let eff = match Effective::new(&cli.args) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!(error = %e, "failed to load configuration");
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    if let Err(e) = cmd::showcase::run(&eff, &mut stdout.lock()) {
        tracing::error!(error = %e, "showcase failed");
        std::process::exit(1);
    }
}
