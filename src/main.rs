use tracing_subscriber::EnvFilter;

use assembly_stats::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse_or_exit();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("assembly_stats=debug,info")
    } else {
        EnvFilter::new("assembly_stats=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Denovo(args) => {
            cli::denovo::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Mapped(args) => {
            cli::mapped::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
