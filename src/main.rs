use clap::Parser;
use game24_client::utils::{logger, validation::Validate};
use game24_client::{CliConfig, SolverClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting game24-client");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let base = config.endpoint_base();
    tracing::info!("Resolved endpoint base: {}", base.as_str());

    let client = SolverClient::new(base);
    let solutions = client.solve(&config.numbers).await;

    if solutions.is_empty() {
        println!("No solutions for '{}'", config.numbers.trim());
    } else {
        tracing::info!("✅ Fetched {} solutions", solutions.len());
        for solution in &solutions {
            println!("{}", solution);
        }
    }

    Ok(())
}
