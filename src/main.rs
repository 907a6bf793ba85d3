use anyhow::{Context, Result};
use commit_pages::Config;
use commit_pages::server::{self, ServerState};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if config.serve {
        let state = ServerState::new(config.repo.clone(), config.output_dir());
        let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
        return runtime.block_on(server::serve(state, config.port));
    }

    let output_dir = config.output_dir();
    let report = commit_pages::export(&config.repo, &output_dir)
        .with_context(|| format!("Failed to export commits of {}", config.repo.display()))?;

    print!("{}", report.log());
    println!(
        "Exported {} commits to {}",
        report.files_written(),
        output_dir.display()
    );

    if config.open {
        match report.files().last() {
            Some(newest) => {
                open::that(newest)
                    .with_context(|| format!("Failed to open {}", newest.display()))?;
            }
            None => eprintln!("Warning: No commits exported, nothing to open"),
        }
    }

    Ok(())
}
