mod cli;

use cli::Args;
use spdx_url_resolver::adapters::outbound::package_sources::{
    JsonPackageListReader, UrlListProvider,
};
use spdx_url_resolver::application::dto::PackageLicenseReport;
use spdx_url_resolver::application::factories::ResolverFactory;
use spdx_url_resolver::application::use_cases::{LicenseResolver, ResolvePackageLicensesUseCase};
use spdx_url_resolver::config::{self, ResolverConfig};
use spdx_url_resolver::ports::outbound::PackageMetadataProvider;
use spdx_url_resolver::shared::Result;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse_args();
    init_tracing(args.log_level());

    let config = load_config(&args)?;

    if args.urls.is_empty() && args.packages.is_none() && !args.refresh {
        anyhow::bail!(
            "Nothing to resolve\n\n💡 Hint: Pass one or more URLs, or a package list with --packages <FILE>."
        );
    }

    let resolver = ResolverFactory::create(&config)?;

    if args.refresh {
        let count = resolver.refresh().await;
        eprintln!("📥 License catalog holds {} licenses", count);
    }

    let reports = match args.packages {
        Some(path) => execute(JsonPackageListReader::new(path), resolver, args.concurrency).await?,
        None => execute(UrlListProvider::new(args.urls), resolver, args.concurrency).await?,
    };

    for report in &reports {
        println!("{}", report.to_tsv_line());
    }

    Ok(())
}

async fn execute<P: PackageMetadataProvider>(
    provider: P,
    resolver: LicenseResolver,
    concurrency: usize,
) -> Result<Vec<PackageLicenseReport>> {
    ResolvePackageLicensesUseCase::new(provider, resolver)
        .with_concurrency(concurrency)
        .execute()
        .await
}

/// Merges defaults, the config file and GitHub credentials from the environment
fn load_config(args: &Args) -> Result<ResolverConfig> {
    let file = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };

    let mut resolver_config = ResolverConfig::default();
    if let Some(file) = &file {
        resolver_config = resolver_config.merge_file(file);
    }

    if resolver_config.github_client_id.is_none()
        && resolver_config.github_client_secret.is_none()
    {
        resolver_config = resolver_config.with_github_credentials(
            std::env::var("GITHUB_CLIENT_ID").ok(),
            std::env::var("GITHUB_CLIENT_SECRET").ok(),
        );
    }

    Ok(resolver_config)
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
