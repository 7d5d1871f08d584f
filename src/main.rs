use std::path::PathBuf;

use clap::Parser;

use swc_versions::config::Config;
use swc_versions::logging::init_logging;
use swc_versions::manifest::ManifestExtractor;
use swc_versions::source::HttpSource;
use swc_versions::update::update_manifest;

#[derive(Parser)]
#[command(name = "swc-versions")]
#[command(version, about = "Regenerate the swc plugin version compatibility manifest")]
struct Cli {
    /// URL of the compatibility document
    #[arg(long)]
    url: Option<String>,

    /// Path the manifest is written to
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON config file (`sourceUrl`, `outputPath`)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_json);

    let config = match cli.config.as_deref() {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    }
    .with_overrides(cli.url, cli.output);

    let source = HttpSource::new(&config.source_url)?;
    let extractor = ManifestExtractor::new();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(update_manifest(&source, &extractor, &config.output_path))?;

    Ok(())
}
