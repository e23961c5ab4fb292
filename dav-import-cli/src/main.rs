mod config;
mod file;
mod http_client;
mod telemetry;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use domain_dav_import::service::DavImportService;
use service_dav_import::{DavImportClientImpl, EsnFileUploadServiceImpl};

use crate::config::DavImportConfig;

/// Upload a file to ESN and import it into a dav collection.
#[derive(Parser, Debug)]
#[command(name = "dav-import", version)]
struct Args {
    /// Local file to upload.
    file: PathBuf,
    /// Destination the backend imports into, e.g. `/addressbooks/<user>/contacts.json`.
    target: String,
    /// Configuration file (yaml), optional.
    #[arg(long, env = "DAV_IMPORT_CONFIG", default_value = "config.yaml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = DavImportConfig::load(&args.config)
        .with_context(|| format!("Failed to load configuration from {}", args.config))?;
    telemetry::initialize_telemetry(config.telemetry())?;

    let http_client = http_client::new(config.http_client())?;
    let upload_file = EsnFileUploadServiceImpl::builder()
        .http_client(http_client.clone())
        .base_url(config.base_url())
        .build();
    let client = DavImportClientImpl::from_base_url(
        Some(Arc::new(upload_file)),
        config.base_url(),
        http_client,
    )?;

    let file = file::load_upload_file(&args.file).await?;
    let name = file.name.clone();
    client.import_from_file(file, &args.target).await?;
    tracing::info!("Imported {name} into {}", args.target);
    Ok(())
}
