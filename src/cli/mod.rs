use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::{EncryptOptions, PdfPermissions, RedactRegion, RedactRegionOptions};
use crate::services::document_client::{DocumentClient, PdfUpload};
use crate::utils::validation;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "securedoc",
    version,
    about = "Client for the PDF document-services API"
)]
pub struct Cli {
    /// Base URL of the document-services API
    #[arg(long, env = "SECUREDOC_BASE_URL")]
    pub base_url: Option<String>,

    /// Author stamped into the produced document
    #[arg(long)]
    pub author: Option<String>,

    /// Title stamped into the produced document
    #[arg(long)]
    pub title: Option<String>,

    /// Subject stamped into the produced document
    #[arg(long)]
    pub subject: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Only log warnings and errors
    #[arg(long, short)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Password-protect a PDF and set its reader permissions
    Encrypt {
        /// Input PDF path
        input: PathBuf,

        /// Output path for the processed document
        #[arg(short, long, default_value = "encrypted_output.pdf")]
        output: PathBuf,

        /// Owner password (full access)
        #[arg(long)]
        owner_password: String,

        /// User password (open access); defaults to the owner password
        #[arg(long)]
        user_password: Option<String>,

        /// Allow copying text and images out of the document
        #[arg(long)]
        allow_extracting_content: bool,

        /// Allow filling form fields
        #[arg(long)]
        allow_form_filling: bool,

        /// Allow adding annotations
        #[arg(long)]
        allow_annotations: bool,

        /// Allow printing
        #[arg(long)]
        allow_printing: bool,

        /// Allow modifying document content
        #[arg(long)]
        allow_modifications: bool,

        /// Ask the service to emit PDF/A
        #[arg(long)]
        pdfa: bool,

        /// Ask the service to emit PDF/UA
        #[arg(long)]
        pdfua: bool,
    },

    /// Black out a rectangular region on selected pages
    RedactRegion {
        /// Input PDF path
        input: PathBuf,

        /// Output path for the processed document
        #[arg(short, long, default_value = "redacted_output.pdf")]
        output: PathBuf,

        /// Region origin X in PDF user-space units
        #[arg(long)]
        x: u32,

        /// Region origin Y in PDF user-space units
        #[arg(long)]
        y: u32,

        /// Region width
        #[arg(long)]
        width: u32,

        /// Region height
        #[arg(long)]
        height: u32,

        /// 1-based page to redact; repeat for multiple pages, omit for all
        #[arg(long = "page", value_name = "PAGE")]
        pages: Vec<u32>,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(author) = cli.author {
        config.author = author;
    }
    if let Some(title) = cli.title {
        config.title = Some(title);
    }
    if let Some(subject) = cli.subject {
        config.subject = Some(subject);
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.request_timeout_secs = timeout_secs;
    }

    let client = DocumentClient::new(&config)?;

    match cli.command {
        Commands::Encrypt {
            input,
            output,
            owner_password,
            user_password,
            allow_extracting_content,
            allow_form_filling,
            allow_annotations,
            allow_printing,
            allow_modifications,
            pdfa,
            pdfua,
        } => {
            let options = EncryptOptions {
                permissions: PdfPermissions {
                    allow_extracting_content,
                    allow_form_filling,
                    allow_annotations,
                    allow_printing,
                    allow_modifications,
                },
                new_user_password: user_password.unwrap_or_else(|| owner_password.clone()),
                new_owner_password: owner_password,
                save_as_pdfa: pdfa,
                save_as_pdfua: pdfua,
            };
            run_encrypt(&client, &config, &input, &output, &options).await
        }

        Commands::RedactRegion {
            input,
            output,
            x,
            y,
            width,
            height,
            pages,
        } => {
            let options = RedactRegionOptions {
                region: RedactRegion {
                    x,
                    y,
                    width,
                    height,
                },
                specific_pages: pages,
            };
            run_redact_region(&client, &config, &input, &output, &options).await
        }
    }
}

async fn run_encrypt(
    client: &DocumentClient,
    config: &ClientConfig,
    input: &Path,
    output: &Path,
    options: &EncryptOptions,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let upload = load_upload(input, config).await?;

    info!(
        "🔐 Encrypting {} ({} bytes)",
        upload.filename,
        upload.bytes.len()
    );

    let bytes = client.encrypt(upload, options).await?;
    write_output(output, &bytes).await?;

    info!(
        "✅ Wrote {} ({} bytes) in {:.2?}",
        output.display(),
        bytes.len(),
        started.elapsed()
    );
    Ok(())
}

async fn run_redact_region(
    client: &DocumentClient,
    config: &ClientConfig,
    input: &Path,
    output: &Path,
    options: &RedactRegionOptions,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let upload = load_upload(input, config).await?;

    if options.specific_pages.is_empty() {
        info!(
            "⬛ Redacting {}x{} region at ({}, {}) on every page of {}",
            options.region.width,
            options.region.height,
            options.region.x,
            options.region.y,
            upload.filename
        );
    } else {
        info!(
            "⬛ Redacting {}x{} region at ({}, {}) on pages {:?} of {}",
            options.region.width,
            options.region.height,
            options.region.x,
            options.region.y,
            options.specific_pages,
            upload.filename
        );
    }

    let bytes = client.redact_region(upload, options).await?;
    write_output(output, &bytes).await?;

    info!(
        "✅ Wrote {} ({} bytes) in {:.2?}",
        output.display(),
        bytes.len(),
        started.elapsed()
    );
    Ok(())
}

async fn load_upload(input: &Path, config: &ClientConfig) -> Result<PdfUpload, ClientError> {
    PdfUpload::from_path(input, config.max_file_size).await
}

async fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    // The server owns the output format; a non-PDF body is saved as-is.
    if !bytes.starts_with(validation::PDF_MAGIC) {
        warn!("Response body does not start with '%PDF-', saving it unchanged");
    }

    tokio::fs::write(path, bytes)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
