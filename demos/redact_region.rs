//! Fixed invocation of the redact-region operation against a local service.
//!
//! Expects `sample_file.pdf` in the working directory and a document-services
//! API on http://localhost:8080 (override via SECUREDOC_BASE_URL).

use dotenvy::dotenv;
use securedoc_client::models::{RedactRegion, RedactRegionOptions};
use securedoc_client::{ClientConfig, DocumentClient, PdfUpload};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let mut config = ClientConfig::from_env();
    config.title = Some("Redact region demo".to_string());
    config.subject = Some("Demo example".to_string());

    let client = DocumentClient::new(&config)?;
    let upload = PdfUpload::from_path("sample_file.pdf", config.max_file_size).await?;

    let options = RedactRegionOptions {
        region: RedactRegion {
            x: 60,
            y: 270,
            width: 470,
            height: 200,
        },
        specific_pages: vec![1],
    };

    let bytes = client.redact_region(upload, &options).await?;
    tokio::fs::write("redacted_output.pdf", &bytes).await?;

    println!("PDF redacted successfully.");
    Ok(())
}
