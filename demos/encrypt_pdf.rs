//! Fixed invocation of the encrypt operation against a local service.
//!
//! Expects `sample.pdf` in the working directory and a document-services
//! API on http://localhost:8080 (override via SECUREDOC_BASE_URL).

use dotenvy::dotenv;
use securedoc_client::models::{EncryptOptions, PdfPermissions};
use securedoc_client::{ClientConfig, DocumentClient, PdfUpload};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let mut config = ClientConfig::from_env();
    config.title = Some("Encryption demo".to_string());
    config.subject = Some("Demo example".to_string());

    let client = DocumentClient::new(&config)?;
    let upload = PdfUpload::from_path("sample.pdf", config.max_file_size).await?;

    let options = EncryptOptions {
        permissions: PdfPermissions::default(),
        new_owner_password: "p4ssw0rd".to_string(),
        new_user_password: "p4ssw0rd".to_string(),
        save_as_pdfa: false,
        save_as_pdfua: false,
    };

    let bytes = client.encrypt(upload, &options).await?;
    tokio::fs::write("encrypted_output.pdf", &bytes).await?;

    println!("PDF encrypted successfully.");
    Ok(())
}
