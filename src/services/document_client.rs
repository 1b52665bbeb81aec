use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::models::{DocumentMetadata, EncryptOptions, RedactRegionOptions};
use crate::utils::validation;
use bytes::Bytes;
use reqwest::header;
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

const ENCRYPT_PATH: &str = "/v1/document-services/pdfs/encrypt";
const REDACT_REGION_PATH: &str = "/v1/document-services/pdfs/redact-region";

/// A PDF payload held in memory, ready for upload.
#[derive(Debug, Clone)]
pub struct PdfUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl PdfUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Read a PDF from disk and run the pre-flight checks.
    pub async fn from_path(
        path: impl AsRef<Path>,
        max_size: usize,
    ) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.pdf")
            .to_string();

        validation::validate_pdf_upload(&filename, bytes.len(), &bytes, max_size)?;

        Ok(Self { filename, bytes })
    }
}

/// Client for the PDF document-services API.
///
/// One HTTP request per operation; the processed document comes back as the
/// raw response body and is returned untouched.
#[derive(Debug)]
pub struct DocumentClient {
    http: reqwest::Client,
    base_url: String,
    metadata: DocumentMetadata,
}

impl DocumentClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base = Url::parse(&config.base_url)?;

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("securedoc-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base.as_str().trim_end_matches('/').to_string(),
            metadata: config.document_metadata(),
        })
    }

    /// Password-protect a PDF and set its reader permissions.
    pub async fn encrypt(
        &self,
        upload: PdfUpload,
        options: &EncryptOptions,
    ) -> Result<Bytes, ClientError> {
        validation::validate_passwords(&options.new_owner_password, &options.new_user_password)?;

        self.post_pdf_operation(ENCRYPT_PATH, upload, options.form_fields())
            .await
    }

    /// Black out a rectangular region on the selected pages.
    pub async fn redact_region(
        &self,
        upload: PdfUpload,
        options: &RedactRegionOptions,
    ) -> Result<Bytes, ClientError> {
        validation::validate_region(&options.region)?;
        validation::validate_pages(&options.specific_pages)?;

        self.post_pdf_operation(REDACT_REGION_PATH, upload, options.form_fields())
            .await
    }

    /// Shared request path: multipart POST with the `pdf_file` part plus one
    /// text part per form field, metadata attached as headers.
    async fn post_pdf_operation(
        &self,
        path: &str,
        upload: PdfUpload,
        fields: Vec<(&'static str, String)>,
    ) -> Result<Bytes, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let upload_size = upload.bytes.len();

        let file_part = Part::bytes(upload.bytes)
            .file_name(upload.filename.clone())
            .mime_str(mime::APPLICATION_PDF.as_ref())?;

        let mut form = Form::new().part("pdf_file", file_part);
        for (name, value) in fields {
            form = form.text(name, value);
        }

        let mut request = self
            .http
            .post(&url)
            .header(header::ACCEPT, "*/*")
            .header("author", self.metadata.author.as_str());

        if let Some(title) = &self.metadata.title {
            request = request.header("title", title.as_str());
        }
        if let Some(subject) = &self.metadata.subject {
            request = request.header("subject", subject.as_str());
        }

        debug!(%url, filename = %upload.filename, upload_size, "Sending document operation");

        let response = request.multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable response body>".to_string());
            return Err(ClientError::from_api_response(status, &body));
        }

        let bytes = response.bytes().await?;
        info!(
            %url,
            upload_size,
            response_size = bytes.len(),
            "Document operation completed"
        );

        Ok(bytes)
    }
}
