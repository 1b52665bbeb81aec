use crate::models::RedactRegion;

/// Maximum upload size: 256 MB
pub const MAX_PDF_SIZE: usize = 256 * 1024 * 1024; // 256 MB

/// Magic byte prefix every PDF starts with
pub const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub code: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates upload size against the configured limit
pub fn validate_file_size(size: usize, max_size: usize) -> Result<(), ValidationError> {
    if size > max_size {
        return Err(ValidationError {
            code: "FILE_TOO_LARGE",
            message: format!(
                "File size {} bytes exceeds maximum allowed {} bytes ({} MB)",
                size,
                max_size,
                max_size / 1024 / 1024
            ),
        });
    }
    Ok(())
}

/// Checks magic bytes to verify the payload is actually a PDF
pub fn verify_pdf_magic(header: &[u8]) -> Result<(), ValidationError> {
    if header.is_empty() {
        return Err(ValidationError {
            code: "EMPTY_FILE",
            message: "File appears to be empty".to_string(),
        });
    }

    if header.starts_with(PDF_MAGIC) {
        return Ok(());
    }

    let sniffed = infer::get(header)
        .map(|kind| kind.mime_type())
        .unwrap_or("unknown");

    if sniffed == "application/pdf" {
        return Ok(());
    }

    Err(ValidationError {
        code: "NOT_A_PDF",
        message: format!(
            "File does not start with '%PDF-' (detected type: {})",
            sniffed
        ),
    })
}

/// Rejects degenerate redaction rectangles
pub fn validate_region(region: &RedactRegion) -> Result<(), ValidationError> {
    if region.width == 0 || region.height == 0 {
        return Err(ValidationError {
            code: "EMPTY_REGION",
            message: format!(
                "Redaction region must have non-zero area, got {}x{}",
                region.width, region.height
            ),
        });
    }
    Ok(())
}

/// Page numbers are 1-based; zero is always a caller mistake
pub fn validate_pages(pages: &[u32]) -> Result<(), ValidationError> {
    if pages.contains(&0) {
        return Err(ValidationError {
            code: "INVALID_PAGE",
            message: "Page numbers are 1-based; page 0 does not exist".to_string(),
        });
    }
    Ok(())
}

/// The service treats an empty password as "no password"; catching it here
/// surfaces the mistake before an unprotected document is produced.
pub fn validate_passwords(owner: &str, user: &str) -> Result<(), ValidationError> {
    if owner.is_empty() || user.is_empty() {
        return Err(ValidationError {
            code: "EMPTY_PASSWORD",
            message: "Owner and user passwords must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Full pre-flight pipeline for a PDF upload
pub fn validate_pdf_upload(
    filename: &str,
    size: usize,
    header: &[u8],
    max_size: usize,
) -> Result<(), ValidationError> {
    validate_file_size(size, max_size).map_err(|e| ValidationError {
        code: e.code,
        message: format!("{}: {}", filename, e.message),
    })?;

    verify_pdf_magic(header).map_err(|e| ValidationError {
        code: e.code,
        message: format!("{}: {}", filename, e.message),
    })?;

    Ok(())
}
