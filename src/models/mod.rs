use serde::{Deserialize, Serialize};

/// Document metadata attached to every request as plain HTTP headers.
///
/// The service stamps these into the produced document; `title` and
/// `subject` headers are omitted entirely when unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub author: String,
    pub title: Option<String>,
    pub subject: Option<String>,
}

/// Reader permissions embedded in an encrypted PDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfPermissions {
    pub allow_extracting_content: bool,
    pub allow_form_filling: bool,
    pub allow_annotations: bool,
    pub allow_printing: bool,
    pub allow_modifications: bool,
}

impl Default for PdfPermissions {
    fn default() -> Self {
        Self {
            allow_extracting_content: false,
            allow_form_filling: true,
            allow_annotations: true,
            allow_printing: false,
            allow_modifications: false,
        }
    }
}

/// Parameters for the encrypt operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptOptions {
    pub permissions: PdfPermissions,
    pub new_owner_password: String,
    pub new_user_password: String,
    pub save_as_pdfa: bool,
    pub save_as_pdfua: bool,
}

impl EncryptOptions {
    /// Flatten into the wire form fields, in order.
    ///
    /// Field names here ARE the wire protocol; renaming one is a breaking
    /// change against the service.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let p = &self.permissions;
        vec![
            ("allow_extracting_content", p.allow_extracting_content.to_string()),
            ("allow_form_filling", p.allow_form_filling.to_string()),
            ("allow_annotations", p.allow_annotations.to_string()),
            ("allow_printing", p.allow_printing.to_string()),
            ("allow_modifications", p.allow_modifications.to_string()),
            ("new_owner_password", self.new_owner_password.clone()),
            ("new_user_password", self.new_user_password.clone()),
            ("save_as_pdfa", self.save_as_pdfa.to_string()),
            ("save_as_pdfua", self.save_as_pdfua.to_string()),
        ]
    }
}

/// Rectangular region in PDF user-space coordinates, origin top-left.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RedactRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Parameters for the redact-region operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactRegionOptions {
    pub region: RedactRegion,
    /// 1-based page numbers. Empty means every page.
    pub specific_pages: Vec<u32>,
}

impl RedactRegionOptions {
    /// Flatten into the wire form fields, in order.
    ///
    /// Page numbers go over the wire as one repeated `specific_pages` field
    /// per page; an empty list sends no `specific_pages` field at all.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("region_to_redact_x", self.region.x.to_string()),
            ("region_to_redact_y", self.region.y.to_string()),
            ("region_to_redact_w", self.region.width.to_string()),
            ("region_to_redact_h", self.region.height.to_string()),
        ];
        for page in &self.specific_pages {
            fields.push(("specific_pages", page.to_string()));
        }
        fields
    }
}
