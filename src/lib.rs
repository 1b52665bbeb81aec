pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::ClientConfig;
pub use error::ClientError;
pub use services::document_client::{DocumentClient, PdfUpload};
