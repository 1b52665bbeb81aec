pub mod document_client;
