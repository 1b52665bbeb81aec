use axum::Router;
use axum::extract::{Multipart, State};
use axum::routing::post;
use securedoc_client::models::{RedactRegion, RedactRegionOptions};
use securedoc_client::{ClientConfig, DocumentClient, PdfUpload};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

const REDACTED_MARKER: &[u8] = b"%PDF-1.7\n% redacted by stub\n";

#[derive(Default)]
struct CapturedRequest {
    fields: Vec<(String, String)>,
    file_name: Option<String>,
}

type Captured = Arc<Mutex<Option<CapturedRequest>>>;

async fn redact_handler(
    State(captured): State<Captured>,
    mut multipart: Multipart,
) -> Vec<u8> {
    let mut request = CapturedRequest::default();

    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap().to_string();
        if name == "pdf_file" {
            request.file_name = field.file_name().map(|s| s.to_string());
            field.bytes().await.unwrap();
        } else {
            let value = field.text().await.unwrap();
            request.fields.push((name, value));
        }
    }

    *captured.lock().unwrap() = Some(request);
    REDACTED_MARKER.to_vec()
}

async fn start_stub() -> (SocketAddr, Captured) {
    let captured: Captured = Arc::new(Mutex::new(None));
    let app = Router::new()
        .route(
            "/v1/document-services/pdfs/redact-region",
            post(redact_handler),
        )
        .with_state(captured.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, captured)
}

fn sample_region() -> RedactRegion {
    RedactRegion {
        x: 60,
        y: 270,
        width: 470,
        height: 200,
    }
}

#[tokio::test]
async fn test_redact_region_round_trip() {
    let (addr, captured) = start_stub().await;

    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("sample_file.pdf");
    std::fs::write(&input_path, b"%PDF-1.4\npage content\n").unwrap();

    let config = ClientConfig {
        base_url: format!("http://{}", addr),
        ..ClientConfig::default()
    };
    let client = DocumentClient::new(&config).unwrap();

    let upload = PdfUpload::from_path(&input_path, config.max_file_size)
        .await
        .unwrap();
    let options = RedactRegionOptions {
        region: sample_region(),
        specific_pages: vec![1, 3],
    };

    let bytes = client.redact_region(upload, &options).await.unwrap();
    assert_eq!(bytes.as_ref(), REDACTED_MARKER);

    let output_path = dir.path().join("redacted_output.pdf");
    std::fs::write(&output_path, &bytes).unwrap();
    assert_eq!(std::fs::read(&output_path).unwrap(), REDACTED_MARKER);

    let captured = captured.lock().unwrap();
    let request = captured.as_ref().expect("stub never saw the request");

    assert_eq!(request.file_name.as_deref(), Some("sample_file.pdf"));

    let field = |name: &str| -> Vec<&str> {
        request
            .fields
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    };
    assert_eq!(field("region_to_redact_x"), ["60"]);
    assert_eq!(field("region_to_redact_y"), ["270"]);
    assert_eq!(field("region_to_redact_w"), ["470"]);
    assert_eq!(field("region_to_redact_h"), ["200"]);

    // One repeated field per page, in order
    assert_eq!(field("specific_pages"), ["1", "3"]);
    assert_eq!(request.fields.len(), 6);
}

#[tokio::test]
async fn test_redact_whole_document_sends_no_page_fields() {
    let (addr, captured) = start_stub().await;

    let config = ClientConfig {
        base_url: format!("http://{}", addr),
        ..ClientConfig::default()
    };
    let client = DocumentClient::new(&config).unwrap();

    let upload = PdfUpload::new("sample_file.pdf", b"%PDF-1.4\n".to_vec());
    let options = RedactRegionOptions {
        region: sample_region(),
        specific_pages: vec![],
    };

    client.redact_region(upload, &options).await.unwrap();

    let captured = captured.lock().unwrap();
    let request = captured.as_ref().expect("stub never saw the request");

    assert!(
        request
            .fields
            .iter()
            .all(|(name, _)| name != "specific_pages")
    );
    assert_eq!(request.fields.len(), 4);
}
