use libris::catalog::{BookSource, CatalogError, CoverError, OpenLibraryClient, covers};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

fn client_for(server: &MockServer) -> OpenLibraryClient {
    OpenLibraryClient::new(Some(server.uri()), Some(server.uri()))
}

/// A minimal but valid PNG header reporting the given dimensions.
fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = vec![0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];
    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
    bytes
}

const SEARCH_BODY: &str = r#"{
    "numFound": 2,
    "docs": [
        {
            "key": "/works/OL27448W",
            "title": "The Lord of the Rings",
            "cover_edition_key": "OL21058613M",
            "author_name": ["J.R.R. Tolkien"],
            "language": ["eng"],
            "first_publish_year": 1954,
            "ratings_average": 4.46,
            "ratings_count": 1234,
            "number_of_pages_median": 1193,
            "edition_count": 120
        },
        {
            "key": "/works/OL27479W",
            "title": "The Hobbit",
            "cover_i": 14625765,
            "author_name": ["J.R.R. Tolkien"],
            "edition_count": 80
        }
    ]
}"#;

// ============================================================================
// Search Tests
// ============================================================================

#[tokio::test]
async fn test_search_maps_documents_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", "tolkien"))
        .and(query_param("limit", "5"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(SEARCH_BODY, "application/json"),
        )
        .mount(&mock_server)
        .await;

    let books = client_for(&mock_server)
        .search_books("tolkien", 5)
        .await
        .expect("search succeeds");

    assert_eq!(books.len(), 2);

    assert_eq!(books[0].id, "OL27448W");
    assert_eq!(books[0].title, "The Lord of the Rings");
    assert_eq!(
        books[0].image_url,
        format!("{}/b/olid/OL21058613M-L.jpg", mock_server.uri())
    );
    assert_eq!(books[0].first_published_year.as_deref(), Some("1954"));
    assert_eq!(books[0].average_rating, Some(4.46));
    assert_eq!(books[0].num_pages, Some(1193));
    assert_eq!(books[0].num_editions, 120);

    assert_eq!(books[1].id, "OL27479W");
    assert_eq!(
        books[1].image_url,
        format!("{}/b/id/14625765-L.jpg", mock_server.uri())
    );
    assert!(books[1].languages.is_empty());
    assert_eq!(books[1].average_rating, None);
}

#[tokio::test]
async fn test_search_with_no_hits_returns_an_empty_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"docs": []}"#, "application/json"),
        )
        .mount(&mock_server)
        .await;

    let books = client_for(&mock_server)
        .search_books("nothing matches this", 25)
        .await
        .expect("empty result is still a success");
    assert!(books.is_empty());
}

#[tokio::test]
async fn test_search_api_error_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).search_books("tolkien", 25).await;

    match result {
        Err(CatalogError::Api { status, message }) => {
            assert_eq!(status, 503);
            assert_eq!(message, "upstream down");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_search_malformed_body_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("not json at all", "application/json"),
        )
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).search_books("tolkien", 25).await;
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[tokio::test]
async fn test_search_network_error_when_nothing_listens() {
    // A server that was dropped no longer accepts connections.
    let uri = {
        let mock_server = MockServer::start().await;
        mock_server.uri()
    };

    let client = OpenLibraryClient::new(Some(uri.clone()), Some(uri));
    let result = client.search_books("tolkien", 25).await;
    assert!(matches!(result, Err(CatalogError::Network(_))));
}

// ============================================================================
// Cover Tests
// ============================================================================

#[tokio::test]
async fn test_cover_fetch_reports_dimensions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/b/id/1-L.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes(300, 450)))
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/b/id/1-L.jpg", mock_server.uri());
    let art = covers::fetch_cover(&client, &url).await.expect("cover loads");
    assert_eq!((art.width, art.height), (300, 450));
}

#[tokio::test]
async fn test_cover_placeholder_pixel_is_an_invalid_size() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/b/id/2-L.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes(1, 1)))
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/b/id/2-L.jpg", mock_server.uri());
    let result = covers::fetch_cover(&client, &url).await;
    assert_eq!(result, Err(CoverError::InvalidImageSize));
}

#[tokio::test]
async fn test_cover_http_failure_is_a_load_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/b/id/3-L.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/b/id/3-L.jpg", mock_server.uri());
    let result = covers::fetch_cover(&client, &url).await;
    assert!(matches!(result, Err(CoverError::LoadFailed(_))));
}

#[tokio::test]
async fn test_cover_unrecognized_bytes_are_a_load_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/b/id/4-L.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"<html>not an image</html>".to_vec()))
        .mount(&mock_server)
        .await;

    let client = reqwest::Client::new();
    let url = format!("{}/b/id/4-L.jpg", mock_server.uri());
    let result = covers::fetch_cover(&client, &url).await;
    assert!(matches!(result, Err(CoverError::LoadFailed(_))));
}

#[tokio::test]
async fn test_cover_without_a_url_fails_without_a_request() {
    let client = reqwest::Client::new();
    let result = covers::fetch_cover(&client, "").await;
    assert!(matches!(result, Err(CoverError::LoadFailed(_))));
}

// ============================================================================
// Source Trait Tests
// ============================================================================

#[tokio::test]
async fn test_client_names_its_backend() {
    let client = OpenLibraryClient::new(None, None);
    assert_eq!(client.name(), "openlibrary");
}
