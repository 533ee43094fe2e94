pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::privacy::handlers as privacy_handlers;
use crate::screening::handlers as screening_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé parsing
        .route(
            "/api/v1/resumes/parse",
            post(screening_handlers::handle_parse_resume),
        )
        // Anonymized candidate records
        .route(
            "/api/v1/candidates",
            post(privacy_handlers::handle_store_candidate)
                .get(privacy_handlers::handle_list_candidates),
        )
        .route(
            "/api/v1/candidates/:id",
            get(privacy_handlers::handle_get_candidate),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::privacy::store::CandidateStore;
    use crate::screening::taxonomy::TechTaxonomy;

    /// Router backed by a throwaway candidate directory. The TempDir must
    /// stay alive for the duration of the test.
    fn test_app(tmp: &tempfile::TempDir) -> Router {
        let state = AppState {
            taxonomy: Arc::new(TechTaxonomy::default()),
            store: CandidateStore::new(tmp.path()).unwrap(),
        };
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn make_docx(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
            .collect();
        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><w:document><w:body>{body}</w:body></w:document>"#
        );

        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        writer
            .start_file(
                "word/document.xml",
                zip::write::SimpleFileOptions::default(),
            )
            .unwrap();
        writer.write_all(document.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    fn multipart_upload(filename: &str, bytes: &[u8]) -> Request<Body> {
        let boundary = "test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/parse")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let response = test_app(&tmp)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "talentscout-api");
    }

    #[tokio::test]
    async fn test_parse_docx_resume_end_to_end() {
        let tmp = tempfile::tempdir().unwrap();
        let docx = make_docx(&[
            "John Smith",
            "john.smith@example.com | 123-456-7890",
            "8+ years of experience with Python and React",
        ]);

        let response = test_app(&tmp)
            .oneshot(multipart_upload("resume.docx", &docx))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["profile"]["email"], "john.smith@example.com");
        assert_eq!(json["profile"]["phone"], "123-456-7890");
        assert_eq!(json["profile"]["years_experience"], 8);
        assert_eq!(json["tech_categories"]["languages"][0], "python");
        assert_eq!(json["tech_categories"]["frameworks"][0], "react");
        // The form still owes the fields no extractor produces.
        let missing: Vec<&str> = json["missing_fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(missing.contains(&"full_name"));
        assert!(missing.contains(&"desired_position"));
        assert!(missing.contains(&"current_location"));
    }

    #[tokio::test]
    async fn test_parse_rejects_unsupported_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let response = test_app(&tmp)
            .oneshot(multipart_upload("resume.txt", b"plain text resume"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_parse_unreadable_pdf_is_unprocessable() {
        let tmp = tempfile::tempdir().unwrap();
        let response = test_app(&tmp)
            .oneshot(multipart_upload("scan.pdf", b"not really a pdf"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "EXTRACTION_ERROR");
    }

    #[tokio::test]
    async fn test_store_candidate_persists_anonymized_record() {
        let tmp = tempfile::tempdir().unwrap();
        let app = test_app(&tmp);

        let payload = serde_json::json!({
            "full_name": "John Michael Smith",
            "email": "john@example.com",
            "phone": "123-456-7890",
            "years_experience": 5,
            "desired_position": "Backend Engineer",
            "current_location": "Berlin, Germany",
            "tech_stack": ["Python", "react"]
        });
        let response = app
            .clone()
            .oneshot(
                Request::post("/api/v1/candidates")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = body_json(response).await;
        let id = created["candidate_id"].as_str().unwrap().to_string();
        assert!(id.starts_with("CAND_"));

        // The record reads back anonymized, with quasi-identifiers intact.
        let response = app
            .oneshot(
                Request::get(format!("/api/v1/candidates/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let record = body_json(response).await;
        assert_eq!(record["candidate_id"], id.as_str());
        assert_ne!(record["email"], "john@example.com");
        assert!(record["email"].as_str().unwrap().ends_with("@example.com"));
        assert_eq!(record["years_experience"], 5);
        assert_eq!(record["tech_stack"][0], "python");
        assert_eq!(record["tech_stack"][1], "react");
    }

    #[tokio::test]
    async fn test_get_missing_candidate_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let response = test_app(&tmp)
            .oneshot(
                Request::get("/api/v1/candidates/CAND_nope_1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_candidates_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let app = test_app(&tmp);

        let response = app
            .clone()
            .oneshot(
                Request::post("/api/v1/candidates")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"email": "list@example.com"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let id = body_json(response).await["candidate_id"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .oneshot(Request::get("/api/v1/candidates").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let ids = body_json(response).await;
        assert_eq!(ids, serde_json::json!([id]));
    }
}
