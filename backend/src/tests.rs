#[cfg(test)]
mod tests {
    use rocket::http::{ContentType, Header, Status};
    use rocket::local::blocking::Client;
    use serde_json::{json, Value};
    use time::{Duration, OffsetDateTime};
    use uuid::Uuid;
    use shared::{document::sample_document, models::*};

    use crate::{
        build_rocket,
        config::ServerConfig,
        error::ApiError,
        feedback::FeedbackAdapter,
        routes::AppState,
        store::{SessionStore, DEFAULT_IDLE_MINUTES},
        utils::load_results,
    };

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("backend=debug")
            .with_test_writer()
            .try_init();
    }

    fn client() -> Client {
        init_tracing();
        let state = AppState::new(Some(sample_document().unwrap()), DEFAULT_IDLE_MINUTES);
        Client::tracked(build_rocket(state)).expect("valid rocket instance")
    }

    fn new_session(client: &Client) -> String {
        let response = client.post("/api/session").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let created: SessionCreated = response.into_json().unwrap();
        created.session_id.to_string()
    }

    fn vote(client: &Client, session: &str, kind: &str, id: &str, direction: &str) -> (Status, Value) {
        let response = client.post(format!("/api/session/{}/feedback", session))
            .header(ContentType::JSON)
            .body(json!({ "kind": kind, "id": id, "direction": direction }).to_string())
            .dispatch();
        let status = response.status();
        (status, response.into_json().unwrap_or(Value::Null))
    }

    fn event(kind: &str, id: &str, direction: &str) -> VoteEvent {
        VoteEvent { kind: kind.into(), id: id.into(), direction: direction.into() }
    }

    #[test]
    fn test_sessions_are_isolated() {
        let sessions = SessionStore::default();
        let a = sessions.create().unwrap();
        let b = sessions.create().unwrap();
        let s3 = ItemRef::story("S3").unwrap();

        sessions.record_vote(a, s3.clone(), Direction::Up).unwrap();
        sessions.record_vote(a, s3.clone(), Direction::Up).unwrap();

        assert_eq!(sessions.snapshot(a, &s3).unwrap(), Some(TallySnapshot { up_count: 2, down_count: 0 }));
        assert_eq!(sessions.snapshot(b, &s3).unwrap(), None);
    }

    #[test]
    fn test_unknown_session() {
        let sessions = SessionStore::default();
        let missing = Uuid::new_v4();
        assert!(matches!(
            sessions.record_vote(missing, ItemRef::epic("E1").unwrap(), Direction::Down),
            Err(ApiError::SessionNotFound)
        ));
        assert!(matches!(sessions.end(missing), Err(ApiError::SessionNotFound)));
    }

    #[test]
    fn test_purge_idle_sessions() {
        let sessions = SessionStore::new(30);
        let stale = sessions.create().unwrap();
        let fresh = sessions.create().unwrap();
        let now = OffsetDateTime::now_utc();
        sessions.touch(stale, now - Duration::minutes(31));

        assert_eq!(sessions.purge_idle(now).unwrap(), 1);
        assert_eq!(sessions.len(), 1);
        assert!(sessions.summary(fresh).is_ok());
        assert!(matches!(sessions.summary(stale), Err(ApiError::SessionNotFound)));
    }

    #[test]
    fn test_adapter_rejects_without_mutation() {
        let sessions = SessionStore::default();
        let id = sessions.create().unwrap();

        for bad in [event("initiative", "I1", "up"), event("story", "", "up"), event("story", "S1", "meh")] {
            let err = FeedbackAdapter::on_vote_clicked(&sessions, id, &bad).unwrap_err();
            assert!(matches!(err, ApiError::Rejected(_)));
        }
        assert!(sessions.summary(id).unwrap().items.is_empty());

        let receipt = FeedbackAdapter::on_vote_clicked(&sessions, id, &event("feature", "F1", "up")).unwrap();
        assert_eq!(receipt.message, "Recorded up vote for feature F1");
    }

    #[test]
    fn test_config_from_lookup() {
        let config = ServerConfig::from_lookup(|key| match key {
            "RESULTS_PATH" => Some("/data/results.json".into()),
            "SESSION_IDLE_MINUTES" => Some("15".into()),
            _ => None,
        });
        assert_eq!(config.results_path.as_deref(), Some("/data/results.json"));
        assert_eq!(config.session_idle_minutes, 15);

        let fallback = ServerConfig::from_lookup(|key| (key == "SESSION_IDLE_MINUTES").then(|| "-4".to_string()));
        assert_eq!(fallback, ServerConfig::default());
    }

    #[test]
    fn test_load_results_falls_back_to_sample() {
        let doc = load_results(Some("/nonexistent/training_example_1.json")).unwrap();
        assert_eq!(doc, sample_document().unwrap());
        assert_eq!(load_results(None).unwrap().stats().stories, 6);
    }

    #[test]
    fn test_vote_scenario_over_http() {
        let client = client();
        let session = new_session(&client);

        vote(&client, &session, "story", "S3", "up");
        vote(&client, &session, "story", "S3", "up");
        let (status, receipt) = vote(&client, &session, "story", "S3", "down");

        assert_eq!(status, Status::Ok);
        assert_eq!(receipt["message"], "Recorded down vote for story S3");
        assert_eq!(receipt["tally"], json!({ "upCount": 2, "downCount": 1 }));
        assert_eq!(receipt["item"], json!({ "kind": "story", "id": "S3" }));

        let response = client.get(format!("/api/session/{}/feedback/story/S3", session)).dispatch();
        assert_eq!(response.into_json::<Value>().unwrap(), json!({ "upCount": 2, "downCount": 1 }));
    }

    #[test]
    fn test_snapshot_of_unseen_item_is_null() {
        let client = client();
        let session = new_session(&client);

        let response = client.get(format!("/api/session/{}/feedback/epic/E1", session)).dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.into_json::<Value>().unwrap(), Value::Null);

        let summary: SessionSummary = client.get(format!("/api/session/{}/feedback", session))
            .dispatch()
            .into_json()
            .unwrap();
        assert!(summary.items.is_empty());
    }

    #[test]
    fn test_invalid_votes_over_http() {
        let client = client();
        let session = new_session(&client);

        let (status, body) = vote(&client, &session, "story", "S1", "sideways");
        assert_eq!(status, Status::BadRequest);
        assert!(body["error"].as_str().unwrap().contains("sideways"));

        let (status, _) = vote(&client, &session, "chapter", "C1", "up");
        assert_eq!(status, Status::BadRequest);

        let response = client.get(format!("/api/session/{}/feedback/chapter/C1", session)).dispatch();
        assert_eq!(response.status(), Status::BadRequest);

        let summary: SessionSummary = client.get(format!("/api/session/{}/feedback", session))
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(summary.totals, TallySnapshot::default());
    }

    #[test]
    fn test_session_errors_over_http() {
        let client = client();

        let (status, _) = vote(&client, "not-a-uuid", "epic", "E1", "up");
        assert_eq!(status, Status::BadRequest);

        let (status, body) = vote(&client, &Uuid::new_v4().to_string(), "epic", "E1", "up");
        assert_eq!(status, Status::NotFound);
        assert_eq!(body["error"], "Session not found");

        let session = new_session(&client);
        assert_eq!(client.delete(format!("/api/session/{}", session)).dispatch().status(), Status::NoContent);
        let (status, _) = vote(&client, &session, "epic", "E1", "up");
        assert_eq!(status, Status::NotFound);
    }

    #[test]
    fn test_summary_lists_independent_items() {
        let client = client();
        let session = new_session(&client);

        vote(&client, &session, "epic", "E1", "up");
        vote(&client, &session, "feature", "F1", "down");
        vote(&client, &session, "feature", "F1", "down");

        let summary: SessionSummary = client.get(format!("/api/session/{}/feedback", session))
            .dispatch()
            .into_json()
            .unwrap();
        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.items[0].item, ItemRef::epic("E1").unwrap());
        assert_eq!(summary.items[0].tally, TallySnapshot { up_count: 1, down_count: 0 });
        assert_eq!(summary.items[1].tally, TallySnapshot { up_count: 0, down_count: 2 });
        assert_eq!(summary.totals, TallySnapshot { up_count: 1, down_count: 2 });
    }

    #[test]
    fn test_results_document_endpoint() {
        let client = client();
        let response = client.get("/api/results").dispatch();
        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().unwrap();
        assert_eq!(body["epic"]["title"], "Online Storefront");
        assert_eq!(body["features"].as_array().unwrap().len(), 3);

        let empty = Client::tracked(build_rocket(AppState::new(None, DEFAULT_IDLE_MINUTES))).unwrap();
        assert_eq!(empty.get("/api/results").dispatch().status(), Status::ServiceUnavailable);
    }

    #[test]
    fn test_preflight_and_cors_headers() {
        let client = client();

        let response = client.options("/api/session/abc/feedback")
            .header(Header::new("Origin", "http://localhost:8080"))
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        let headers = response.headers();
        assert_eq!(headers.get_one("Access-Control-Allow-Origin"), Some("http://localhost:8080"));
        assert_eq!(headers.get_one("Access-Control-Allow-Methods"), Some("POST, GET, DELETE, OPTIONS"));

        let response = client.get("/api/results")
            .header(Header::new("Origin", "https://evil.example"))
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        assert!(response.headers().get_one("Access-Control-Allow-Origin").is_none());
    }

    #[test]
    fn test_malformed_body_hits_catcher() {
        let client = client();
        let session = new_session(&client);
        let response = client.post(format!("/api/session/{}/feedback", session))
            .header(ContentType::JSON)
            .body(r#"{"kind":"story"}"#)
            .dispatch();
        assert_eq!(response.status(), Status::UnprocessableEntity);
    }
}
