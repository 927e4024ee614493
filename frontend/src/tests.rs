#[cfg(test)]
mod tests {
    use uuid::Uuid;
    use shared::document::sample_document;
    use crate::results::pair_startup;

    #[test]
    fn test_startup_pairs_document_with_session() {
        let session_id = Uuid::new_v4();
        let (outcome, orphan) = pair_startup(Ok(sample_document().unwrap()), Ok(session_id));

        let (doc, paired) = outcome.unwrap();
        assert_eq!(paired, session_id);
        assert_eq!(doc.features.len(), 3);
        assert_eq!(orphan, None);
    }

    #[test]
    fn test_failed_document_ends_new_session() {
        let session_id = Uuid::new_v4();
        let (outcome, orphan) = pair_startup(Err("Results are not available yet".into()), Ok(session_id));

        assert_eq!(outcome.unwrap_err(), "Results are not available yet");
        assert_eq!(orphan, Some(session_id));
    }

    #[test]
    fn test_session_error_is_reported() {
        let (outcome, orphan) = pair_startup(
            Ok(sample_document().unwrap()),
            Err("Internal error: session store unavailable".into()),
        );

        assert_eq!(outcome.unwrap_err(), "Internal error: session store unavailable");
        assert_eq!(orphan, None);
    }
}
