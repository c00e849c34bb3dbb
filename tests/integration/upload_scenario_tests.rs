//! End-to-end upload scenarios
//!
//! Each test runs a full upload against a wiremock endpoint and checks both
//! the summary and what actually went over the wire.

#[cfg(test)]
mod tests {
    use crate::common::{ParticipantFactory, RecordingSleeper, sender_config};
    use participant_upload::{HttpTransport, SenderConfig, UploadRunner};
    use serde_json::{Value, json};
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PATH: &str = "/appointments/participants";

    fn runner(config: SenderConfig) -> UploadRunner<HttpTransport, RecordingSleeper> {
        let transport = HttpTransport::new(config.retry.request_timeout()).unwrap();
        UploadRunner::new(config, transport, RecordingSleeper::default()).unwrap()
    }

    async fn received_bodies(server: &MockServer) -> Vec<Value> {
        server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| r.body_json::<Value>().unwrap())
            .collect()
    }

    /// 10 records, batch size 3, every request answered 201
    #[tokio::test]
    async fn test_all_batches_created() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(PATH))
            .respond_with(ResponseTemplate::new(201))
            .expect(4)
            .mount(&server)
            .await;

        let endpoint = format!("{}{}", server.uri(), PATH);
        let r = runner(sender_config(&endpoint, 3));
        let summary = crate::assert_ok!(r.run(ParticipantFactory::unmatched(10)).await);

        assert_eq!(summary.batches, 4);
        assert_eq!(summary.approx_created, 10);
        assert_eq!(summary.approx_updated_or_unchanged, 0);
        assert_eq!(summary.failed, 0);

        let bodies = received_bodies(&server).await;
        let sizes: Vec<usize> = bodies
            .iter()
            .map(|b| b["participants"].as_array().unwrap().len())
            .collect();
        assert_eq!(sizes, vec![3, 3, 3, 1]);

        let ids: Vec<&str> = bodies.iter().map(|b| b["batchId"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["run-001", "run-002", "run-003", "run-004"]);
        assert!(bodies.iter().all(|b| b["source"] == "upstream-test"));
    }

    /// 5 records, batch size 5, endpoint always rejects
    #[tokio::test]
    async fn test_definite_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(PATH))
            .respond_with(ResponseTemplate::new(400).set_body_string("participantId is required"))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint = format!("{}{}", server.uri(), PATH);
        let r = runner(sender_config(&endpoint, 5));
        let summary = crate::assert_ok!(r.run(ParticipantFactory::unmatched(5)).await);

        assert_eq!(summary.batches, 1);
        assert_eq!(summary.failed, 5);
        assert_eq!(summary.retries, 0);
        assert!(r.sender().sleeper().delays().is_empty());
    }

    /// 6 records, batch size 2, batch 2 times out once then gets 204
    #[tokio::test]
    async fn test_timeout_then_no_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "batchId": "run-002" })))
            .respond_with(ResponseTemplate::new(204).set_delay(Duration::from_secs(3)))
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "batchId": "run-002" })))
            .respond_with(ResponseTemplate::new(204))
            .with_priority(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .with_priority(3)
            .mount(&server)
            .await;

        let endpoint = format!("{}{}", server.uri(), PATH);
        let r = runner(sender_config(&endpoint, 2));
        let summary = crate::assert_ok!(r.run(ParticipantFactory::unmatched(6)).await);

        assert_eq!(summary.batches, 3);
        assert_eq!(summary.approx_created, 4);
        assert_eq!(summary.approx_updated_or_unchanged, 2);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.retries, 1);
        assert_eq!(r.sender().sleeper().delays(), vec![Duration::from_secs(1)]);
        assert_eq!(received_bodies(&server).await.len(), 4);
    }

    /// Nothing listening: every attempt fails at connect time
    #[tokio::test]
    async fn test_connection_refused_exhausts_retries() {
        let mut config = sender_config("http://127.0.0.1:1/appointments/participants", 4);
        config.retry.max_retries = 2;
        let r = runner(config);

        let summary = crate::assert_ok!(r.run(ParticipantFactory::unmatched(8)).await);
        assert_eq!(summary.batches, 2);
        assert_eq!(summary.failed, 8);
        assert_eq!(summary.failed_batches, vec!["run-001", "run-002"]);
        assert_eq!(summary.retries, 4);

        let per_batch = [Duration::from_secs(1), Duration::from_secs_f64(1.5)];
        let expected: Vec<Duration> = per_batch.iter().chain(per_batch.iter()).copied().collect();
        assert_eq!(r.sender().sleeper().delays(), expected);
    }

    /// A failing batch in the middle does not stop later batches
    #[tokio::test]
    async fn test_failures_are_isolated_per_batch() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({ "batchId": "run-002" })))
            .respond_with(ResponseTemplate::new(500))
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .with_priority(2)
            .mount(&server)
            .await;

        let endpoint = format!("{}{}", server.uri(), PATH);
        let r = runner(sender_config(&endpoint, 3));
        let summary = crate::assert_ok!(r.run(ParticipantFactory::unmatched(9)).await);

        assert_eq!(summary.approx_updated_or_unchanged, 6);
        assert_eq!(summary.failed, 3);
        assert_eq!(
            summary.approx_created + summary.approx_updated_or_unchanged + summary.failed,
            9
        );
        assert!(summary.to_string().contains("failed: 3 (batches: run-002)"));
    }
}
