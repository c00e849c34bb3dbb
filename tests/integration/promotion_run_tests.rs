//! Promotion simulation through a full run
//!
//! Writes a generated dataset to disk, runs with promotion enabled, and
//! checks what the endpoint received against the file.

#[cfg(test)]
mod tests {
    use crate::common::{ParticipantFactory, RecordingSleeper, sender_config};
    use participant_upload::core::generator::write_participants;
    use participant_upload::{HttpTransport, UploadRunner};
    use serde_json::Value;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn run_promotion(count: usize, ratio: f64, promote: usize) -> (Vec<Value>, Vec<Value>, usize) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("participants_seed.json");
        let participants = ParticipantFactory::with_ratio(count, ratio);
        write_participants(&input, &participants).await.unwrap();

        let mut config = sender_config(&server.uri(), 25);
        config.input = input;
        config.promote_count = promote;
        let transport = HttpTransport::new(config.retry.request_timeout()).unwrap();
        let runner = UploadRunner::new(config, transport, RecordingSleeper::default()).unwrap();
        let summary = crate::assert_ok!(runner.run_from_input().await);

        let sent: Vec<Value> = server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .flat_map(|r| {
                r.body_json::<Value>().unwrap()["participants"]
                    .as_array()
                    .unwrap()
                    .clone()
            })
            .collect();
        let original: Vec<Value> = participants
            .iter()
            .map(|p| serde_json::to_value(p).unwrap())
            .collect();
        (original, sent, summary.promoted)
    }

    /// 100 records without match keys, promote 20
    #[tokio::test]
    async fn test_promote_twenty_of_hundred() {
        let (original, sent, promoted) = run_promotion(100, 0.0, 20).await;
        assert_eq!(promoted, 20);
        assert_eq!(sent.len(), 100);

        let mut changed = 0;
        for (before, after) in original.iter().zip(&sent) {
            if before == after {
                continue;
            }
            changed += 1;
            assert!(before["mid"].is_null());
            assert!(after["mid"].as_str().unwrap().starts_with("MID-PROMO-"));
            assert_ne!(after["participantId"], before["participantId"]);
            assert!(after["participantId"].as_str().unwrap().starts_with("temp-day2-"));
            for key in ["firstName", "lastName", "email"] {
                assert_eq!(after[key], before[key]);
            }
        }
        assert_eq!(changed, 20);
    }

    /// Asking for more promotions than eligible records promotes what exists
    #[tokio::test]
    async fn test_over_request_promotes_all_eligible() {
        let (original, sent, promoted) = run_promotion(50, 0.7, 1000).await;
        let eligible = original.iter().filter(|p| p["mid"].is_null()).count();

        assert_eq!(promoted, eligible);
        assert!(sent.iter().all(|p| !p["mid"].is_null()));
        for (before, after) in original.iter().zip(&sent) {
            if !before["mid"].is_null() {
                assert_eq!(before, after);
            }
        }
    }
}
