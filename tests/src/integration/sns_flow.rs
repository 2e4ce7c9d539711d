//! # SNS Verification Flow
//!
//! Envelope JSON in, webhook payload out:
//!
//! ```text
//! body ──parse──→ NotificationEnvelope ──verify──→ SnsVerificationService
//!                                                     │  fetch cert (HTTP)
//!                                                     ↓
//!                              summarize_notification ──→ WebhookPayload
//!                    (SubscriptionConfirmation) confirm ──→ GET SubscribeURL
//! ```

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use relay_runtime::{
        RelayContainer, RuntimeConfig, SnsHandlerError, SnsNotificationHandler, SnsOutcome,
    };
    use sr_01_sns_verification::{
        CertificateTrustPolicy, ConfirmationError, NotificationEnvelope, ReqwestCertificateFetcher,
        ReqwestSubscriptionConfirmer, SignatureVerificationApi, SnsVerificationService,
        SubscriptionConfirmationApi, SubscriptionConfirmationService, VerificationError,
        VerifierConfig,
    };
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::fixtures::*;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Serve `body` at `/cert.pem` and return the server.
    async fn certificate_server(status: u16, body: &str) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cert.pem"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&server)
            .await;
        server
    }

    type HttpHandler = SnsNotificationHandler<
        SnsVerificationService<ReqwestCertificateFetcher>,
        SubscriptionConfirmationService<RecordingConfirmer>,
    >;

    fn http_config(trust: CertificateTrustPolicy) -> VerifierConfig {
        VerifierConfig::default()
            .with_fetch_timeout(Duration::from_secs(2))
            .with_trust(trust)
    }

    fn http_service(
        trust: CertificateTrustPolicy,
    ) -> Arc<SnsVerificationService<ReqwestCertificateFetcher>> {
        let config = http_config(trust);
        let fetcher = ReqwestCertificateFetcher::new(config.fetch_timeout).unwrap();
        Arc::new(SnsVerificationService::new(fetcher, config))
    }

    /// Certificates over HTTP; subscriptions recorded, not requested.
    fn http_handler(trust: CertificateTrustPolicy, confirmer: RecordingConfirmer) -> HttpHandler {
        let subscriptions =
            SubscriptionConfirmationService::new(confirmer, http_config(trust.clone()));
        SnsNotificationHandler::new(http_service(trust), Arc::new(subscriptions))
    }

    fn http_confirmation_service(
        trust: CertificateTrustPolicy,
    ) -> SubscriptionConfirmationService<ReqwestSubscriptionConfirmer> {
        let config = http_config(trust);
        let confirmer = ReqwestCertificateFetcher::new(config.fetch_timeout)
            .unwrap()
            .subscription_confirmer();
        SubscriptionConfirmationService::new(confirmer, config)
    }

    fn pointing_at(envelope: &str, server: &MockServer) -> String {
        with_member(
            envelope,
            "SigningCertURL",
            &format!("{}/cert.pem", server.uri()),
        )
    }

    // =============================================================================
    // HTTP FETCH PATH
    // =============================================================================

    #[tokio::test]
    async fn test_bounce_verified_over_http_becomes_payload() {
        let server = certificate_server(200, SIGNING_CERT).await;
        let handler =
            http_handler(CertificateTrustPolicy::any_host(), RecordingConfirmer::default());

        let outcome = handler
            .handle(&pointing_at(BOUNCE_ENVELOPE, &server))
            .await
            .unwrap();

        let SnsOutcome::Notification(payload) = outcome else {
            panic!("expected a notification payload");
        };
        let embed = &payload.embeds[0];
        assert_eq!(embed.title.as_deref(), Some("Bounce"));
        assert_eq!(embed.color, 0xffa500);
        assert_eq!(
            embed.description,
            "📩 **Bounce** detected:\n`jane@example.com, richard@example.com`"
        );
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_verified_subscription_is_confirmed() {
        let server = certificate_server(200, SIGNING_CERT).await;
        let confirmer = RecordingConfirmer::default();
        let handler = http_handler(CertificateTrustPolicy::any_host(), confirmer.clone());

        let outcome = handler
            .handle(&pointing_at(SUBSCRIPTION_ENVELOPE, &server))
            .await
            .unwrap();

        let SnsOutcome::Subscribed { subscribe_url, .. } = outcome else {
            panic!("expected a confirmed subscription");
        };
        assert!(subscribe_url.ends_with("Token=2336412f37"));
        let visited = confirmer.visited.lock().unwrap();
        assert_eq!(visited.len(), 1);
        assert_eq!(visited[0].as_str(), subscribe_url);
    }

    #[tokio::test]
    async fn test_forged_subscription_is_never_confirmed() {
        let server = certificate_server(200, OTHER_CERT).await;
        let confirmer = RecordingConfirmer::default();
        let handler = http_handler(CertificateTrustPolicy::any_host(), confirmer.clone());

        let err = handler
            .handle(&pointing_at(SUBSCRIPTION_ENVELOPE, &server))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SnsHandlerError::Rejected(VerificationError::SignatureMismatch)
        ));
        assert!(confirmer.visited.lock().unwrap().is_empty());
    }

    // =============================================================================
    // SUBSCRIBE URL OVER HTTP
    // =============================================================================

    fn subscribing_to(server: &MockServer) -> NotificationEnvelope {
        let body = with_member(
            SUBSCRIPTION_ENVELOPE,
            "SubscribeURL",
            &format!("{}/?Action=ConfirmSubscription&Token=2336412f37", server.uri()),
        );
        NotificationEnvelope::from_json(&body).unwrap()
    }

    #[tokio::test]
    async fn test_subscribe_url_is_requested_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("Action", "ConfirmSubscription"))
            .and(query_param("Token", "2336412f37"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        let service = http_confirmation_service(CertificateTrustPolicy::any_host());

        let url = service.confirm(&subscribing_to(&server)).await.unwrap();

        assert!(url.as_str().starts_with(&server.uri()));
        server.verify().await;
    }

    #[tokio::test]
    async fn test_rejected_subscribe_url_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;
        let service = http_confirmation_service(CertificateTrustPolicy::any_host());

        assert!(matches!(
            service.confirm(&subscribing_to(&server)).await,
            Err(ConfirmationError::Request(_))
        ));
    }

    #[tokio::test]
    async fn test_strict_policy_never_requests_untrusted_subscribe_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let service = http_confirmation_service(CertificateTrustPolicy::default());

        assert!(matches!(
            service.confirm(&subscribing_to(&server)).await,
            Err(ConfirmationError::UntrustedSubscribeUrl(_))
        ));
        server.verify().await;
    }

    #[tokio::test]
    async fn test_certificate_server_error_is_rejection() {
        let server = certificate_server(500, "oops").await;
        let service = http_service(CertificateTrustPolicy::any_host());
        let envelope =
            NotificationEnvelope::from_json(&pointing_at(BOUNCE_ENVELOPE, &server)).unwrap();

        assert!(!service.verify_signature(&envelope).await);
        assert!(matches!(
            service.verify_detailed(&envelope).await,
            Err(VerificationError::CertificateFetch(_))
        ));
    }

    #[tokio::test]
    async fn test_slow_certificate_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(SIGNING_CERT)
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;
        let service = http_service(CertificateTrustPolicy::any_host());
        let envelope =
            NotificationEnvelope::from_json(&pointing_at(BOUNCE_ENVELOPE, &server)).unwrap();

        assert!(!service.verify_signature(&envelope).await);
    }

    #[tokio::test]
    async fn test_strict_policy_never_contacts_untrusted_host() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SIGNING_CERT))
            .expect(0)
            .mount(&server)
            .await;
        let handler =
            http_handler(CertificateTrustPolicy::default(), RecordingConfirmer::default());

        let err = handler
            .handle(&pointing_at(BOUNCE_ENVELOPE, &server))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SnsHandlerError::Rejected(VerificationError::UntrustedCertificateUrl(_))
        ));
        server.verify().await;
    }

    #[tokio::test]
    async fn test_foreign_certificate_is_rejected() {
        let server = certificate_server(200, OTHER_CERT).await;
        let service = http_service(CertificateTrustPolicy::any_host());
        let envelope =
            NotificationEnvelope::from_json(&pointing_at(BOUNCE_ENVELOPE, &server)).unwrap();

        assert_eq!(
            service.verify_detailed(&envelope).await,
            Err(VerificationError::SignatureMismatch)
        );
    }

    // =============================================================================
    // RUNTIME WIRING (default strict policy, static adapters)
    // =============================================================================

    #[tokio::test]
    async fn test_runtime_container_verifies_fixture_under_default_policy() {
        let container = offline_container(RuntimeConfig::default());

        let outcome = container.sns_handler().handle(BOUNCE_ENVELOPE).await.unwrap();

        assert!(matches!(outcome, SnsOutcome::Notification(_)));
    }

    #[tokio::test]
    async fn test_runtime_container_confirms_fixture_subscription() {
        let confirmer = RecordingConfirmer::default();
        let container = RelayContainer::with_adapters(
            StaticCertificateFetcher::signing(),
            confirmer.clone(),
            RuntimeConfig::default(),
        );

        let outcome = container
            .sns_handler()
            .handle(SUBSCRIPTION_ENVELOPE)
            .await
            .unwrap();

        assert!(matches!(outcome, SnsOutcome::Subscribed { .. }));
        assert_eq!(
            confirmer.visited.lock().unwrap()[0].host_str(),
            Some("sns.us-east-1.amazonaws.com")
        );
    }

    #[tokio::test]
    async fn test_any_signed_member_change_is_rejected() {
        let container = offline_container(RuntimeConfig::default());
        let handler = container.sns_handler();

        for key in ["Message", "MessageId", "Subject", "Timestamp", "TopicArn"] {
            let tampered = with_member(BOUNCE_ENVELOPE, key, "tampered");
            let result = handler.handle(&tampered).await;
            assert!(
                matches!(
                    result,
                    Err(SnsHandlerError::Rejected(VerificationError::SignatureMismatch))
                ),
                "changing {key} must break the signature"
            );
        }
    }

    #[tokio::test]
    async fn test_unsigned_members_do_not_affect_verification() {
        let container = offline_container(RuntimeConfig::default());
        let envelope = with_member(
            BOUNCE_ENVELOPE,
            "UnsubscribeURL",
            "https://sns.us-east-1.amazonaws.com/?Action=Unsubscribe&x=1",
        );

        assert!(container.sns_handler().handle(&envelope).await.is_ok());
    }

    #[tokio::test]
    async fn test_signature_version_two_needs_sha256_signature() {
        let container = offline_container(RuntimeConfig::default());
        let envelope = with_member(BOUNCE_ENVELOPE, "SignatureVersion", "2");

        let result = container.sns_handler().handle(&envelope).await;

        assert!(matches!(
            result,
            Err(SnsHandlerError::Rejected(VerificationError::SignatureMismatch))
        ));
    }
}
