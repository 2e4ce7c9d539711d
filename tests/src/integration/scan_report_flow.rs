//! # Scan Report Flow
//!
//! rkhunter log text in, webhook payload JSON out, checked against the
//! limits webhook consumers enforce.

#[cfg(test)]
mod tests {
    use relay_runtime::{RelayContainer, RuntimeConfig};
    use shared_types::{Field, WebhookPayload, MAX_EMBED_FIELDS, MAX_FIELD_VALUE_CHARS};
    use sr_02_scan_extraction::{extract_fields, extract_scan_timestamps, ScanSeverity};

    use crate::fixtures::*;

    fn container() -> RelayContainer<StaticCertificateFetcher, RecordingConfirmer> {
        offline_container(RuntimeConfig {
            default_server_name: "backup-01".into(),
            ..RuntimeConfig::default()
        })
    }

    fn assert_within_limits(payload: &WebhookPayload) {
        for embed in &payload.embeds {
            assert!(embed.fields.len() <= MAX_EMBED_FIELDS);
            for field in &embed.fields {
                assert!(field.value().chars().count() <= MAX_FIELD_VALUE_CHARS);
            }
        }
    }

    #[test]
    fn test_fixture_report_payload() {
        let payload = container()
            .scan_report_handler()
            .report(Some("web-01"), RKHUNTER_REPORT);
        assert_within_limits(&payload);

        let embed = &payload.embeds[0];
        assert_eq!(embed.title.as_deref(), Some("RKHunter Log - web-01"));
        assert_eq!(embed.color, ScanSeverity::Critical.color());
        assert_eq!(embed.fields[0], Field::inline("Server", "web-01"));
        assert_eq!(embed.fields[1], Field::inline("Warnings", "9"));
        assert_eq!(embed.fields[2], Field::inline("Errors", "1"));
        assert_eq!(embed.fields.len(), 21);
    }

    #[test]
    fn test_payload_json_shape() {
        let payload = container()
            .scan_report_handler()
            .report(None, RKHUNTER_REPORT);

        let json: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        let embed = &json["embeds"][0];
        assert_eq!(embed["title"], "RKHunter Log - backup-01");
        assert_eq!(embed["fields"][0]["name"], "Server");
        assert_eq!(embed["fields"][0]["value"], "backup-01");
        assert_eq!(embed["fields"][0]["inline"], true);
        assert!(embed["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_timing_fields_agree_with_timestamps() {
        let fields = extract_fields(RKHUNTER_REPORT);
        let timing = extract_scan_timestamps(RKHUNTER_REPORT);
        let value = |name: &str| {
            fields
                .iter()
                .find(|f| f.name() == name)
                .map(|f| f.value().to_string())
        };

        assert_eq!(value("Started At"), timing.start);
        assert_eq!(value("Ended At"), timing.end);
        assert_eq!(value("Duration"), timing.duration);
    }

    #[test]
    fn test_oversized_report_stays_within_limits() {
        let mut report = String::from(RKHUNTER_REPORT);
        for i in 0..500 {
            report.push_str(&format!(
                "[04:00:00]   Hidden file found: /dev/.hidden-{i}-{}   [ Warning ]\n",
                "x".repeat(200)
            ));
        }

        let payload = container().scan_report_handler().report(Some("web-01"), &report);

        assert_within_limits(&payload);
        assert_eq!(payload.embeds[0].fields[1], Field::inline("Warnings", "509"));
        let hidden = payload.embeds[0]
            .fields
            .iter()
            .find(|f| f.name() == "Hidden Files/Dirs")
            .unwrap();
        assert_eq!(hidden.value().chars().count(), MAX_FIELD_VALUE_CHARS);
    }

    #[test]
    fn test_clean_report_is_green() {
        let report = "\
[03:10:01] Running Rootkit Hunter version 1.4.6 on db-02
[03:10:05]   Checking for rootkits...                        [ None found ]
";
        let payload = container().scan_report_handler().report(None, report);

        assert_eq!(payload.embeds[0].color, 0x00ff00);
        assert!(payload.embeds[0]
            .fields
            .iter()
            .any(|f| f.name() == "Hostname" && f.value() == "db-02"));
    }

    #[test]
    fn test_empty_report_still_produces_counts() {
        let fields = container().scan_report_handler().fields("");

        assert_eq!(
            fields,
            vec![Field::inline("Warnings", "0"), Field::inline("Errors", "0")]
        );
    }
}
