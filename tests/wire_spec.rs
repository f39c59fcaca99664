//! Wire-contract specs: request shapes the services expect, and defensive
//! parsing of responses with missing or null fields.

use minidoc::client::{EvaluateRequest, EvaluateResponse, ExportRequest, GenerateRequest, GenerateResponse};
use minidoc::models::{DocumentFormat, Draft, GeneratedSection, SectionSpec};
use serde_json::json;

fn drafted() -> Draft {
    let mut draft = Draft::new();
    draft.main_topic = "Intro to Caching".to_string();
    draft.dynamic_generation = true;
    draft.constraints = "friendly tone".to_string();
    draft.context = "junior audience".to_string();

    let mut spec = SectionSpec::new();
    spec.name = "Basics".to_string();
    spec.description = "explain caches".to_string();
    draft.sections.push(spec);

    draft.generated_content.push(GeneratedSection {
        id: "g1".to_string(),
        name: "Basics".to_string(),
        content: "caches store hot data".to_string(),
    });
    draft
}

mod requests {
    use super::*;

    #[test]
    fn generate_request_matches_the_wire_contract() {
        let request = GenerateRequest::from_draft(&drafted());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["main_topic"], "Intro to Caching");
        // boolean-like flag travels as a string
        assert_eq!(value["dynamic_generation"], "true");
        assert_eq!(value["sections"][0]["section_name"], "Basics");
        assert_eq!(value["sections"][0]["description"], "explain caches");
        // spec ids are local identity only
        assert!(value["sections"][0].get("id").is_none());
        assert_eq!(value["constraints"], "friendly tone");
        assert_eq!(value["context"], "junior audience");
    }

    #[test]
    fn generate_request_serializes_false_flag() {
        let mut draft = drafted();
        draft.dynamic_generation = false;
        let value = serde_json::to_value(GenerateRequest::from_draft(&draft)).unwrap();
        assert_eq!(value["dynamic_generation"], "false");
    }

    #[test]
    fn evaluate_request_adds_count_and_stripped_content() {
        let request = EvaluateRequest::from_draft(&drafted());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["expected_sections_count"], "1");
        assert_eq!(value["generated_content"][0]["section_name"], "Basics");
        assert_eq!(value["generated_content"][0]["content"], "caches store hot data");
        assert!(value["generated_content"][0].get("id").is_none());
    }

    #[test]
    fn export_request_preserves_ids_and_format_discriminator() {
        let request = ExportRequest::from_draft(&drafted(), DocumentFormat::Document);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["type"], "doc");
        assert_eq!(value["generated_content"][0]["id"], "g1");
        assert_eq!(value["generated_content"][0]["section_name"], "Basics");

        let request = ExportRequest::from_draft(&drafted(), DocumentFormat::Presentation);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "ppt");
    }
}

mod responses {
    use super::*;

    #[test]
    fn generate_response_parses_a_full_payload() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "generated_content": [
                {"id": "g1", "section_name": "Basics", "content": "text"}
            ],
            "coherency_score": 0.4,
            "evaluator_diagnostic_summary": "weak transitions"
        }))
        .unwrap();

        assert_eq!(response.generated_content.len(), 1);
        assert_eq!(response.generated_content[0].name, "Basics");
        assert_eq!(response.coherency_score, 0.4);
        assert_eq!(response.diagnostic_summary, "weak transitions");
    }

    #[test]
    fn generate_response_defaults_missing_fields() {
        let response: GenerateResponse = serde_json::from_value(json!({})).unwrap();

        assert!(response.generated_content.is_empty());
        assert_eq!(response.coherency_score, 0.0);
        assert_eq!(response.diagnostic_summary, "");
    }

    #[test]
    fn evaluate_response_distinguishes_absent_from_empty_content() {
        let absent: EvaluateResponse = serde_json::from_value(json!({
            "eval_hist_payload": [
                {"coherency_score": 0.5, "evaluator_diagnostic_summary": "round"}
            ]
        }))
        .unwrap();
        assert!(absent.generated_content.is_none());

        let null: EvaluateResponse = serde_json::from_value(json!({
            "generated_content": null,
            "eval_hist_payload": []
        }))
        .unwrap();
        assert!(null.generated_content.is_none());

        let empty: EvaluateResponse = serde_json::from_value(json!({
            "generated_content": [],
            "eval_hist_payload": []
        }))
        .unwrap();
        assert_eq!(empty.generated_content, Some(Vec::new()));
    }

    #[test]
    fn evaluate_response_keeps_record_order() {
        let response: EvaluateResponse = serde_json::from_value(json!({
            "eval_hist_payload": [
                {"coherency_score": 0.2, "evaluator_diagnostic_summary": "first"},
                {"coherency_score": 0.8, "evaluator_diagnostic_summary": "second"}
            ]
        }))
        .unwrap();

        assert_eq!(response.evaluation_records.len(), 2);
        assert_eq!(response.evaluation_records[0].diagnostic_summary, "first");
        assert_eq!(response.evaluation_records[1].diagnostic_summary, "second");
    }

    #[test]
    fn evaluate_response_defaults_missing_records() {
        let response: EvaluateResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.evaluation_records.is_empty());
    }
}

mod formats {
    use super::*;

    #[test]
    fn document_format_round_trips_wire_names() {
        assert_eq!(DocumentFormat::Document.as_str(), "doc");
        assert_eq!(DocumentFormat::Presentation.as_str(), "ppt");
        assert_eq!(DocumentFormat::from_str("doc"), Some(DocumentFormat::Document));
        assert_eq!(DocumentFormat::from_str("ppt"), Some(DocumentFormat::Presentation));
        assert_eq!(DocumentFormat::from_str("pdf"), None);
    }

    #[test]
    fn format_implies_the_download_file_name() {
        assert_eq!(DocumentFormat::Document.file_name(), "minidoc.docx");
        assert_eq!(DocumentFormat::Presentation.file_name(), "minidoc.pptx");
    }
}
