use genie_core::{AssetId, GeneratedAsset, GenerationRequest, IdeaCreated};

#[test]
fn composed_brief_carries_avoid_clause() {
    let req = GenerationRequest::new("fitness coaching funnel", "Sourdough Secret Guide");
    assert_eq!(
        req.composed_brief(),
        "fitness coaching funnel. Existing Content to Avoid: Sourdough Secret Guide"
    );
}

#[test]
fn empty_avoid_topics_yield_empty_clause() {
    let req = GenerationRequest::new("x", "");
    assert_eq!(req.composed_brief(), "x. Existing Content to Avoid: ");
}

#[test]
fn only_an_empty_brief_is_not_submittable() {
    assert!(!GenerationRequest::new("", "topic").is_submittable());
    assert!(GenerationRequest::new("   \t", "").is_submittable());
    assert!(GenerationRequest::new("x", "").is_submittable());
}

#[test]
fn idea_params_use_fixed_domain_constants() {
    let params = GenerationRequest::new("yoga studio", "").idea_params();
    let body = serde_json::to_value(&params).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "icp_profile": "yoga studio. Existing Content to Avoid: ",
            "pain_points": "Neural link established",
            "brand_voice": "Professional",
            "offer_type": "SaaS",
            "conversion_goal": "Direct Checkout",
        })
    );
}

#[test]
fn history_entry_tolerates_nulls_and_unknown_columns() {
    let raw = r#"{
        "id": 4,
        "idea_type": "Calculator",
        "idea_title": "Bakery Margin Calculator",
        "value_promise": null,
        "conversion_score": null,
        "linkedin_post": null,
        "landing_page_html": "<section></section>",
        "asset_data": {"multiplier": 1.5}
    }"#;

    let asset: GeneratedAsset = serde_json::from_str(raw).unwrap();
    assert_eq!(asset.id, AssetId::new("4"));
    assert_eq!(asset.category(), "Calculator");
    assert_eq!(asset.title(), "Bakery Margin Calculator");
    assert_eq!(asset.value_promise(), "");
    assert_eq!(asset.confidence(), 92);
    assert!(asset.linkedin_img.is_none());
}

#[test]
fn confidence_is_clamped_to_percent() {
    let mut asset: GeneratedAsset = serde_json::from_str(r#"{"id": "a1"}"#).unwrap();
    asset.conversion_score = Some(250);
    assert_eq!(asset.confidence(), 100);
    asset.conversion_score = Some(74);
    assert_eq!(asset.confidence(), 74);
}

#[test]
fn idea_response_keeps_strategy_payload() {
    let created: IdeaCreated =
        serde_json::from_str(r#"{"id": 9, "strategy": {"title": "Modern Growth"}}"#).unwrap();
    assert_eq!(created.id.as_str(), "9");
    assert_eq!(created.strategy["title"], "Modern Growth");
}
