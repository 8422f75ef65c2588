use profile_core::{
    AppState, DashboardSummary, Education, Gender, Profile, ProfilePatch, WorkHistory,
};
use uuid::Uuid;

#[test]
fn initial_state_serializes_with_empty_strings_and_camel_case() {
    let json = serde_json::to_value(AppState::initial()).unwrap();
    let profile = &json["profile"];

    assert_eq!(profile["name"], "");
    assert_eq!(profile["nameKana"], "");
    assert_eq!(profile["gender"], "");
    assert_eq!(profile["maritalStatus"], "");
    assert_eq!(profile["workHistories"], serde_json::json!([]));
    assert_eq!(json["services"].as_array().unwrap().len(), 3);
    assert_eq!(json["services"][1]["id"], "service-b");
    assert_eq!(json["services"][1]["connected"], false);
}

#[test]
fn optional_record_fields_are_omitted_when_absent() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut education = Education::blank(id);
    education.school_name = "○○大学".to_string();
    education.start_date = "2020-04".to_string();
    education.end_date = "現在".to_string();

    let json = serde_json::to_value(&education).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["schoolName"], "○○大学");
    assert_eq!(json["endDate"], "現在");
    assert!(json.get("department").is_none());

    let decoded: Education = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, education);
}

#[test]
fn work_history_requires_department_and_position_on_the_wire() {
    let mut value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "companyName": "株式会社サンプル",
        "startDate": "2018-04",
        "endDate": "2020-03"
    });
    assert!(serde_json::from_value::<WorkHistory>(value.clone()).is_err());

    value["department"] = serde_json::json!("開発部");
    value["position"] = serde_json::json!("主任");
    let work: WorkHistory = serde_json::from_value(value).unwrap();
    assert_eq!(work.department, "開発部");
    assert_eq!(work.position, "主任");
}

#[test]
fn patch_deserializes_partial_objects() {
    let patch: ProfilePatch =
        serde_json::from_value(serde_json::json!({ "gender": "female", "nameKana": "やまだ" }))
            .unwrap();
    assert_eq!(patch.gender, Some(Gender::Female));
    assert_eq!(patch.name_kana.as_deref(), Some("やまだ"));
    assert_eq!(patch.name, None);

    let mut profile = Profile::default();
    profile.apply(patch);
    assert_eq!(profile.gender, Gender::Female);
}

#[test]
fn dashboard_summary_uses_camel_case_keys() {
    let summary = DashboardSummary::from_state(&AppState::initial(), 20);
    let json = serde_json::to_value(summary).unwrap();
    assert_eq!(json["completionPercentage"], 0);
    assert_eq!(json["connectionRate"], 0);
    assert_eq!(json["educations"]["maxEntries"], 20);
}
