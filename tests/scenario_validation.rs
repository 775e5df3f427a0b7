//! 시나리오 경계 검증, 기간 변환, 벤더 id 정리 검증.

use nac_tco_analyzer::scenario::{
    normalize_vendor_ids, ProjectionYears, Scenario, ScenarioError, MAX_DEVICES, MAX_USERS,
};

#[test]
fn default_scenario_is_valid() {
    let scenario = Scenario::default();
    assert!(scenario.issues().is_empty());
    assert!(scenario.validate().is_ok());
}

#[test]
fn nonpositive_devices_are_rejected() {
    let mut scenario = Scenario::default();
    scenario.devices = 0;
    assert_eq!(
        scenario.validate(),
        Err(ScenarioError::DevicesNotPositive(0))
    );
    scenario.devices = -5;
    assert_eq!(
        scenario.validate(),
        Err(ScenarioError::DevicesNotPositive(-5))
    );
}

#[test]
fn device_and_user_limits_are_enforced() {
    let mut scenario = Scenario::default();
    scenario.devices = MAX_DEVICES;
    assert!(scenario.validate().is_ok(), "한도값 자체는 허용");
    scenario.devices = MAX_DEVICES + 1;
    assert_eq!(
        scenario.validate(),
        Err(ScenarioError::DevicesAboveLimit(MAX_DEVICES + 1))
    );

    let mut scenario = Scenario::default();
    scenario.users = 0;
    assert_eq!(scenario.validate(), Err(ScenarioError::UsersNotPositive(0)));
    scenario.users = MAX_USERS + 1;
    assert_eq!(
        scenario.validate(),
        Err(ScenarioError::UsersAboveLimit(MAX_USERS + 1))
    );
}

#[test]
fn industry_key_must_exist_in_table() {
    let mut scenario = Scenario::default();
    scenario.industry = String::new();
    assert_eq!(scenario.validate(), Err(ScenarioError::EmptyIndustry));
    scenario.industry = "   ".to_string();
    assert_eq!(scenario.validate(), Err(ScenarioError::EmptyIndustry));
    scenario.industry = "atlantis".to_string();
    assert_eq!(
        scenario.validate(),
        Err(ScenarioError::UnknownIndustry("atlantis".to_string()))
    );
    scenario.industry = "HEALTHCARE".to_string();
    assert!(scenario.validate().is_ok(), "산업 키는 대소문자 무시");
}

#[test]
fn issues_accumulate_in_field_order() {
    let scenario = Scenario {
        devices: -1,
        users: 0,
        industry: String::new(),
        ..Scenario::default()
    };
    let issues = scenario.issues();
    assert_eq!(
        issues,
        vec![
            ScenarioError::DevicesNotPositive(-1),
            ScenarioError::UsersNotPositive(0),
            ScenarioError::EmptyIndustry,
        ]
    );
    // validate는 첫 위반만 돌려준다.
    assert_eq!(
        scenario.validate(),
        Err(ScenarioError::DevicesNotPositive(-1))
    );
}

#[test]
fn projection_years_only_accept_supported_checkpoints() {
    assert_eq!(ProjectionYears::from_years(1), Some(ProjectionYears::One));
    assert_eq!(ProjectionYears::from_years(2), Some(ProjectionYears::Two));
    assert_eq!(ProjectionYears::from_years(3), Some(ProjectionYears::Three));
    assert_eq!(ProjectionYears::from_years(5), Some(ProjectionYears::Five));
    assert_eq!(ProjectionYears::from_years(4), None);
    assert_eq!(
        ProjectionYears::try_from(4),
        Err(ScenarioError::UnsupportedHorizon(4))
    );
    assert_eq!(u32::from(ProjectionYears::Five), 5);
}

#[test]
fn scenario_deserializes_with_defaults_and_horizon_check() {
    let scenario: Scenario = toml::from_str("years = 5").expect("partial scenario");
    assert_eq!(scenario.years, ProjectionYears::Five);
    assert_eq!(scenario.devices, 500, "빠진 필드는 기본값");

    let bad = toml::from_str::<Scenario>("years = 4");
    assert!(bad.is_err(), "지원하지 않는 기간은 역직렬화 단계에서 거부");
}

#[test]
fn vendor_id_lists_are_normalized() {
    let raw = vec![
        " Portnox ".to_string(),
        String::new(),
        "CISCO".to_string(),
        "portnox".to_string(),
        "aruba".to_string(),
    ];
    let cleaned = normalize_vendor_ids(&raw);
    assert_eq!(cleaned, vec!["portnox", "cisco", "aruba"]);
}
