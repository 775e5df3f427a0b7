//! 벤더/산업 참조 테이블의 무결성(키, 값 범위, 조회) 검증.

use nac_tco_analyzer::industry_db;
use nac_tco_analyzer::vendor_db;

#[test]
fn vendor_ids_are_unique_and_lowercase() {
    let vendors = vendor_db::vendors();
    assert!(!vendors.is_empty());
    for (i, v) in vendors.iter().enumerate() {
        assert_eq!(v.id, v.id.to_lowercase(), "{} id must be lowercase", v.id);
        for other in &vendors[i + 1..] {
            assert_ne!(v.id, other.id, "duplicate vendor id {}", v.id);
        }
    }
}

#[test]
fn vendor_values_stay_in_documented_ranges() {
    for v in vendor_db::vendors() {
        assert!(v.per_device_monthly_usd >= 0.0, "{}", v.id);
        assert!(
            (0.0..=1.0).contains(&v.implementation_cost_factor),
            "{}: factor {}",
            v.id,
            v.implementation_cost_factor
        );
        assert!(v.admin_hours_per_week_per_1k > 0.0, "{}", v.id);
        assert!((0.0..=100.0).contains(&v.automation_level_pct), "{}", v.id);
        assert!((0.0..=100.0).contains(&v.zero_trust_score), "{}", v.id);
        let rr = &v.risk_reduction;
        for pct in [
            rr.unauthorized_access_pct,
            rr.lateral_movement_pct,
            rr.data_breach_pct,
            rr.insider_threat_pct,
            rr.compliance_violation_pct,
        ] {
            assert!((0.0..=100.0).contains(&pct), "{}: risk {pct}", v.id);
        }
        assert!(!v.compliance.is_empty(), "{}: no frameworks", v.id);
        for c in v.compliance {
            assert!((0.0..=100.0).contains(&c.coverage_pct), "{}: {}", v.id, c.framework);
        }
        assert!(v.deployment_days > 0, "{}", v.id);
    }
}

#[test]
fn vendor_lookup_matches_id_or_name_case_insensitive() {
    let by_id = vendor_db::find_vendor("PORTNOX").expect("by id");
    assert_eq!(by_id.id, "portnox");
    let by_name = vendor_db::find_vendor("cisco ise").expect("by name");
    assert_eq!(by_name.id, "cisco");
    assert!(vendor_db::find_vendor("does-not-exist").is_none());
}

#[test]
fn aggregate_compliance_is_mean_of_rows() {
    let v = vendor_db::find_vendor("extreme").expect("extreme");
    // 74 + 72 → 73
    assert!((v.aggregate_compliance_pct() - 73.0).abs() < 1e-9);
    assert_eq!(v.framework_coverage("iso 27001"), Some(72.0));
    assert_eq!(v.framework_coverage("HIPAA"), None);
}

#[test]
fn promoted_vendor_covers_healthcare_requirements() {
    let portnox = vendor_db::find_vendor("portnox").expect("portnox");
    let healthcare = industry_db::find_industry("healthcare").expect("healthcare");
    for framework in healthcare.required_frameworks {
        assert!(
            portnox.framework_coverage(framework).is_some(),
            "portnox must cover {framework}"
        );
    }
}

#[test]
fn industry_keys_are_unique_and_values_sane() {
    let industries = industry_db::industries();
    assert!(!industries.is_empty());
    for (i, ind) in industries.iter().enumerate() {
        assert_eq!(ind.key, ind.key.to_lowercase());
        for other in &industries[i + 1..] {
            assert_ne!(ind.key, other.key, "duplicate industry key {}", ind.key);
        }
        assert!(ind.avg_breach_cost_usd > 0.0, "{}", ind.key);
        assert!(
            ind.breach_probability > 0.0 && ind.breach_probability <= 1.0,
            "{}: probability {}",
            ind.key,
            ind.breach_probability
        );
        assert!(ind.compliance_cost_multiplier > 0.0, "{}", ind.key);
        assert!(!ind.required_frameworks.is_empty(), "{}", ind.key);
    }
}

#[test]
fn unknown_industry_falls_back_to_general() {
    assert!(industry_db::find_industry("atlantis").is_none());
    let fallback = industry_db::industry_or_general("atlantis");
    assert_eq!(fallback.key, "general");
    // 키와 표시 이름 모두로 조회할 수 있다.
    let by_name = industry_db::find_industry("Financial Services").expect("by name");
    assert_eq!(by_name.key, "financial_services");
}

#[test]
fn dataset_version_is_stamped() {
    assert!(!vendor_db::DATASET_VERSION.is_empty());
}

#[test]
fn framework_alignment_marks_missing_coverage() {
    let microsoft = vendor_db::find_vendor("microsoft").expect("microsoft");
    let healthcare = industry_db::find_industry("healthcare").expect("healthcare");
    let alignment = industry_db::framework_alignment(microsoft, healthcare);
    assert_eq!(alignment.len(), healthcare.required_frameworks.len());
    let hipaa = alignment
        .iter()
        .find(|(fw, _)| *fw == "HIPAA")
        .expect("HIPAA row");
    assert_eq!(hipaa.1, None, "NPS는 HIPAA 커버리지가 없어야 한다");
}
