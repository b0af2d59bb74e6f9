//! Parameter profiles loaded from configuration

use lwekem_api::Kem;
use lwekem_kem::LweKem;
use lwekem_params::{ParameterSet, LWEKEM_128, LWEKEM_192, LWEKEM_256};
use lwekem_tests::{run_trials, seeded_rng, TOY};

#[test]
fn profiles_survive_json() {
    for params in [LWEKEM_128, LWEKEM_192, LWEKEM_256, TOY] {
        let json = serde_json::to_string(&params).unwrap();
        let back: ParameterSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}

#[test]
fn instance_from_json_config() {
    let json = r#"{
        "security_level": 128,
        "degree": 256,
        "module_rank": 2,
        "modulus": 3329,
        "eta": 2
    }"#;
    let params: ParameterSet = serde_json::from_str(json).unwrap();
    assert_eq!(params, LWEKEM_128);
    let kem = LweKem::new(params).unwrap();
    assert_eq!(kem.name(), "LWEKEM-128");
    let report = run_trials(&kem, 20, &mut seeded_rng(3));
    assert_eq!(report.agreements, 20);
}

#[test]
fn invalid_configs_fail_at_construction() {
    let cases = [
        r#"{"security_level":0,"degree":256,"module_rank":2,"modulus":3328,"eta":2}"#,
        r#"{"security_level":0,"degree":200,"module_rank":2,"modulus":3329,"eta":2}"#,
        r#"{"security_level":0,"degree":1024,"module_rank":2,"modulus":3329,"eta":2}"#,
        r#"{"security_level":0,"degree":256,"module_rank":7,"modulus":3329,"eta":2}"#,
        r#"{"security_level":0,"degree":256,"module_rank":2,"modulus":3329,"eta":0}"#,
    ];
    for json in cases {
        let params: ParameterSet = serde_json::from_str(json).unwrap();
        let err = LweKem::new(params).unwrap_err();
        let core: lwekem_api::Error = err.into();
        assert!(core.is_configuration(), "{}: {}", json, core);
    }
}

#[test]
fn lookup_by_security_level() {
    assert_eq!(ParameterSet::for_security_level(192), Some(LWEKEM_192));
    assert_eq!(ParameterSet::for_security_level(64), None);
    assert_eq!(ParameterSet::default(), LWEKEM_128);
}
