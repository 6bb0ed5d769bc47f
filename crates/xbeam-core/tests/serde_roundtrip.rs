use xbeam_core::errors::{BeamError, ErrorInfo};
use xbeam_core::{CoreTolerances, Probe, SimilarityTolerances, STRICT_EPSILON};

#[test]
fn error_round_trip_json() {
    let err = BeamError::OutOfRange(
        ErrorInfo::new("scan-point-index", "scan point index out of range")
            .with_context("index", "3")
            .with_context("count", "2"),
    );
    let json = serde_json::to_string_pretty(&err).expect("serialize");
    assert!(json.contains("\"family\": \"OutOfRange\""));
    let decoded: BeamError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn probe_uses_nexus_names() {
    let json = serde_json::to_string(&Probe::ALL).expect("serialize");
    assert_eq!(json, r#"["x-ray","electron","neutron"]"#);
    let decoded: Vec<Probe> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, Probe::ALL.to_vec());
    assert!(serde_json::from_str::<Probe>("\"gamma\"").is_err());
}

#[test]
fn tolerances_round_trip_json() {
    let tolerances = SimilarityTolerances {
        core: CoreTolerances::new(1e-4, 1e-3, 1e-2, 1e-1),
        flux: 3.0,
        ..SimilarityTolerances::default()
    };
    let json = serde_json::to_string(&tolerances).expect("serialize");
    let decoded = SimilarityTolerances::from_json_str(&json).expect("deserialize");
    assert_eq!(decoded, tolerances);
}

#[test]
fn partial_yaml_fills_defaults() {
    let yaml = "wavelength: 0.01\nflux: 2.5\n";
    let tolerances = SimilarityTolerances::from_yaml_str(yaml).expect("yaml");
    assert_eq!(tolerances.core.wavelength, 0.01);
    assert_eq!(tolerances.flux, 2.5);
    assert_eq!(tolerances.core.direction, STRICT_EPSILON);
    assert_eq!(tolerances.divergence, STRICT_EPSILON);
    assert_eq!(tolerances.sample_to_source_distance, STRICT_EPSILON);
}

#[test]
fn empty_json_object_is_default() {
    let tolerances = SimilarityTolerances::from_json_str("{}").expect("json");
    assert_eq!(tolerances, SimilarityTolerances::default());
}

#[test]
fn malformed_yaml_is_config_error() {
    let err = SimilarityTolerances::from_yaml_str("flux: [1, 2").unwrap_err();
    match err {
        BeamError::Config(info) => assert_eq!(info.code, "yaml-read"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn from_core_keeps_secondary_defaults() {
    let core = CoreTolerances::zero();
    let tolerances = SimilarityTolerances::from(core);
    assert_eq!(tolerances.core, core);
    assert_eq!(tolerances.transmission, STRICT_EPSILON);
}
