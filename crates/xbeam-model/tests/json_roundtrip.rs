use nalgebra::Vector3;
use xbeam_core::errors::BeamError;
use xbeam_core::{BeamModel, Probe};
use xbeam_model::{
    beam_from_json, beam_to_json, Beam, BeamProperties, MonochromaticBeam, PolychromaticBeam,
};

fn record_code(err: BeamError) -> (String, Option<String>) {
    match err {
        BeamError::Serde(info) => (info.code, info.context.get("cause").cloned()),
        other => panic!("expected serde error, got {other:?}"),
    }
}

#[test]
fn monochromatic_round_trip_keeps_scan_points() {
    let properties = BeamProperties::default()
        .with_probe(Probe::Electron)
        .with_divergence(0.01, 0.001)
        .with_sample_to_source_distance(1500.0);
    let mut mono =
        MonochromaticBeam::with_properties(Vector3::new(0.0, 0.1, 1.0), 0.0251, properties)
            .unwrap();
    mono.set_flux(3.5e11);
    mono.set_s0_at_scan_points(&[Vector3::new(0.0, 0.0, -39.8), Vector3::new(0.01, 0.0, -39.8)])
        .unwrap();
    let beam = Beam::from(mono);

    let json = beam_to_json(&beam).unwrap();
    assert!(json.contains("\"kind\": \"monochromatic\""));
    assert!(json.contains("\"probe\": \"electron\""));

    let restored = beam_from_json(&json).unwrap();
    assert_eq!(restored, beam);
    assert_eq!(restored.num_scan_points().unwrap(), 2);
    assert_eq!(restored.probe(), Probe::Electron);
}

#[test]
fn polychromatic_round_trip_has_no_wavelength() {
    let beam = Beam::from(PolychromaticBeam::with_distance(Vector3::z(), 20.0).unwrap());
    let json = beam_to_json(&beam).unwrap();
    assert!(json.contains("\"kind\": \"polychromatic\""));
    assert!(!json.contains("wavelength"));
    assert!(!json.contains("s0_at_scan_points"));

    let restored = beam_from_json(&json).unwrap();
    assert!(restored.is_polychromatic());
    assert_eq!(restored, beam);
}

fn record(kind: &str, extra: &str, direction: &str, probe: &str) -> String {
    format!(
        r#"{{
            "kind": "{kind}",{extra}
            "direction": {direction},
            "divergence": 0.0,
            "sigma_divergence": 0.0,
            "polarization_normal": [0.0, 1.0, 0.0],
            "polarization_fraction": 0.5,
            "flux": 0.0,
            "transmission": 1.0,
            "probe": "{probe}",
            "sample_to_source_distance": 0.0
        }}"#
    )
}

#[test]
fn hand_written_record_decodes() {
    let json = record("monochromatic", r#" "wavelength": 2.0,"#, "[0.0, 0.0, 3.0]", "neutron");
    let beam = beam_from_json(&json).unwrap();
    assert_eq!(beam.wavelength().unwrap(), 2.0);
    assert_eq!(beam.sample_to_source_direction(), Vector3::z());
    assert_eq!(beam.probe(), Probe::Neutron);
    assert!(beam.as_monochromatic().is_some());
}

#[test]
fn zero_direction_is_rejected() {
    let json = record("polychromatic", "", "[0.0, 0.0, 0.0]", "x-ray");
    let (code, cause) = record_code(beam_from_json(&json).unwrap_err());
    assert_eq!(code, "invalid-record");
    assert_eq!(cause.as_deref(), Some("zero-length-vector"));
}

#[test]
fn unknown_probe_is_rejected() {
    let json = record("polychromatic", "", "[0.0, 0.0, 1.0]", "proton");
    let (code, cause) = record_code(beam_from_json(&json).unwrap_err());
    assert_eq!(code, "invalid-record");
    assert_eq!(cause.as_deref(), Some("unknown-probe"));
}

#[test]
fn polychromatic_record_with_wavelength_is_rejected() {
    let json = record("polychromatic", r#" "wavelength": 1.0,"#, "[0.0, 0.0, 1.0]", "x-ray");
    let (code, _) = record_code(beam_from_json(&json).unwrap_err());
    assert_eq!(code, "invalid-record");
}

#[test]
fn polychromatic_record_with_scan_points_is_rejected() {
    let json = record(
        "polychromatic",
        r#" "s0_at_scan_points": [[0.0, 0.0, -1.0]],"#,
        "[0.0, 0.0, 1.0]",
        "x-ray",
    );
    let err = beam_from_json(&json).unwrap_err();
    assert_eq!(err.info().context.get("count").map(String::as_str), Some("1"));
    assert_eq!(record_code(err).0, "invalid-record");
}

#[test]
fn monochromatic_record_without_wavelength_is_rejected() {
    let json = record("monochromatic", "", "[0.0, 0.0, 1.0]", "x-ray");
    let (code, _) = record_code(beam_from_json(&json).unwrap_err());
    assert_eq!(code, "invalid-record");
}

#[test]
fn malformed_json_is_a_decode_error() {
    let (code, _) = record_code(beam_from_json("{ not json").unwrap_err());
    assert_eq!(code, "json-decode");
    let unknown_kind = record("laue", "", "[0.0, 0.0, 1.0]", "x-ray");
    let (code, _) = record_code(beam_from_json(&unknown_kind).unwrap_err());
    assert_eq!(code, "json-decode");
}
