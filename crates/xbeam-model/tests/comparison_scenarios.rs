use nalgebra::Vector3;
use xbeam_core::{BeamModel, CoreTolerances, Probe, SimilarityTolerances};
use xbeam_model::{Beam, MonochromaticBeam, PolychromaticBeam};

fn mono() -> MonochromaticBeam {
    MonochromaticBeam::with_wavelength(Vector3::new(0.0, 0.0, 1.0), 1.0).unwrap()
}

#[test]
fn equality_is_reflexive_and_consistent() {
    let a = mono();
    let mut b = mono();
    assert_eq!(a, a.clone());
    b.set_flux(1.0);
    assert!(a != b);
    assert_eq!(a != b, !(a == b));
}

#[test]
fn equality_tolerates_sub_epsilon_noise() {
    let a = mono();
    let mut b = mono();
    b.set_wavelength(1.0 + 5e-7).unwrap();
    b.set_transmission(1.0 - 5e-7);
    assert_eq!(a, b);
    b.set_wavelength(1.0 + 5e-6).unwrap();
    assert_ne!(a, b);
}

#[test]
fn polarization_normal_is_compared_as_a_direction() {
    let a = mono();
    let mut b = mono();
    b.set_polarization_normal(Vector3::new(0.0, 3.0, 0.0)).unwrap();
    assert_eq!(b.polarization_normal(), Vector3::new(0.0, 3.0, 0.0));
    assert_eq!(a, b);
    assert!(a.is_similar_to(&b, &CoreTolerances::zero()));
    assert!(a.is_similar_to_with(&b, &SimilarityTolerances::zero()));
}

#[test]
fn non_unit_vectors_are_zero_tolerance_similar_to_their_clones() {
    for i in 1..200 {
        let t = f64::from(i);
        let v = Vector3::new(0.1 * t, 0.37 * t.sin(), 1.3 - 0.01 * t);
        let mut beam = mono();
        beam.set_polarization_normal(v).unwrap();
        beam.set_s0_at_scan_points(&[-v, v * 0.5]).unwrap();
        assert!(
            beam.is_similar_to(&beam.clone(), &CoreTolerances::zero()),
            "beam with vector {v:?} differs from its clone"
        );
    }
}

#[test]
fn probe_difference_breaks_equality_and_similarity() {
    let a = mono();
    let mut b = mono();
    b.set_probe(Probe::Electron);
    assert_ne!(a, b);
    assert!(!a.is_similar_to(&b, &CoreTolerances::default()));
    assert!(!a.is_similar_to_with(&b, &SimilarityTolerances::default()));
}

#[test]
fn flux_difference_obeys_secondary_tolerance() {
    let a = mono();
    let mut b = mono();
    b.set_flux(2.0);

    let tight = SimilarityTolerances {
        flux: 1.0,
        ..SimilarityTolerances::default()
    };
    let loose = SimilarityTolerances {
        flux: 3.0,
        ..SimilarityTolerances::default()
    };
    assert!(!a.is_similar_to_with(&b, &tight));
    assert!(a.is_similar_to_with(&b, &loose));
    assert!(a.is_similar_to(&b, &CoreTolerances::default()));
}

#[test]
fn wavelength_difference_obeys_core_tolerance() {
    let a = mono();
    let mut b = mono();
    b.set_wavelength(1.001).unwrap();
    assert!(!a.is_similar_to(&b, &CoreTolerances::default()));
    let loose = CoreTolerances {
        wavelength: 1e-2,
        ..CoreTolerances::default()
    };
    assert!(a.is_similar_to(&b, &loose));
}

#[test]
fn direction_difference_is_measured_as_an_angle() {
    let a = mono();
    let mut b = mono();
    let angle: f64 = 1e-3;
    b.set_direction(Vector3::new(angle.sin(), 0.0, angle.cos())).unwrap();
    assert_ne!(a, b);
    let tolerances = CoreTolerances {
        direction: 2e-3,
        ..CoreTolerances::default()
    };
    assert!(a.is_similar_to(&b, &tolerances));
    let tolerances = CoreTolerances {
        direction: 5e-4,
        ..CoreTolerances::default()
    };
    assert!(!a.is_similar_to(&b, &tolerances));
}

#[test]
fn scan_point_count_mismatch_fails_both_comparisons() {
    let mut a = mono();
    let mut b = mono();
    let s0 = Vector3::new(0.0, 0.0, -1.0);
    a.set_s0_at_scan_points(&[s0, s0, s0]).unwrap();
    b.set_s0_at_scan_points(&[s0, s0]).unwrap();
    assert_ne!(a, b);
    assert!(!a.is_similar_to(&b, &CoreTolerances::default()));
    assert!(!a.is_similar_to_with(&b, &SimilarityTolerances::default()));
}

#[test]
fn one_sided_scan_points_break_equality_in_both_directions() {
    let a = mono();
    let mut b = mono();
    b.set_s0_at_scan_points(&[Vector3::new(0.0, 0.0, -1.0)]).unwrap();
    assert_ne!(a, b);
    assert_ne!(b, a);
}

#[test]
fn matching_scan_points_compare_equal() {
    let mut a = mono();
    let mut b = mono();
    let points = [Vector3::new(0.0, 0.0, -1.0), Vector3::new(0.001, 0.0, -1.0)];
    a.set_s0_at_scan_points(&points).unwrap();
    b.set_s0_at_scan_points(&points).unwrap();
    assert_eq!(a, b);
    assert!(a.is_similar_to(&b, &CoreTolerances::default()));
}

#[test]
fn monochromatic_core_similarity_ignores_secondary_fields() {
    let a = mono();
    let mut b = mono();
    b.set_divergence(0.1);
    b.set_transmission(0.5);
    b.set_sample_to_source_distance(100.0).unwrap();
    assert!(a.is_similar_to(&b, &CoreTolerances::default()));
    assert!(!a.is_similar_to_with(&b, &SimilarityTolerances::default()));
}

#[test]
fn polychromatic_similarity_compares_divergence() {
    let a = PolychromaticBeam::new();
    let mut b = PolychromaticBeam::new();
    b.set_divergence(0.1);
    assert!(!a.is_similar_to(&b, &CoreTolerances::default()));
    let loose = SimilarityTolerances {
        divergence: 0.2,
        ..SimilarityTolerances::default()
    };
    assert!(a.is_similar_to_with(&b, &loose));
}

#[test]
fn polychromatic_similarity_ignores_wavelength_tolerance() {
    let a = PolychromaticBeam::new();
    let b = PolychromaticBeam::new();
    let tolerances = CoreTolerances {
        wavelength: 0.0,
        ..CoreTolerances::default()
    };
    assert_eq!(a, b);
    assert!(a.is_similar_to(&b, &tolerances));
}

#[test]
fn variant_mismatch_is_never_equal_or_similar() {
    let a = Beam::from(mono());
    let b = Beam::from(PolychromaticBeam::new());
    assert_ne!(a, b);
    assert!(!a.is_similar_to(&b, &CoreTolerances::default()));
    assert!(!a.is_similar_to_with(&b, &SimilarityTolerances::default()));
}

#[test]
fn same_variant_beams_delegate_comparisons() {
    let a = Beam::from(mono());
    let b = Beam::from(mono());
    assert_eq!(a, b);
    assert!(a.is_similar_to(&b, &CoreTolerances::default()));

    let c = Beam::from(PolychromaticBeam::new());
    let d = Beam::from(PolychromaticBeam::new());
    assert_eq!(c, d);
    assert!(c.is_similar_to_with(&d, &SimilarityTolerances::default()));
}
