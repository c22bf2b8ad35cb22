use approx::assert_relative_eq;
use betonmix::{AmountProblem, MixError, MixTable, Volume};

#[test]
fn test_c20_cem1_two_cubic_meters() {
    let result = MixTable::builtin().compute("C20", "CEM 1", 2.0).unwrap();
    assert_eq!(result.grade, "C20");
    assert_eq!(result.cement_profile, "CEM 1");
    assert_eq!(result.volume, 2.0);
    assert_eq!(
        result.quantities,
        vec![
            ("cement".to_string(), 600.0),
            ("water".to_string(), 360.0),
            ("sand".to_string(), 1600.0),
            ("gravel".to_string(), 2400.0),
        ]
    );
    assert_relative_eq!(result.total_mass(), 4960.0);
}

#[test]
fn test_scales_every_entry() {
    let table = MixTable::builtin();
    let volumes = [0.001, 0.25, 1.0, 3.7, 125.0];
    for grade in table.grades() {
        for profile in table.cement_profiles(grade).unwrap() {
            let ratio = table.lookup(grade, profile).unwrap();
            for v in volumes {
                let result = table.compute(grade, profile, v).unwrap();
                assert_eq!(result.quantities.len(), ratio.len());
                for ((name, kg), (rname, per_m3)) in result.iter().zip(ratio.iter()) {
                    assert_eq!(name, rname);
                    assert_relative_eq!(kg, v * per_m3, max_relative = 1e-12);
                }
            }
        }
    }
}

#[test]
fn test_one_cubic_meter_equals_ratio() {
    let table = MixTable::builtin();
    let ratio = table.lookup("C45", "CEM 2").unwrap();
    let result = table.compute("C45", "CEM 2", 1.0).unwrap();
    for (name, kg) in ratio.iter() {
        assert_eq!(result.get(name), Some(kg));
    }
}

#[test]
fn test_uses_canonical_names() {
    let result = MixTable::builtin().compute("c25", "cem3", 1.0).unwrap();
    assert_eq!(result.grade, "C25");
    assert_eq!(result.cement_profile, "CEM 3");
    assert_eq!(result.get("CEMENT"), Some(330.0));
}

#[test]
fn test_zero_and_negative_volume() {
    let table = MixTable::builtin();
    for v in [0.0, -0.0, -1.0, -250.5] {
        let err = table.compute("C20", "CEM 1", v).unwrap_err();
        assert!(
            matches!(
                err,
                MixError::InvalidAmount {
                    problem: AmountProblem::NotPositive,
                    ..
                }
            ),
            "volume {v}: {err:?}"
        );
    }
}

#[test]
fn test_non_finite_volume() {
    let table = MixTable::builtin();
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(
            table.compute("C20", "CEM 1", v),
            Err(MixError::InvalidAmount { .. })
        ));
    }
}

#[test]
fn test_unknown_grade() {
    let err = MixTable::builtin().compute("C999", "CEM 1", 1.0).unwrap_err();
    assert_eq!(err, MixError::UnknownGrade("C999".to_string()));
}

#[test]
fn test_unknown_profile() {
    let err = MixTable::builtin().compute("C20", "CEM 9", 1.0).unwrap_err();
    assert!(matches!(err, MixError::UnknownCementProfile { .. }));
}

#[test]
fn test_text_volume() {
    let table = MixTable::builtin();
    let result = table.compute_text("C20", "CEM 1", " 2 ").unwrap();
    assert_eq!(result.get("cement"), Some(600.0));

    let comma = table.compute_text("C20", "CEM 1", "1,5").unwrap();
    assert_relative_eq!(comma.get("gravel").unwrap(), 1800.0);
}

#[test]
fn test_text_volume_not_a_number() {
    let err = MixTable::builtin().compute_text("C5", "CEM 1", "abc").unwrap_err();
    assert_eq!(
        err,
        MixError::InvalidAmount {
            input: "abc".to_string(),
            problem: AmountProblem::NotANumber,
        }
    );
}

#[test]
fn test_text_volume_empty() {
    let err = MixTable::builtin().compute_text("C5", "CEM 1", "").unwrap_err();
    assert!(matches!(
        err,
        MixError::InvalidAmount {
            problem: AmountProblem::Empty,
            ..
        }
    ));
}

#[test]
fn test_invalid_amount_checked_before_lookup() {
    let table = MixTable::builtin();
    assert!(matches!(
        table.compute("C999", "CEM 9", -1.0),
        Err(MixError::InvalidAmount { .. })
    ));
    assert!(matches!(
        table.compute_text("C999", "CEM 1", "abc"),
        Err(MixError::InvalidAmount { .. })
    ));
}

#[test]
fn test_compute_with_volume_type() {
    let v: Volume = "0.5".parse().unwrap();
    let result = MixTable::builtin().compute_volume("C10", "CEM 1", v).unwrap();
    assert_eq!(result.get("water"), Some(95.0));
}

#[test]
fn test_idempotent() {
    let table = MixTable::builtin();
    let a = table.compute("C35", "CEM 2", 0.3).unwrap();
    let b = table.compute("C35", "CEM 2", 0.3).unwrap();
    for ((_, x), (_, y)) in a.iter().zip(b.iter()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
    assert_eq!(a, b);
}
