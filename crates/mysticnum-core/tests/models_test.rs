use mysticnum_core::models::*;

#[test]
fn gender_parses_all_accepted_spellings() {
    for s in ["female", "F", "women", "женский", " Female "] {
        assert_eq!(s.parse::<Gender>().unwrap(), Gender::Female, "{s}");
    }
    for s in ["male", "m", "MEN", "мужской"] {
        assert_eq!(s.parse::<Gender>().unwrap(), Gender::Male, "{s}");
    }
    assert!("other".parse::<Gender>().is_err());
}

#[test]
fn birth_record_accepts_boundaries() {
    assert!(BirthRecord::new(1, 1, 1900, Gender::Female).is_ok());
    assert!(BirthRecord::new(31, 12, 2100, Gender::Male).is_ok());
}

#[test]
fn birth_record_rejects_out_of_range_fields() {
    assert!(BirthRecord::new(0, 1, 2000, Gender::Female).is_err());
    assert!(BirthRecord::new(32, 1, 2000, Gender::Female).is_err());
    assert!(BirthRecord::new(1, 13, 2000, Gender::Female).is_err());
    assert!(BirthRecord::new(1, 1, 1899, Gender::Female).is_err());
    assert!(BirthRecord::new(1, 1, 2101, Gender::Female).is_err());
}

#[test]
fn frequency_matrix_renders_repeated_digits_and_sentinel() {
    let m = FrequencyMatrix::tabulate(&[4, 4, 4, 1, 0, 0]);
    assert_eq!(m.cell(4), "444");
    assert_eq!(m.cell(1), "1");
    assert_eq!(m.cell(7), "—");
    assert_eq!(m.count(4), 3);
    assert_eq!(m.zeros(), 2);
    assert_eq!(m.total(), 6);
}

#[test]
fn interpretation_deserializes_plain_and_branched() {
    let plain: Interpretation = serde_json::from_str(r#""steady""#).unwrap();
    assert_eq!(plain.resolve(Gender::Male), "steady");

    let branched: Interpretation =
        serde_json::from_str(r#"{"women": "for her", "men": "for him"}"#).unwrap();
    assert_eq!(branched.resolve(Gender::Female), "for her");
    assert_eq!(branched.resolve(Gender::Male), "for him");
}

#[test]
fn derived_sequence_includes_addend_only_when_present() {
    let before = DerivedNumbers {
        first: 31,
        second: 4,
        addend: None,
        third: 29,
        fourth: 11,
    };
    assert_eq!(before.sequence(), vec![31, 4, 29, 11]);

    let after = DerivedNumbers {
        first: 10,
        second: 1,
        addend: Some(19),
        third: 29,
        fourth: 11,
    };
    assert_eq!(after.sequence(), vec![10, 1, 19, 29, 11]);
}

#[test]
fn practice_deserializes_with_minimal_fields() {
    let p: Practice = serde_json::from_str(r#"{"title": "Gratitude"}"#).unwrap();
    assert_eq!(p.title, "Gratitude");
    assert!(p.id.is_empty());
    assert_eq!(p.status, PracticeStatus::Active);
}
