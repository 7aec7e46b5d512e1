use mysticnum_core::models::Gender;
use mysticnum_engine::derive::digit_sum;
use mysticnum_engine::MatrixEngine;
use mysticnum_knowledge::KnowledgeBase;
use proptest::prelude::*;

fn date(day: u32, month: u32, year: u32) -> String {
    format!("{day:02}.{month:02}.{year:04}")
}

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Female), Just(Gender::Male)]
}

proptest! {
    #[test]
    fn compute_is_deterministic(
        day in 1u32..=31, month in 1u32..=12, year in 1900u32..=2100, g in gender()
    ) {
        let kb = KnowledgeBase::bundled().unwrap();
        let engine = MatrixEngine::new();
        let s = date(day, month, year);
        let a = engine.compute(&s, g, &kb).unwrap();
        let b = engine.compute(&s, g, &kb).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn counts_cover_the_whole_sequence(
        day in 1u32..=31, month in 1u32..=12, year in 1900u32..=2100
    ) {
        let kb = KnowledgeBase::default();
        let r = MatrixEngine::new().compute(&date(day, month, year), Gender::Female, &kb).unwrap();
        prop_assert!(r.digit_sequence.iter().all(|&d| d <= 9));
        prop_assert_eq!(r.matrix.total() as usize, r.digit_sequence.len());
        for pos in 1u8..=9 {
            let cell = r.matrix.cell(pos);
            let count = r.matrix.count(pos) as usize;
            if count == 0 {
                prop_assert_eq!(cell, "—");
            } else {
                prop_assert_eq!(cell.len(), count);
            }
        }
    }

    #[test]
    fn derived_chain_holds(
        day in 1u32..=31, month in 1u32..=12, year in 1900u32..=2100
    ) {
        let kb = KnowledgeBase::default();
        let r = MatrixEngine::new().compute(&date(day, month, year), Gender::Male, &kb).unwrap();
        let d = r.derived;
        prop_assert_eq!(d.second, digit_sum(i64::from(d.first)));
        prop_assert_eq!(d.fourth, digit_sum(d.third));
        prop_assert_eq!(d.addend.is_some(), year >= 2000);
        if let Some(addend) = d.addend {
            prop_assert_eq!(d.third, i64::from(d.first + addend));
        }
    }

    #[test]
    fn extra_nine_only_from_2020(
        day in 1u32..=31, month in 1u32..=12, year in 2000u32..=2100
    ) {
        let kb = KnowledgeBase::default();
        let r = MatrixEngine::new().compute(&date(day, month, year), Gender::Female, &kb).unwrap();
        let flagged = r.warnings.iter().filter(|w| w.title == "Auto-added digit 9").count();
        let date_and_derived: usize = 8 + r
            .derived
            .sequence()
            .iter()
            .map(|n| n.unsigned_abs().to_string().len())
            .sum::<usize>();
        if year >= 2020 {
            prop_assert_eq!(flagged, 1);
            prop_assert_eq!(r.digit_sequence.len(), date_and_derived + 1);
        } else {
            prop_assert_eq!(flagged, 0);
            prop_assert_eq!(r.digit_sequence.len(), date_and_derived);
        }
    }

    #[test]
    fn malformed_input_never_panics(s in ".{0,16}") {
        let kb = KnowledgeBase::default();
        let _ = MatrixEngine::new().compute(&s, Gender::Female, &kb);
    }
}
