//! End-to-end engine tests over the bundled knowledge tables.

use mysticnum_core::errors::InvalidDateError;
use mysticnum_core::models::{Gender, ProgramKind, WarningLevel};
use mysticnum_core::AnalysisResult;
use mysticnum_engine::{apartment_number, car_number, render_grid, MatrixEngine};
use mysticnum_knowledge::KnowledgeBase;

fn kb() -> KnowledgeBase {
    KnowledgeBase::bundled().unwrap()
}

fn compute(date: &str, gender: Gender) -> AnalysisResult {
    MatrixEngine::new().compute(date, gender, &kb()).unwrap()
}

fn program_titles(r: &AnalysisResult) -> Vec<&str> {
    r.ancestral_programs.iter().map(|p| p.title.as_str()).collect()
}

fn warning_titles(r: &AnalysisResult) -> Vec<&str> {
    r.warnings.iter().map(|w| w.title.as_str()).collect()
}

#[test]
fn arithmetic_chain_before_2000() {
    let r = compute("15.06.1990", Gender::Female);

    assert_eq!(r.derived.first, 31);
    assert_eq!(r.derived.second, 4);
    assert_eq!(r.derived.addend, None);
    assert_eq!(r.derived.third, 29);
    assert_eq!(r.derived.fourth, 11);
    assert_eq!(r.derived.sequence(), vec![31, 4, 29, 11]);

    assert_eq!(
        r.digit_sequence,
        vec![1, 5, 0, 6, 1, 9, 9, 0, 3, 1, 4, 2, 9, 1, 1]
    );
}

#[test]
fn matrix_cells_before_2000() {
    let r = compute("15.06.1990", Gender::Female);

    assert_eq!(r.matrix.count(1), 5);
    assert_eq!(r.matrix.count(9), 3);
    assert_eq!(r.matrix.count(7), 0);
    assert_eq!(r.matrix.count(8), 0);
    assert_eq!(r.matrix.zeros(), 2);
    assert_eq!(r.matrix.cell(1), "11111");
    assert_eq!(r.matrix.cell(9), "999");
    assert_eq!(r.matrix.cell(7), "—");
    assert_eq!(r.matrix.total() as usize, r.digit_sequence.len());
}

#[test]
fn tasks_come_from_second_and_fourth() {
    let kb = kb();
    let r = MatrixEngine::new()
        .compute("15.06.1990", Gender::Female, &kb)
        .unwrap();

    use mysticnum_core::traits::KnowledgeSource;
    assert_eq!(r.personal_task, kb.task("4").unwrap());
    assert_eq!(r.ancestral_task, kb.task("11").unwrap());
}

#[test]
fn empty_luck_and_lineage_yield_three_entries() {
    let r = compute("15.06.1990", Gender::Female);

    assert_eq!(
        program_titles(&r),
        vec![
            "Broken lineage connection",
            "Broken luck channel",
            "Esoteric ability",
        ]
    );
    assert_eq!(r.ancestral_programs[0].kind, ProgramKind::Warning);
    assert_eq!(r.ancestral_programs[1].kind, ProgramKind::Critical);
    assert_eq!(r.ancestral_programs[2].kind, ProgramKind::Talent);

    assert_eq!(warning_titles(&r), vec!["Gratitude practice"]);
    assert_eq!(r.warnings[0].level, WarningLevel::Critical);
}

#[test]
fn births_from_2020_get_an_extra_nine() {
    let r = compute("01.01.2024", Gender::Male);

    assert_eq!(r.derived.first, 10);
    assert_eq!(r.derived.second, 1);
    assert_eq!(r.derived.addend, Some(19));
    assert_eq!(r.derived.third, 29);
    assert_eq!(r.derived.fourth, 11);
    assert_eq!(r.digit_sequence.len(), 18);
    assert_eq!(r.digit_sequence.last(), Some(&9));
    assert_eq!(r.matrix.count(1), 7);
    assert_eq!(r.matrix.count(9), 3);
    assert_eq!(r.matrix.zeros(), 4);

    let auto = r
        .warnings
        .iter()
        .filter(|w| w.title == "Auto-added digit 9")
        .count();
    assert_eq!(auto, 1);
    assert_eq!(r.warnings[0].level, WarningLevel::Info);
    assert_eq!(
        warning_titles(&r),
        vec!["Auto-added digit 9", "Gratitude practice"]
    );
}

#[test]
fn millennium_boundary_switches_formula() {
    let before = compute("31.12.1999", Gender::Female);
    assert_eq!(before.derived.addend, None);
    assert_eq!(before.derived.third, 35 - 2 * 3);
    assert_eq!(before.digit_sequence.len(), 15);

    let after = compute("01.01.2000", Gender::Female);
    assert_eq!(after.derived.addend, Some(19));
    assert_eq!(after.derived.third, 4 + 19);
    assert_eq!(after.derived.fourth, 5);
    assert_eq!(after.digit_sequence.len(), 15);
}

#[test]
fn extra_nine_boundary() {
    let before = compute("31.12.2019", Gender::Female);
    assert!(!warning_titles(&before).contains(&"Auto-added digit 9"));
    assert_eq!(before.digit_sequence.len(), 18);

    let after = compute("31.12.2020", Gender::Female);
    assert!(warning_titles(&after).contains(&"Auto-added digit 9"));
    assert_eq!(after.digit_sequence.len(), 17);
    assert_eq!(after.matrix.count(9), 2);
}

#[test]
fn strong_luck_and_money_programs() {
    let luck = compute("07.07.1977", Gender::Male);
    assert_eq!(luck.matrix.count(7), 4);
    assert_eq!(
        program_titles(&luck),
        vec!["Higher-power patronage", "Esoteric ability"]
    );
    assert!(luck.warnings.is_empty());

    let money = compute("28.08.1988", Gender::Male);
    assert_eq!(money.matrix.count(8), 5);
    assert_eq!(
        program_titles(&money),
        vec![
            "Teaching and mentorship code",
            "Broken luck channel",
            "Strong financial channel",
        ]
    );
    assert_eq!(
        warning_titles(&money),
        vec!["Gratitude practice", "Spiritual development needed"]
    );
}

#[test]
fn empty_four_and_two_warn_about_health_and_vampirism() {
    let r = compute("05.01.1900", Gender::Female);
    assert_eq!(r.matrix.count(4), 0);
    assert_eq!(r.matrix.count(2), 0);
    assert_eq!(r.matrix.count(7), 1);

    let warnings: Vec<(WarningLevel, &str)> = r
        .warnings
        .iter()
        .map(|w| (w.level, w.title.as_str()))
        .collect();
    assert_eq!(
        warnings,
        vec![
            (WarningLevel::Warning, "Weak health"),
            (WarningLevel::Info, "Energy vampirism"),
        ]
    );
    assert_eq!(
        program_titles(&r),
        vec!["Broken lineage connection", "Esoteric ability"]
    );
}

#[test]
fn warnings_keep_table_order_when_many_fire() {
    let r = compute("18.08.1980", Gender::Male);
    assert_eq!(
        warning_titles(&r),
        vec![
            "Gratitude practice",
            "Spiritual development needed",
            "Weak health",
            "Energy vampirism",
        ]
    );

    let r = compute("28.08.2088", Gender::Male);
    assert_eq!(
        warning_titles(&r),
        vec![
            "Auto-added digit 9",
            "Gratitude practice",
            "Spiritual development needed",
            "Weak health",
        ]
    );
}

#[test]
fn interpretations_use_capped_keys_and_gender_branch() {
    let female = compute("15.06.1990", Gender::Female);
    let male = compute("15.06.1990", Gender::Male);

    let one = &female.interpretations[&1];
    assert_eq!(one.key, "11111");
    assert_eq!(one.value, "11111");
    assert_eq!(one.count, 5);
    assert_ne!(one.text, male.interpretations[&1].text);

    let seven = &female.interpretations[&7];
    assert_eq!(seven.key, "70");
    assert_eq!(seven.value, "—");

    let b = compute("01.01.2024", Gender::Female);
    assert_eq!(b.interpretations[&1].key, "11111");
    assert_eq!(b.interpretations[&1].value, "1111111");
}

#[test]
fn missing_table_entries_are_omitted() {
    let sparse = KnowledgeBase::from_json_str(r#"{"matrix": {"11111": "many ones"}}"#).unwrap();
    let r = MatrixEngine::new()
        .compute("15.06.1990", Gender::Female, &sparse)
        .unwrap();

    assert_eq!(r.interpretations.len(), 1);
    assert_eq!(r.interpretations[&1].text, "many ones");
    assert_eq!(r.personal_task, "No data");
    assert_eq!(r.ancestral_task, "No data");
    assert_eq!(r.ancestral_programs.len(), 3);
}

#[test]
fn empty_tables_still_compute() {
    let empty = KnowledgeBase::default();
    let r = MatrixEngine::new()
        .compute("01.01.2024", Gender::Male, &empty)
        .unwrap();
    assert!(r.interpretations.is_empty());
    assert_eq!(r.matrix.count(1), 7);
}

#[test]
fn invalid_dates_are_rejected() {
    let kb = kb();
    let engine = MatrixEngine::new();
    for bad in ["", "abc", "1990-06-15", "15.6.1990", "15.06.1990 "] {
        assert!(
            matches!(
                engine.compute(bad, Gender::Female, &kb),
                Err(InvalidDateError::Malformed { .. })
            ),
            "{bad:?}"
        );
    }
    for bad in ["00.01.2000", "32.01.2000", "15.00.2000", "15.13.2000", "15.06.1899", "15.06.2101"] {
        assert!(
            matches!(
                engine.compute(bad, Gender::Female, &kb),
                Err(InvalidDateError::OutOfRange { .. })
            ),
            "{bad:?}"
        );
    }
}

#[test]
fn range_edges_are_accepted() {
    let low = compute("01.01.1900", Gender::Female);
    assert_eq!(low.derived.third, 10);
    let high = compute("31.12.2100", Gender::Female);
    assert_eq!(high.derived.addend, Some(19));
    // Month length is not checked.
    assert!(MatrixEngine::new()
        .compute("31.02.1990", Gender::Female, &kb())
        .is_ok());
}

#[test]
fn repeated_calls_are_identical() {
    let kb = kb();
    let engine = MatrixEngine::new();
    let a = engine.compute("15.06.1990", Gender::Female, &kb).unwrap();
    let _ = engine.compute("01.01.2024", Gender::Male, &kb).unwrap();
    let b = engine.compute(&a.date, Gender::Female, &kb).unwrap();
    assert_eq!(a, b);
}

#[test]
fn extra_numbers() {
    let r = compute("15.06.1990", Gender::Female);
    assert_eq!(r.birth_number, 6);
    assert_eq!(r.life_path, 2 + 0 + 1 + 1);

    let r = compute("07.07.1977", Gender::Female);
    assert_eq!(r.birth_number, 7);
}

#[test]
fn result_survives_json() {
    let r = compute("15.06.1990", Gender::Male);
    let json = serde_json::to_string(&r).unwrap();
    let back: AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(r, back);
}

#[test]
fn grid_layout() {
    let r = compute("15.06.1990", Gender::Female);
    let grid = render_grid(&r.matrix);
    let lines: Vec<&str> = grid.lines().collect();

    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with('┏'));
    assert!(lines[6].ends_with('┛'));
    assert_eq!(lines[1], "┃  11111  ┃    4    ┃    —    ┃");
    assert_eq!(lines[3], "┃    2    ┃    5    ┃    —    ┃");
    assert_eq!(lines[5], "┃    3    ┃    6    ┃   999   ┃");
}

#[test]
fn plate_and_apartment_vibrations() {
    let kb = kb();

    // А=1 1 2 3 В=2 С=9 7 7 -> 32 -> 5
    let plate = car_number("А123ВС77", &kb);
    assert_eq!(plate.number, 5);
    assert!(plate.text.is_some());

    let latin = car_number("a123bc77", &kb);
    assert_eq!(latin.number, 5);

    let apt = apartment_number("148", &kb);
    assert_eq!(apt.number, 4);
    assert_eq!(apt.input, "148");

    let nothing = car_number("---", &kb);
    assert_eq!(nothing.number, 0);
    assert_eq!(nothing.text, None);
}
