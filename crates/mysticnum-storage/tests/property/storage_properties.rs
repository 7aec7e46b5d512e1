//! Property tests: retention window, newest-first ordering.

use proptest::prelude::*;

use mysticnum_core::models::{CalculationRecord, Gender};
use mysticnum_core::traits::ICalculationStorage;
use mysticnum_engine::MatrixEngine;
use mysticnum_knowledge::KnowledgeBase;
use mysticnum_storage::StorageEngine;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn history_never_exceeds_limit(limit in 1usize..8, saves in 0usize..20) {
        let kb = KnowledgeBase::default();
        let result = MatrixEngine::new().compute("15.06.1990", Gender::Female, &kb).unwrap();
        let rec = CalculationRecord::from_result(&result);
        let store = StorageEngine::open_in_memory().unwrap().with_history_limit(limit);

        let ids: Vec<String> = (0..saves).map(|_| store.save_calculation(&rec).unwrap()).collect();
        let history: Vec<String> = store
            .calculation_history()
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();

        prop_assert_eq!(history.len(), saves.min(limit));
        let expected: Vec<String> = ids.iter().rev().take(limit).cloned().collect();
        prop_assert_eq!(history, expected);
    }
}
