// tests/integration/properties.rs
use proptest::prelude::*;
use sales_summary::run_in;

#[path = "../common/mod.rs"]
mod common;
use common::StoreWorkspace;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    // Whole-dollar totals keep f64 sums exact so equality is meaningful.
    #[test]
    fn totals_are_preserved_and_partitioned(
        files in proptest::collection::vec((0usize..4, 0u32..100_000), 0..12)
    ) {
        let ws = StoreWorkspace::new();
        for (i, (store, dollars)) in files.iter().enumerate() {
            ws.store_file(&format!("{}/{i}.json", 201 + store), &format!(r#"{{"Total": {dollars}}}"#));
        }

        let output = run_in(ws.path()).unwrap();
        let expected: f64 = files.iter().map(|(_, d)| f64::from(*d)).sum();

        prop_assert_eq!(output.aggregate.grand_total().amount(), expected);
        prop_assert_eq!(output.aggregate.stores().sum(), expected);
        prop_assert_eq!(output.aggregate.record_count(), files.len());

        let stores: Vec<usize> = files.iter().map(|(s, _)| *s).collect();
        let mut distinct = stores.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(output.aggregate.store_count(), distinct.len());
    }
}
