//! Property tests for bracket selection and table assembly.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Map, Value, json};

use payroll_reference::calculation::select_bracket;
use payroll_reference::error::EngineResult;
use payroll_reference::logging::RecordingLogger;
use payroll_reference::models::{
    BracketQuery, ComputationType, DatedConfigRecord, DatedEntry,
};
use payroll_reference::table::{BracketResolver, TableSource};

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

fn day(offset: u64) -> NaiveDate {
    epoch() + Days::new(offset)
}

fn entry(start: NaiveDate) -> DatedEntry {
    DatedEntry {
        date_start: start,
        computation_type: ComputationType::Maximum,
        label: start.to_string(),
    }
}

fn shares(offset: u64) -> Map<String, Value> {
    json!({"maximumEmployeeShare": offset, "maximumEmployerShare": offset * 2})
        .as_object()
        .unwrap()
        .clone()
}

/// Index entries in a caller-chosen order.
struct ShuffledSource {
    entries: Vec<DatedEntry>,
}

#[async_trait]
impl TableSource for ShuffledSource {
    async fn list_dated_entries(&self) -> EngineResult<Vec<DatedEntry>> {
        Ok(self.entries.clone())
    }

    async fn load_detail(&self, date_start: NaiveDate) -> EngineResult<Map<String, Value>> {
        let offset = (date_start - epoch()).num_days() as u64;
        Ok(shares(offset))
    }

    fn describe(&self) -> String {
        "shuffled".to_string()
    }
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn prop_table_is_strictly_descending(
        offsets in prop::collection::btree_set(0u64..20_000, 1..25),
        seed in any::<u64>(),
    ) {
        let mut entries: Vec<DatedEntry> = offsets.iter().map(|o| entry(day(*o))).collect();
        // Deterministic shuffle from the seed.
        let len = entries.len();
        for i in 0..len {
            let j = ((seed.wrapping_mul(6364136223846793005).wrapping_add(i as u64)) % len as u64) as usize;
            entries.swap(i, j);
        }
        let resolver = BracketResolver::new(
            Arc::new(ShuffledSource { entries }),
            Arc::new(RecordingLogger::new()),
        );

        let table = runtime().block_on(resolver.load_table()).unwrap();

        prop_assert_eq!(table.len(), offsets.len());
        for pair in table.windows(2) {
            prop_assert!(pair[0].date_start > pair[1].date_start);
        }
    }

    #[test]
    fn prop_selection_is_latest_start_not_after_query(
        offsets in prop::collection::btree_set(0u64..20_000, 1..25),
        query in 0u64..25_000,
    ) {
        let table: Vec<DatedConfigRecord> = offsets
            .iter()
            .rev()
            .map(|o| DatedConfigRecord::merge(entry(day(*o)), shares(*o)))
            .collect();
        let query_date = day(query);

        let selected = select_bracket(&table, query_date).unwrap();

        let expected = offsets
            .range(..=query)
            .next_back()
            .or_else(|| offsets.iter().next())
            .copied()
            .unwrap();
        prop_assert_eq!(selected.date_start, day(expected));
    }

    #[test]
    fn prop_shares_do_not_depend_on_salary(
        offset in 0u64..20_000,
        salaries in prop::collection::vec(0i64..100_000_000, 2..10),
    ) {
        let resolver = BracketResolver::new(
            Arc::new(ShuffledSource { entries: vec![entry(day(offset))] }),
            Arc::new(RecordingLogger::new()),
        );
        let rt = runtime();

        let results: BTreeSet<(Decimal, Decimal)> = salaries
            .iter()
            .map(|salary| {
                let query = BracketQuery::new(Decimal::from(*salary), day(offset));
                let result = rt.block_on(resolver.resolve_bracket(&query)).unwrap();
                (result.employee_share, result.employer_share)
            })
            .collect();

        prop_assert_eq!(results.len(), 1);
        prop_assert_eq!(
            results.into_iter().next().unwrap(),
            (Decimal::from(offset), Decimal::from(offset * 2))
        );
    }
}
