use std::collections::HashMap;

use crate::aggregate::BenchmarkResult;

/// Process-wide results: a map from full name to result, plus the order in
/// which benchmarks actually ran.
///
/// Writers iterate `execution_order`, not the map, so output is stable
/// regardless of hashmap iteration order.
#[derive(Default)]
pub struct ResultsStore {
    by_name: HashMap<String, BenchmarkResult>,
    execution_order: Vec<String>,
}

impl ResultsStore {
    pub fn new() -> ResultsStore {
        ResultsStore::default()
    }

    /// Insert a result, keyed by its own name, and append that name to the
    /// execution order.
    pub fn insert(&mut self, result: BenchmarkResult) {
        let name = result.name.clone();
        self.by_name.insert(name.clone(), result);
        self.execution_order.push(name);
    }

    pub fn get(&self, full_name: &str) -> Option<&BenchmarkResult> {
        self.by_name.get(full_name)
    }

    /// Iterate results in the order benchmarks actually ran.
    pub fn in_execution_order(&self) -> impl Iterator<Item = &BenchmarkResult> {
        self.execution_order.iter().map(move |name| &self.by_name[name])
    }

    pub fn len(&self) -> usize {
        self.execution_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.execution_order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str) -> BenchmarkResult {
        BenchmarkResult {
            name: name.to_string(),
            warmup_runs: 3,
            num_runs: 2,
            num_iterations: 20,
            lowest_rsd: 1.0,
            lowest_rsd_mean: 10.0,
            lowest_rsd_index: 1,
            warmup_execution_time: 10.0,
            mean_execution_time: 10.0,
            fastest_execution_time: 5,
            slowest_execution_time: 15,
            average_iteration_performance: 1e8,
            fastest_iteration_performance: 2e8,
            slowest_iteration_performance: 6e7,
            below_clock_resolution: false,
        }
    }

    #[test]
    fn execution_order_is_insertion_order_not_hash_order() {
        let mut store = ResultsStore::new();
        store.insert(result("Zebra"));
        store.insert(result("Apple"));
        store.insert(result("Mango"));
        let names: Vec<_> =
            store.in_execution_order().map(|r| r.name.as_str()).collect();
        assert_eq!(vec!["Zebra", "Apple", "Mango"], names);
    }

    #[test]
    fn get_looks_up_by_name() {
        let mut store = ResultsStore::new();
        store.insert(result("Noop"));
        assert!(store.get("Noop").is_some());
        assert!(store.get("Missing").is_none());
    }
}
