use crate::args::Filter;
use crate::measurement::Callable;

/// A single registered benchmark: a full instance name plus its callable.
///
/// Direct registrations and template instantiations end up as the same
/// kind of entry once instantiated — the distinction only matters at
/// registration time, when a template's bound arguments are captured into
/// the closure that becomes `callable`.
pub struct BenchmarkDescriptor {
    pub full_name: String,
    pub callable: Callable,
}

impl std::fmt::Debug for BenchmarkDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("BenchmarkDescriptor")
            .field("full_name", &self.full_name)
            .finish_non_exhaustive()
    }
}

/// The process-wide set of registered benchmarks, in declaration order.
///
/// There is deliberately no hidden static constructor or linker-collected
/// distributed slice here: a `Registry` is an ordinary value that the
/// caller builds up explicitly (typically from `main`, via the
/// registration macros in [`crate::macros`]) before handing it to the
/// dispatcher. This mirrors how `criterion::Criterion` and brunch's
/// `Bench` builder work: registration is a sequence of method calls on an
/// owned value, not a side effect of loading the binary.
#[derive(Default)]
pub struct Registry {
    entries: Vec<BenchmarkDescriptor>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Register a direct (non-templated) benchmark under `name`.
    ///
    /// Registering two benchmarks under the same full name is a programmer
    /// error, but this does not enforce uniqueness: both entries are kept,
    /// in declaration order, and both appear in `--list` output. It's only
    /// the results store (keyed by full name) where the second dispatch
    /// overwrites the first's entry; the ordered execution list still
    /// records both runs happening.
    pub fn register(&mut self, name: impl Into<String>, callable: Callable) {
        let full_name = name.into();
        self.entries.push(BenchmarkDescriptor { full_name, callable });
    }

    /// Register one instantiation of a template under
    /// `{template_name}/{instance}`.
    pub fn register_template(
        &mut self,
        template_name: &str,
        instance: impl std::fmt::Display,
        callable: Callable,
    ) {
        let full_name = format!("{template_name}/{instance}");
        self.entries.push(BenchmarkDescriptor { full_name, callable });
    }

    /// Iterate every descriptor in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &BenchmarkDescriptor> {
        self.entries.iter()
    }

    /// Iterate every descriptor mutably, in declaration order. The engine
    /// needs `&mut Callable` to invoke it.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut BenchmarkDescriptor> {
        self.entries.iter_mut()
    }

    /// Number of registered benchmarks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Print every full name in declaration order, one per line.
    pub fn list_all(&self) {
        for entry in &self.entries {
            println!("{}", entry.full_name);
        }
    }

    /// Print full names matching `filter`, in declaration order.
    pub fn list_filtered(&self, filter: &Filter) {
        for entry in &self.entries {
            if filter.include(&entry.full_name) {
                println!("{}", entry.full_name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Timers;

    fn noop() -> Callable {
        Box::new(|_: &mut Timers| {})
    }

    #[test]
    fn preserves_declaration_order() {
        let mut r = Registry::new();
        r.register("B", noop());
        r.register("A", noop());
        r.register_template("Fib", 19, noop());
        let names: Vec<_> = r.iter().map(|e| e.full_name.clone()).collect();
        assert_eq!(vec!["B", "A", "Fib/19"], names);
    }

    #[test]
    fn duplicate_names_both_appear_in_declaration_order() {
        let mut r = Registry::new();
        r.register("Noop", noop());
        r.register("Noop", noop());
        let names: Vec<_> = r.iter().map(|e| e.full_name.as_str()).collect();
        assert_eq!(vec!["Noop", "Noop"], names);
    }

    #[test]
    fn template_instances_get_distinct_full_names() {
        let mut r = Registry::new();
        r.register_template("Fib", 19, noop());
        r.register_template("Fib", 20, noop());
        assert_eq!(2, r.len());
        let names: Vec<_> = r.iter().map(|e| e.full_name.as_str()).collect();
        assert_eq!(vec!["Fib/19", "Fib/20"], names);
    }
}
