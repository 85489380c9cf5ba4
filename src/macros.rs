/// Register a plain benchmark under `$name`, wrapping `$body` as its
/// callable.
///
/// `$body` is any expression implementing `FnMut(&mut $crate::Timers)`; it
/// is boxed and handed to the registry as-is. This expands to a single
/// `registry.register(...)` call — it exists purely to save the caller
/// from writing out the `Box::new` and the closure signature at each call
/// site, not to hide any process-wide side effect. Compare with the
/// upstream `BENCHMARK` macro, which instead declares a file-scoped struct
/// whose constructor performs the registration before `main` runs; this
/// crate registers explicitly, from an owned [`Registry`](crate::Registry)
/// value the caller builds in `main`.
#[macro_export]
macro_rules! bench {
    ($registry:expr, $name:expr, $body:expr $(,)?) => {{
        let callable: $crate::Callable = ::std::boxed::Box::new($body);
        $registry.register($name, callable);
    }};
}

/// Register one instantiation of a parameterized benchmark template.
///
/// `$instance` becomes the suffix of the full name (`{$name}/{$instance}`);
/// `$body` is a closure that has already captured whatever bound arguments
/// this instantiation needs. Call this once per desired parameter tuple —
/// the Rust rendition of `REGISTER_BENCHMARK`/`BENCHMARK_TEMPLATE`, which
/// in the original binds a tuple behind a `void*` and re-reads it inside
/// the callable; here the closure's captures play that role directly.
#[macro_export]
macro_rules! bench_template {
    ($registry:expr, $name:expr, $instance:expr, $body:expr $(,)?) => {{
        let callable: $crate::Callable = ::std::boxed::Box::new($body);
        $registry.register_template($name, $instance, callable);
    }};
}

/// Register the same template body against each value in a list of
/// instances, building the closure fresh for each one.
///
/// `$make_body` is a function or closure of one argument (the instance
/// value, cloned) that returns the callable closure. This is the Rust
/// counterpart to `REGISTER_BENCHMARK_FOR_EACH`.
#[macro_export]
macro_rules! bench_template_for_each {
    ($registry:expr, $name:expr, [$($instance:expr),+ $(,)?], $make_body:expr $(,)?) => {{
        $(
            let callable: $crate::Callable = ::std::boxed::Box::new($make_body($instance));
            $registry.register_template($name, $instance, callable);
        )+
    }};
}

#[cfg(test)]
mod tests {
    use crate::measurement::Timers;
    use crate::registry::Registry;

    #[test]
    fn bench_macro_registers_one_entry() {
        let mut r = Registry::new();
        bench!(r, "Noop", |_t: &mut Timers| {});
        assert_eq!(1, r.len());
    }

    #[test]
    fn bench_template_for_each_registers_all_instances() {
        let mut r = Registry::new();
        bench_template_for_each!(
            r,
            "Fib",
            [19, 20, 21],
            |n: u32| move |_t: &mut Timers| {
                let _ = n;
            }
        );
        assert_eq!(3, r.len());
        let names: Vec<_> = r.iter().map(|e| e.full_name.clone()).collect();
        assert_eq!(vec!["Fib/19", "Fib/20", "Fib/21"], names);
    }
}
