//! Tests for tracing subscriber setup

#[cfg(test)]
mod tests {
    use braidmaze::io::logging::{build_filter, init_tracing};

    // Tests --verbose enables debug output for this crate
    // Verified by ignoring the verbose flag
    #[test]
    fn test_verbose_filter() {
        let filter = build_filter(true).to_string().to_lowercase();

        assert!(filter.contains("braidmaze=debug"), "{filter}");
    }

    // Tests a second subscriber installation is refused
    // Verified by installing with init instead of try_init
    #[test]
    fn test_init_tracing_only_once() {
        let _ = init_tracing(false);

        assert!(!init_tracing(true));
    }
}
