#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn explicit_filter_wins() {
        assert_eq!(
            compute_spec(true, false, Some("warn"), Some("page_state=trace")),
            "page_state=trace"
        );
    }

    #[test]
    fn flags_scope_to_our_crates() {
        let spec = compute_spec(false, true, None, None);
        for krate in our_crates() {
            assert!(spec.contains(&format!("{krate}=debug")), "{krate}");
        }
        assert!(spec.ends_with("hyper_util=off"));
        assert!(compute_spec(true, false, None, None).contains("event_engine=trace"));
    }

    #[test]
    fn level_is_lowercased() {
        assert!(level_spec_for("WARN").contains("pagert=warn"));
    }

    #[test]
    fn args_delegate_to_compute_spec() {
        let args = LogArgs {
            log_level: Some("error".into()),
            ..LogArgs::default()
        };
        assert_eq!(args.spec(), level_spec_for("error"));
    }
}
