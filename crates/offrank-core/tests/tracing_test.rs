use offrank_core::config::OffrankConfig;
use offrank_core::tracing::{
    config_filter, init_tracing, init_tracing_from_config, init_tracing_with_filter,
};

#[test]
fn config_filter_uses_logging_section() {
    let config = OffrankConfig::from_toml("[logging]\nfilter = \"offrank=debug\"\n").unwrap();
    assert_eq!(config_filter(&config).to_string(), "offrank=debug");
}

#[test]
fn config_filter_defaults_without_logging_section() {
    let config = OffrankConfig::default();
    assert_eq!(config_filter(&config).to_string(), "offrank=info");
}

#[test]
fn unparsable_filter_falls_back_to_default() {
    let config = OffrankConfig::from_toml("[logging]\nfilter = \"offrank=loud\"\n").unwrap();
    assert_eq!(config_filter(&config).to_string(), "offrank=info");
}

#[test]
fn init_is_idempotent() {
    let config = OffrankConfig::from_toml("[logging]\nfilter = \"offrank=trace\"\n").unwrap();
    init_tracing_from_config(&config);
    init_tracing();
    init_tracing_with_filter("offrank=warn");

    // Events after init must not panic, including the parser's trace event.
    let score = offrank_core::score_str(Some("0 0 0 5 1 2"), None).unwrap();
    assert_eq!(score.value(), 5);
}
