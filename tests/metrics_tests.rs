use prometheus::Registry;
use textkit::metrics::KitMetrics;

#[test]
fn counter_increments() {
    let registry = Registry::new();
    let metrics = KitMetrics::new(&registry).unwrap();
    metrics.record("ciphers");
    metrics.record("ciphers");
    metrics.decode_failures.inc();
    assert_eq!(metrics.operations.with_label_values(&["ciphers"]).get(), 2);
    assert_eq!(metrics.decode_failures.get(), 1);
}

#[test]
fn double_registration_fails() {
    let registry = Registry::new();
    let _first = KitMetrics::new(&registry).unwrap();
    assert!(KitMetrics::new(&registry).is_err());
}
