use textkit::logger::init_logging;

#[test]
fn installs_subscriber_once() {
    assert!(init_logging().is_ok());
    tracing::info!("subscriber installed");
    assert!(init_logging().is_err());
}
