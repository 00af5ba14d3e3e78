use prometheus::Registry;
use std::fs;
use textkit::config::KitConfig;
use textkit::errors::KitError;
use textkit::names::{FIRST_NAMES_FILE, LAST_NAMES_FILE, MIDDLE_NAMES_FILE};
use textkit::TextKit;

#[test]
fn applies_configured_lengths() {
    let kit = TextKit::new(KitConfig {
        id_length: 16,
        password_length: 24,
        full_names_amount: 4,
        include_middle_name: true,
        ..KitConfig::default()
    })
    .unwrap();

    assert_eq!(kit.gen_id().len(), 16);
    assert_eq!(kit.gen_password().len(), 24);
    let names = kit.gen_full_names();
    assert_eq!(names.len(), 4);
    assert!(names.iter().all(|n| n.split(' ').count() == 3));
}

#[test]
fn hashes_with_configured_algorithm() {
    let kit = TextKit::new(KitConfig {
        hash_algorithm: "md5".into(),
        ..KitConfig::default()
    })
    .unwrap();
    assert_eq!(kit.hash("hello"), "5d41402abc4b2a76b9719d911017c592");
    assert_eq!(
        TextKit::default().hash("hello"),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
}

#[test]
fn rejects_invalid_config() {
    let err = TextKit::new(KitConfig {
        hash_algorithm: "nope".into(),
        ..KitConfig::default()
    })
    .err()
    .unwrap();
    assert!(matches!(err, KitError::Config(_)));

    let err = TextKit::new(KitConfig {
        id_length: 0,
        ..KitConfig::default()
    })
    .err()
    .unwrap();
    assert!(matches!(err, KitError::Config(_)));
}

#[test]
fn uses_names_dir() {
    let dir = tempfile::tempdir().unwrap();
    let list = r#"{"girls": ["Solo"], "boys": ["Solo"]}"#;
    for file in [FIRST_NAMES_FILE, MIDDLE_NAMES_FILE, LAST_NAMES_FILE] {
        fs::write(dir.path().join(file), list).unwrap();
    }
    let kit = TextKit::new(KitConfig {
        names_dir: Some(dir.path().to_path_buf()),
        ..KitConfig::default()
    })
    .unwrap();
    assert_eq!(kit.gen_full_name(), "Solo Solo");
}

#[test]
fn missing_names_dir_fails() {
    let err = TextKit::new(KitConfig {
        names_dir: Some("/nonexistent/textkit-names".into()),
        ..KitConfig::default()
    })
    .err()
    .unwrap();
    assert!(matches!(err, KitError::Names(_)));
}

#[test]
fn difficulty_threshold_is_configurable() {
    let text = "This is a simple sentence.";
    assert!(!TextKit::default().is_difficult(text));
    let lenient = TextKit::new(KitConfig {
        difficulty_grade: 1.0,
        ..KitConfig::default()
    })
    .unwrap();
    assert!(lenient.is_difficult(text));
}

#[test]
fn counts_operations_and_decode_failures() {
    let registry = Registry::new();
    let kit = TextKit::default().with_metrics(&registry).unwrap();

    assert_eq!(kit.decode_base64("aGk=").unwrap(), "hi");
    assert!(kit.decode_binary("2").is_err());
    assert!(kit.decode_hex("xyz").is_err());
    kit.gen_id();

    let metrics = kit.metrics().unwrap();
    assert_eq!(metrics.decode_failures.get(), 2);
    assert_eq!(metrics.operations.with_label_values(&["converters"]).get(), 3);
    assert_eq!(metrics.operations.with_label_values(&["generator"]).get(), 1);
    assert!(!registry.gather().is_empty());
}
