use std::collections::HashSet;
use textkit::generator::*;
use textkit::names::{Gender, NameResources};

#[test]
fn gen_id_properties() {
    let result = gen_id(15);
    assert_eq!(result.len(), 15);
    assert!(result.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(gen_id(DEFAULT_ID_LENGTH).len(), 12);
}

#[test]
fn gen_uuid_format() {
    let result = gen_uuid();
    assert_eq!(result.len(), 36);
    assert_eq!(result.matches('-').count(), 4);
    // version nibble
    assert_eq!(result.as_bytes()[14], b'4');
    let parsed = uuid::Uuid::parse_str(&result).unwrap();
    assert_eq!(parsed.get_version_num(), 4);
}

#[test]
fn gen_uuid_is_unique() {
    let ids: HashSet<String> = (0..100).map(|_| gen_uuid()).collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn gen_password_length_and_charset() {
    let result = gen_password(20);
    assert_eq!(result.chars().count(), 20);
    assert!(result.chars().all(|c| c.is_ascii_graphic()));
    assert_eq!(gen_password(DEFAULT_PASSWORD_LENGTH).len(), 12);
}

#[test]
fn gen_phone_format() {
    let phone = gen_phone();
    assert_eq!(phone.len(), 10);
    assert!(phone.chars().all(|c| c.is_ascii_digit()));
}

fn all_names(list: &textkit::names::NameList) -> HashSet<&str> {
    Gender::ALL
        .iter()
        .flat_map(|g| list.bucket(*g).iter().map(String::as_str))
        .collect()
}

#[test]
fn single_names_come_from_their_lists() {
    let names = NameResources::bundled();
    assert!(all_names(&names.first).contains(gen_first_name().as_str()));
    assert!(all_names(&names.middle).contains(gen_middle_name().as_str()));
    assert!(all_names(&names.last).contains(gen_last_name().as_str()));
}

#[test]
fn plural_variants_return_exact_amount() {
    assert_eq!(gen_first_names(5).len(), 5);
    assert_eq!(gen_middle_names(3).len(), 3);
    assert_eq!(gen_last_names(0).len(), 0);
    assert_eq!(gen_full_names(true, 7).len(), 7);
    assert!(gen_first_names(5).iter().all(|n| !n.is_empty()));
}

#[test]
fn gen_full_name_variants() {
    let simple = gen_full_name(false);
    let with_middle = gen_full_name(true);
    assert_eq!(simple.split_whitespace().count(), 2);
    assert_eq!(with_middle.split_whitespace().count(), 3);
}

#[test]
fn full_name_parts_share_a_bucket() {
    let names = NameResources::bundled();
    for _ in 0..50 {
        let full = gen_full_name(true);
        let parts: Vec<&str> = full.split(' ').collect();
        let same_bucket = Gender::ALL.iter().any(|g| {
            names.first.bucket(*g).iter().any(|n| n == parts[0])
                && names.middle.bucket(*g).iter().any(|n| n == parts[1])
                && names.last.bucket(*g).iter().any(|n| n == parts[2])
        });
        assert!(same_bucket, "{full} mixes buckets");
    }
}
