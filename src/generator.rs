//! Random identifiers, secrets and names.
//!
//! Every value is drawn from the operating system's CSPRNG.

use crate::names::NameResources;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::RngCore;
use uuid::Uuid;

pub const DEFAULT_ID_LENGTH: usize = 12;
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;
pub const DEFAULT_FULL_NAMES_AMOUNT: usize = 10;
pub const PHONE_LENGTH: usize = 10;

const DIGITS: &[u8] = b"0123456789";
const PASSWORD_CHARS: &[u8] = b"0123456789\
abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ\
!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

fn sample_from<R: RngCore + ?Sized>(charset: &[u8], length: usize, rng: &mut R) -> String {
    (0..length)
        .filter_map(|_| charset.choose(rng).map(|b| *b as char))
        .collect()
}

pub fn gen_id_with<R: RngCore + ?Sized>(length: usize, rng: &mut R) -> String {
    sample_from(DIGITS, length, rng)
}

pub fn gen_password_with<R: RngCore + ?Sized>(length: usize, rng: &mut R) -> String {
    sample_from(PASSWORD_CHARS, length, rng)
}

/// `length` random decimal digits. Leading zeros are allowed.
pub fn gen_id(length: usize) -> String {
    gen_id_with(length, &mut OsRng)
}

/// Random version 4 UUID in hyphenated form.
pub fn gen_uuid() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// `length` characters from digits, ASCII letters and ASCII punctuation.
pub fn gen_password(length: usize) -> String {
    gen_password_with(length, &mut OsRng)
}

pub fn gen_phone() -> String {
    gen_id(PHONE_LENGTH)
}

pub fn gen_first_name() -> String {
    NameResources::bundled().first_name(&mut OsRng)
}

pub fn gen_first_names(amount: usize) -> Vec<String> {
    (0..amount).map(|_| gen_first_name()).collect()
}

pub fn gen_middle_name() -> String {
    NameResources::bundled().middle_name(&mut OsRng)
}

pub fn gen_middle_names(amount: usize) -> Vec<String> {
    (0..amount).map(|_| gen_middle_name()).collect()
}

pub fn gen_last_name() -> String {
    NameResources::bundled().last_name(&mut OsRng)
}

pub fn gen_last_names(amount: usize) -> Vec<String> {
    (0..amount).map(|_| gen_last_name()).collect()
}

pub fn gen_full_name(middle: bool) -> String {
    NameResources::bundled().full_name(middle, &mut OsRng)
}

pub fn gen_full_names(middle: bool, amount: usize) -> Vec<String> {
    (0..amount).map(|_| gen_full_name(middle)).collect()
}
