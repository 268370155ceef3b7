//! `{{key}}` placeholder substitution
//!
//! Templates are plain HTML with `{{fieldName}}` tokens. Substitution is a
//! single left-to-right pass: a replaced value is copied to the output as is
//! and never scanned again, so a value that happens to contain `{{other}}`
//! stays literal and the result does not depend on key order.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::record::ContractRecord;

/// Written in place of a field that is present but empty
pub const BLANK_PLACEHOLDER: &str = "__________";

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"\{\{([^{}]+)\}\}").unwrap();
}

/// Replace every token whose key is in `data`
///
/// Keys are matched literally and case-sensitively. Tokens for keys that
/// `data` does not contain are left in place.
pub fn replace_placeholders(template: &str, data: &ContractRecord) -> String {
    TOKEN_RE
        .replace_all(template, |caps: &Captures| match data.get(&caps[1]) {
            Some("") => BLANK_PLACEHOLDER.to_string(),
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Distinct token keys in order of first appearance
pub fn find_placeholders(template: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for caps in TOKEN_RE.captures_iter(template) {
        let key = &caps[1];
        if !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }
    keys
}

/// Keys the template asks for that `data` cannot fill
pub fn unresolved_placeholders(template: &str, data: &ContractRecord) -> Vec<String> {
    find_placeholders(template)
        .into_iter()
        .filter(|key| !data.contains_key(key))
        .collect()
}
