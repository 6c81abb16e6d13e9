use std::collections::BTreeMap;

/// The decoded values of a successful parse, partitioned by kind and keyed
/// by parameter key. Constructed once per parse and never mutated after it
/// is returned. Enum values are the declared option KEY, not the literal
/// token that selected it.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ArgumentSet {
    pub strings: BTreeMap<&'static str, String>,
    pub integers: BTreeMap<&'static str, i64>,
    pub enums: BTreeMap<&'static str, &'static str>,
    pub booleans: BTreeMap<&'static str, bool>,
}
