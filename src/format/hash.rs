// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Address fragment codec.
//!
//! A fragment is a sequence of `#key=value` entries. Array values are joined with `_`. Decoding
//! is string-level only: callers coerce each field to its own type.

use std::collections::BTreeMap;

use smallvec::SmallVec;
use smol_str::SmolStr;

pub const ENTRY_DELIMITER: char = '#';
pub const LIST_JOINER: char = '_';

const KEY_VALUE_SEPARATOR: char = '=';
const IMPLICIT_VALUE: &str = "1";
const DEFAULT_VALUE: &str = "0";

/// Array values hold up to four items inline (viewport has three, highlight rect four).
pub type HashList = SmallVec<[String; 4]>;

/// Decoded keys mapped to their string values.
pub type HashQuery = BTreeMap<SmolStr, HashValue>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashValue {
    Scalar(String),
    List(HashList),
}

impl HashValue {
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Numbers use the shortest representation that parses back to the same value.
    pub fn numbers(values: &[f64]) -> Self {
        Self::List(values.iter().map(|value| value.to_string()).collect())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(value) => value.is_empty(),
            Self::List(items) => items.is_empty(),
        }
    }

    /// The scalar, or the first item of a list.
    pub fn first(&self) -> &str {
        match self {
            Self::Scalar(value) => value,
            Self::List(items) => items.first().map(String::as_str).unwrap_or(""),
        }
    }

    pub fn items(&self) -> Vec<&str> {
        match self {
            Self::Scalar(value) => vec![value.as_str()],
            Self::List(items) => items.iter().map(String::as_str).collect(),
        }
    }

    pub fn joined(&self) -> String {
        match self {
            Self::Scalar(value) => value.clone(),
            Self::List(items) => {
                let mut out = String::new();
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(LIST_JOINER);
                    }
                    out.push_str(item);
                }
                out
            }
        }
    }
}

/// Read access to the values that get encoded into an address.
pub trait HashSource {
    fn hash_value(&self, key: &str) -> Option<HashValue>;
}

impl HashSource for HashQuery {
    fn hash_value(&self, key: &str) -> Option<HashValue> {
        self.get(key).cloned()
    }
}

/// Serializes `keys` (in order) as `key=value` entries separated by `delimiter`.
///
/// Absent and empty values encode as `0`.
pub fn encode<S>(keys: &[&str], state: &S, delimiter: char) -> String
where
    S: HashSource + ?Sized,
{
    let mut out = String::new();
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        out.push_str(key);
        out.push(KEY_VALUE_SEPARATOR);
        match state.hash_value(key).filter(|value| !value.is_empty()) {
            Some(value) => out.push_str(&value.joined()),
            None => out.push_str(DEFAULT_VALUE),
        }
    }
    out
}

/// Builds a full fragment (`#k=v#k=v`), or an empty string when there are no keys.
pub fn encode_fragment<S>(keys: &[&str], state: &S) -> String
where
    S: HashSource + ?Sized,
{
    let hash = encode(keys, state, ENTRY_DELIMITER);
    if hash.is_empty() {
        return hash;
    }
    format!("{ENTRY_DELIMITER}{hash}")
}

/// Parses `key=value` entries; empty entries are skipped.
///
/// The value is everything after the first `=`. A missing or empty value decodes as `1`. Values
/// containing `_` become lists.
pub fn decode<'a, I>(entries: I) -> HashQuery
where
    I: IntoIterator<Item = &'a str>,
{
    let mut query = HashQuery::new();
    for entry in entries {
        if entry.is_empty() {
            continue;
        }
        let (key, value) = entry.split_once(KEY_VALUE_SEPARATOR).unwrap_or((entry, ""));
        let value = if value.is_empty() { IMPLICIT_VALUE } else { value };

        let mut parts = value.split(LIST_JOINER);
        let decoded = match (parts.next(), parts.next()) {
            (Some(single), None) => HashValue::scalar(single),
            _ => HashValue::list(value.split(LIST_JOINER)),
        };
        query.insert(SmolStr::new(key), decoded);
    }
    query
}

/// Decodes an address fragment, with or without its leading `#`.
pub fn decode_fragment(fragment: &str) -> HashQuery {
    let body = fragment.strip_prefix(ENTRY_DELIMITER).unwrap_or(fragment);
    decode(body.split(ENTRY_DELIMITER))
}
