use std::fmt;
use std::ops::Deref;

use crate::error::HexdictError;

// HexKey is a `0x` prefixed hexadecimal literal, kept exactly as written.
// Case is not normalized so `0xab12` and `0xAB12` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexKey(String);

impl Deref for HexKey {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for HexKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for HexKey {
    type Error = HexdictError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        HexKey::new(s)
    }
}

impl TryFrom<&str> for HexKey {
    type Error = HexdictError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        HexKey::new(s)
    }
}

impl HexKey {
    const PREFIX: &'static str = "0x";

    /// Construct HexKey from given string.
    pub fn new(s: impl Into<String>) -> Result<Self, HexdictError> {
        let s = s.into();
        if HexKey::is_hex_literal(&s) {
            Ok(Self(s))
        } else {
            Err(HexdictError::InvalidKey { key: s })
        }
    }

    // Caller guarantees `s` is a hex literal, e.g. a regex capture.
    pub(crate) fn new_unchecked(s: impl Into<String>) -> Self {
        let s = s.into();
        debug_assert!(HexKey::is_hex_literal(&s));
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    fn is_hex_literal(s: &str) -> bool {
        match s.strip_prefix(HexKey::PREFIX) {
            Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()),
            None => false,
        }
    }
}

/// One key value pair extracted from a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: HexKey,
    value: String,
}

impl Entry {
    pub fn new(key: HexKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    pub fn key(&self) -> &HexKey {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_key_value(self) -> (HexKey, String) {
        (self.key, self.value)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} => {}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_key_accepts_literals() {
        for s in ["0x3400", "0xab12", "0xAB12", "0x0", "0xdeadBEEF"] {
            let key = HexKey::new(s).unwrap();
            assert_eq!(key.as_str(), s);
        }
    }

    #[test]
    fn hex_key_rejects_non_literals() {
        for s in ["", "0x", "3400", "0X3400", "0x34g0", " 0x3400", "0x3400 "] {
            match HexKey::new(s) {
                Err(err @ HexdictError::InvalidKey { .. }) => assert_eq!(
                    err.to_string(),
                    format!("key must be a 0x prefixed hex literal. got {}", s)
                ),
                other => panic!("{:?} should be rejected, got {:?}", s, other),
            }
        }
    }

    #[test]
    fn entry_into_key_value() {
        let entry = Entry::new(HexKey::try_from("0x4E00").unwrap(), "yī");

        assert_eq!(entry.to_string(), "0x4E00 => yī");

        let (key, value) = entry.into_key_value();
        assert_eq!(key.into_string(), "0x4E00");
        assert_eq!(value, "yī");
    }
}
