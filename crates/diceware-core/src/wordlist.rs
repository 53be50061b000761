//! Word store: the static key-to-word table.
//!
//! Loaded once at startup and read-only afterwards. A complete store
//! holds exactly one word for each of the 7,776 keys reachable by five
//! six-sided dice; a lookup miss inside that range means the list is
//! corrupt or incomplete, which callers treat as fatal.

use std::collections::HashMap;

use crate::{DICE_PER_ROW, FACE_COUNT, LookupKey, WORDLIST_LEN, WordStoreError};

/// Read-only key-to-word table (diceware word list).
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    words: HashMap<LookupKey, String>,
}

impl WordStore {
    /// Build a store from `(key, word)` records.
    ///
    /// # Errors
    ///
    /// Returns [`WordStoreError::DuplicateKey`] if a key appears twice
    /// and [`WordStoreError::EmptyWord`] if a word is empty.
    pub fn from_records(
        records: impl IntoIterator<Item = (LookupKey, String)>,
    ) -> Result<Self, WordStoreError> {
        let mut words = HashMap::new();
        for (key, word) in records {
            if word.is_empty() {
                return Err(WordStoreError::EmptyWord(key));
            }
            if words.insert(key, word).is_some() {
                return Err(WordStoreError::DuplicateKey(key));
            }
        }
        Ok(Self { words })
    }

    /// Parse a store from EFF word list text.
    ///
    /// Each non-blank line must hold exactly two whitespace-separated
    /// columns: the key digits and the word. Logs a warning if the
    /// parsed store does not cover the full standard dice range.
    ///
    /// # Errors
    ///
    /// Returns [`WordStoreError::MalformedLine`] for a line that does
    /// not fit the format, plus the record-level errors of
    /// [`WordStore::from_records`].
    pub fn parse(text: &str) -> Result<Self, WordStoreError> {
        let mut records = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let line_no = idx + 1;
            let mut columns = line.split_whitespace();
            let (Some(digits), Some(word), None) =
                (columns.next(), columns.next(), columns.next())
            else {
                return Err(WordStoreError::MalformedLine { line_no });
            };
            let key: LookupKey =
                digits.parse().map_err(|_| WordStoreError::MalformedLine { line_no })?;
            records.push((key, word.to_owned()));
        }

        let store = Self::from_records(records)?;
        if !store.is_complete() {
            tracing::warn!(
                entries = store.len(),
                expected = WORDLIST_LEN,
                "word list does not cover the full dice range"
            );
        }
        Ok(store)
    }

    /// Look up the word for a key.
    ///
    /// # Errors
    ///
    /// Returns [`WordStoreError::MissingKey`] when the key has no
    /// entry. For keys produced by real dice rolls against a complete
    /// list this is unreachable; when it does happen it is a
    /// data-integrity fault, not a user mistake.
    pub fn word(&self, key: LookupKey) -> Result<&str, WordStoreError> {
        self.words.get(&key).map(String::as_str).ok_or(WordStoreError::MissingKey(key))
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether every key reachable by five six-sided dice is present.
    pub fn is_complete(&self) -> bool {
        self.len() == WORDLIST_LEN && standard_keys().all(|key| self.words.contains_key(&key))
    }
}

/// All keys reachable by the standard five-dice, six-face rolls.
///
/// Handy for completeness checks and for building synthetic stores in
/// tests; the order is unspecified beyond being deterministic.
pub fn standard_keys() -> impl Iterator<Item = LookupKey> {
    let faces = LookupKey::from(FACE_COUNT);
    (0..WORDLIST_LEN as LookupKey).map(move |mut ordinal| {
        let mut key = 0;
        for _ in 0..DICE_PER_ROW {
            key = key * 10 + (ordinal % faces + 1);
            ordinal /= faces;
        }
        key
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Synthetic complete list: every standard key mapped to `w<key>`.
    fn complete_store() -> WordStore {
        WordStore::from_records(standard_keys().map(|key| (key, format!("w{key}")))).unwrap()
    }

    #[test]
    fn complete_store_covers_every_roll() {
        let store = complete_store();
        assert_eq!(store.len(), WORDLIST_LEN);
        assert!(store.is_complete());
        for key in standard_keys() {
            assert!(store.word(key).is_ok(), "key {key} missing");
        }
    }

    #[test]
    fn lookup_miss_is_typed() {
        let store = WordStore::from_records([(11111, "abacus".to_owned())]).unwrap();
        assert_eq!(store.word(11112).unwrap_err(), WordStoreError::MissingKey(11112));
    }

    #[test]
    fn duplicate_key_rejected() {
        let records = [(11111, "abacus".to_owned()), (11111, "abdomen".to_owned())];
        let err = WordStore::from_records(records).unwrap_err();
        assert_eq!(err, WordStoreError::DuplicateKey(11111));
    }

    #[test]
    fn empty_word_rejected() {
        let err = WordStore::from_records([(11111, String::new())]).unwrap_err();
        assert_eq!(err, WordStoreError::EmptyWord(11111));
    }

    #[test]
    fn parse_reads_two_column_lines() {
        let store = WordStore::parse("11111\tabacus\n11112 abdomen\n\n11113   abdominal\n").unwrap();
        assert_eq!(store.word(11111).unwrap(), "abacus");
        assert_eq!(store.word(11112).unwrap(), "abdomen");
        assert_eq!(store.word(11113).unwrap(), "abdominal");
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        let err = WordStore::parse("11111 abacus\nnot-a-key word\n").unwrap_err();
        assert_eq!(err, WordStoreError::MalformedLine { line_no: 2 });

        let err = WordStore::parse("11111 abacus extra\n").unwrap_err();
        assert_eq!(err, WordStoreError::MalformedLine { line_no: 1 });

        let err = WordStore::parse("11111\n").unwrap_err();
        assert_eq!(err, WordStoreError::MalformedLine { line_no: 1 });
    }

    #[test]
    fn standard_keys_are_distinct_digit_strings() {
        let keys: std::collections::HashSet<LookupKey> = standard_keys().collect();
        assert_eq!(keys.len(), WORDLIST_LEN);
        assert!(keys.iter().all(|k| (11111..=66666).contains(k)));
    }
}
