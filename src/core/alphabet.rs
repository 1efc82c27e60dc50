// src/core/alphabet.rs
use std::collections::HashMap;
use std::sync::OnceLock;

/// Georgian Mkhedruli paired with its "lat" keyboard encoding.
pub const GEORGIAN: [(char, char); 33] = [
    ('ა', 'a'), ('ბ', 'b'), ('გ', 'g'), ('დ', 'd'), ('ე', 'e'), ('ვ', 'v'),
    ('ზ', 'z'), ('თ', 'T'), ('ი', 'i'), ('კ', 'k'), ('ლ', 'l'), ('მ', 'm'),
    ('ნ', 'n'), ('ო', 'o'), ('პ', 'p'), ('ჟ', 'J'), ('რ', 'r'), ('ს', 's'),
    ('ტ', 't'), ('უ', 'u'), ('ფ', 'f'), ('ქ', 'q'), ('ღ', 'R'), ('ყ', 'y'),
    ('შ', 'S'), ('ჩ', 'C'), ('ც', 'c'), ('ძ', 'Z'), ('წ', 'w'), ('ჭ', 'W'),
    ('ხ', 'x'), ('ჯ', 'j'), ('ჰ', 'h'),
];

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    #[error("alphabet table is empty")]
    Empty,
    #[error("native letter {0:?} is mapped twice")]
    DuplicateNative(char),
    #[error("latin symbol {0:?} is mapped twice")]
    DuplicateLatin(char),
    #[error("latin symbol {0:?} is neither ASCII lowercase nor an uppercase marker")]
    MarkerNotUppercase(char),
}

/// A validated bijection between native letters and Latin symbols.
///
/// Latin symbols are either ordinary lowercase letters or uppercase markers.
/// A marker and the lowercase letter of the same name always denote
/// different native letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetTable {
    to_native: HashMap<char, char>,
    to_latin: HashMap<char, char>,
}

impl AlphabetTable {
    /// Builds a table from `(native, latin)` pairs, rejecting anything that
    /// is not a bijection.
    pub fn new(pairs: &[(char, char)]) -> Result<Self, AlphabetError> {
        if pairs.is_empty() {
            return Err(AlphabetError::Empty);
        }
        let mut to_native = HashMap::with_capacity(pairs.len());
        let mut to_latin = HashMap::with_capacity(pairs.len());
        for &(native, latin) in pairs {
            if !latin.is_ascii_lowercase() && !latin.is_ascii_uppercase() {
                return Err(AlphabetError::MarkerNotUppercase(latin));
            }
            if to_latin.insert(native, latin).is_some() {
                return Err(AlphabetError::DuplicateNative(native));
            }
            if to_native.insert(latin, native).is_some() {
                return Err(AlphabetError::DuplicateLatin(latin));
            }
        }
        Ok(Self { to_native, to_latin })
    }

    /// The built-in Georgian table, validated once on first use.
    ///
    /// # Panics
    ///
    /// If `GEORGIAN` is not a bijection. That is a defect in the constant,
    /// not an input error.
    pub fn georgian() -> Self {
        static TABLE: OnceLock<AlphabetTable> = OnceLock::new();
        TABLE
            .get_or_init(|| match AlphabetTable::new(&GEORGIAN) {
                Ok(table) => table,
                Err(e) => panic!("built-in Georgian alphabet is invalid: {e}"),
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.to_latin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_latin.is_empty()
    }

    /// True for the reserved uppercase symbols.
    pub fn is_marker(&self, c: char) -> bool {
        c.is_ascii_uppercase() && self.to_native.contains_key(&c)
    }

    pub fn native_of(&self, latin: char) -> Option<char> {
        self.to_native.get(&latin).copied()
    }

    pub fn latin_of(&self, native: char) -> Option<char> {
        self.to_latin.get(&native).copied()
    }

    /// Character-level Latin → native. Unmapped characters pass through.
    pub fn encode(&self, latin: &str) -> String {
        latin.chars().map(|c| self.native_of(c).unwrap_or(c)).collect()
    }

    /// Character-level native → Latin. Unmapped characters pass through.
    pub fn decode(&self, native: &str) -> String {
        native.chars().map(|c| self.latin_of(c).unwrap_or(c)).collect()
    }
}

impl Default for AlphabetTable {
    fn default() -> Self {
        Self::georgian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn georgian_table_is_bijective() {
        let table = AlphabetTable::new(&GEORGIAN).unwrap();
        assert_eq!(table.len(), 33);
    }

    #[test]
    fn built_in_table_matches_the_validated_constructor() {
        assert_eq!(AlphabetTable::georgian(), AlphabetTable::new(&GEORGIAN).unwrap());
        assert_eq!(AlphabetTable::default(), AlphabetTable::georgian());
    }

    #[test]
    fn markers_are_the_seven_uppercase_symbols() {
        let table = AlphabetTable::georgian();
        let markers: String = "ABCDEFGHIJKLMNOPQRSTUVWXYZ"
            .chars()
            .filter(|&c| table.is_marker(c))
            .collect();
        assert_eq!(markers, "CJRSTWZ");
    }

    #[test]
    fn marker_and_lowercase_are_different_letters() {
        let table = AlphabetTable::georgian();
        assert_eq!(table.native_of('T'), Some('თ'));
        assert_eq!(table.native_of('t'), Some('ტ'));
        assert_eq!(table.native_of('C'), Some('ჩ'));
        assert_eq!(table.native_of('c'), Some('ც'));
    }

    #[test]
    fn unmapped_characters_pass_through() {
        let table = AlphabetTable::georgian();
        assert_eq!(table.encode("gamarjoba, 2024!"), "გამარჯობა, 2024!");
        assert_eq!(table.decode("საქართველო?"), "saqarTvelo?");
        assert_eq!(table.encode("B"), "B");
    }

    #[test]
    fn rejects_duplicates() {
        let err = AlphabetTable::new(&[('ა', 'a'), ('ბ', 'a')]).unwrap_err();
        assert_eq!(err, AlphabetError::DuplicateLatin('a'));
        let err = AlphabetTable::new(&[('ა', 'a'), ('ა', 'b')]).unwrap_err();
        assert_eq!(err, AlphabetError::DuplicateNative('ა'));
    }

    #[test]
    fn rejects_non_letter_symbols() {
        let err = AlphabetTable::new(&[('ა', '1')]).unwrap_err();
        assert_eq!(err, AlphabetError::MarkerNotUppercase('1'));
        assert_eq!(AlphabetTable::new(&[]).unwrap_err(), AlphabetError::Empty);
    }
}
