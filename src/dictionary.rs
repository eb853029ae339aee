use crate::error::{GenError, Result};
use crate::rng::Rng;

const BUILTIN: &str = include_str!("../assets/words.txt");

/// Ordered list of candidate words. Never empty; every entry is A-Z.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Trims and upper-cases each entry. Rejects an empty list, blank
    /// entries and anything outside A-Z.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Vec::new();
        for (i, raw) in words.into_iter().enumerate() {
            let word = raw.as_ref().trim().to_ascii_uppercase();
            if word.is_empty() {
                return Err(GenError::InvalidInput(format!("dictionary entry {i} is blank")));
            }
            if !word.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(GenError::InvalidInput(format!(
                    "dictionary entry {i} ('{word}') has characters outside A-Z"
                )));
            }
            out.push(word);
        }
        if out.is_empty() {
            return Err(GenError::InvalidInput("dictionary is empty".into()));
        }
        Ok(Self { words: out })
    }

    /// JSON array of strings.
    pub fn from_json(src: &str) -> Result<Self> {
        let words: Vec<String> = serde_json::from_str(src)
            .map_err(|e| GenError::InvalidInput(format!("dictionary JSON: {e}")))?;
        Self::new(words)
    }

    /// One word per line. Blank lines and `#` comments are skipped.
    pub fn from_lines(src: &str) -> Result<Self> {
        Self::new(
            src.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        )
    }

    pub fn builtin() -> Self {
        Self::from_lines(BUILTIN).expect("bundled word list is valid")
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    pub fn pick(&self, rng: &mut Rng) -> &str {
        &self.words[rng.index(self.words.len())]
    }
}
