use indexmap::IndexMap;

/// Translated strings: the same key set in every language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct L10n {
    keys: Vec<String>,
    languages: IndexMap<String, IndexMap<String, String>>,
}

impl L10n {
    pub fn new(keys: Vec<String>) -> Self {
        Self {
            keys,
            languages: IndexMap::new(),
        }
    }

    /// Adds or replaces a language. `values` pair up with the keys in
    /// order; missing trailing values are left out of the bundle.
    pub fn insert_language(&mut self, language: impl Into<String>, values: Vec<String>) {
        let bundle = self.keys.iter().cloned().zip(values).collect();
        self.languages.insert(language.into(), bundle);
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn bundle(&self, language: &str) -> Option<&IndexMap<String, String>> {
        self.languages.get(language)
    }

    pub fn get(&self, language: &str, key: &str) -> Option<&str> {
        self.languages.get(language)?.get(key).map(String::as_str)
    }
}
