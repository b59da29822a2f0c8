use hashbrown::HashMap;
use std::rc::Rc;

use crate::*;

/// Marks a string as a catalog key rather than literal text.
pub const PLACEHOLDER_PREFIX: &str = "#@";

const EN: &[(&str, &str)] = &[
    ("summary_action_new_game", "New game"),
    ("summary_action_solution", "See solution"),
    ("summary_action_back_home", "Home"),
    ("share", "Share"),
    ("tweet_feedback", "Any feedback? Tweet it to"),
    ("label_success", "Unlocked"),
    ("label_fail", "Locked out"),
    ("summary_see", "The solution is still one click away"),
    ("feedback_success_first", "First try. Did you peek?"),
    ("feedback_success", "Lock broken in {attempts} attempts."),
    ("feedback_fail", "Attempts used: {attempts}. The lock held."),
];

const FR: &[(&str, &str)] = &[
    ("summary_action_new_game", "Nouvelle partie"),
    ("summary_action_solution", "Voir la solution"),
    ("summary_action_back_home", "Accueil"),
    ("share", "Partager"),
    ("tweet_feedback", "Un avis ? Tweetez-le à"),
    ("label_success", "Déverrouillé"),
    ("label_fail", "Verrouillé"),
    ("summary_see", "La solution est à un clic"),
    ("feedback_success_first", "Du premier coup. Tricheur ?"),
    ("feedback_success", "Verrou cassé en {attempts} essais."),
    ("feedback_fail", "Essais utilisés : {attempts}. Le verrou a tenu."),
];

pub trait TextResolver {
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Resolves `#@key` placeholders, anything else is returned untouched.
    ///
    /// Whitespace trailing the key is kept after the resolved text, so
    /// `"#@share "` becomes `"Share "`. Unknown keys resolve to the bare key.
    fn resolve(&self, text: &str) -> String {
        let Some(placeholder) = text.strip_prefix(PLACEHOLDER_PREFIX) else {
            return text.to_string();
        };

        let key = placeholder.trim_end();
        let trailing = &placeholder[key.len()..];
        let resolved = self.lookup(key).unwrap_or_else(|| {
            log::warn!("no text for key: {}", key);
            key
        });

        let mut out = String::with_capacity(resolved.len() + trailing.len());
        out.push_str(resolved);
        out.push_str(trailing);
        out
    }
}

impl<T: TextResolver + ?Sized> TextResolver for Rc<T> {
    fn lookup(&self, key: &str) -> Option<&str> {
        (**self).lookup(key)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self { entries }
    }

    pub fn english() -> Self {
        Self::from_pairs(EN.iter().copied())
    }

    pub fn french() -> Self {
        Self::english().merge(Self::from_pairs(FR.iter().copied()))
    }

    /// Picks a built-in catalog by the primary subtag of a BCP 47 tag.
    pub fn for_lang(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "fr" => Self::french(),
            "en" => Self::english(),
            other => {
                log::debug!("no catalog for {:?}, using english", other);
                Self::english()
            }
        }
    }

    /// Loads a flat `key = "text"` table.
    pub fn from_toml(src: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(src)?;
        let mut catalog = Self::default();
        for (key, value) in table {
            match value {
                toml::Value::String(text) => catalog.insert(key, text),
                _ => return Err(ConfigError::NotAString { key }),
            }
        }
        Ok(catalog)
    }

    /// Entries of `other` win over existing ones.
    pub fn merge(mut self, other: Catalog) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TextResolver for Catalog {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

/// Substitutes `{attempts}` in a catalog template.
pub fn format_count(template: &str, attempts: u32) -> String {
    template.replace("{attempts}", &attempts.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_placeholders_and_keeps_trailing_whitespace() {
        let catalog = Catalog::english();
        assert_eq!(catalog.resolve("#@share"), "Share");
        assert_eq!(
            catalog.resolve("#@tweet_feedback "),
            "Any feedback? Tweet it to "
        );
        assert_eq!(catalog.resolve("@mxwllt"), "@mxwllt");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(Catalog::default().resolve("#@nope  "), "nope  ");
    }

    #[test]
    fn every_builtin_language_has_the_english_keys() {
        let english = Catalog::english();
        let french = Catalog::french();
        assert_eq!(english.len(), french.len());
        for (key, _) in EN {
            assert!(french.lookup(key).is_some(), "missing fr key {}", key);
        }
    }

    #[test]
    fn language_selection_uses_primary_subtag() {
        assert_eq!(Catalog::for_lang("fr-CA").lookup("share"), Some("Partager"));
        assert_eq!(Catalog::for_lang("FR").lookup("share"), Some("Partager"));
        assert_eq!(Catalog::for_lang("en_GB").lookup("share"), Some("Share"));
        assert_eq!(Catalog::for_lang("ja").lookup("share"), Some("Share"));
        assert_eq!(Catalog::for_lang("").lookup("share"), Some("Share"));
    }

    #[test]
    fn toml_catalog_overlays_builtin() {
        let custom = Catalog::from_toml(
            r#"
            share = "Spread the word"
            extra = "Extra"
            "#,
        )
        .unwrap();
        let catalog = Catalog::english().merge(custom);
        assert_eq!(catalog.resolve("#@share"), "Spread the word");
        assert_eq!(catalog.resolve("#@extra"), "Extra");
        assert_eq!(catalog.resolve("#@label_fail"), "Locked out");
    }

    #[test]
    fn toml_catalog_rejects_non_strings() {
        let err = Catalog::from_toml("share = 3").unwrap_err();
        assert!(matches!(err, ConfigError::NotAString { ref key } if key == "share"));
    }

    #[test]
    fn count_template() {
        assert_eq!(format_count("{attempts} of {attempts}", 4), "4 of 4");
        assert_eq!(format_count("none", 4), "none");
    }
}
