use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Opaque tag handed back to the host when an action control is clicked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(pub u32);

impl From<u32> for ActionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub name: String,
    pub id: ActionId,
    /// Placeholder key (`#@...`) or literal text for the button label.
    pub label: String,
    pub icon: String,
}

impl ActionDescriptor {
    /// Descriptor with the label `#@summary_action_<name>` and the icon `<name>`,
    /// both lowercased.
    pub fn new(name: impl Into<String>, id: impl Into<ActionId>) -> Self {
        let name = name.into();
        let lower = name.to_lowercase();
        Self {
            label: format!("{}summary_action_{}", PLACEHOLDER_PREFIX, lower),
            icon: lower,
            name,
            id: id.into(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
}

impl Platform {
    const fn intent_base(self) -> &'static str {
        use Platform::*;
        match self {
            Twitter => "https://twitter.com/intent/tweet",
        }
    }

    /// Builds the platform's share intent. Empty parameters are left out.
    pub fn share_url(self, url: &str, text: &str, hashtags: &[String]) -> String {
        let hashtags = hashtags.join(",");
        let params: Vec<String> = [("text", text), ("url", url), ("hashtags", hashtags.as_str())]
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect();

        if params.is_empty() {
            self.intent_base().to_string()
        } else {
            format!("{}?{}", self.intent_base(), params.join("&"))
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::Twitter
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialConfig {
    #[serde(default)]
    pub platform: Platform,
    pub message: String,
    pub handle: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            platform: Platform::Twitter,
            message: "I just broke the lock, can you? #breaklock".to_string(),
            handle: "@mxwllt".to_string(),
            hashtags: vec!["breaklock".to_string()],
        }
    }
}

/// Everything the summary view reads at construction time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    pub url: String,
    /// Iteration order is button order. Repeated ids are kept as-is.
    pub actions: Vec<ActionDescriptor>,
    pub social: SocialConfig,
}

impl SummaryConfig {
    pub const NEW_GAME: ActionId = ActionId(1);
    pub const SOLUTION: ActionId = ActionId(2);
    pub const BACK_HOME: ActionId = ActionId(3);

    /// Parses a TOML document. Missing top-level sections keep their defaults.
    pub fn from_toml(src: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(src)?;
        let mut config = Self::default();

        if let Some(url) = file.url {
            config.url = url;
        }
        if let Some(social) = file.social {
            config.social = social;
        }
        if let Some(actions) = file.actions {
            config.actions = actions
                .into_iter()
                .enumerate()
                .map(|(index, entry)| entry.into_descriptor(index))
                .collect::<Result<_>>()?;
        }

        log::debug!("loaded summary config with {} actions", config.actions.len());
        Ok(config)
    }

    /// First descriptor carrying `id`.
    pub fn action(&self, id: ActionId) -> Option<&ActionDescriptor> {
        self.actions.iter().find(|action| action.id == id)
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            url: "https://maxwellito.github.io/breaklock/".to_string(),
            actions: vec![
                ActionDescriptor::new("NEW_GAME", Self::NEW_GAME),
                ActionDescriptor::new("SOLUTION", Self::SOLUTION),
                ActionDescriptor::new("BACK_HOME", Self::BACK_HOME),
            ],
            social: Default::default(),
        }
    }
}

#[derive(Deserialize)]
struct ConfigFile {
    url: Option<String>,
    actions: Option<Vec<ActionEntry>>,
    social: Option<SocialConfig>,
}

#[derive(Deserialize)]
struct ActionEntry {
    name: String,
    id: ActionId,
    label: Option<String>,
    icon: Option<String>,
}

impl ActionEntry {
    fn into_descriptor(self, index: usize) -> Result<ActionDescriptor> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyActionName { index });
        }

        let mut action = ActionDescriptor::new(self.name, self.id);
        if let Some(label) = self.label {
            action = action.with_label(label);
        }
        if let Some(icon) = self.icon {
            action = action.with_icon(icon);
        }
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_actions_keep_game_order() {
        let config = SummaryConfig::default();
        let names: Vec<_> = config.actions.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["NEW_GAME", "SOLUTION", "BACK_HOME"]);
        assert_eq!(config.actions[1].label, "#@summary_action_solution");
        assert_eq!(config.actions[2].icon, "back_home");
    }

    #[test]
    fn toml_overrides_actions_and_keeps_other_defaults() {
        let config = SummaryConfig::from_toml(
            r#"
            [[actions]]
            name = "RETRY"
            id = 7

            [[actions]]
            name = "QUIT"
            id = 7
            label = "Quit"
            icon = "door"
            "#,
        )
        .unwrap();

        assert_eq!(config.actions.len(), 2);
        assert_eq!(config.actions[0].label, "#@summary_action_retry");
        assert_eq!(config.actions[1].label, "Quit");
        assert_eq!(config.actions[1].icon, "door");
        assert_eq!(config.action(ActionId(7)).unwrap().name, "RETRY");
        assert_eq!(config.url, SummaryConfig::default().url);
        assert_eq!(config.social, SocialConfig::default());
    }

    #[test]
    fn toml_social_section_defaults_platform() {
        let config = SummaryConfig::from_toml(
            r#"
            url = "https://example.org/"

            [social]
            message = "hi"
            handle = "@someone"
            "#,
        )
        .unwrap();

        assert_eq!(config.url, "https://example.org/");
        assert_eq!(config.social.platform, Platform::Twitter);
        assert!(config.social.hashtags.is_empty());
        assert_eq!(config.actions, SummaryConfig::default().actions);
    }

    #[test]
    fn empty_action_name_is_rejected() {
        let err = SummaryConfig::from_toml(
            r#"
            [[actions]]
            name = "OK"
            id = 1

            [[actions]]
            name = "  "
            id = 2
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::EmptyActionName { index: 1 }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SummaryConfig::from_toml("actions = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn twitter_url_encodes_and_skips_empty_params() {
        let url = Platform::Twitter.share_url("", "@mxwllt", &["breaklock".to_string()]);
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?text=%40mxwllt&hashtags=breaklock"
        );

        let url = Platform::Twitter.share_url("https://a.b/c", "hi you", &[]);
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?text=hi%20you&url=https%3A%2F%2Fa.b%2Fc"
        );

        assert_eq!(
            Platform::Twitter.share_url("", "", &[]),
            "https://twitter.com/intent/tweet"
        );
    }
}
