use breaklock_core::{Platform, Share, SocialConfig};

/// Opens the platform's share intent in a new tab.
#[derive(Clone, Debug)]
pub struct WindowShare {
    platform: Platform,
    hashtags: Vec<String>,
}

impl WindowShare {
    pub fn new(social: &SocialConfig) -> Self {
        Self {
            platform: social.platform,
            hashtags: social.hashtags.clone(),
        }
    }
}

impl Share for WindowShare {
    fn share(&self, message: &str, url: &str) {
        let intent = self.platform.share_url(url, message, &self.hashtags);
        log::debug!("share intent: {}", intent);
        if let Err(err) = gloo::utils::window().open_with_url_and_target(&intent, "_blank") {
            log::error!("failed to open share window: {:?}", err);
        }
    }
}
