use serde::{Deserialize, Serialize};

/// A supported social-media platform, detected from a submitted profile URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    TikTok,
    YouTube,
}

impl Platform {
    /// Detects the platform from a profile URL.
    ///
    /// Only `http`/`https` URLs whose host is `instagram.com`, `tiktok.com`,
    /// or `youtube.com` (with or without a `www.` prefix) are accepted;
    /// anything else returns `None`. Lookalike hosts such as
    /// `instagram.com.evil.example` do not match.
    #[must_use]
    pub fn from_profile_url(url: &str) -> Option<Self> {
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))?;
        let host_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let host = rest[..host_end].to_ascii_lowercase();
        let host = host.strip_prefix("www.").unwrap_or(&host);

        match host {
            "instagram.com" => Some(Platform::Instagram),
            "tiktok.com" => Some(Platform::TikTok),
            "youtube.com" => Some(Platform::YouTube),
            _ => None,
        }
    }

    /// Parses the lowercase storage form written by [`Platform::as_str`].
    #[must_use]
    pub fn from_storage(value: &str) -> Option<Self> {
        match value {
            "instagram" => Some(Platform::Instagram),
            "tiktok" => Some(Platform::TikTok),
            "youtube" => Some(Platform::YouTube),
            _ => None,
        }
    }

    /// Lowercase identifier used in storage and provider request paths.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::TikTok => "tiktok",
            Platform::YouTube => "youtube",
        }
    }

    /// Human-readable platform name for report rendering.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
