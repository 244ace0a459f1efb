//! Visibility of the one-time beta banner.
//!
//! The banner depends on a device flag that only exists in the browser, so
//! it starts `Unknown` and renders nothing until the flag was read once. This
//! keeps server-rendered HTML and the first hydrated frame identical.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use crate::util::ui_persistence::KeyValueStore;

/// Storage key of the "banner already seen" flag.
pub const BANNER_KEY: &str = "hasSeenBanner2";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerVisibility {
    #[default]
    Unknown,
    Visible,
    Dismissed,
}

impl BannerVisibility {
    /// Resolve from the stored flag. Any non-empty value counts as seen.
    #[must_use]
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some(value) if !value.is_empty() => Self::Dismissed,
            _ => Self::Visible,
        }
    }

    /// Read the flag from `store`.
    #[must_use]
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self::from_flag(store.get(BANNER_KEY).as_deref())
    }

    /// Hide the banner and remember it on this device.
    #[must_use]
    pub fn dismiss(store: &impl KeyValueStore) -> Self {
        store.set(BANNER_KEY, "true");
        Self::Dismissed
    }

    #[must_use]
    pub fn is_shown(self) -> bool {
        self == Self::Visible
    }
}
