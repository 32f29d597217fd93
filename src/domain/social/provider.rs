//! Provider identity and per-provider capability sets.

use std::fmt;

use super::SocialFeature;

/// A social network integration. Exactly one provider is "current" at a
/// time, recomputed from live vendor session state rather than stored.
///
/// The numeric ids (0/1/2) are stable and used in persisted auth state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Provider {
    #[default]
    None,
    Google,
    Facebook,
}

/// Features implemented by the Google provider.
const GOOGLE_FEATURES: &[SocialFeature] = &[
    SocialFeature::Share,
    SocialFeature::Rent,
    SocialFeature::HybridAuth,
];

/// Features implemented by the Facebook provider.
const FACEBOOK_FEATURES: &[SocialFeature] = &[
    SocialFeature::Share,
    SocialFeature::StructuredShare,
    SocialFeature::Rent,
    SocialFeature::HybridAuth,
    SocialFeature::PostPhoto,
];

impl Provider {
    /// Stable numeric id, used as the persisted representation.
    pub const fn id(self) -> i64 {
        match self {
            Provider::None => 0,
            Provider::Google => 1,
            Provider::Facebook => 2,
        }
    }

    /// Maps a persisted numeric id back to a provider. Unrecognized ids map
    /// to `Provider::None` rather than failing, matching the behavior of a
    /// missing preference entry.
    pub fn from_id(id: i64) -> Self {
        match id {
            1 => Provider::Google,
            2 => Provider::Facebook,
            _ => Provider::None,
        }
    }

    /// The fixed capability set of this provider.
    pub fn supported_features(self) -> &'static [SocialFeature] {
        match self {
            Provider::None => &[],
            Provider::Google => GOOGLE_FEATURES,
            Provider::Facebook => FACEBOOK_FEATURES,
        }
    }

    /// Membership test against the fixed capability set.
    pub fn supports(self, feature: SocialFeature) -> bool {
        self.supported_features().contains(&feature)
    }

    /// Capability-independent display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Provider::None => "None",
            Provider::Google => "Google+",
            Provider::Facebook => "Facebook",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trips_for_known_providers() {
        for provider in [Provider::None, Provider::Google, Provider::Facebook] {
            assert_eq!(Provider::from_id(provider.id()), provider);
        }
    }

    #[test]
    fn unrecognized_id_maps_to_none() {
        assert_eq!(Provider::from_id(42), Provider::None);
        assert_eq!(Provider::from_id(-1), Provider::None);
    }

    #[test]
    fn google_capability_set() {
        assert!(Provider::Google.supports(SocialFeature::Share));
        assert!(Provider::Google.supports(SocialFeature::Rent));
        assert!(Provider::Google.supports(SocialFeature::HybridAuth));
        assert!(!Provider::Google.supports(SocialFeature::StructuredShare));
        assert!(!Provider::Google.supports(SocialFeature::PostPhoto));
    }

    #[test]
    fn facebook_supports_every_feature() {
        for feature in [
            SocialFeature::Share,
            SocialFeature::StructuredShare,
            SocialFeature::Rent,
            SocialFeature::PostPhoto,
            SocialFeature::HybridAuth,
        ] {
            assert!(Provider::Facebook.supports(feature));
        }
    }

    #[test]
    fn none_supports_nothing() {
        assert!(Provider::None.supported_features().is_empty());
    }
}
