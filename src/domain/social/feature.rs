//! Social features a provider may implement.

use std::fmt;

/// One of the social actions a provider can support. Each variant has an
/// associated operation on the provider handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialFeature {
    /// Share the wigwam in the user's feed via a native dialog.
    Share,
    /// Write a typed share action to the user's social graph.
    StructuredShare,
    /// Write a typed rental action to the user's social graph.
    Rent,
    /// Upload a photo to the user's album.
    PostPhoto,
    /// Exchange a vendor credential for a server-side session.
    HybridAuth,
}

impl fmt::Display for SocialFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SocialFeature::Share => "SHARE",
            SocialFeature::StructuredShare => "STRUCTURED_SHARE",
            SocialFeature::Rent => "RENT",
            SocialFeature::PostPhoto => "POST_PHOTO",
            SocialFeature::HybridAuth => "HYBRID_AUTH",
        };
        write!(f, "{}", s)
    }
}
