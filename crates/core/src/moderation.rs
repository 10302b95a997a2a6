//! Event image screening.
//!
//! The moderation service is an external call that can fail independently
//! of its answer, so its outcome is a three-way verdict and the "treat an
//! unavailable moderator as approval" behavior is a named policy branch
//! rather than a catch-block fallthrough.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::ApplicationError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationVerdict {
    Approved,
    Rejected { reason: String },
    /// The moderation service could not be reached or errored.
    Unavailable,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationPolicy {
    /// Unavailable counts as approved; the upload proceeds.
    #[default]
    FailOpen,
    /// Unavailable blocks the upload.
    FailClosed,
}

impl ModerationPolicy {
    pub fn admits(self, verdict: &ModerationVerdict) -> bool {
        match verdict {
            ModerationVerdict::Approved => true,
            ModerationVerdict::Rejected { .. } => false,
            ModerationVerdict::Unavailable => self == ModerationPolicy::FailOpen,
        }
    }
}

pub trait ImageModerator: Send + Sync {
    fn review(&self, image_url: &str) -> Result<ModerationVerdict, ApplicationError>;
}

/// Outcome of screening one image under a policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreeningDecision {
    pub verdict: ModerationVerdict,
    pub admitted: bool,
}

/// Review an image and apply the policy. Moderator errors are folded into
/// `Unavailable` so the policy decides, never the error path.
pub fn screen(
    moderator: &dyn ImageModerator,
    policy: ModerationPolicy,
    image_url: &str,
) -> ScreeningDecision {
    let verdict = match moderator.review(image_url) {
        Ok(verdict) => verdict,
        Err(error) => {
            warn!(%error, "image moderation unavailable");
            ModerationVerdict::Unavailable
        }
    };
    let admitted = policy.admits(&verdict);
    ScreeningDecision { verdict, admitted }
}

/// Deterministic stand-in for the hosted moderation call: flags a short
/// denylist of terms in the URL and approves everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissiveModerator;

const DENYLIST: &[&str] = &["nsfw", "explicit", "gore"];

impl ImageModerator for PermissiveModerator {
    fn review(&self, image_url: &str) -> Result<ModerationVerdict, ApplicationError> {
        let lowered = image_url.to_lowercase();
        for term in DENYLIST {
            if lowered.contains(term) {
                return Ok(ModerationVerdict::Rejected {
                    reason: format!("flagged term: {term}"),
                });
            }
        }
        Ok(ModerationVerdict::Approved)
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::ApplicationError;

    use super::{
        screen, ImageModerator, ModerationPolicy, ModerationVerdict, PermissiveModerator,
    };

    struct BrokenModerator;

    impl ImageModerator for BrokenModerator {
        fn review(&self, _image_url: &str) -> Result<ModerationVerdict, ApplicationError> {
            Err(ApplicationError::Integration("llm call timed out".to_owned()))
        }
    }

    #[test]
    fn fail_open_admits_when_the_moderator_errors() {
        let decision =
            screen(&BrokenModerator, ModerationPolicy::FailOpen, "https://cdn/img.png");
        assert_eq!(decision.verdict, ModerationVerdict::Unavailable);
        assert!(decision.admitted);
    }

    #[test]
    fn fail_closed_blocks_when_the_moderator_errors() {
        let decision =
            screen(&BrokenModerator, ModerationPolicy::FailClosed, "https://cdn/img.png");
        assert!(!decision.admitted);
    }

    #[test]
    fn rejections_block_under_both_policies() {
        let decision = screen(
            &PermissiveModerator,
            ModerationPolicy::FailOpen,
            "https://cdn/nsfw-banner.png",
        );
        assert!(matches!(decision.verdict, ModerationVerdict::Rejected { .. }));
        assert!(!decision.admitted);
    }

    #[test]
    fn clean_images_are_approved() {
        let decision =
            screen(&PermissiveModerator, ModerationPolicy::FailOpen, "https://cdn/show.png");
        assert_eq!(decision.verdict, ModerationVerdict::Approved);
        assert!(decision.admitted);
    }
}
