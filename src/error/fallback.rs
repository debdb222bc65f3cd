//! User-facing replies for failed generation calls.

use super::SiteChatError;

pub const API_KEY_REPLY: &str =
    "There seems to be an issue with the API key. Please check if it's valid.";
pub const QUOTA_REPLY: &str = "The API quota has been exceeded. Please try again later.";
pub const NETWORK_REPLY: &str =
    "There seems to be a network issue. Please check your internet connection.";
pub const GENERIC_REPLY: &str = "I apologize, but I'm having trouble processing your request right now. Please try again later.";

/// Pick the reply shown to the visitor for a raw error message.
///
/// Keywords are checked in order: `"API key"`, `"quota"`, `"network"`.
/// Anything else gets the generic apology.
pub fn fallback_for_message(message: &str) -> &'static str {
    if message.contains("API key") {
        API_KEY_REPLY
    } else if message.contains("quota") {
        QUOTA_REPLY
    } else if message.contains("network") {
        NETWORK_REPLY
    } else {
        GENERIC_REPLY
    }
}

/// Pick the reply shown to the visitor for a failed call.
pub fn fallback_reply(error: &SiteChatError) -> &'static str {
    fallback_for_message(&error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_map_to_fixed_replies() {
        assert_eq!(fallback_for_message("API key not valid"), API_KEY_REPLY);
        assert_eq!(fallback_for_message("you exceeded your quota"), QUOTA_REPLY);
        assert_eq!(fallback_for_message("network unreachable"), NETWORK_REPLY);
        assert_eq!(fallback_for_message("boom"), GENERIC_REPLY);
    }

    #[test]
    fn api_key_wins_over_later_keywords() {
        assert_eq!(
            fallback_for_message("API key rejected: quota and network both fine"),
            API_KEY_REPLY
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(fallback_for_message("Quota"), GENERIC_REPLY);
        assert_eq!(fallback_for_message("api key"), GENERIC_REPLY);
    }

    #[test]
    fn error_variants_surface_their_keyword() {
        assert_eq!(
            fallback_reply(&SiteChatError::Authentication("denied".into())),
            API_KEY_REPLY
        );
        assert_eq!(
            fallback_reply(&SiteChatError::QuotaExceeded("exhausted".into())),
            QUOTA_REPLY
        );
        assert_eq!(fallback_reply(&SiteChatError::Timeout(5000)), NETWORK_REPLY);
        assert_eq!(
            fallback_reply(&SiteChatError::api(500, "internal")),
            GENERIC_REPLY
        );
    }
}
