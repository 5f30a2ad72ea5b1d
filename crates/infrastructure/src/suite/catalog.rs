//! Built-in smoke suite for the ShareIn mobile app backend.

use apismoke_domain::{HttpMethod, Section, Suite, TestCase};
use serde_json::json;

/// The default script: one section per API area, in a fixed order.
#[must_use]
pub fn sharein_suite() -> Suite {
    use HttpMethod::{Get, Post};

    Suite::new("ShareIn Mobile App")
        .with_section(
            Section::new("Auth")
                .with_case(
                    TestCase::new("Create Test Token", Post, "/auth/test-token")
                        .with_body(json!({"uid": "test-user-001", "email": "test@example.com"}))
                        .without_auth(),
                )
                .with_case(TestCase::new("Verify Token", Post, "/auth/verify").with_body(json!({}))),
        )
        .with_section(
            Section::new("Posts")
                .with_case(TestCase::new("Get Post Categories", Get, "/posts/categories"))
                .with_case(TestCase::new("Get All Posts", Get, "/posts"))
                .with_case(TestCase::new("Get My Posts", Get, "/posts/me")),
        )
        .with_section(
            Section::new("Users").with_case(TestCase::new("Get Current User Info", Get, "/users")),
        )
        .with_section(
            Section::new("Chat/Conversations")
                .with_case(TestCase::new("Get All Conversations", Get, "/conversations")),
        )
        .with_section(
            Section::new("Notifications")
                .with_case(TestCase::new("Get Notifications", Get, "/notification")),
        )
        .with_section(
            Section::new("Ratings")
                .with_case(TestCase::new("Get My Given Ratings", Get, "/ratings/me/given"))
                .with_case(TestCase::new("Get My Received Ratings", Get, "/ratings/me/received")),
        )
        .with_section(
            Section::new("Search")
                .with_case(TestCase::new("Get Search History", Get, "/search/history")),
        )
        .with_section(
            Section::new("User Interests")
                .with_case(TestCase::new("Get User Interests", Get, "/user-interests")),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_shape() {
        let suite = sharein_suite();
        let titles: Vec<_> = suite.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Auth",
                "Posts",
                "Users",
                "Chat/Conversations",
                "Notifications",
                "Ratings",
                "Search",
                "User Interests",
            ]
        );
        assert_eq!(suite.len(), 12);
        assert!(suite.validate().is_ok());
    }

    #[test]
    fn test_only_test_token_skips_auth() {
        let suite = sharein_suite();
        let anonymous: Vec<_> = suite
            .cases()
            .filter(|c| !c.requires_auth)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(anonymous, vec!["Create Test Token"]);
        assert!(suite.cases().all(|c| c.expected_status == 200));
    }
}
