mod support;

use scribe_core::application::{
    ApplicationError,
    commands::profiles::FollowCommand,
    queries::profiles::GetProfileQuery,
};
use scribe_core::domain::follow::FollowRepository;
use support::{TestContext, actor};

fn target(username: &str) -> FollowCommand {
    FollowCommand {
        username: username.into(),
    }
}

#[tokio::test]
async fn follow_then_unfollow_flips_the_flag() {
    let ctx = TestContext::new();
    let alice = ctx.seed_user("alice@example.com", "alice", "secret1").await;
    ctx.seed_user("bob@example.com", "bob", "secret1").await;
    let commands = &ctx.services.profile_commands;
    let queries = &ctx.services.profile_queries;

    let followed = commands.follow(&actor(&alice), target("bob")).await.unwrap();
    assert_eq!(followed.username, "bob");
    assert!(followed.following);
    assert_eq!(ctx.store.follow_count(), 1);

    let seen = queries
        .get_profile(Some(&actor(&alice)), GetProfileQuery { username: "bob".into() })
        .await
        .unwrap();
    assert!(seen.following);

    let unfollowed = commands.unfollow(&actor(&alice), target("bob")).await.unwrap();
    assert!(!unfollowed.following);
    assert_eq!(ctx.store.follow_count(), 0);
}

#[tokio::test]
async fn anonymous_viewers_never_follow() {
    let ctx = TestContext::new();
    let alice = ctx.seed_user("alice@example.com", "alice", "secret1").await;
    ctx.seed_user("bob@example.com", "bob", "secret1").await;
    ctx.services
        .profile_commands
        .follow(&actor(&alice), target("bob"))
        .await
        .unwrap();

    let profile = ctx
        .services
        .profile_queries
        .get_profile(None, GetProfileQuery { username: "bob".into() })
        .await
        .unwrap();
    assert_eq!(profile.username, "bob");
    assert!(!profile.following);
}

#[tokio::test]
async fn following_yourself_is_a_conflict() {
    let ctx = TestContext::new();
    let alice = ctx.seed_user("alice@example.com", "alice", "secret1").await;

    let err = ctx
        .services
        .profile_commands
        .follow(&actor(&alice), target("alice"))
        .await
        .unwrap_err();
    assert_eq!(err.key(), "follow.cannot_follow_self");
    assert_eq!(ctx.store.follow_count(), 0);
}

#[tokio::test]
async fn duplicate_follow_and_missing_unfollow_are_membership_errors() {
    let ctx = TestContext::new();
    let alice = ctx.seed_user("alice@example.com", "alice", "secret1").await;
    ctx.seed_user("bob@example.com", "bob", "secret1").await;
    let commands = &ctx.services.profile_commands;

    let err = commands.unfollow(&actor(&alice), target("bob")).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotMember(ref key) if key == "follow.not_following"));

    commands.follow(&actor(&alice), target("bob")).await.unwrap();
    let err = commands.follow(&actor(&alice), target("bob")).await.unwrap_err();
    assert!(matches!(err, ApplicationError::AlreadyMember(ref key) if key == "follow.already_following"));
    assert_eq!(ctx.store.follow_count(), 1);
}

#[tokio::test]
async fn unknown_profile_is_not_found() {
    let ctx = TestContext::new();
    let alice = ctx.seed_user("alice@example.com", "alice", "secret1").await;

    let err = ctx
        .services
        .profile_queries
        .get_profile(None, GetProfileQuery { username: "nobody".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(ref key) if key == "profile.not_found"));

    let err = ctx
        .services
        .profile_commands
        .follow(&actor(&alice), target("nobody"))
        .await
        .unwrap_err();
    assert_eq!(err.key(), "profile.not_found");
}

#[tokio::test]
async fn shared_username_resolves_to_the_earliest_account() {
    let ctx = TestContext::new();
    let viewer = ctx.seed_user("viewer@example.com", "viewer", "secret1").await;
    let first = ctx.seed_user("sam1@example.com", "sam", "secret1").await;
    let second = ctx.seed_user("sam2@example.com", "sam", "secret1").await;

    ctx.services
        .profile_commands
        .follow(&actor(&viewer), target("sam"))
        .await
        .unwrap();

    let store = ctx.store.as_ref();
    assert!(FollowRepository::is_following(store, viewer.id, first.id).await.unwrap());
    assert!(!FollowRepository::is_following(store, viewer.id, second.id).await.unwrap());
}
