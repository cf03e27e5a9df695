mod support;

use scribe_core::application::{
    ApplicationError,
    commands::{
        articles::CreateArticleCommand,
        comments::{AddCommentCommand, DeleteCommentCommand},
    },
    dto::ArticleDto,
    queries::comments::ListCommentsQuery,
};
use scribe_core::domain::user::User;
use support::{TestContext, actor};

async fn publish(ctx: &TestContext, author: &User, title: &str) -> ArticleDto {
    let command = CreateArticleCommand::builder()
        .title(title)
        .description("about comments")
        .body("body")
        .build()
        .unwrap();
    ctx.services
        .article_commands
        .create_article(&actor(author), command)
        .await
        .unwrap()
}

fn comment(slug: &str, body: &str) -> AddCommentCommand {
    AddCommentCommand {
        slug: slug.into(),
        body: body.into(),
    }
}

#[tokio::test]
async fn comments_are_listed_newest_first_with_authors() {
    let ctx = TestContext::new();
    let alice = ctx.seed_user("alice@example.com", "alice", "secret1").await;
    let bob = ctx.seed_user("bob@example.com", "bob", "secret1").await;
    let article = publish(&ctx, &alice, "Talk").await;
    let commands = &ctx.services.comment_commands;

    commands
        .add_comment(&actor(&bob), comment(&article.slug, "first"))
        .await
        .unwrap();
    commands
        .add_comment(&actor(&alice), comment(&article.slug, "second"))
        .await
        .unwrap();

    let listed = ctx
        .services
        .comment_queries
        .list_comments(ListCommentsQuery {
            slug: article.slug.clone(),
        })
        .await
        .unwrap();

    let bodies: Vec<_> = listed.iter().map(|c| c.body.as_str()).collect();
    assert_eq!(bodies, vec!["second", "first"]);
    assert_eq!(listed[0].author.username, "alice");
    assert_eq!(listed[1].author.username, "bob");
}

#[tokio::test]
async fn comment_on_a_missing_article_is_not_found() {
    let ctx = TestContext::new();
    let bob = ctx.seed_user("bob@example.com", "bob", "secret1").await;

    let err = ctx
        .services
        .comment_commands
        .add_comment(&actor(&bob), comment("ghost-article", "hello"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(ref key) if key == "article.not_found"));

    let err = ctx
        .services
        .comment_queries
        .list_comments(ListCommentsQuery {
            slug: "ghost-article".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.key(), "article.not_found");
}

#[tokio::test]
async fn blank_comment_is_rejected() {
    let ctx = TestContext::new();
    let alice = ctx.seed_user("alice@example.com", "alice", "secret1").await;
    let article = publish(&ctx, &alice, "Quiet").await;

    let err = ctx
        .services
        .comment_commands
        .add_comment(&actor(&alice), comment(&article.slug, "  "))
        .await
        .unwrap_err();
    assert_eq!(err.key(), "comment.body_required");
    assert_eq!(ctx.store.comment_count(), 0);
}

#[tokio::test]
async fn delete_through_another_articles_slug_is_not_found() {
    let ctx = TestContext::new();
    let alice = ctx.seed_user("alice@example.com", "alice", "secret1").await;
    let first = publish(&ctx, &alice, "First").await;
    let second = publish(&ctx, &alice, "Second").await;

    let added = ctx
        .services
        .comment_commands
        .add_comment(&actor(&alice), comment(&first.slug, "on the first"))
        .await
        .unwrap();

    let err = ctx
        .services
        .comment_commands
        .delete_comment(
            &actor(&alice),
            DeleteCommentCommand {
                slug: second.slug,
                comment_id: added.id,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(ref key) if key == "comment.not_found"));
    assert_eq!(ctx.store.comment_count(), 1);
}

#[tokio::test]
async fn only_the_comment_author_may_delete_it() {
    let ctx = TestContext::new();
    let alice = ctx.seed_user("alice@example.com", "alice", "secret1").await;
    let bob = ctx.seed_user("bob@example.com", "bob", "secret1").await;
    let article = publish(&ctx, &alice, "Owned").await;
    let commands = &ctx.services.comment_commands;

    let added = commands
        .add_comment(&actor(&bob), comment(&article.slug, "bob was here"))
        .await
        .unwrap();
    let delete = || DeleteCommentCommand {
        slug: article.slug.clone(),
        comment_id: added.id,
    };

    // the article author does not own the comment
    let err = commands.delete_comment(&actor(&alice), delete()).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(ref key) if key == "comment.forbidden_delete"));

    let removed = commands.delete_comment(&actor(&bob), delete()).await.unwrap();
    assert_eq!(removed.id, added.id);
    assert_eq!(removed.body, "bob was here");
    assert_eq!(removed.author.username, "bob");
    assert_eq!(ctx.store.comment_count(), 0);

    let err = commands.delete_comment(&actor(&bob), delete()).await.unwrap_err();
    assert_eq!(err.key(), "comment.not_found");
}

#[tokio::test]
async fn invalid_comment_id_is_not_found() {
    let ctx = TestContext::new();
    let alice = ctx.seed_user("alice@example.com", "alice", "secret1").await;
    let article = publish(&ctx, &alice, "Ids").await;

    let err = ctx
        .services
        .comment_commands
        .delete_comment(
            &actor(&alice),
            DeleteCommentCommand {
                slug: article.slug,
                comment_id: -3,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.key(), "comment.not_found");
}
