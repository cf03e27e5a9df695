// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleBody, ArticleDescription, ArticleTitle, NewArticle, TagList},
};
use tracing::info;

pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    description: Option<String>,
    body: Option<String>,
    tag_list: Vec<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag_list.push(tag.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            description: self.description.ok_or("description is required")?,
            body: self.body.ok_or("body is required")?,
            tag_list: self.tag_list,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let description = ArticleDescription::new(command.description)?;
        let body = ArticleBody::new(command.body)?;
        let slug = self.slug_service.slug_for(&title)?;

        let new_article = NewArticle {
            title,
            description,
            body,
            slug,
            tag_list: TagList::new(command.tag_list),
            author_id: actor.id,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        info!(article_id = %created.id, slug = %created.slug, author_id = %actor.id, "article created");
        Ok(created.into())
    }
}
