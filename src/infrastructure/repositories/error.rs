use crate::domain::errors::DomainError;

const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "comments_author_id_fkey";
const CNT_FOLLOW_PAIR: &str = "user_follows_pair_key";
const CNT_FOLLOW_NO_SELF: &str = "user_follows_no_self_chk";

/// Classifies a store error into a domain error with a message key.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                if let Some(mapped) = map_constraint(constraint) {
                    return mapped;
                }
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => return DomainError::Conflict("common.duplicate_entry".into()),
                    "23503" => return DomainError::NotFound("common.reference_missing".into()),
                    "23514" => return DomainError::Validation("common.constraint_violated".into()),
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_constraint(constraint: &str) -> Option<DomainError> {
    let mapped = match constraint {
        CNT_USER_EMAIL => DomainError::Conflict("user.email_taken".into()),
        CNT_ARTICLE_SLUG => DomainError::Conflict("article.slug_taken".into()),
        CNT_FOLLOW_PAIR => DomainError::Conflict("follow.already_following".into()),
        CNT_FOLLOW_NO_SELF => DomainError::Conflict("follow.cannot_follow_self".into()),
        CNT_ARTICLE_AUTHOR | CNT_COMMENT_AUTHOR => DomainError::NotFound("user.not_found".into()),
        CNT_COMMENT_ARTICLE => DomainError::NotFound("article.not_found".into()),
        _ => return None,
    };
    Some(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_constraints_carry_specific_keys() {
        assert!(matches!(
            map_constraint(CNT_USER_EMAIL),
            Some(DomainError::Conflict(key)) if key == "user.email_taken"
        ));
        assert!(matches!(
            map_constraint(CNT_COMMENT_ARTICLE),
            Some(DomainError::NotFound(key)) if key == "article.not_found"
        ));
        assert!(map_constraint("some_other_constraint").is_none());
    }

    #[test]
    fn non_database_errors_are_persistence_failures() {
        let err = map_sqlx(sqlx::Error::RowNotFound);
        assert!(matches!(err, DomainError::Persistence(_)));
    }
}
