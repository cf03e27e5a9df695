pub mod articles;
pub mod auth;
pub mod comments;
pub mod pagination;
pub mod profiles;
pub mod users;

pub use articles::ArticleDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, LoginResultDto, LoginUserDto, TokenSubject};
pub use comments::CommentDto;
pub use pagination::PageDto;
pub use profiles::ProfileDto;
pub use users::UserDto;
