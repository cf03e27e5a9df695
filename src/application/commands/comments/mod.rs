mod create;
mod delete;
mod service;

pub use create::AddCommentCommand;
pub use delete::DeleteCommentCommand;
pub use service::CommentCommandService;
