pub mod comment_repository;
pub mod model;

pub use comment_repository::{CommentRepository, PgCommentRepository};
pub use model::{CommentFilter, CommentSortType, SearchCommentCriteria};
