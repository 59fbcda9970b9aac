pub mod model;
pub mod review_repository;

pub use model::{NewReview, ReviewFilter, ReviewSortType, SearchReviewCriteria};
pub use review_repository::{PgReviewRepository, ReviewRepository};
