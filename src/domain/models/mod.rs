pub mod category;
pub mod comment;
pub mod item;
pub mod review;
pub mod user;
