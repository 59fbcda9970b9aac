pub mod carousel_repository;
pub mod item_repository;
pub mod thumbnail_repository;

pub use carousel_repository::{ItemHomeCarouselRepository, PgItemHomeCarouselRepository};
pub use item_repository::{ItemRepository, PgItemRepository};
pub use thumbnail_repository::{ItemThumbnailRepository, PgItemThumbnailRepository};
