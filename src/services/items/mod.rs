pub mod item_service;
pub mod item_validator;

pub use item_service::ItemService;
pub use item_validator::ItemValidator;
