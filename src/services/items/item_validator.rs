//! 상품 존재 검증

use std::sync::Arc;

use crate::domain::models::item::Item;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::items::ItemRepository;

/// 상품 검증기
pub struct ItemValidator {
    item_repository: Arc<dyn ItemRepository>,
}

impl ItemValidator {
    pub fn new(item_repository: Arc<dyn ItemRepository>) -> Self {
        Self { item_repository }
    }

    /// null 여부와 존재 여부를 검증하고 상품을 반환합니다.
    pub async fn validate_and_get(&self, item_id: Option<i64>) -> AppResult<Item> {
        let item_id = item_id
            .ok_or_else(|| AppError::ValidationError("itemId is null".to_string()))?;

        self.item_repository
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("item not found. itemId = {}", item_id)))
    }

    /// 존재 여부만 검증합니다.
    pub async fn validate_exists(&self, item_id: Option<i64>) -> AppResult<()> {
        let item_id = item_id
            .ok_or_else(|| AppError::ValidationError("itemId is null".to_string()))?;

        if !self.item_repository.exists_by_id(item_id).await? {
            return Err(AppError::NotFound(format!(
                "item not found. itemId = {}",
                item_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;

    struct InMemoryItemRepository {
        items: HashMap<i64, Item>,
    }

    #[async_trait]
    impl ItemRepository for InMemoryItemRepository {
        async fn find_by_id(&self, item_id: i64) -> AppResult<Option<Item>> {
            Ok(self.items.get(&item_id).cloned())
        }

        async fn exists_by_id(&self, item_id: i64) -> AppResult<bool> {
            Ok(self.items.contains_key(&item_id))
        }
    }

    #[tokio::test]
    async fn test_validate_and_get() {
        let item = Item {
            id: 4,
            name: "keyboard".to_string(),
        };
        let validator = ItemValidator::new(Arc::new(InMemoryItemRepository {
            items: HashMap::from([(4, item)]),
        }));

        assert_eq!(validator.validate_and_get(Some(4)).await.unwrap().id, 4);
        assert!(matches!(
            validator.validate_and_get(None).await,
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            validator.validate_and_get(Some(5)).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_validate_exists() {
        let item = Item {
            id: 4,
            name: "keyboard".to_string(),
        };
        let validator = ItemValidator::new(Arc::new(InMemoryItemRepository {
            items: HashMap::from([(4, item)]),
        }));

        assert!(validator.validate_exists(Some(4)).await.is_ok());
        assert!(matches!(
            validator.validate_exists(None).await,
            Err(AppError::ValidationError(_))
        ));
        match validator.validate_exists(Some(5)).await {
            Err(AppError::NotFound(msg)) => assert!(msg.contains("itemId = 5")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }
}
