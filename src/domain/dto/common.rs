//! 공통 응답 DTO

use serde::Serialize;

/// 커서 기반 페이지네이션 응답 한 페이지
///
/// `nextSearchAfter`는 가득 찬 페이지에서만, `totalCount`는 요청한
/// 경우에만 직렬화됩니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResultDto<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_search_after: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted() {
        let dto = PageResultDto::<i64> {
            items: vec![1, 2],
            next_search_after: None,
            total_count: None,
        };

        let json = serde_json::to_string(&dto).unwrap();
        assert_eq!(json, r#"{"items":[1,2]}"#);
    }

    #[test]
    fn test_present_fields_use_camel_case() {
        let dto = PageResultDto::<i64> {
            items: vec![],
            next_search_after: Some("OQ".to_string()),
            total_count: Some(4),
        };

        let json = serde_json::to_string(&dto).unwrap();
        assert!(json.contains(r#""nextSearchAfter":"OQ""#));
        assert!(json.contains(r#""totalCount":4"#));
    }
}
