//! # Search-After 커서 인코더
//!
//! 페이지네이션 커서를 불투명한 문자열로 인코딩/디코딩합니다.
//! 마지막 행의 정렬 키 값을 그대로 노출하지 않기 위한 가역 변환이며,
//! URL-safe base64(패딩 없음)를 사용합니다.
//!
//! 라운드트립 법칙: 모든 유효한 `x`에 대해 `decode(encode(x)) == x`.
//! 잘못된 커서 디코딩은 서버 에러가 아니라 클라이언트 입력 에러
//! (`AppError::ValidationError`)로 실패합니다.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::errors::errors::{AppError, AppResult};

/// 복수 값 커서의 구분자
///
/// 정렬 키가 여러 컬럼으로 구성되는 정렬 타입을 위해 값들을 구분자로
/// 이어붙인 뒤 인코딩합니다. 현재 구현된 RECENT 정렬은 단일 값만
/// 사용합니다.
const DELIMITER: &str = ",";

/// search-after 커서 인코더/디코더
pub struct SearchAfterEncoder;

impl SearchAfterEncoder {
    /// 정렬 키 값들을 하나의 불투명한 커서 문자열로 인코딩합니다.
    pub fn encode(values: &[&str]) -> String {
        URL_SAFE_NO_PAD.encode(values.join(DELIMITER))
    }

    /// 커서 문자열을 정렬 키 값들로 디코딩합니다.
    ///
    /// # 에러
    ///
    /// 유효한 base64가 아니거나 UTF-8 문자열이 아니면
    /// `AppError::ValidationError`를 반환합니다.
    pub fn decode(token: &str) -> AppResult<Vec<String>> {
        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| {
            AppError::ValidationError(format!(
                "invalid search after cursor. nextSearchAfter = {}",
                token
            ))
        })?;

        let joined = String::from_utf8(bytes).map_err(|_| {
            AppError::ValidationError(format!(
                "invalid search after cursor. nextSearchAfter = {}",
                token
            ))
        })?;

        Ok(joined.split(DELIMITER).map(str::to_string).collect())
    }

    /// 정확히 하나의 정렬 키 값만 담은 커서를 디코딩합니다.
    ///
    /// 단일 값 정렬 타입(RECENT)에서 사용하며, 값이 하나가 아니면
    /// 클라이언트 입력 에러로 실패합니다.
    pub fn decode_single(token: &str) -> AppResult<String> {
        let mut values = Self::decode(token)?;
        if values.len() != 1 {
            return Err(AppError::ValidationError(format!(
                "expected single value cursor. nextSearchAfter = {}",
                token
            )));
        }
        Ok(values.remove(0))
    }
}
