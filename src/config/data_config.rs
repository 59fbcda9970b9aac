//! 데이터 및 환경 설정 관리 모듈
//!
//! 데이터베이스 연결과 실행 환경 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        match env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "production".to_string())
            .to_lowercase()
            .as_str()
        {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 데이터베이스 연결 설정
///
/// PostgreSQL 연결 풀 구성에 필요한 값들을 환경 변수에서 읽어옵니다.
///
/// # 환경 변수
///
/// - `DATABASE_URL`: PostgreSQL 연결 URL (기본값: 로컬 개발용)
/// - `DATABASE_MAX_CONNECTIONS`: 커넥션 풀 최대 크기 (기본값: 환경별)
/// - `DATABASE_ACQUIRE_TIMEOUT_SECS`: 커넥션 획득 타임아웃 (기본값: 5초)
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl DatabaseConfig {
    /// 환경 변수에서 데이터베이스 설정을 로드합니다.
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost:5432/commerce_dev".to_string());

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or_else(|| Self::max_connections_for_env(&Environment::current()));

        let acquire_timeout_secs = env::var("DATABASE_ACQUIRE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(5);

        Self {
            url,
            max_connections,
            acquire_timeout_secs,
        }
    }

    /// 특정 환경에 대한 커넥션 풀 최대 크기를 반환합니다.
    pub fn max_connections_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 5,
            Environment::Test => 2,
            Environment::Staging => 10,
            Environment::Production => 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_max_connections_for_each_environment() {
        assert_eq!(
            DatabaseConfig::max_connections_for_env(&Environment::Development),
            5
        );
        assert_eq!(DatabaseConfig::max_connections_for_env(&Environment::Test), 2);
        assert_eq!(
            DatabaseConfig::max_connections_for_env(&Environment::Staging),
            10
        );
        assert_eq!(
            DatabaseConfig::max_connections_for_env(&Environment::Production),
            20
        );
    }
}
