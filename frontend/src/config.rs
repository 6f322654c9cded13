//! 运行时配置
//!
//! 配置在构建时通过环境变量注入（Trunk 构建时读取），未设置或非法时使用默认值：
//! - `SCOUTLENS_API_BASE_URL`: API 基础 URL，默认空字符串（同源相对路径）
//! - `SCOUTLENS_VERIFY_TIMEOUT_MS`: 登录态校验请求超时，默认 10000
//! - `SCOUTLENS_LOG_LEVEL`: 日志级别，默认 `info`

use std::str::FromStr;

use leptos::prelude::*;
use log::LevelFilter;
use scoutlens_shared::ApiConfig;

const DEFAULT_VERIFY_TIMEOUT_MS: u32 = 10_000;
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub verify_timeout_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            verify_timeout_ms: DEFAULT_VERIFY_TIMEOUT_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// 读取构建时注入的环境变量
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SCOUTLENS_API_BASE_URL"),
            option_env!("SCOUTLENS_VERIFY_TIMEOUT_MS"),
            option_env!("SCOUTLENS_LOG_LEVEL"),
        )
    }

    fn from_values(
        base_url: Option<&str>,
        verify_timeout_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        Self {
            api: ApiConfig::new(base_url.unwrap_or_default().trim()),
            verify_timeout_ms: verify_timeout_ms
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(DEFAULT_VERIFY_TIMEOUT_MS),
            log_level: log_level
                .and_then(|v| LevelFilter::from_str(v.trim()).ok())
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }
}

/// 从 Context 获取配置
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoutlens_shared::Endpoint;

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_values(None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.url(Endpoint::AuthMe), "/api/auth/me");
    }

    #[test]
    fn values_are_parsed() {
        let config =
            AppConfig::from_values(Some("http://localhost:5000/"), Some("2500"), Some("debug"));
        assert_eq!(config.api.url(Endpoint::Stats), "http://localhost:5000/api/stats");
        assert_eq!(config.verify_timeout_ms, 2500);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = AppConfig::from_values(Some(""), Some("soon"), Some("loud"));
        assert_eq!(config.verify_timeout_ms, DEFAULT_VERIFY_TIMEOUT_MS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);

        let zero = AppConfig::from_values(None, Some("0"), None);
        assert_eq!(zero.verify_timeout_ms, DEFAULT_VERIFY_TIMEOUT_MS);
    }
}
