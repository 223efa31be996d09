//! Provider 公共工具函数

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::types::ProviderConfig;

// ============ HTTP Client ============

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(config: &ProviderConfig, provider: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ URL 处理 ============

/// 去掉 base URL 末尾的斜杠
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// 校验 edition 标识符（如 `quran-uthmani`、`en.asad`）
///
/// 只允许 ASCII 字母数字以及 `.`、`-`、`_`，避免拼接出意外的路径。
pub fn is_valid_edition(edition: &str) -> bool {
    !edition.is_empty()
        && edition
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}
