use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{Section, SectionDetail};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP 状态码或响应体中的 code 字段
    pub status: u16,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 请求的章节 ID（用于 `SectionNotFound`）
    pub section_id: Option<u32>,
    /// 请求路径中的 edition（用于区分 400 的来源参数）
    pub edition: Option<String>,
}

/// Provider 错误映射 Trait（内部使用）
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：参数错误
    fn invalid_parameter(&self, param: &str, detail: impl ToString) -> ProviderError {
        ProviderError::InvalidParameter {
            provider: self.provider_name().to_string(),
            param: param.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Remote source of sections and their items.
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Provider identifier, used as log prefix and in errors.
    fn id(&self) -> &'static str;

    /// Lists all sections in catalog order.
    async fn list_sections(&self) -> Result<Vec<Section>>;

    /// Fetches one section together with its ordered items.
    async fn get_section(&self, section_id: u32) -> Result<SectionDetail>;
}
