//! alquran.cloud error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{AlQuranCloudProvider, PROVIDER_ID};

/// The API reports failures through the HTTP status and repeats it in the
/// envelope `code`, with a human readable message in `data`.
impl ProviderErrorMapper for AlQuranCloudProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_ID
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match (raw.status, context.section_id) {
            (404, Some(section_id)) => ProviderError::SectionNotFound {
                provider: self.provider_name().to_string(),
                section_id,
            },
            (400, Some(_)) => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: rejected_param(&raw.message, context.edition.as_deref()).to_string(),
                detail: raw.message,
            },
            (status, _) => {
                log::warn!(
                    "[{}] Unmapped API error: {} - {}",
                    self.provider_name(),
                    status,
                    raw.message
                );
                ProviderError::ApiError {
                    provider: self.provider_name().to_string(),
                    status,
                    message: raw.message,
                }
            }
        }
    }
}

/// 400 响应同时可能来自章节号或 edition，按错误消息判断
fn rejected_param(message: &str, edition: Option<&str>) -> &'static str {
    match edition {
        Some(_) if message.to_ascii_lowercase().contains("edition") => "edition",
        _ => "section_id",
    }
}
