//! alquran.cloud HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::truncate_for_log;

use super::{AlQuranCloudProvider, AlQuranEnvelope};

impl AlQuranCloudProvider {
    /// 执行 GET 请求并解包 `data` 字段
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let (status, body) =
            HttpUtils::execute_request(self.client.get(&url), self.provider_name(), "GET", &url)
                .await?;

        self.unwrap_envelope(status, &body, context)
    }

    /// 解析响应外壳：HTTP 状态或 envelope code 非 2xx 时映射为错误
    pub(crate) fn unwrap_envelope<T: DeserializeOwned>(
        &self,
        status: u16,
        body: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let envelope: AlQuranEnvelope = match HttpUtils::parse_json(body, self.provider_name()) {
            Ok(envelope) => envelope,
            // 非 JSON 的错误页面（网关等）
            Err(_) if !(200..300).contains(&status) => {
                return Err(self.map_error(
                    RawApiError::new(status, truncate_for_log(body)),
                    context,
                ));
            }
            Err(e) => return Err(e),
        };

        if !(200..300).contains(&status) || !(200..300).contains(&envelope.code) {
            let code = if (200..300).contains(&status) {
                envelope.code
            } else {
                status
            };
            let message = envelope.error_message();
            log::error!("[{}] API 错误: {code} {message}", self.provider_name());
            return Err(self.map_error(RawApiError::new(code, message), context));
        }

        serde_json::from_value(envelope.data).map_err(|e| {
            log::error!("[{}] data 字段解析失败: {e}", self.provider_name());
            self.parse_error(e)
        })
    }
}
