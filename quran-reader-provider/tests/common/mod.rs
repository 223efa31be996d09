//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use quran_reader_provider::{ContentProvider, ProviderConfig, create_provider};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_unless_live {
    () => {
        if std::env::var("QURAN_READER_LIVE_TESTS").is_err() {
            eprintln!("跳过测试: 未设置 QURAN_READER_LIVE_TESTS");
            return;
        }
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试上下文 - 封装 Provider
pub struct TestContext {
    pub provider: Arc<dyn ContentProvider>,
}

impl TestContext {
    /// 使用默认配置（可通过 `QURAN_READER_BASE_URL` / `QURAN_READER_EDITION` 覆盖）
    pub fn from_env() -> Option<Self> {
        let mut config = ProviderConfig::default();
        if let Ok(base_url) = env::var("QURAN_READER_BASE_URL") {
            config.base_url = base_url;
        }
        config.edition = env::var("QURAN_READER_EDITION").ok();

        let provider = create_provider(&config).ok()?;
        Some(Self { provider })
    }
}
