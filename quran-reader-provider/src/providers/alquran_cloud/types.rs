//! alquran.cloud API 类型定义

use serde::Deserialize;
use serde_json::Value;

/// 通用响应外壳
///
/// 成功时 `data` 为对象或数组，失败时为错误描述字符串，所以先按 `Value` 接收。
#[derive(Debug, Deserialize)]
pub struct AlQuranEnvelope {
    pub code: u16,
    pub status: String,
    pub data: Value,
}

impl AlQuranEnvelope {
    /// 失败响应中的错误消息
    pub fn error_message(&self) -> String {
        match &self.data {
            Value::String(msg) => msg.clone(),
            Value::Null => self.status.clone(),
            other => other.to_string(),
        }
    }
}

/// 章节（surah）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlQuranSurah {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub number_of_ayahs: u32,
    pub revelation_type: String,
}

/// 经文（ayah）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlQuranAyah {
    pub number: u32,
    pub text: String,
    pub number_in_surah: u32,
    #[serde(default)]
    pub juz: u32,
    #[serde(default)]
    pub page: u32,
}

/// 章节详情：章节字段 + ayahs
#[derive(Debug, Deserialize)]
pub struct AlQuranSurahDetail {
    #[serde(flatten)]
    pub surah: AlQuranSurah,
    pub ayahs: Vec<AlQuranAyah>,
}
