//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use quran_reader_provider::{ContentProvider, ProviderError};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::{InMemoryKeyValueStore, KeyValueStore};
use crate::types::{Item, RevelationType, Section, SectionDetail};

// ===== MockContentProvider =====

pub struct MockContentProvider {
    sections: RwLock<Vec<Section>>,
    /// 如果 Some，所有请求返回此错误
    failure: RwLock<Option<ProviderError>>,
    list_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl MockContentProvider {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections: RwLock::new(sections),
            failure: RwLock::new(None),
            list_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
        }
    }

    pub async fn set_failure(&self, err: Option<ProviderError>) {
        *self.failure.write().await = err;
    }

    pub async fn set_sections(&self, sections: Vec<Section>) {
        *self.sections.write().await = sections;
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentProvider for MockContentProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_sections(&self) -> quran_reader_provider::Result<Vec<Section>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref err) = *self.failure.read().await {
            return Err(err.clone());
        }
        Ok(self.sections.read().await.clone())
    }

    async fn get_section(&self, section_id: u32) -> quran_reader_provider::Result<SectionDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(ref err) = *self.failure.read().await {
            return Err(err.clone());
        }
        self.sections
            .read()
            .await
            .iter()
            .find(|s| s.id == section_id)
            .map(detail_for)
            .ok_or_else(|| ProviderError::SectionNotFound {
                provider: "mock".to_string(),
                section_id,
            })
    }
}

// ===== MockKeyValueStore =====

/// 内存存储，可模拟写入失败并统计写入次数
pub struct MockKeyValueStore {
    inner: InMemoryKeyValueStore,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MockKeyValueStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryKeyValueStore::new(),
            fail_writes: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        Self {
            inner: InMemoryKeyValueStore::with_entry(key, value),
            fail_writes: AtomicBool::new(false),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// 成功写入的次数
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.get(key).ok().flatten()
    }
}

impl KeyValueStore for MockKeyValueStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CoreError::StorageError("quota exceeded".to_string()));
        }
        self.inner.set(key, value)?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.inner.remove(key)
    }
}

// ===== 工厂方法 =====

pub fn fatihah() -> Section {
    Section {
        id: 1,
        name_local: "سُورَةُ ٱلْفَاتِحَةِ".to_string(),
        name_english: "Al-Fatihah".to_string(),
        name_translation: "The Opening".to_string(),
        item_count: 7,
        revelation_type: RevelationType::Meccan,
    }
}

pub fn baqarah() -> Section {
    Section {
        id: 2,
        name_local: "سُورَةُ البَقَرَةِ".to_string(),
        name_english: "Al-Baqarah".to_string(),
        name_translation: "The Cow".to_string(),
        item_count: 286,
        revelation_type: RevelationType::Medinan,
    }
}

/// 两个章节的测试目录：Al-Fatihah (7) 与 Al-Baqarah (286)
pub fn sample_catalog() -> Vec<Section> {
    vec![fatihah(), baqarah()]
}

/// 为章节生成 `item_count` 条经文
pub fn detail_for(section: &Section) -> SectionDetail {
    let items = (1..=section.item_count)
        .map(|index| Item {
            section_id: section.id,
            index_in_section: index,
            text: format!("item {index} of section {}", section.id),
            number: section.id * 1000 + index,
            juz: 1,
            page: 1,
        })
        .collect();
    SectionDetail {
        section: section.clone(),
        items,
    }
}

pub fn create_mock_provider() -> Arc<MockContentProvider> {
    Arc::new(MockContentProvider::new(sample_catalog()))
}

pub fn network_error() -> ProviderError {
    ProviderError::NetworkError {
        provider: "mock".to_string(),
        detail: "connection refused".to_string(),
    }
}

