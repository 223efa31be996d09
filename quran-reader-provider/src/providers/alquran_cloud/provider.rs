//! alquran.cloud `ContentProvider` trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{ContentProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{Item, RevelationType, Section, SectionDetail};

use super::{AlQuranAyah, AlQuranCloudProvider, AlQuranSurah, AlQuranSurahDetail, PROVIDER_ID};

impl AlQuranCloudProvider {
    /// 将 API 章节转换为 `Section`
    pub(crate) fn surah_to_section(&self, surah: AlQuranSurah) -> Result<Section> {
        let revelation_type = RevelationType::parse(&surah.revelation_type).ok_or_else(|| {
            self.parse_error(format!(
                "unknown revelation type '{}' for surah {}",
                surah.revelation_type, surah.number
            ))
        })?;

        Ok(Section {
            id: surah.number,
            name_local: surah.name,
            name_english: surah.english_name,
            name_translation: surah.english_name_translation,
            item_count: surah.number_of_ayahs,
            revelation_type,
        })
    }

    /// 将 API 经文转换为 `Item`
    pub(crate) fn ayah_to_item(section_id: u32, ayah: AlQuranAyah) -> Item {
        Item {
            section_id,
            index_in_section: ayah.number_in_surah,
            text: ayah.text,
            number: ayah.number,
            juz: ayah.juz,
            page: ayah.page,
        }
    }

    /// 章节详情请求路径，带可选 edition
    pub(crate) fn section_path(&self, section_id: u32) -> String {
        match &self.edition {
            Some(edition) => format!("/surah/{section_id}/{}", urlencoding::encode(edition)),
            None => format!("/surah/{section_id}"),
        }
    }

    pub(crate) fn detail_to_section_detail(
        &self,
        detail: AlQuranSurahDetail,
    ) -> Result<SectionDetail> {
        let section = self.surah_to_section(detail.surah)?;
        let items = detail
            .ayahs
            .into_iter()
            .map(|ayah| Self::ayah_to_item(section.id, ayah))
            .collect();
        Ok(SectionDetail { section, items })
    }
}

#[async_trait]
impl ContentProvider for AlQuranCloudProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn list_sections(&self) -> Result<Vec<Section>> {
        let surahs: Vec<AlQuranSurah> = self.get("/surah", ErrorContext::default()).await?;
        surahs
            .into_iter()
            .map(|surah| self.surah_to_section(surah))
            .collect()
    }

    async fn get_section(&self, section_id: u32) -> Result<SectionDetail> {
        if section_id == 0 {
            return Err(self.invalid_parameter("section_id", "section ids start at 1"));
        }

        let detail: AlQuranSurahDetail = self
            .get(
                &self.section_path(section_id),
                ErrorContext {
                    section_id: Some(section_id),
                    edition: self.edition.clone(),
                },
            )
            .await?;
        self.detail_to_section_detail(detail)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::types::ProviderConfig;

    const DETAIL_BODY: &str = r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "number": 1,
            "name": "سُورَةُ ٱلْفَاتِحَةِ",
            "englishName": "Al-Faatiha",
            "englishNameTranslation": "The Opening",
            "revelationType": "Meccan",
            "numberOfAyahs": 7,
            "ayahs": [
                {"number": 1, "text": "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ", "numberInSurah": 1, "juz": 1, "manzil": 1, "page": 1, "ruku": 1, "hizbQuarter": 1, "sajda": false},
                {"number": 2, "text": "ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَٰلَمِينَ", "numberInSurah": 2, "juz": 1, "manzil": 1, "page": 1, "ruku": 1, "hizbQuarter": 1, "sajda": false}
            ],
            "edition": {"identifier": "quran-uthmani", "language": "ar"}
        }
    }"#;

    fn provider_with(edition: Option<&str>) -> AlQuranCloudProvider {
        AlQuranCloudProvider::new(&ProviderConfig {
            edition: edition.map(str::to_string),
            ..ProviderConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn converts_detail_response() {
        let provider = provider_with(None);
        let detail: AlQuranSurahDetail = provider
            .unwrap_envelope(200, DETAIL_BODY, ErrorContext::default())
            .unwrap();
        let detail = provider.detail_to_section_detail(detail).unwrap();

        assert_eq!(detail.section.id, 1);
        assert_eq!(detail.section.name_english, "Al-Faatiha");
        assert_eq!(detail.section.item_count, 7);
        assert_eq!(detail.section.revelation_type, RevelationType::Meccan);
        assert_eq!(detail.items.len(), 2);
        assert_eq!(detail.items[1].section_id, 1);
        assert_eq!(detail.items[1].index_in_section, 2);
        assert_eq!(detail.items[1].number, 2);
    }

    #[test]
    fn unknown_revelation_type_is_parse_error() {
        let provider = provider_with(None);
        let surah = AlQuranSurah {
            number: 9,
            name: String::new(),
            english_name: "At-Tawba".to_string(),
            english_name_translation: "The Repentance".to_string(),
            number_of_ayahs: 129,
            revelation_type: "Unknown".to_string(),
        };
        assert!(matches!(
            provider.surah_to_section(surah),
            Err(ProviderError::ParseError { .. })
        ));
    }

    #[test]
    fn section_path_with_edition() {
        assert_eq!(provider_with(None).section_path(2), "/surah/2");
        assert_eq!(
            provider_with(Some("en.asad")).section_path(2),
            "/surah/2/en.asad"
        );
    }

    #[test]
    fn rejects_invalid_edition() {
        let result = AlQuranCloudProvider::new(&ProviderConfig {
            edition: Some("../../etc".to_string()),
            ..ProviderConfig::default()
        });
        assert!(matches!(
            result,
            Err(ProviderError::InvalidParameter { ref param, .. }) if param == "edition"
        ));
    }

    #[tokio::test]
    async fn section_zero_rejected_without_request() {
        let result = provider_with(None).get_section(0).await;
        assert!(matches!(
            result,
            Err(ProviderError::InvalidParameter { .. })
        ));
    }
}
