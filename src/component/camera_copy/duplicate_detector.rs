use crate::tools::calculate_content_hash;
use std::collections::HashMap;

/// 單一檔案的分類結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// 新內容，附帶解析後的輸出檔名
    Fresh(String),
    /// 與先前處理過的檔案內容相同，附帶該檔案的輸出檔名
    Duplicate(String),
}

impl Classification {
    /// 用於紀錄與顯示的名稱，重複檔案顯示為 `DUP of <name>`
    #[must_use]
    pub fn report_name(&self) -> String {
        match self {
            Self::Fresh(name) => name.clone(),
            Self::Duplicate(canonical) => format!("DUP of {canonical}"),
        }
    }

    #[cfg(test)]
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}

/// `FingerprintRegistry`：Key 是內容指紋，Value 是第一個產生此指紋的檔案輸出檔名
#[derive(Debug, Clone, Default)]
pub struct FingerprintRegistry {
    canonical_names: HashMap<String, String>,
}

impl FingerprintRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            canonical_names: HashMap::new(),
        }
    }

    #[must_use]
    pub fn canonical_name(&self, fingerprint: &str) -> Option<&str> {
        self.canonical_names.get(fingerprint).map(String::as_str)
    }

    /// 只在指紋第一次出現時登記，已登記的名稱不會被覆蓋
    pub fn register(&mut self, fingerprint: String, name: String) {
        self.canonical_names.entry(fingerprint).or_insert(name);
    }

    #[cfg(test)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.canonical_names.len()
    }

    #[cfg(test)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.canonical_names.is_empty()
    }
}

/// 以 BLAKE3 內容指紋判斷重複檔案，先出現者為正本
#[derive(Debug, Default)]
pub struct DuplicateDetector {
    registry: FingerprintRegistry,
}

impl DuplicateDetector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: FingerprintRegistry::new(),
        }
    }

    /// 分類一份檔案內容
    ///
    /// 只有新內容才會呼叫 `resolve_name` 取得輸出檔名並登記
    pub fn classify<F>(&mut self, content: &[u8], resolve_name: F) -> Classification
    where
        F: FnOnce() -> String,
    {
        let fingerprint = calculate_content_hash(content);

        if let Some(canonical) = self.registry.canonical_name(&fingerprint) {
            return Classification::Duplicate(canonical.to_string());
        }

        let name = resolve_name();
        self.registry.register(fingerprint, name.clone());
        Classification::Fresh(name)
    }

    #[cfg(test)]
    #[must_use]
    pub const fn registry(&self) -> &FingerprintRegistry {
        &self.registry
    }
}
