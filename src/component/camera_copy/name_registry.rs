use std::collections::HashMap;

/// 輸出檔案固定使用的副檔名
pub const OUTPUT_EXTENSION: &str = ".jpg";

/// `NameRegistry` 資料結構：Key 是基本檔名，Value 是該檔名目前的使用次數
///
/// 只在單次執行內有效，計數只增不減
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    counters: HashMap<String, u32>,
}

impl NameRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            counters: HashMap::new(),
        }
    }

    /// 取得基本檔名的下一個唯一輸出檔名，例如 `name_001.jpg`
    pub fn resolve(&mut self, base_name: &str) -> String {
        let counter = self
            .counters
            .entry(base_name.to_string())
            .and_modify(|count| *count += 1)
            .or_insert(1);

        format!("{base_name}_{counter:03}{OUTPUT_EXTENSION}")
    }

    /// 基本檔名目前被使用的次數
    #[cfg(test)]
    #[must_use]
    pub fn count(&self, base_name: &str) -> u32 {
        self.counters.get(base_name).copied().unwrap_or(0)
    }
}
