use std::collections::HashSet;

/// 將原始鍵值（例如 `machine_learning`）轉成顯示名稱（`Machine Learning`）
///
/// 底線與連字號視為分隔，連續空白合併，每個字首字母大寫；
/// 登記為縮寫的字整個轉大寫（`sql` -> `SQL`）。不保證單射。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameFormatter {
    acronyms: HashSet<String>,
}

impl NameFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_acronyms<I, S>(acronyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            acronyms: acronyms
                .into_iter()
                .map(|a| a.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn format(&self, raw: &str) -> String {
        raw.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
            .filter(|word| !word.is_empty())
            .map(|word| {
                if self.acronyms.contains(&word.to_lowercase()) {
                    word.to_uppercase()
                } else {
                    capitalize(word)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// 不帶縮寫表的格式化
pub fn format_name(raw: &str) -> String {
    NameFormatter::default().format(raw)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
