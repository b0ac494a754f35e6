//! User facing strings. Each locale is a static table; picking a language is configuration and
//! doesn't change any logic.

use std::fmt::Display;

use clap::ValueEnum;

use crate::error::ActionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    #[default]
    Zh,
    Ja,
    En,
}

impl Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Zh => write!(f, "zh"),
            Locale::Ja => write!(f, "ja"),
            Locale::En => write!(f, "en"),
        }
    }
}

pub struct Strings {
    pub default_categories: &'static [&'static str],
    pub empty_category: &'static str,
    pub duplicate_category: &'static str,
    pub nothing_to_export: &'static str,
    pub no_records: &'static str,
    pub no_data: &'static str,
    pub clear_confirm: &'static str,
    pub cleared: &'static str,
    pub recorded: &'static str,
    pub removed: &'static str,
    pub category_added: &'static str,
    pub exported: &'static str,
    pub range: &'static str,
    pub range_to: &'static str,
    pub exclusive_end: &'static str,
    pub divider: &'static str,
    pub record_count: &'static str,
    pub column_category: &'static str,
    pub column_count: &'static str,
    pub column_share: &'static str,
    pub column_last: &'static str,
    pub column_time: &'static str,
}

const ZH: Strings = Strings {
    default_categories: &[
        "学习日语", "写代码", "上课", "兼职", "运动", "吃饭", "睡觉", "通勤", "休息", "刷手机",
    ],
    empty_category: "请输入分类名称",
    duplicate_category: "这个分类已存在",
    nothing_to_export: "没有数据可导出",
    no_records: "还没有记录",
    no_data: "无数据",
    clear_confirm: "确定清空所有数据？此操作不可恢复。",
    cleared: "已清空",
    recorded: "已记录",
    removed: "已删除",
    category_added: "已添加分类",
    exported: "已导出",
    range: "区间：",
    range_to: " ～ ",
    exclusive_end: "（不含结束日）",
    divider: "｜",
    record_count: "记录数：",
    column_category: "分类",
    column_count: "次数",
    column_share: "占比",
    column_last: "最近一次",
    column_time: "时间",
};

const JA: Strings = Strings {
    default_categories: &[
        "日本語の勉強", "コーディング", "授業", "アルバイト", "運動", "食事", "睡眠", "通勤", "休憩",
        "スマホ",
    ],
    empty_category: "カテゴリ名を入力してください",
    duplicate_category: "このカテゴリはすでに存在します",
    nothing_to_export: "エクスポートするデータがありません",
    no_records: "まだ記録がありません",
    no_data: "データなし",
    clear_confirm: "すべてのデータを削除しますか？この操作は元に戻せません。",
    cleared: "削除しました",
    recorded: "記録しました",
    removed: "削除しました",
    category_added: "カテゴリを追加しました",
    exported: "エクスポートしました",
    range: "期間：",
    range_to: " ～ ",
    exclusive_end: "（終了日を含まない）",
    divider: "｜",
    record_count: "記録数：",
    column_category: "カテゴリ",
    column_count: "回数",
    column_share: "割合",
    column_last: "最終記録",
    column_time: "時刻",
};

const EN: Strings = Strings {
    default_categories: &[
        "Japanese study", "Coding", "Class", "Part-time job", "Exercise", "Meals", "Sleep",
        "Commute", "Rest", "Phone",
    ],
    empty_category: "Please enter a category name",
    duplicate_category: "This category already exists",
    nothing_to_export: "There is no data to export",
    no_records: "No records yet",
    no_data: "No data",
    clear_confirm: "Clear all data? This cannot be undone.",
    cleared: "Cleared",
    recorded: "Recorded",
    removed: "Removed",
    category_added: "Added category",
    exported: "Exported",
    range: "Range: ",
    range_to: " ~ ",
    exclusive_end: " (end date excluded)",
    divider: " | ",
    record_count: "Records: ",
    column_category: "Category",
    column_count: "Count",
    column_share: "Share",
    column_last: "Last",
    column_time: "Time",
};

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::Zh => &ZH,
            Locale::Ja => &JA,
            Locale::En => &EN,
        }
    }

    pub fn default_categories(self) -> &'static [&'static str] {
        self.strings().default_categories
    }

    /// Message shown to the user when an action is rejected.
    pub fn describe(self, error: &ActionError) -> &'static str {
        let strings = self.strings();
        match error {
            ActionError::EmptyInput => strings.empty_category,
            ActionError::DuplicateCategory(_) => strings.duplicate_category,
            ActionError::NoDataToExport => strings.nothing_to_export,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::error::ActionError;

    use super::Locale;

    #[test]
    fn test_default_categories_are_valid() {
        for locale in [Locale::Zh, Locale::Ja, Locale::En] {
            let defaults = locale.default_categories();
            assert_eq!(defaults.len(), 10, "{locale}");
            assert!(defaults.iter().all(|v| !v.trim().is_empty() && v.trim() == *v));
            assert_eq!(defaults.iter().collect::<HashSet<_>>().len(), defaults.len());
        }
        assert_eq!(Locale::Zh.default_categories()[0], "学习日语");
        assert_eq!(Locale::Zh.default_categories()[9], "刷手机");
    }

    #[test]
    fn test_describe() {
        assert_eq!(Locale::Zh.describe(&ActionError::EmptyInput), "请输入分类名称");
        assert_eq!(
            Locale::Zh.describe(&ActionError::DuplicateCategory("运动".into())),
            "这个分类已存在"
        );
        assert_eq!(
            Locale::En.describe(&ActionError::NoDataToExport),
            "There is no data to export"
        );
    }
}
