// ==========================================
// 国际化 (i18n) - 看板文案
// ==========================================
// 文案来源: locales/zh-CN.yml（默认）、locales/en.yml
// 配置库未覆写的占位文案按当前语言取值
// rust_i18n::i18n! 宏在 lib.rs 中初始化
// ==========================================

/// 看板内置文案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardLabel {
    PlaceholderModel,  // 料号全缺时的占位前缀
    SummaryColumn,     // 汇总兜底列名
    UnassignedMachine, // 无机台名的行显示前缀
}

impl BoardLabel {
    pub const ALL: [BoardLabel; 3] = [
        BoardLabel::PlaceholderModel,
        BoardLabel::SummaryColumn,
        BoardLabel::UnassignedMachine,
    ];

    pub fn key(self) -> &'static str {
        match self {
            BoardLabel::PlaceholderModel => "board.placeholder_model_label",
            BoardLabel::SummaryColumn => "board.summary_column_label",
            BoardLabel::UnassignedMachine => "board.unassigned_machine_label",
        }
    }

    /// 当前语言下的文案
    pub fn text(self) -> String {
        rust_i18n::t!(self.key()).to_string()
    }
}

pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 切换语言（"zh-CN" / "en"），进程内全局生效
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 快照文件不存在的提示
pub fn snapshot_not_found(path: &str) -> String {
    rust_i18n::t!("board.snapshot_not_found")
        .to_string()
        .replace("%{path}", path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // 语言是全局状态，相关测试串行执行
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_labels_follow_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();

        set_locale("zh-CN");
        assert_eq!(current_locale(), "zh-CN");
        assert_eq!(BoardLabel::SummaryColumn.text(), "计划量");
        assert_eq!(BoardLabel::UnassignedMachine.text(), "未分配机台");

        set_locale("en");
        assert_eq!(BoardLabel::SummaryColumn.text(), "Planned");
        assert_eq!(BoardLabel::PlaceholderModel.text(), "Model");

        set_locale("zh-CN");
    }

    #[test]
    fn test_every_label_is_translated() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();

        for locale in ["zh-CN", "en"] {
            set_locale(locale);
            for label in BoardLabel::ALL {
                let text = label.text();
                assert!(!text.is_empty());
                assert_ne!(text, label.key(), "{} 缺少 {}", locale, label.key());
            }
        }
        set_locale("zh-CN");
    }

    #[test]
    fn test_snapshot_not_found_message() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();

        set_locale("en");
        let msg = snapshot_not_found("/tmp/day.json");
        assert!(msg.contains("/tmp/day.json"));
        assert!(msg.contains("not found"));

        set_locale("zh-CN");
    }
}
