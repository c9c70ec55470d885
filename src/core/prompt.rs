use std::collections::BTreeMap;

/// 顶层与 study 子表共用的兜底键
pub const DEFAULT_KEY: &str = "default";
/// 以此前缀开头的风格走 study 子表
pub const STUDY_PREFIX: &str = "study";

/// 提示词模板表：顶层 style -> 模板，外加 study 子风格 -> 模板
/// 启动时构建一次，之后只读
#[derive(Debug, Clone)]
pub struct PromptTable {
    top: BTreeMap<String, String>,
    study: BTreeMap<String, String>,
}

impl PromptTable {
    pub fn new(
        top: impl IntoIterator<Item = (String, String)>,
        study: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            top: top.into_iter().collect(),
            study: study.into_iter().collect(),
        }
    }

    /// 内置模板
    pub fn builtin() -> Self {
        let pairs = |items: &[(&str, &str)]| -> Vec<(String, String)> {
            items
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        };

        Self::new(
            pairs(&[(DEFAULT_KEY, "请根据上下文提供专业、准确的回答。")]),
            pairs(&[
                (DEFAULT_KEY, "请提供关于该地区的小学地理知识点。100字以内。"),
                ("beginner", "请提供适合初中生的地理知识点。200字以内。"),
                ("advanced", "请提供适合高中生的地理知识点。300字以内。"),
                ("practical", "请提供适合大学生的地理知识点。500字以内。"),
                ("professional", "请提供适合研究生的地理知识点。1000字以内。"),
            ]),
        )
    }

    /// 查找模板
    ///
    /// 1. `study` 前缀：取第一个 `.` 之后的部分作为子键（没有 `.` 则为空串），
    ///    查 study 子表，缺失时退回子表的 `default`，再缺失为空串。
    /// 2. 其它：直接查顶层表，缺失时退回顶层 `default`，再缺失为空串。
    pub fn template(&self, style: &str) -> &str {
        let (table, key) = if style.starts_with(STUDY_PREFIX) {
            let sub_key = style.split_once('.').map(|(_, rest)| rest).unwrap_or("");
            (&self.study, sub_key)
        } else {
            (&self.top, style)
        };

        table
            .get(key)
            .or_else(|| table.get(DEFAULT_KEY))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// 模板与内容直接拼接，不加分隔符
    pub fn resolve(&self, style: &str, content: &str) -> String {
        let template = self.template(style);
        let mut out = String::with_capacity(template.len() + content.len());
        out.push_str(template);
        out.push_str(content);
        out
    }

    pub fn study_styles(&self) -> Vec<&str> {
        self.study.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PromptTable {
        PromptTable::builtin()
    }

    #[test]
    fn bare_study_uses_study_default() {
        let t = table();
        let expected = format!("{}X", "请提供关于该地区的小学地理知识点。100字以内。");
        assert_eq!(t.resolve("study", "X"), expected);
        assert_eq!(t.resolve("study.default", "X"), expected);
    }

    #[test]
    fn study_substyle_lookup() {
        let t = table();
        assert_eq!(
            t.resolve("study.beginner", "X"),
            "请提供适合初中生的地理知识点。200字以内。X"
        );
        assert_eq!(
            t.resolve("study.professional", "北京"),
            "请提供适合研究生的地理知识点。1000字以内。北京"
        );
    }

    #[test]
    fn unknown_study_substyle_falls_back() {
        let t = table();
        assert_eq!(t.resolve("study.unknown_key", "X"), t.resolve("study", "X"));
        // 只按第一个 `.` 切分
        assert_eq!(t.resolve("study.beginner.extra", "X"), t.resolve("study", "X"));
    }

    #[test]
    fn unknown_top_level_falls_back() {
        let t = table();
        assert_eq!(
            t.resolve("nonexistent", "X"),
            "请根据上下文提供专业、准确的回答。X"
        );
        assert_eq!(t.resolve("", "X"), t.resolve("default", "X"));
    }

    #[test]
    fn missing_defaults_degrade_to_bare_content() {
        let t = PromptTable::new(
            [("casual".to_string(), "随便聊聊：".to_string())],
            Vec::<(String, String)>::new(),
        );
        assert_eq!(t.resolve("casual", "X"), "随便聊聊：X");
        assert_eq!(t.resolve("nonexistent", "X"), "X");
        assert_eq!(t.resolve("study.beginner", "X"), "X");
    }

    #[test]
    fn resolve_is_repeatable() {
        let t = table();
        let first = t.resolve("study.advanced", "长江");
        let second = t.resolve("study.advanced", "长江");
        assert_eq!(first, second);
    }

    #[test]
    fn study_styles_are_sorted() {
        assert_eq!(
            table().study_styles(),
            vec!["advanced", "beginner", "default", "practical", "professional"]
        );
    }
}
