/// 题库分区
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// 单选题
    Mcqs,
    /// 能力倾向
    Aptitude,
    /// AI 测验
    Ai,
    /// 编程题
    Coding,
}

impl Section {
    /// 全部分区，按控制台展示顺序
    pub const ALL: [Section; 4] = [Section::Mcqs, Section::Aptitude, Section::Ai, Section::Coding];

    /// 获取标识名
    pub fn name(self) -> &'static str {
        match self {
            Section::Mcqs => "mcqs",
            Section::Aptitude => "aptitude",
            Section::Ai => "ai",
            Section::Coding => "coding",
        }
    }

    /// 获取展示名（首字母大写）
    pub fn label(self) -> &'static str {
        match self {
            Section::Mcqs => "Mcqs",
            Section::Aptitude => "Aptitude",
            Section::Ai => "Ai",
            Section::Coding => "Coding",
        }
    }

    /// 从标识名解析分区（忽略大小写）
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.name().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Section::parse("mcqs"), Some(Section::Mcqs));
        assert_eq!(Section::parse(" Coding "), Some(Section::Coding));
        assert_eq!(Section::parse("AI"), Some(Section::Ai));
        assert_eq!(Section::parse(""), None);
        assert_eq!(Section::parse("essay"), None);
    }

    #[test]
    fn test_label() {
        let labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Mcqs", "Aptitude", "Ai", "Coding"]);
    }
}
