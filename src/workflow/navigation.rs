//! 控制台面板切换

use std::fmt::Display;

/// 控制台面板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// 题目管理
    Questions,
    /// 用户管理
    Users,
    /// 考试提交
    Submissions,
    /// 用户注册
    SignUp,
}

impl Panel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "questions" => Some(Panel::Questions),
            "users" => Some(Panel::Users),
            "submissions" => Some(Panel::Submissions),
            "signup" | "sign-up" => Some(Panel::SignUp),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Panel::Questions => "Question Management",
            Panel::Users => "User Management",
            Panel::Submissions => "Exam Submissions",
            Panel::SignUp => "User Sign Up",
        }
    }
}

impl Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// 当前激活的面板，同一时刻最多一个
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    active: Option<Panel>,
}

impl Navigation {
    pub fn active(&self) -> Option<Panel> {
        self.active
    }

    /// 切换面板：再次选择当前面板时收起
    pub fn toggle(&mut self, panel: Panel) -> Option<Panel> {
        self.active = if self.active == Some(panel) {
            None
        } else {
            Some(panel)
        };
        self.active
    }

    pub fn reset(&mut self) {
        self.active = None;
    }
}
