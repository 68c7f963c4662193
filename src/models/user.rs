use serde::{Deserialize, Serialize};

/// 用户
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    /// 自由文本，控制台提供 `User` / `Admin`
    pub role: String,
}

impl User {
    pub const DEFAULT_ROLE: &'static str = "User";
    pub const ADMIN_ROLE: &'static str = "Admin";

    pub fn new(
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}
