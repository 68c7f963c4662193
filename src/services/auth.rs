//! 登录校验
//!
//! 与配置中的一组固定账号做精确比对，登录状态只保存在内存中。

use crate::config::Config;
use crate::error::AuthError;
use tracing::{info, warn};

/// 管理员账号
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl From<&Config> for Credentials {
    fn from(config: &Config) -> Self {
        Self::new(&config.admin_email, &config.admin_password)
    }
}

/// 登录门禁
#[derive(Debug, Clone)]
pub struct AuthGate {
    credentials: Credentials,
    logged_in: bool,
    typed_email: String,
    typed_password: String,
}

impl AuthGate {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            logged_in: false,
            typed_email: String::new(),
            typed_password: String::new(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// 登录表单中最近输入的邮箱
    pub fn typed_email(&self) -> &str {
        &self.typed_email
    }

    pub fn typed_password(&self) -> &str {
        &self.typed_password
    }

    /// 登录，账号不匹配时保持未登录状态，可以重试
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        self.typed_email = email.to_string();
        self.typed_password = password.to_string();

        if self.credentials.matches(email, password) {
            self.logged_in = true;
            info!("✓ 管理员 {} 已登录", email);
            Ok(())
        } else {
            warn!("⚠️ 登录失败: {}", email);
            Err(AuthError::InvalidCredentials)
        }
    }

    /// 退出登录并清空登录表单
    pub fn logout(&mut self) {
        self.logged_in = false;
        self.typed_email.clear();
        self.typed_password.clear();
        info!("管理员已退出登录");
    }

    /// 要求已登录
    pub fn require_login(&self) -> Result<(), AuthError> {
        if self.logged_in {
            Ok(())
        } else {
            Err(AuthError::NotLoggedIn)
        }
    }
}

impl Default for AuthGate {
    fn default() -> Self {
        Self::new(Credentials::from(&Config::default()))
    }
}
