//! 用户列表与注册表单

use crate::config::ValidationMode;
use crate::error::ValidationError;
use crate::models::{User, UserDraft};
use crate::services::validator::Validator;
use tracing::info;

/// 注册成功后展示给管理员的提示
pub const SIGN_UP_NOTICE: &str = "User signed up successfully!";

#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
    draft: UserDraft,
    validator: Validator,
}

impl UserDirectory {
    pub fn new(users: Vec<User>, mode: ValidationMode) -> Self {
        Self {
            users,
            draft: UserDraft::default(),
            validator: Validator::new(mode),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut UserDraft {
        &mut self.draft
    }

    /// 注册新用户
    ///
    /// ID 为当前用户数 + 1，不检查是否与已有ID冲突。成功后表单清空。
    pub fn sign_up(&mut self, draft: UserDraft) -> Result<User, ValidationError> {
        self.validator.check_user(&draft)?;

        let id = u32::try_from(self.users.len())
            .unwrap_or(u32::MAX)
            .saturating_add(1);
        let user = draft.into_user(id);

        info!("✓ 新用户注册 #{} {} <{}>", user.id, user.name, user.email);
        self.users.push(user.clone());
        self.draft.reset();
        Ok(user)
    }

    /// 提交当前表单
    pub fn submit_draft(&mut self) -> Result<User, ValidationError> {
        let draft = self.draft.clone();
        self.sign_up(draft)
    }
}
