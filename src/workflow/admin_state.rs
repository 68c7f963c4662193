//! 后台状态与动作
//!
//! `AdminState` 持有控制台的全部内存状态，所有修改都通过 [`Action`] 进入，
//! 由 [`AdminState::apply`] 统一处理，便于在没有界面的情况下测试。

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{Question, QuestionDraft, SeedData, User, UserDraft};
use crate::services::{
    AuthGate, Credentials, QuestionBank, SubmissionViewer, UserDirectory, SIGN_UP_NOTICE,
};
use crate::workflow::navigation::{Navigation, Panel};

/// 控制台动作
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Login { email: String, password: String },
    Logout,
    TogglePanel(Panel),
    CreateQuestion(QuestionDraft),
    /// 提交题库编辑器中的当前草稿
    SubmitQuestionDraft,
    BeginEdit(u32),
    UpdateQuestion(Question),
    /// 保存编辑中的副本
    SaveEdit,
    CancelEdit,
    DeleteQuestion(u32),
    SignUp(UserDraft),
    OpenSubmission(u32),
    CloseSubmission,
}

/// 动作执行结果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    LoggedIn,
    LoggedOut,
    PanelChanged(Option<Panel>),
    QuestionCreated(Question),
    /// 进入编辑的题目ID，ID 不存在时为 `None`
    EditStarted(Option<u32>),
    /// 被替换后的题目，静默忽略时为 `None`
    QuestionUpdated(Option<Question>),
    EditCancelled,
    QuestionDeleted { id: u32, removed: bool },
    UserSignedUp(User),
    SubmissionOpened(Option<u32>),
    SubmissionClosed,
}

impl Outcome {
    /// 需要展示给管理员的提示
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Outcome::UserSignedUp(_) => Some(SIGN_UP_NOTICE),
            _ => None,
        }
    }
}

/// 后台全部状态
#[derive(Debug, Clone)]
pub struct AdminState {
    pub auth: AuthGate,
    pub nav: Navigation,
    pub bank: QuestionBank,
    pub users: UserDirectory,
    pub viewer: SubmissionViewer,
}

impl AdminState {
    pub fn new(config: &Config, seed: SeedData) -> Self {
        Self {
            auth: AuthGate::new(Credentials::from(config)),
            nav: Navigation::default(),
            bank: QuestionBank::new(seed.questions, config.validation),
            users: UserDirectory::new(seed.users, config.validation),
            viewer: SubmissionViewer::new(seed.submissions),
        }
    }

    /// 默认配置 + 内置演示数据
    pub fn with_builtin_seed() -> Self {
        Self::new(&Config::default(), SeedData::builtin())
    }

    /// 执行一个动作
    ///
    /// 除登录外的所有动作都要求已登录，未登录时返回错误且状态不变。
    pub fn apply(&mut self, action: Action) -> AppResult<Outcome> {
        if let Action::Login { email, password } = &action {
            self.auth.login(email, password)?;
            return Ok(Outcome::LoggedIn);
        }
        self.auth.require_login()?;

        let outcome = match action {
            Action::Login { .. } => Outcome::LoggedIn,
            Action::Logout => {
                self.auth.logout();
                self.nav.reset();
                Outcome::LoggedOut
            }
            Action::TogglePanel(panel) => Outcome::PanelChanged(self.nav.toggle(panel)),
            Action::CreateQuestion(draft) => Outcome::QuestionCreated(self.bank.create(draft)?),
            Action::SubmitQuestionDraft => Outcome::QuestionCreated(self.bank.submit_draft()?),
            Action::BeginEdit(id) => Outcome::EditStarted(self.bank.begin_edit(id).map(|q| q.id)),
            Action::UpdateQuestion(question) => {
                Outcome::QuestionUpdated(self.bank.update(question)?)
            }
            Action::SaveEdit => Outcome::QuestionUpdated(self.bank.save_edit()?),
            Action::CancelEdit => {
                self.bank.cancel_edit();
                Outcome::EditCancelled
            }
            Action::DeleteQuestion(id) => Outcome::QuestionDeleted {
                id,
                removed: self.bank.delete(id),
            },
            Action::SignUp(draft) => Outcome::UserSignedUp(self.users.sign_up(draft)?),
            Action::OpenSubmission(id) => {
                Outcome::SubmissionOpened(self.viewer.open(id).map(|s| s.id))
            }
            Action::CloseSubmission => {
                self.viewer.close();
                Outcome::SubmissionClosed
            }
        };
        Ok(outcome)
    }
}

/// `(state, action) -> (state, outcome)` 形式的纯函数入口
pub fn reduce(mut state: AdminState, action: Action) -> (AdminState, AppResult<Outcome>) {
    let outcome = state.apply(action);
    (state, outcome)
}
