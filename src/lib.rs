//! # Exam Admin Console
//!
//! 考试平台的后台管理控制台：登录、题库增删改查、用户列表与注册、考试提交查看。
//! 全部状态保存在内存中，启动时由演示数据或 JSON 种子文件填充。
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目、用户、提交记录与表单草稿
//! - `Question` - 以分区为标签的题目，选择题与编程题字段互不混用
//! - `loaders` - 种子数据加载
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 每个服务只管理自己的一份内存数据
//! - `QuestionBank` - 题库编辑器（新增 / 编辑 / 删除 / 按分区浏览）
//! - `AuthGate` - 固定账号登录
//! - `UserDirectory` - 用户列表与注册
//! - `SubmissionViewer` - 提交详情查看
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - `AdminState` 持有全部状态，`Action` 是唯一的修改入口
//!
//! ### ④ 交互层（Console）
//! - `console/` - 命令解析与文本视图
//! - `App` - 逐行读取命令、执行并输出结果

pub mod app;
pub mod config;
pub mod console;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod workflow;

// 重新导出常用类型
pub use app::{App, Reply};
pub use config::{Config, ValidationMode};
pub use error::{AppError, AppResult};
pub use models::{ExamSubmission, Question, QuestionDraft, Section, SeedData, User, UserDraft};
pub use services::{AuthGate, EditState, QuestionBank, SubmissionViewer, UserDirectory};
pub use workflow::{reduce, Action, AdminState, Outcome, Panel};
