//! 题库编辑器
//!
//! 按插入顺序保存题目，支持新增、编辑、删除和按分区浏览。
//! 同一时刻最多只有一道题处于编辑状态。

use crate::config::ValidationMode;
use crate::error::ValidationError;
use crate::models::{Question, QuestionDraft, Section};
use crate::services::validator::Validator;
use tracing::{debug, info};

/// 编辑状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    /// 没有题目处于编辑中
    #[default]
    Idle,
    /// 正在编辑的题目副本，保存前不影响题库
    Editing(Question),
}

impl EditState {
    /// 正在编辑的题目ID
    pub fn editing_id(&self) -> Option<u32> {
        match self {
            EditState::Idle => None,
            EditState::Editing(question) => Some(question.id),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, EditState::Idle)
    }
}

/// 题库编辑器
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
    edit: EditState,
    draft: QuestionDraft,
    validator: Validator,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>, mode: ValidationMode) -> Self {
        Self {
            questions,
            edit: EditState::Idle,
            draft: QuestionDraft::default(),
            validator: Validator::new(mode),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// 下一个自动分配的ID：空题库为 1，否则为最大ID + 1
    ///
    /// 最大ID已是 `u32::MAX` 时返回 `None`
    pub fn next_id(&self) -> Option<u32> {
        match self.questions.iter().map(|q| q.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// 新增题目表单
    pub fn draft(&self) -> &QuestionDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut QuestionDraft {
        &mut self.draft
    }

    /// 新增题目
    ///
    /// `draft.id` 为 0 时自动分配ID。成功后表单恢复为空白模板。
    pub fn create(&mut self, draft: QuestionDraft) -> Result<Question, ValidationError> {
        let manual_id = draft.id != 0;
        let id = if manual_id {
            draft.id
        } else {
            self.next_id().ok_or(ValidationError::IdExhausted)?
        };
        let question = draft.into_question(id)?;

        self.validator
            .check_new_question(&question, manual_id, &self.questions)?;

        info!("✓ 新增题目 #{} [{}]", question.id, question.section());
        self.questions.push(question.clone());
        self.draft.reset();
        Ok(question)
    }

    /// 提交当前表单中的草稿
    pub fn submit_draft(&mut self) -> Result<Question, ValidationError> {
        let draft = self.draft.clone();
        self.create(draft)
    }

    /// 开始编辑指定题目，已有的编辑会被直接替换
    ///
    /// ID 不存在时状态不变，返回 `None`
    pub fn begin_edit(&mut self, id: u32) -> Option<&Question> {
        let Some(question) = self.get(id).cloned() else {
            debug!("题目 #{} 不存在，忽略编辑请求", id);
            return None;
        };
        if let Some(previous) = self.edit.editing_id() {
            debug!("放弃对题目 #{} 的编辑，切换到 #{}", previous, id);
        }
        self.edit = EditState::Editing(question);
        match &self.edit {
            EditState::Editing(question) => Some(question),
            EditState::Idle => None,
        }
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    /// 编辑中的题目副本
    pub fn editing_mut(&mut self) -> Option<&mut Question> {
        match &mut self.edit {
            EditState::Editing(question) => Some(question),
            EditState::Idle => None,
        }
    }

    /// 用编辑后的题目替换ID相同的记录，位置不变
    ///
    /// 未处于编辑状态或找不到对应ID时静默忽略，返回 `None`。
    /// 无论是否替换成功，编辑状态都会回到 `Idle`。
    pub fn update(&mut self, edited: Question) -> Result<Option<Question>, ValidationError> {
        if self.edit.is_idle() {
            debug!("当前没有编辑中的题目，忽略保存");
            return Ok(None);
        }
        self.validator.check_question_fields(&edited)?;
        self.edit = EditState::Idle;

        let mut replaced = false;
        for question in self.questions.iter_mut().filter(|q| q.id == edited.id) {
            *question = edited.clone();
            replaced = true;
        }

        if replaced {
            info!("✓ 更新题目 #{}", edited.id);
            Ok(Some(edited))
        } else {
            debug!("题目 #{} 不存在，保存被忽略", edited.id);
            Ok(None)
        }
    }

    /// 保存编辑中的副本
    pub fn save_edit(&mut self) -> Result<Option<Question>, ValidationError> {
        match self.edit.clone() {
            EditState::Editing(question) => self.update(question),
            EditState::Idle => Ok(None),
        }
    }

    /// 取消编辑，题库不变
    pub fn cancel_edit(&mut self) {
        self.edit = EditState::Idle;
    }

    /// 删除指定ID的题目，返回是否有记录被删除
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.questions.len();
        self.questions.retain(|q| q.id != id);
        let removed = self.questions.len() != before;
        if removed {
            info!("✓ 删除题目 #{}", id);
        }
        removed
    }

    /// 按插入顺序列出题目，可按分区过滤
    pub fn list(&self, section: Option<Section>) -> impl Iterator<Item = &Question> + '_ {
        self.questions
            .iter()
            .filter(move |q| section.map_or(true, |s| q.section() == s))
    }
}
