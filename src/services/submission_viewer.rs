//! 考试提交查看（只读）

use crate::models::ExamSubmission;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct SubmissionViewer {
    submissions: Vec<ExamSubmission>,
    selected: Option<u32>,
}

impl SubmissionViewer {
    pub fn new(submissions: Vec<ExamSubmission>) -> Self {
        Self {
            submissions,
            selected: None,
        }
    }

    pub fn submissions(&self) -> &[ExamSubmission] {
        &self.submissions
    }

    /// 打开提交详情，已打开的详情会被替换
    ///
    /// ID 不存在时保持原状，返回 `None`
    pub fn open(&mut self, id: u32) -> Option<&ExamSubmission> {
        if self.submissions.iter().any(|s| s.id == id) {
            self.selected = Some(id);
            self.selected()
        } else {
            debug!("提交 #{} 不存在", id);
            None
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// 当前打开的提交
    pub fn selected(&self) -> Option<&ExamSubmission> {
        let id = self.selected?;
        self.submissions.iter().find(|s| s.id == id)
    }
}
