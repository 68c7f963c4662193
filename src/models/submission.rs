use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 考试提交记录（只读）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamSubmission {
    pub id: u32,
    pub user_id: u32,
    pub user_name: String,
    pub user_email: String,
    pub submission_date: DateTime<Utc>,
    pub score: f64,
    /// 题目ID -> 作答
    #[serde(default)]
    pub answers: BTreeMap<u32, String>,
    /// 题目ID -> 代码
    #[serde(default)]
    pub coding_answers: BTreeMap<u32, String>,
}

impl ExamSubmission {
    /// 本地时区的提交时间
    pub fn local_submission_date(&self) -> String {
        self.submission_date
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}
