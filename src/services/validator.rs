//! 表单校验
//!
//! 宽松模式下全部放行；严格模式拒绝空题干、重复ID、答案不在选项中、空用户名与非法邮箱。

use crate::config::ValidationMode;
use crate::error::ValidationError;
use crate::models::{Question, UserDraft};
use regex::Regex;
use std::sync::LazyLock;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("邮箱正则为常量，必定合法"));

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    mode: ValidationMode,
}

impl Validator {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    /// 校验新建的题目
    ///
    /// `manual_id` 为真表示ID由管理员手动填写，需要检查是否与已有题目冲突
    pub fn check_new_question(
        &self,
        question: &Question,
        manual_id: bool,
        existing: &[Question],
    ) -> Result<(), ValidationError> {
        if !self.mode.is_strict() {
            return Ok(());
        }
        if manual_id && existing.iter().any(|q| q.id == question.id) {
            return Err(ValidationError::DuplicateId { id: question.id });
        }
        self.check_question_fields(question)
    }

    /// 校验题目内容
    pub fn check_question_fields(&self, question: &Question) -> Result<(), ValidationError> {
        if !self.mode.is_strict() {
            return Ok(());
        }
        if question.text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        if let Some(choice) = question.choice() {
            if !choice.answer_in_options() {
                return Err(ValidationError::AnswerNotInOptions {
                    answer: choice.answer.clone(),
                });
            }
        }
        Ok(())
    }

    /// 校验注册表单
    pub fn check_user(&self, draft: &UserDraft) -> Result<(), ValidationError> {
        if !self.mode.is_strict() {
            return Ok(());
        }
        if draft.name.trim().is_empty() {
            return Err(ValidationError::EmptyUserName);
        }
        if !EMAIL_RE.is_match(&draft.email) {
            return Err(ValidationError::InvalidEmail {
                email: draft.email.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChoiceFields, QuestionBody};

    fn mcq(id: u32, text: &str, answer: &str) -> Question {
        Question::new(id, text, QuestionBody::Mcqs(ChoiceFields::new(["a", "b"], answer)))
    }

    #[test]
    fn test_permissive_accepts_everything() {
        let validator = Validator::new(ValidationMode::Permissive);
        let existing = vec![mcq(1, "x", "a")];
        assert!(validator.check_new_question(&mcq(1, "", "z"), true, &existing).is_ok());
        assert!(validator.check_user(&UserDraft::default()).is_ok());
    }

    #[test]
    fn test_strict_question_rules() {
        let validator = Validator::new(ValidationMode::Strict);
        let existing = vec![mcq(1, "x", "a")];

        assert_eq!(
            validator.check_new_question(&mcq(1, "y", "a"), true, &existing),
            Err(ValidationError::DuplicateId { id: 1 })
        );
        assert_eq!(
            validator.check_new_question(&mcq(2, "  ", "a"), false, &existing),
            Err(ValidationError::EmptyText)
        );
        assert_eq!(
            validator.check_new_question(&mcq(2, "y", "c"), false, &existing),
            Err(ValidationError::AnswerNotInOptions {
                answer: "c".to_string()
            })
        );
        assert!(validator.check_new_question(&mcq(2, "y", "b"), true, &existing).is_ok());
    }

    #[test]
    fn test_email_pattern_compiles() {
        assert!(Regex::new(EMAIL_PATTERN).is_ok());
        assert!(EMAIL_RE.is_match("admin@gmail.com"));
        assert!(!EMAIL_RE.is_match("admin @gmail.com"));
    }

    #[test]
    fn test_strict_user_rules() {
        let validator = Validator::new(ValidationMode::Strict);
        let mut draft = UserDraft {
            name: "Ann".to_string(),
            email: "ann@example".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            validator.check_user(&draft),
            Err(ValidationError::InvalidEmail { .. })
        ));

        draft.email = "ann@example.com".to_string();
        assert!(validator.check_user(&draft).is_ok());

        draft.name.clear();
        assert_eq!(validator.check_user(&draft), Err(ValidationError::EmptyUserName));
    }
}
