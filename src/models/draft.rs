//! 表单草稿
//!
//! 草稿保存所有分区的字段，提交时只保留与所选分区匹配的那一组。

use crate::error::ValidationError;
use crate::models::question::{ChoiceFields, CodingFields, IoPair, Question, QuestionBody};
use crate::models::section::Section;
use crate::models::user::User;
use serde::de::value::StringDeserializer;
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

/// 新增题目表单
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestionDraft {
    /// 为 0 时自动分配
    pub id: u32,
    /// 空字符串视为未选择，与空白表单一致
    #[serde(deserialize_with = "blank_as_none")]
    pub section: Option<Section>,
    pub text: String,
    pub options: Vec<String>,
    pub answer: String,
    pub description: String,
    pub constraints: Vec<String>,
    pub examples: Vec<IoPair>,
    pub test_cases: Vec<IoPair>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<Section>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(name) if !name.trim().is_empty() => {
            let name: StringDeserializer<D::Error> = name.into_deserializer();
            Section::deserialize(name).map(Some)
        }
        _ => Ok(None),
    }
}

impl Default for QuestionDraft {
    /// 空白模板：4 个空选项、1 条空约束、1 组空示例、1 组空测试用例
    fn default() -> Self {
        Self {
            id: 0,
            section: None,
            text: String::new(),
            options: vec![String::new(); 4],
            answer: String::new(),
            description: String::new(),
            constraints: vec![String::new()],
            examples: vec![IoPair::default()],
            test_cases: vec![IoPair::default()],
        }
    }
}

impl QuestionDraft {
    /// 恢复为空白模板
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 修改第 `index` 个选项，越界时忽略
    pub fn set_option(&mut self, index: usize, value: impl Into<String>) {
        if let Some(option) = self.options.get_mut(index) {
            *option = value.into();
        }
    }

    /// 追加一条空约束
    pub fn add_constraint(&mut self) {
        self.constraints.push(String::new());
    }

    /// 追加一组空测试用例
    pub fn add_test_case(&mut self) {
        self.test_cases.push(IoPair::default());
    }

    /// 以给定ID生成题目
    pub fn into_question(self, id: u32) -> Result<Question, ValidationError> {
        let section = self.section.ok_or(ValidationError::MissingSection)?;
        let body = match section {
            Section::Coding => QuestionBody::Coding(CodingFields {
                description: self.description,
                constraints: self.constraints,
                examples: self.examples,
                test_cases: self.test_cases,
            }),
            choice => QuestionBody::choice(
                choice,
                ChoiceFields {
                    options: self.options,
                    answer: self.answer,
                },
            )
            .ok_or(ValidationError::MissingSection)?,
        };
        Ok(Question::new(id, self.text, body))
    }
}

/// 用户注册表单
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    /// 仅表单收集，不写入用户记录
    pub password: String,
    pub role: String,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: User::DEFAULT_ROLE.to_string(),
        }
    }
}

impl UserDraft {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn into_user(self, id: u32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_template() {
        let draft = QuestionDraft::default();
        assert_eq!(draft.id, 0);
        assert_eq!(draft.section, None);
        assert_eq!(draft.options, vec![""; 4]);
        assert_eq!(draft.constraints, vec![""]);
        assert_eq!(draft.examples.len(), 1);
        assert_eq!(draft.test_cases.len(), 1);
    }

    #[test]
    fn test_choice_draft_drops_coding_fields() {
        let mut draft = QuestionDraft {
            section: Some(Section::Aptitude),
            text: "420 km in 7 hours?".to_string(),
            answer: "60 km/h".to_string(),
            description: "leaks".to_string(),
            ..Default::default()
        };
        draft.set_option(1, "60 km/h");
        draft.set_option(9, "ignored");

        let question = draft.into_question(2).unwrap();
        assert_eq!(question.section(), Section::Aptitude);
        assert!(question.coding().is_none());
        let choice = question.choice().unwrap();
        assert_eq!(choice.options, ["", "60 km/h", "", ""]);
        assert!(choice.answer_in_options());
    }

    #[test]
    fn test_coding_draft_keeps_lists() {
        let mut draft = QuestionDraft {
            section: Some(Section::Coding),
            ..Default::default()
        };
        draft.add_constraint();
        draft.add_test_case();

        let question = draft.into_question(7).unwrap();
        let coding = question.coding().unwrap();
        assert_eq!(coding.constraints.len(), 2);
        assert_eq!(coding.examples.len(), 1);
        assert_eq!(coding.test_cases.len(), 2);
    }

    #[test]
    fn test_missing_section() {
        let result = QuestionDraft::default().into_question(1);
        assert_eq!(result, Err(ValidationError::MissingSection));
    }

    #[test]
    fn test_partial_json_uses_template() {
        let draft: QuestionDraft =
            serde_json::from_value(json!({ "section": "mcqs", "text": "Q?" })).unwrap();
        assert_eq!(draft.section, Some(Section::Mcqs));
        assert_eq!(draft.options.len(), 4);
        assert_eq!(draft.id, 0);
    }

    #[test]
    fn test_blank_section_is_unselected() {
        for value in [json!({ "section": "" }), json!({ "section": null }), json!({})] {
            let draft: QuestionDraft = serde_json::from_value(value).unwrap();
            assert_eq!(draft.section, None);
            assert_eq!(draft.into_question(1), Err(ValidationError::MissingSection));
        }

        let bad = serde_json::from_value::<QuestionDraft>(json!({ "section": "essay" }));
        assert!(bad.is_err());
    }

    #[test]
    fn test_user_draft_default_role() {
        let draft: UserDraft = serde_json::from_value(json!({ "name": "Ann" })).unwrap();
        assert_eq!(draft.role, "User");
        let user = draft.into_user(3);
        assert_eq!(user.id, 3);
        assert_eq!(user.name, "Ann");
    }
}
