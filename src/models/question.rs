use crate::models::section::Section;
use serde::{Deserialize, Serialize};

/// 输入/输出样例对（编程题的示例与测试用例）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoPair {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub output: String,
}

impl IoPair {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// 选择题字段
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceFields {
    pub options: Vec<String>,
    /// 正确答案，宽松模式下不要求出现在 `options` 中
    pub answer: String,
}

impl ChoiceFields {
    pub fn new<I, S>(options: I, answer: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    /// 答案是否为选项之一
    pub fn answer_in_options(&self) -> bool {
        self.options.iter().any(|option| option == &self.answer)
    }
}

/// 编程题字段
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodingFields {
    pub description: String,
    pub constraints: Vec<String>,
    pub examples: Vec<IoPair>,
    pub test_cases: Vec<IoPair>,
}

/// 题目主体，由分区决定字段形态
///
/// 序列化时 `section` 作为标签字段与其余字段平铺在同一层。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "lowercase")]
pub enum QuestionBody {
    Mcqs(ChoiceFields),
    Aptitude(ChoiceFields),
    Ai(ChoiceFields),
    Coding(CodingFields),
}

impl QuestionBody {
    /// 为选择题分区构造主体，编程题分区返回 `None`
    pub fn choice(section: Section, fields: ChoiceFields) -> Option<Self> {
        match section {
            Section::Mcqs => Some(QuestionBody::Mcqs(fields)),
            Section::Aptitude => Some(QuestionBody::Aptitude(fields)),
            Section::Ai => Some(QuestionBody::Ai(fields)),
            Section::Coding => None,
        }
    }

    pub fn section(&self) -> Section {
        match self {
            QuestionBody::Mcqs(_) => Section::Mcqs,
            QuestionBody::Aptitude(_) => Section::Aptitude,
            QuestionBody::Ai(_) => Section::Ai,
            QuestionBody::Coding(_) => Section::Coding,
        }
    }
}

/// 题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    #[serde(default)]
    pub text: String,
    #[serde(flatten)]
    pub body: QuestionBody,
}

impl Question {
    pub fn new(id: u32, text: impl Into<String>, body: QuestionBody) -> Self {
        Self {
            id,
            text: text.into(),
            body,
        }
    }

    pub fn section(&self) -> Section {
        self.body.section()
    }

    /// 选择题字段，编程题返回 `None`
    pub fn choice(&self) -> Option<&ChoiceFields> {
        match &self.body {
            QuestionBody::Mcqs(fields) | QuestionBody::Aptitude(fields) | QuestionBody::Ai(fields) => {
                Some(fields)
            }
            QuestionBody::Coding(_) => None,
        }
    }

    /// 编程题字段，选择题返回 `None`
    pub fn coding(&self) -> Option<&CodingFields> {
        match &self.body {
            QuestionBody::Coding(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn coding_mut(&mut self) -> Option<&mut CodingFields> {
        match &mut self.body {
            QuestionBody::Coding(fields) => Some(fields),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_choice_question_wire_shape() {
        let question = Question::new(
            1,
            "What is the capital of France?",
            QuestionBody::Mcqs(ChoiceFields::new(["London", "Berlin", "Paris", "Madrid"], "Paris")),
        );

        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "text": "What is the capital of France?",
                "section": "mcqs",
                "options": ["London", "Berlin", "Paris", "Madrid"],
                "answer": "Paris",
            })
        );
    }

    #[test]
    fn test_coding_question_from_json() {
        let question: Question = serde_json::from_value(json!({
            "id": 3,
            "section": "coding",
            "text": "Write a function to reverse a string.",
            "description": "Reverse it.",
            "constraints": ["1 <= s.length <= 10^5"],
            "examples": [{ "input": "\"hello\"", "output": "\"olleh\"" }],
        }))
        .unwrap();

        assert_eq!(question.section(), Section::Coding);
        assert!(question.choice().is_none());
        let coding = question.coding().unwrap();
        assert_eq!(coding.constraints.len(), 1);
        assert_eq!(coding.examples[0], IoPair::new("\"hello\"", "\"olleh\""));
        assert!(coding.test_cases.is_empty());
    }

    #[test]
    fn test_answer_in_options() {
        let fields = ChoiceFields::new(["a", "b"], "b");
        assert!(fields.answer_in_options());
        let fields = ChoiceFields::new(["a", "b"], "c");
        assert!(!fields.answer_in_options());
    }

    #[test]
    fn test_choice_body_rejects_coding() {
        assert!(QuestionBody::choice(Section::Coding, ChoiceFields::default()).is_none());
        assert_eq!(
            QuestionBody::choice(Section::Ai, ChoiceFields::default()).map(|b| b.section()),
            Some(Section::Ai)
        );
    }
}
