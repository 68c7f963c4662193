//! 演示数据

use crate::models::question::{ChoiceFields, CodingFields, IoPair, Question, QuestionBody};
use crate::models::submission::ExamSubmission;
use crate::models::user::User;
use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 启动时装入内存的初始数据
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub questions: Vec<Question>,
    pub users: Vec<User>,
    pub submissions: Vec<ExamSubmission>,
}

impl SeedData {
    /// 内置演示数据：4 道题、2 个用户、1 份提交
    pub fn builtin() -> Self {
        let questions = vec![
            Question::new(
                1,
                "What is the capital of France?",
                QuestionBody::Mcqs(ChoiceFields::new(
                    ["London", "Berlin", "Paris", "Madrid"],
                    "Paris",
                )),
            ),
            Question::new(
                2,
                "If a train travels 420 kilometers in 7 hours, what is its speed in kilometers per hour?",
                QuestionBody::Aptitude(ChoiceFields::new(
                    ["50 km/h", "60 km/h", "65 km/h", "70 km/h"],
                    "60 km/h",
                )),
            ),
            Question::new(
                3,
                "Write a function to reverse a string.",
                QuestionBody::Coding(CodingFields {
                    description: "Implement a function that takes a string as input and returns the reverse of that string.".to_string(),
                    constraints: vec![
                        "1 <= s.length <= 10^5".to_string(),
                        "s[i] is a printable ascii character.".to_string(),
                    ],
                    examples: vec![IoPair::new("\"hello\"", "\"olleh\"")],
                    test_cases: Vec::new(),
                }),
            ),
            Question::new(
                4,
                "Which of these is NOT a type of machine learning?",
                QuestionBody::Ai(ChoiceFields::new(
                    [
                        "Supervised Learning",
                        "Unsupervised Learning",
                        "Peripheral Learning",
                        "Reinforcement Learning",
                    ],
                    "Peripheral Learning",
                )),
            ),
        ];

        let users = vec![
            User::new(1, "Admin User", "admin@gmail.com", User::ADMIN_ROLE),
            User::new(2, "Test User", "test@example.com", User::DEFAULT_ROLE),
        ];

        let answers = BTreeMap::from([
            (1, "Paris".to_string()),
            (2, "60 km/h".to_string()),
            (4, "Peripheral Learning".to_string()),
        ]);
        let coding_answers = BTreeMap::from([(
            3,
            "function reverseString(s) {\n  return s.split('').reverse().join('');\n}".to_string(),
        )]);

        let submissions = vec![ExamSubmission {
            id: 1,
            user_id: 2,
            user_name: "Test User".to_string(),
            user_email: "test@example.com".to_string(),
            submission_date: Utc
                .with_ymd_and_hms(2023, 5, 15, 10, 30, 0)
                .single()
                .unwrap_or_default(),
            score: 85.0,
            answers,
            coding_answers,
        }];

        Self {
            questions,
            users,
            submissions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::section::Section;

    #[test]
    fn test_builtin_covers_every_section() {
        let seed = SeedData::builtin();
        for section in Section::ALL {
            assert_eq!(
                seed.questions.iter().filter(|q| q.section() == section).count(),
                1,
                "分区 {} 应有且仅有一道题",
                section
            );
        }
        assert_eq!(seed.users.len(), 2);
        assert_eq!(seed.submissions[0].score, 85.0);
    }

    #[test]
    fn test_json_round_trip() {
        let seed = SeedData::builtin();
        let json = serde_json::to_string(&seed).unwrap();
        let back: SeedData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seed);
    }
}
