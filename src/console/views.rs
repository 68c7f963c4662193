//! 文本视图

use crate::models::{ExamSubmission, Question, Section, User};
use crate::services::QuestionBank;
use crate::workflow::Outcome;
use std::fmt::Write;

/// 按分区渲染题目列表，正在编辑的题目带标记
pub fn question_list(bank: &QuestionBank, filter: Option<Section>) -> String {
    let editing = bank.edit_state().editing_id();
    let sections: Vec<Section> = match filter {
        Some(section) => vec![section],
        None => Section::ALL.to_vec(),
    };

    let mut out = String::new();
    for section in sections {
        let _ = writeln!(out, "== {} ==", section.label());
        let mut empty = true;
        for (index, question) in bank.list(Some(section)).enumerate() {
            empty = false;
            let marker = if editing == Some(question.id) { " (editing)" } else { "" };
            let _ = writeln!(out, "{}. [#{}] {}{}", index + 1, question.id, question.text, marker);
            question_fields(&mut out, question);
        }
        if empty {
            let _ = writeln!(out, "  (no questions)");
        }
    }
    out
}

fn question_fields(out: &mut String, question: &Question) {
    if let Some(choice) = question.choice() {
        for (i, option) in choice.options.iter().enumerate() {
            let _ = writeln!(out, "   {}) {}", i + 1, option);
        }
        let _ = writeln!(out, "   Answer: {}", choice.answer);
    }
    if let Some(coding) = question.coding() {
        let _ = writeln!(out, "   {}", coding.description);
        for constraint in &coding.constraints {
            let _ = writeln!(out, "   - {}", constraint);
        }
        for example in &coding.examples {
            let _ = writeln!(out, "   Example: {} -> {}", example.input, example.output);
        }
        for (i, case) in coding.test_cases.iter().enumerate() {
            let _ = writeln!(out, "   Test Case {}: {} -> {}", i + 1, case.input, case.output);
        }
    }
}

pub fn user_table(users: &[User]) -> String {
    let mut out = String::from("ID | Name | Email | Role\n");
    for user in users {
        let _ = writeln!(out, "{} | {} | {} | {}", user.id, user.name, user.email, user.role);
    }
    out
}

pub fn submission_table(submissions: &[ExamSubmission]) -> String {
    let mut out = String::from("ID | User Name | Email | Submission Date | Score\n");
    for submission in submissions {
        let _ = writeln!(
            out,
            "{} | {} | {} | {} | {}",
            submission.id,
            submission.user_name,
            submission.user_email,
            submission.local_submission_date(),
            submission.score
        );
    }
    out
}

/// 提交详情：用户信息、作答、代码
pub fn submission_details(submission: &ExamSubmission) -> String {
    let mut out = String::from("Submission Details\n");
    let _ = writeln!(out, "Name: {}", submission.user_name);
    let _ = writeln!(out, "Email: {}", submission.user_email);
    let _ = writeln!(out, "Submission Date: {}", submission.local_submission_date());
    let _ = writeln!(out, "Score: {}", submission.score);

    out.push_str("\nAnswers\n");
    for (question_id, answer) in &submission.answers {
        let _ = writeln!(out, "Question {}: {}", question_id, answer);
    }

    out.push_str("\nCoding Answers\n");
    for (question_id, code) in &submission.coding_answers {
        let _ = writeln!(out, "Question {}:\n{}", question_id, code);
    }
    out
}

/// 动作结果的一行摘要
pub fn outcome_summary(outcome: &Outcome) -> String {
    match outcome {
        Outcome::LoggedIn => "Signed in.".to_string(),
        Outcome::LoggedOut => "Signed out.".to_string(),
        Outcome::PanelChanged(Some(panel)) => format!("Panel: {}", panel),
        Outcome::PanelChanged(None) => "Panel closed.".to_string(),
        Outcome::QuestionCreated(question) => {
            format!("Added question #{} [{}]", question.id, question.section())
        }
        Outcome::EditStarted(Some(id)) => format!("Editing question #{}", id),
        Outcome::EditStarted(None) => "No such question.".to_string(),
        Outcome::QuestionUpdated(Some(question)) => format!("Saved question #{}", question.id),
        Outcome::QuestionUpdated(None) => "Nothing to save.".to_string(),
        Outcome::EditCancelled => "Edit cancelled.".to_string(),
        Outcome::QuestionDeleted { id, removed: true } => format!("Deleted question #{}", id),
        Outcome::QuestionDeleted { removed: false, .. } => "No such question.".to_string(),
        Outcome::UserSignedUp(user) => format!("Added user #{} {}", user.id, user.name),
        Outcome::SubmissionOpened(None) => "No such submission.".to_string(),
        Outcome::SubmissionOpened(Some(id)) => format!("Opened submission #{}", id),
        Outcome::SubmissionClosed => "Back to Submissions.".to_string(),
    }
}
