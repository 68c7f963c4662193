//! 控制台命令解析
//!
//! 每行一条命令，JSON 负载直接跟在命令后面。

use crate::error::CommandError;
use crate::models::{Question, QuestionDraft, Section, UserDraft};
use crate::workflow::{Action, Panel};
use serde::de::DeserializeOwned;

/// 解析后的控制台命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// 修改状态的动作
    Action(Action),
    /// 按分区列出题目
    List(Option<Section>),
    Users,
    Submissions,
    Help,
    Quit,
}

pub const USAGE: &str = "\
login <email> <password>        登录
logout                          退出登录
nav <questions|users|submissions|signup>
                                切换面板
add <json>                      新增题目（id 为 0 或缺省时自动分配）
edit <id>                       编辑题目
save [json]                     保存编辑（不带参数时保存当前编辑副本）
cancel                          取消编辑
delete <id>                     删除题目
list [section]                  按分区列出题目
users                           用户列表
signup <json>                   注册用户
submissions                     考试提交列表
open <id> / close               查看 / 关闭提交详情
help / quit";

/// 解析一行命令，空行与 `#` 开头的注释返回 `None`
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "login" => {
            let mut parts = rest.split_whitespace();
            let email = parts.next().ok_or(CommandError::MissingArgument {
                command: "login",
                argument: "email",
            })?;
            let password = parts.next().ok_or(CommandError::MissingArgument {
                command: "login",
                argument: "password",
            })?;
            Command::Action(Action::Login {
                email: email.to_string(),
                password: password.to_string(),
            })
        }
        "logout" => Command::Action(Action::Logout),
        "nav" => {
            let panel = required(rest, "nav", "panel")?;
            let panel = Panel::parse(panel).ok_or_else(|| CommandError::InvalidArgument {
                command: "nav",
                value: panel.to_string(),
            })?;
            Command::Action(Action::TogglePanel(panel))
        }
        "add" => {
            let draft: QuestionDraft = payload(rest, "add")?;
            Command::Action(Action::CreateQuestion(draft))
        }
        "edit" => Command::Action(Action::BeginEdit(id_argument(rest, "edit")?)),
        "save" => {
            if rest.is_empty() {
                Command::Action(Action::SaveEdit)
            } else {
                let question: Question = payload(rest, "save")?;
                Command::Action(Action::UpdateQuestion(question))
            }
        }
        "cancel" => Command::Action(Action::CancelEdit),
        "delete" => Command::Action(Action::DeleteQuestion(id_argument(rest, "delete")?)),
        "list" => {
            if rest.is_empty() {
                Command::List(None)
            } else {
                let section = Section::parse(rest).ok_or_else(|| CommandError::InvalidArgument {
                    command: "list",
                    value: rest.to_string(),
                })?;
                Command::List(Some(section))
            }
        }
        "users" => Command::Users,
        "signup" => {
            let draft: UserDraft = payload(rest, "signup")?;
            Command::Action(Action::SignUp(draft))
        }
        "submissions" => Command::Submissions,
        "open" => Command::Action(Action::OpenSubmission(id_argument(rest, "open")?)),
        "close" => Command::Action(Action::CloseSubmission),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(verb.to_string())),
    };

    Ok(Some(command))
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(rest)
    }
}

fn id_argument(rest: &str, command: &'static str) -> Result<u32, CommandError> {
    let value = required(rest, command, "id")?;
    value.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        value: value.to_string(),
    })
}

fn payload<T: DeserializeOwned>(rest: &str, command: &'static str) -> Result<T, CommandError> {
    let json = required(rest, command, "json")?;
    serde_json::from_str(json).map_err(|source| CommandError::InvalidPayload { command, source })
}
