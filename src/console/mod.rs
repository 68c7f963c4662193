//! 命令行控制台：命令解析与文本视图

pub mod command;
pub mod views;

pub use command::{parse, Command, USAGE};
