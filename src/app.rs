use crate::config::Config;
use crate::console::{self, views, Command, USAGE};
use crate::error::{AppError, AppResult, AuthError};
use crate::models::load_seed;
use crate::workflow::{Action, AdminState, Outcome};
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// 单条命令的执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// 输出给管理员的文本
    Text(String),
    /// 空行或注释
    Silent,
    /// 结束会话
    Quit,
}

/// 应用主结构
pub struct App {
    config: Config,
    state: AdminState,
    stats: SessionStats,
}

/// 会话统计
#[derive(Debug, Default, Clone, Copy)]
struct SessionStats {
    executed: usize,
    failed: usize,
}

impl App {
    /// 初始化应用：加载种子数据并构建后台状态
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let seed = load_seed(config.seed_file.as_deref()).await?;
        let state = AdminState::new(&config, seed);

        Ok(Self {
            config,
            state,
            stats: SessionStats::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &AdminState {
        &self.state
    }

    /// 从标准输入逐行读取命令直到 `quit` 或输入结束
    pub async fn run(mut self) -> Result<()> {
        println!("LNRS TECH Admin - type `help` for commands");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            match self.execute(&line) {
                Ok(Reply::Text(text)) => println!("{}", text.trim_end()),
                Ok(Reply::Silent) => {}
                Ok(Reply::Quit) => break,
                Err(AppError::Auth(AuthError::InvalidCredentials)) => {
                    println!("[!] {}", AuthError::InvalidCredentials)
                }
                Err(e) => eprintln!("❌ {}", e),
            }
        }

        print_final_stats(&self.stats);
        Ok(())
    }

    /// 执行一行命令
    pub fn execute(&mut self, line: &str) -> AppResult<Reply> {
        let Some(command) = console::parse(line)? else {
            return Ok(Reply::Silent);
        };
        debug!("执行命令: {:?}", command);

        let result = self.dispatch(command);
        self.stats.executed += 1;
        if let Err(e) = &result {
            self.stats.failed += 1;
            warn!("⚠️ 命令执行失败: {}", e);
        }
        result
    }

    fn dispatch(&mut self, command: Command) -> AppResult<Reply> {
        let text = match command {
            Command::Help => USAGE.to_string(),
            Command::Quit => return Ok(Reply::Quit),
            Command::Action(action) => self.apply(action)?,
            Command::List(section) => {
                self.state.auth.require_login()?;
                views::question_list(&self.state.bank, section)
            }
            Command::Users => {
                self.state.auth.require_login()?;
                views::user_table(self.state.users.users())
            }
            Command::Submissions => {
                self.state.auth.require_login()?;
                views::submission_table(self.state.viewer.submissions())
            }
        };
        Ok(Reply::Text(text))
    }

    fn apply(&mut self, action: Action) -> AppResult<String> {
        let outcome = self.state.apply(action)?;

        let mut text = views::outcome_summary(&outcome);
        if let Some(notice) = outcome.notice() {
            text = format!("[!] {}\n{}", notice, text);
        }
        if let Outcome::SubmissionOpened(Some(_)) = outcome {
            if let Some(submission) = self.state.viewer.selected() {
                text.push('\n');
                text.push_str(&views::submission_details(submission));
            }
        }
        Ok(text)
    }
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 后台控制台启动");
    info!(
        "📁 数据来源: {}",
        config.seed_file.as_deref().unwrap_or("内置演示数据")
    );
    info!("🔒 校验模式: {:?}", config.validation);
    info!("{}", "=".repeat(60));
}

fn print_final_stats(stats: &SessionStats) {
    info!("{}", "=".repeat(60));
    info!("📊 会话结束统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 成功: {}/{}", stats.executed - stats.failed, stats.executed);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
}
