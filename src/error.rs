use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 登录相关错误
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// 表单校验错误
    #[error("校验错误: {0}")]
    Validation(#[from] ValidationError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 控制台命令错误
    #[error("命令错误: {0}")]
    Command(#[from] CommandError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 登录相关错误
///
/// 文案直接展示给管理员，保持英文
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// 邮箱或密码不匹配
    #[error("Invalid credentials")]
    InvalidCredentials,
    /// 未登录时执行了需要登录的操作
    #[error("Please sign in to access the admin portal")]
    NotLoggedIn,
}

/// 表单校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 草稿没有选择分区，无法生成题目
    #[error("题目未选择分区")]
    MissingSection,
    /// 题干为空
    #[error("题干不能为空")]
    EmptyText,
    /// 手动填写的题目ID已存在
    #[error("题目ID {id} 已存在")]
    DuplicateId { id: u32 },
    /// 最大题目ID已到上限，无法自动分配
    #[error("题目ID已用尽，请手动填写ID")]
    IdExhausted,
    /// 正确答案不在选项中
    #[error("答案 '{answer}' 不在选项中")]
    AnswerNotInOptions { answer: String },
    /// 用户名为空
    #[error("用户名不能为空")]
    EmptyUserName,
    /// 邮箱格式错误
    #[error("邮箱格式错误: {email}")]
    InvalidEmail { email: String },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// JSON 解析失败
    #[error("JSON解析失败 ({path}): {source}")]
    JsonParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 控制台命令错误
#[derive(Debug, Error)]
pub enum CommandError {
    /// 未知命令
    #[error("未知命令: {0}")]
    Unknown(String),
    /// 缺少参数
    #[error("命令 {command} 缺少参数: {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    /// 参数格式错误
    #[error("命令 {command} 的参数无效: {value}")]
    InvalidArgument { command: &'static str, value: String },
    /// JSON 负载解析失败
    #[error("命令 {command} 的JSON解析失败: {source}")]
    InvalidPayload {
        command: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
