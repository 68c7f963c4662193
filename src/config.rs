use crate::error::{AppResult, ConfigError, FileError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 表单校验模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// 与原后台一致：不校验，输入原样接受
    #[default]
    Permissive,
    /// 拒绝空题干、重复ID、答案不在选项中、非法邮箱
    Strict,
}

impl ValidationMode {
    /// 从字符串解析校验模式
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Some(ValidationMode::Permissive),
            "strict" => Some(ValidationMode::Strict),
            _ => None,
        }
    }

    pub fn is_strict(self) -> bool {
        self == ValidationMode::Strict
    }
}

/// 程序配置
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 管理员登录邮箱
    pub admin_email: String,
    /// 管理员登录密码
    pub admin_password: String,
    /// JSON 种子数据文件，未设置时使用内置演示数据
    pub seed_file: Option<String>,
    /// 表单校验模式
    pub validation: ValidationMode,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_email: "admin@gmail.com".to_string(),
            admin_password: "admin123".to_string(),
            seed_file: None,
            validation: ValidationMode::Permissive,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 从 TOML 文件加载配置
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| FileError::ReadFailed {
            path: display.clone(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| FileError::TomlParseFailed {
            path: display,
            source,
        })?;
        Ok(config)
    }

    /// 完整加载流程：`CONSOLE_CONFIG` 指定的 TOML 文件（可选）+ 环境变量覆盖
    pub fn load() -> AppResult<Self> {
        let base = match std::env::var("CONSOLE_CONFIG") {
            Ok(path) => Self::from_toml_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        base.overlay(|name| std::env::var(name).ok())
    }

    /// 用外部键值覆盖配置项
    ///
    /// `lookup` 按变量名返回取值，测试中可以传入内存表代替进程环境
    pub fn overlay(mut self, lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        if let Some(email) = lookup("ADMIN_EMAIL") {
            self.admin_email = email;
        }
        if let Some(password) = lookup("ADMIN_PASSWORD") {
            self.admin_password = password;
        }
        if let Some(seed_file) = lookup("SEED_FILE") {
            self.seed_file = Some(seed_file).filter(|s| !s.is_empty());
        }
        if let Some(value) = lookup("VALIDATION_MODE") {
            self.validation =
                ValidationMode::parse(&value).ok_or_else(|| ConfigError::EnvVarParseFailed {
                    var_name: "VALIDATION_MODE".to_string(),
                    value: value.clone(),
                    expected_type: "permissive | strict".to_string(),
                })?;
        }
        if let Some(value) = lookup("VERBOSE_LOGGING") {
            self.verbose_logging =
                value.parse().map_err(|_| ConfigError::EnvVarParseFailed {
                    var_name: "VERBOSE_LOGGING".to_string(),
                    value: value.clone(),
                    expected_type: "bool".to_string(),
                })?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_overlay_replaces_values() {
        let config = Config::default()
            .overlay(lookup_from(&[
                ("ADMIN_EMAIL", "root@example.com"),
                ("VALIDATION_MODE", "Strict"),
                ("VERBOSE_LOGGING", "true"),
                ("SEED_FILE", "seed.json"),
            ]))
            .unwrap();

        assert_eq!(config.admin_email, "root@example.com");
        assert_eq!(config.admin_password, "admin123");
        assert_eq!(config.validation, ValidationMode::Strict);
        assert!(config.verbose_logging);
        assert_eq!(config.seed_file.as_deref(), Some("seed.json"));
    }

    #[test]
    fn test_overlay_rejects_bad_mode() {
        let result = Config::default().overlay(lookup_from(&[("VALIDATION_MODE", "lenient")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_toml_file() {
        let path = std::env::temp_dir().join("exam_admin_console_config_test.toml");
        std::fs::write(
            &path,
            "admin_email = \"ops@example.com\"\nvalidation = \"strict\"\n",
        )
        .unwrap();

        let config = Config::from_toml_file(&path).unwrap();
        assert_eq!(config.admin_email, "ops@example.com");
        assert_eq!(config.admin_password, "admin123");
        assert_eq!(config.validation, ValidationMode::Strict);

        let _ = std::fs::remove_file(&path);
    }
}
