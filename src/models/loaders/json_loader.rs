use crate::error::FileError;
use crate::models::seed::SeedData;
use anyhow::Result;
use std::path::Path;
use tokio::fs;

/// 从 JSON 文件加载种子数据
///
/// 文件包含 `questions`、`users`、`submissions` 三个数组，缺省的数组视为空。
pub async fn load_seed_file(json_file_path: &Path) -> Result<SeedData> {
    let path = json_file_path.display().to_string();
    let content = fs::read_to_string(json_file_path)
        .await
        .map_err(|source| FileError::ReadFailed {
            path: path.clone(),
            source,
        })?;

    let seed: SeedData = serde_json::from_str(&content)
        .map_err(|source| FileError::JsonParseFailed { path, source })?;

    tracing::info!(
        "成功加载种子数据: {} 道题目, {} 个用户, {} 份提交",
        seed.questions.len(),
        seed.users.len(),
        seed.submissions.len()
    );

    Ok(seed)
}

/// 按配置加载种子数据，未指定文件时使用内置演示数据
pub async fn load_seed(seed_file: Option<&str>) -> Result<SeedData> {
    match seed_file {
        Some(path) => load_seed_file(Path::new(path)).await,
        None => {
            tracing::info!("未指定种子文件，使用内置演示数据");
            Ok(SeedData::builtin())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_seed_file() {
        let path = std::env::temp_dir().join("exam_admin_console_seed_test.json");
        std::fs::write(
            &path,
            r#"{
                "questions": [
                    { "id": 9, "section": "ai", "text": "Q?", "options": ["a", "b"], "answer": "a" }
                ]
            }"#,
        )
        .unwrap();

        let seed = load_seed_file(&path).await.unwrap();
        assert_eq!(seed.questions.len(), 1);
        assert_eq!(seed.questions[0].id, 9);
        assert!(seed.users.is_empty());
        assert!(seed.submissions.is_empty());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("exam_admin_console_missing_seed.json");
        let err = tokio_test::block_on(load_seed_file(&path)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FileError>(),
            Some(FileError::ReadFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_load_malformed_file() {
        let path = std::env::temp_dir().join("exam_admin_console_malformed_seed.json");
        std::fs::write(&path, r#"{ "questions": [ { "id": "x" } ] }"#).unwrap();

        let err = load_seed_file(&path).await.unwrap_err();
        match err.downcast_ref::<FileError>() {
            Some(FileError::JsonParseFailed { path: reported, .. }) => {
                assert!(reported.ends_with("exam_admin_console_malformed_seed.json"));
            }
            other => panic!("应为 JSON 解析错误, 实际: {:?}", other),
        }

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_builtin_fallback() {
        let seed = tokio_test::block_on(load_seed(None)).unwrap();
        assert_eq!(seed, SeedData::builtin());
    }
}
