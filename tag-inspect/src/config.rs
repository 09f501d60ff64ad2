use crate::error::{ConfigError, ConfigResult};

/// tag-inspect 配置，从环境变量读取
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | TAG_ID | - | 标签 ID (i32) |
/// | TAG_NAME | - | 标签名称 |
/// | TAG_COLOR | - | 标签颜色 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志目录 (存在时按天滚动写文件) |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tag_id: Option<i32>,
    pub tag_name: Option<String>,
    pub tag_color: Option<String>,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup. Absent keys use defaults; only a present
    /// `TAG_ID` that is not an `i32` is rejected.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tag_id = match lookup("TAG_ID") {
            Some(raw) => Some(raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "TAG_ID",
                value: raw.clone(),
            })?),
            None => None,
        };

        Ok(Self {
            tag_id,
            tag_name: lookup("TAG_NAME"),
            tag_color: lookup("TAG_COLOR"),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR"),
        })
    }
}
