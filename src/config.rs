use crate::error::ChargesError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 默认配置文件名 (不存在时忽略)
pub const DEFAULT_CONFIG_FILE: &str = "hospital-charges";

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_rows_per_category")]
    pub rows_per_category: usize,
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,
}

fn default_rows_per_category() -> usize {
    15
}

fn default_rule_width() -> usize {
    100
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            rows_per_category: default_rows_per_category(),
            rule_width: default_rule_width(),
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 -> 配置文件 -> 环境变量 (CHARGES__REPORT__ROWS_PER_CATEGORY 等)
    ///
    /// 显式指定的配置文件必须存在, 默认配置文件可缺省。
    pub fn load(config_file: Option<&Path>) -> Result<Self, ChargesError> {
        Self::load_with_env(config_file, None)
    }

    /// 同 load, env 为 None 时读取进程环境变量, 否则使用给定的变量表
    pub fn load_with_env(
        config_file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ChargesError> {
        let file = match config_file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("CHARGES")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// 命令行参数覆盖配置
    pub fn apply_overrides(&mut self, path: Option<PathBuf>, rows: Option<usize>) {
        if let Some(path) = path {
            self.input.path = Some(path);
        }
        if let Some(rows) = rows {
            self.report.rows_per_category = rows;
        }
    }

    /// 输入文件路径, 未配置时报错
    pub fn input_path(&self) -> Result<&Path, ChargesError> {
        self.input.path.as_deref().ok_or(ChargesError::MissingInput)
    }
}
