use std::path::PathBuf;

/// 运行期错误: 均为致命错误, 出错时不输出任何报表内容
#[derive(Debug, thiserror::Error)]
pub enum ChargesError {
    #[error("failed to read charges file {path}: {source}", path = path.display())]
    DataAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse charges file {path}: {source}", path = path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected document shape: {0}")]
    Schema(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("no input file given (pass a path or set CHARGES__INPUT__PATH)")]
    MissingInput,
}
