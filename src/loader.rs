use crate::error::ChargesError;
use serde_json::Value;
use std::path::Path;

/// 读取并解析收费文件
///
/// 文件一次性读入内存, 句柄在解析前即已关闭。
pub fn load_document(path: &Path) -> Result<Value, ChargesError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ChargesError::DataAccess {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Read {} bytes from {}", raw.len(), path.display());

    serde_json::from_str(&raw).map_err(|source| ChargesError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
