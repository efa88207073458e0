pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod report;
pub mod service;

pub use config::AppConfig;
pub use error::ChargesError;
pub use models::{CategorizedProcedures, Category, ProcedureRecord};
pub use report::ReportFormatter;

use std::path::Path;

/// 一次运行的分类结果
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeReport {
    pub procedures: CategorizedProcedures,
}

impl ChargeReport {
    pub fn total(&self) -> usize {
        self.procedures.total()
    }

    pub fn render(&self, formatter: &ReportFormatter) -> String {
        formatter.render(&self.procedures)
    }
}

/// 读取 -> 提取 -> 分类
///
/// 不持有任何全局状态, 可对不同文件重复或并发调用。
pub fn build_report(path: &Path) -> Result<ChargeReport, ChargesError> {
    let document = loader::load_document(path)?;
    let procedures = service::extract_procedures(&document)?;
    let procedures = service::classify_all(procedures);
    tracing::info!("Classified {} procedures from {}", procedures.total(), path.display());
    Ok(ChargeReport { procedures })
}
