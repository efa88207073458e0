use serde::{Deserialize, Serialize};

/// 手术/项目价格记录 (由收费条目提取, 生成后不再修改)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcedureRecord {
    pub description: String,
    pub code: String,
    #[serde(rename = "type")]
    pub code_type: String,
    pub gross_charge: f64,     // 标准价
    pub discounted_cash: f64,  // 自费现金价
}
