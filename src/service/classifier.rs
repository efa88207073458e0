use crate::models::{CategorizedProcedures, Category, ProcedureRecord};

/// 分类规则 (按顺序匹配, 先命中者优先)
///
/// 关键字与小写后的完整描述做子串匹配, 未命中任何规则归入 Other。
pub const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (Category::Surgery, &["surgery", "surgical", "operation", "repair"]),
    (Category::Cardiac, &["cardiac", "heart", "cardiology", "angioplasty", "catheter"]),
    (
        Category::Imaging,
        &["mri", "ct", "scan", "x-ray", "xray", "ultrasound", "imaging"],
    ),
    (Category::Lab, &["lab", "blood", "test", "panel", "culture"]),
    (Category::Therapy, &["therapy", "physical", "occupational", "speech"]),
];

pub fn classify(description: &str) -> Category {
    let lower = description.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|&(category, _)| category)
        .unwrap_or(Category::Other)
}

/// 按分类归组, 组内保持首次出现顺序
pub fn classify_all<I>(records: I) -> CategorizedProcedures
where
    I: IntoIterator<Item = ProcedureRecord>,
{
    let mut procedures = CategorizedProcedures::new();
    for record in records {
        let category = classify(&record.description);
        procedures.push(category, record);
    }

    for (category, records) in procedures.non_empty() {
        tracing::debug!("{}: {} procedures", category, records.len());
    }
    procedures
}
