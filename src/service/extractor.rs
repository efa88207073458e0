use crate::error::ChargesError;
use crate::models::{ChargeItem, ProcedureRecord};
use serde_json::Value;

/// 顶层收费列表字段
pub const CHARGE_INFORMATION_KEY: &str = "standard_charge_information";

/// 可识别的编码类型 (精确匹配, 区分大小写)
pub const RECOGNIZED_CODE_TYPES: [&str; 5] = ["CPT", "HCPCS", "MS-DRG", "APR-DRG", "REV CODE"];

pub fn is_recognized_code_type(code_type: &str) -> bool {
    RECOGNIZED_CODE_TYPES.contains(&code_type)
}

/// 取出文档中的收费条目列表
///
/// 只校验顶层结构; 条目内部字段在提取时按需读取。
pub fn charge_items(document: &Value) -> Result<&[Value], ChargesError> {
    let Some(object) = document.as_object() else {
        return Err(ChargesError::Schema("top-level value is not an object".to_string()));
    };
    let Some(list) = object.get(CHARGE_INFORMATION_KEY) else {
        return Err(ChargesError::Schema(format!(
            "missing top-level key `{}`",
            CHARGE_INFORMATION_KEY
        )));
    };
    let Some(entries) = list.as_array() else {
        return Err(ChargesError::Schema(format!("`{}` is not a list", CHARGE_INFORMATION_KEY)));
    };
    Ok(entries)
}

/// 单条目提取: 取第一个可识别编码, 没有则跳过
pub fn extract_procedure(item: ChargeItem<'_>) -> Option<ProcedureRecord> {
    let (code_type, code) = item.codes().find_map(|c| {
        c.code_type()
            .filter(|t| is_recognized_code_type(t))
            .map(|t| (t, c))
    })?;

    // 价格列表为空时按 0 处理
    let (gross_charge, discounted_cash) = item
        .first_charge()
        .map(|c| (c.gross_charge(), c.discounted_cash()))
        .unwrap_or((0.0, 0.0));

    Some(ProcedureRecord {
        description: item.description().to_string(),
        code: code.code(),
        code_type: code_type.to_string(),
        gross_charge,
        discounted_cash,
    })
}

/// 提取全部记录 (保持输入顺序, 不去重)
pub fn extract_procedures(document: &Value) -> Result<Vec<ProcedureRecord>, ChargesError> {
    let items = charge_items(document)?;

    let mut procedures = Vec::with_capacity(items.len());
    for (idx, raw) in items.iter().enumerate() {
        match extract_procedure(ChargeItem::new(raw)) {
            Some(record) => procedures.push(record),
            None => tracing::trace!("Item {} has no recognized code, skipping", idx),
        }
    }

    tracing::info!(
        "Extracted {} procedures from {} charge items ({} skipped)",
        procedures.len(),
        items.len(),
        items.len() - procedures.len()
    );
    Ok(procedures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn uses_first_recognized_code_only() {
        let document = json!({
            "standard_charge_information": [{
                "description": "Knee Repair",
                "code_information": [
                    {"type": "LOCAL", "code": "L-1"},
                    {"type": "HCPCS", "code": "G0101"},
                    {"type": "CPT", "code": "27447"}
                ],
                "standard_charges": [{"gross_charge": 100.5, "discounted_cash": 80}]
            }]
        });

        let records = extract_procedures(&document).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code_type, "HCPCS");
        assert_eq!(records[0].code, "G0101");
        assert_eq!(records[0].gross_charge, 100.5);
        assert_eq!(records[0].discounted_cash, 80.0);
    }

    #[test]
    fn items_without_recognized_code_are_skipped() {
        let document = json!({
            "standard_charge_information": [
                {
                    "description": "Pharmacy item",
                    "code_information": [{"type": "NDC", "code": "0002-1433"}]
                },
                {"description": "No codes"},
                {
                    "description": "Lowercase type",
                    "code_information": [{"type": "cpt", "code": "1"}]
                },
                {
                    "description": "Kept",
                    "code_information": [{"type": "REV CODE", "code": "0450"}]
                }
            ]
        });

        let records = extract_procedures(&document).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "Kept");
    }

    #[test]
    fn empty_or_partial_charges_default_to_zero() {
        let document = json!({
            "standard_charge_information": [
                {
                    "description": "A",
                    "code_information": [{"type": "CPT", "code": "1"}],
                    "standard_charges": []
                },
                {
                    "description": "B",
                    "code_information": [{"type": "CPT", "code": "2"}],
                    "standard_charges": [{"gross_charge": 50}]
                },
                {"code_information": [{"type": "MS-DRG"}]}
            ]
        });

        let records = extract_procedures(&document).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!((records[0].gross_charge, records[0].discounted_cash), (0.0, 0.0));
        assert_eq!((records[1].gross_charge, records[1].discounted_cash), (50.0, 0.0));
        assert_eq!(records[2].description, "");
        assert_eq!(records[2].code, "");
        assert_eq!(records[2].code_type, "MS-DRG");
    }

    #[test]
    fn only_first_charge_entry_is_read() {
        let document = json!({
            "standard_charge_information": [{
                "description": "Office visit",
                "code_information": [{"type": "CPT", "code": "99213"}],
                "standard_charges": [{"gross_charge": 100}, {"gross_charge": "N/A"}]
            }]
        });

        let records = extract_procedures(&document).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].gross_charge, 100.0);
    }

    #[test]
    fn codes_after_the_first_recognized_one_are_ignored() {
        let document = json!({
            "standard_charge_information": [{
                "description": "Office visit",
                "code_information": [
                    {"type": "CPT", "code": "1"},
                    {"type": "LOCAL", "code": 42},
                    "garbage"
                ]
            }]
        });

        let records = extract_procedures(&document).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "1");
    }

    #[test]
    fn odd_fields_on_skipped_items_are_not_fatal() {
        let document = json!({
            "standard_charge_information": [
                {
                    "description": "Acetaminophen",
                    "code_information": [{"type": "NDC", "code": 12345}]
                },
                {"code_information": "CPT", "standard_charges": "none"},
                "not an item",
                {
                    "description": "Blood panel",
                    "code_information": [{"type": "CPT", "code": "80053"}]
                }
            ]
        });

        let records = extract_procedures(&document).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description, "Blood panel");
    }

    #[test]
    fn numeric_code_is_kept_as_text() {
        let document = json!({
            "standard_charge_information": [{
                "description": "Emergency room",
                "code_information": [{"type": "REV CODE", "code": 450}]
            }]
        });

        let records = extract_procedures(&document).unwrap();
        assert_eq!(records[0].code, "450");
    }

    #[test]
    fn preserves_input_order_and_duplicates() {
        let item = json!({
            "description": "Blood panel",
            "code_information": [{"type": "CPT", "code": "80053"}]
        });
        let other = json!({
            "description": "X",
            "code_information": [{"type": "APR-DRG", "code": "5"}]
        });
        let document = json!({"standard_charge_information": [item.clone(), other, item]});

        let records = extract_procedures(&document).unwrap();
        let descriptions: Vec<&str> = records.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Blood panel", "X", "Blood panel"]);
    }

    #[test]
    fn missing_top_level_key_is_schema_error() {
        let document = json!({"hospital_name": "Freeman West"});
        let err = extract_procedures(&document).unwrap_err();
        assert!(matches!(err, ChargesError::Schema(ref m) if m.contains(CHARGE_INFORMATION_KEY)));
    }

    #[test]
    fn wrong_top_level_shapes_are_schema_errors() {
        assert!(matches!(extract_procedures(&json!([1, 2])), Err(ChargesError::Schema(_))));
        assert!(matches!(
            extract_procedures(&json!({"standard_charge_information": {"a": 1}})),
            Err(ChargesError::Schema(_))
        ));
    }
}
