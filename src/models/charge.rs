use serde_json::Value;

/// 收费条目视图 (standard_charge_information 列表中的一项)
///
/// 只按需读取用到的字段, 不做整体校验: 缺失或类型不符的字段按默认值处理。
#[derive(Debug, Clone, Copy)]
pub struct ChargeItem<'a> {
    raw: &'a Value,
}

/// 计费编码
#[derive(Debug, Clone, Copy)]
pub struct CodeInformation<'a> {
    raw: &'a Value,
}

/// 价格信息 (只使用第一项)
#[derive(Debug, Clone, Copy)]
pub struct StandardCharge<'a> {
    raw: &'a Value,
}

impl<'a> ChargeItem<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    pub fn description(self) -> &'a str {
        self.raw
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// 按列表顺序遍历编码, 字段不是列表时视为空
    pub fn codes(self) -> impl Iterator<Item = CodeInformation<'a>> {
        self.raw
            .get("code_information")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|raw| CodeInformation { raw })
    }

    /// 第一条价格记录, 列表为空时返回 None
    pub fn first_charge(self) -> Option<StandardCharge<'a>> {
        self.raw
            .get("standard_charges")
            .and_then(Value::as_array)
            .and_then(|charges| charges.first())
            .map(|raw| StandardCharge { raw })
    }
}

impl<'a> CodeInformation<'a> {
    pub fn code_type(self) -> Option<&'a str> {
        self.raw.get("type").and_then(Value::as_str)
    }

    /// 编码值; 数字编码按原样转成文本
    pub fn code(self) -> String {
        match self.raw.get("code") {
            Some(Value::String(code)) => code.clone(),
            Some(Value::Number(code)) => code.to_string(),
            _ => String::new(),
        }
    }
}

impl StandardCharge<'_> {
    pub fn gross_charge(self) -> f64 {
        self.amount("gross_charge")
    }

    pub fn discounted_cash(self) -> f64 {
        self.amount("discounted_cash")
    }

    // 非数字 (如 "N/A") 按 0 处理
    fn amount(self, field: &str) -> f64 {
        self.raw.get(field).and_then(Value::as_f64).unwrap_or(0.0)
    }
}
