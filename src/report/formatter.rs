use crate::config::ReportConfig;
use crate::models::{CategorizedProcedures, ProcedureRecord};

pub const REPORT_TITLE: &str = "HOSPITAL STANDARD CHARGES - PROCEDURE PRICING";

const DESCRIPTION_WIDTH: usize = 55;
const TYPE_WIDTH: usize = 8;
const CODE_WIDTH: usize = 10;
const AMOUNT_WIDTH: usize = 10;

/// 控制台报表格式化
#[derive(Debug, Clone)]
pub struct ReportFormatter {
    pub rows_per_category: usize,
    pub rule_width: usize,
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::from(&ReportConfig::default())
    }
}

impl From<&ReportConfig> for ReportFormatter {
    fn from(config: &ReportConfig) -> Self {
        Self {
            rows_per_category: config.rows_per_category,
            rule_width: config.rule_width,
        }
    }
}

impl ReportFormatter {
    /// 生成完整报表文本
    ///
    /// 空分类不输出; 每个分类最多列出 rows_per_category 行, 但末尾总数统计全部记录。
    pub fn render(&self, procedures: &CategorizedProcedures) -> String {
        let heavy = "=".repeat(self.rule_width);
        let light = "-".repeat(self.rule_width);

        let mut out = format!("{}\n{}\n{}\n", heavy, REPORT_TITLE, heavy);

        for (category, records) in procedures.non_empty() {
            out.push_str(&format!(
                "\n{} ({} procedures)\n{}\n",
                category.label().to_uppercase(),
                records.len(),
                light
            ));
            for record in records.iter().take(self.rows_per_category) {
                out.push_str(&format_row(record));
                out.push('\n');
            }
        }

        out.push_str(&format!("\n\nTotal procedures found: {}\n", procedures.total()));
        out
    }
}

/// 单行: 描述(截断/补齐55) | 类型 编码 | $标准价
pub fn format_row(record: &ProcedureRecord) -> String {
    let description: String = record.description.chars().take(DESCRIPTION_WIDTH).collect();
    format!(
        "{:<dw$} | {:<tw$} {:<cw$} | ${:>aw$}",
        description,
        record.code_type,
        record.code,
        format_currency(record.gross_charge),
        dw = DESCRIPTION_WIDTH,
        tw = TYPE_WIDTH,
        cw = CODE_WIDTH,
        aw = AMOUNT_WIDTH,
    )
}

/// 金额格式: 千分位 + 两位小数 (15000 -> "15,000.00")
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{}", sign, grouped, fraction)
}
