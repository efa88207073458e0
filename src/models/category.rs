use crate::models::ProcedureRecord;
use indexmap::IndexMap;
use std::fmt;

/// 项目分类 (声明顺序即报表顺序)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Surgery,
    Cardiac,
    Imaging,
    Lab,
    Therapy,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Surgery,
        Category::Cardiac,
        Category::Imaging,
        Category::Lab,
        Category::Therapy,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Surgery => "Surgery",
            Category::Cardiac => "Cardiac",
            Category::Imaging => "Imaging",
            Category::Lab => "Lab",
            Category::Therapy => "Therapy",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 分类结果表: 每次运行新建, 六个分类按声明顺序预置
#[derive(Debug, Clone, PartialEq)]
pub struct CategorizedProcedures {
    buckets: IndexMap<Category, Vec<ProcedureRecord>>,
}

impl Default for CategorizedProcedures {
    fn default() -> Self {
        Self::new()
    }
}

impl CategorizedProcedures {
    pub fn new() -> Self {
        let buckets = Category::ALL
            .iter()
            .map(|&category| (category, Vec::new()))
            .collect();
        Self { buckets }
    }

    pub fn push(&mut self, category: Category, record: ProcedureRecord) {
        self.buckets.entry(category).or_default().push(record);
    }

    pub fn get(&self, category: Category) -> &[ProcedureRecord] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// 按声明顺序遍历所有分类 (含空分类)
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[ProcedureRecord])> {
        self.buckets
            .iter()
            .map(|(&category, records)| (category, records.as_slice()))
    }

    pub fn non_empty(&self) -> impl Iterator<Item = (Category, &[ProcedureRecord])> {
        self.iter().filter(|(_, records)| !records.is_empty())
    }

    /// 所有分类的记录总数
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}
