pub mod classifier;
pub mod extractor;

pub use classifier::{classify, classify_all, CATEGORY_RULES};
pub use extractor::{extract_procedure, extract_procedures, RECOGNIZED_CODE_TYPES};
