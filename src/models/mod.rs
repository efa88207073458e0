pub mod category;
pub mod charge;
pub mod procedure;

pub use category::{CategorizedProcedures, Category};
pub use charge::{ChargeItem, CodeInformation, StandardCharge};
pub use procedure::ProcedureRecord;
