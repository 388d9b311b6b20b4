mod category;
mod line;

pub use self::category::{Category, ParseCategoryError};
pub use self::line::RecordLine;
