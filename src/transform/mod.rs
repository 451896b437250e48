pub mod amount;
pub mod date;
pub mod layout;
pub mod row;
pub mod text;

pub mod prelude {
    pub use super::amount::Amount;
    pub use super::date::DateStyle;
    pub use super::layout::{ColumnLayout, PayeeColumn, SignConvention};
    pub use super::row::{RowTransformer, transform};
}
