pub mod binding;
pub mod list;
pub mod row;
pub mod store;

pub use binding::FieldBindings;
pub use list::{ListController, RowId};
pub use row::{create_row, RowInstance};
pub use store::{Control, ControlKind, FormStore, SelectOption};
