pub mod loaders;
pub mod request;
pub mod response;
pub mod schema;

pub use request::AnalysisRequest;
pub use response::AnalysisResponse;
pub use schema::{FieldDef, FieldKind, ItemKind};
