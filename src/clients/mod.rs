pub mod analyze;
pub mod pdf;

pub use analyze::AnalyzeClient;
pub use pdf::PdfClient;
