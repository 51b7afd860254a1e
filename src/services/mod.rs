pub mod aggregator;
pub mod alert;
pub mod renderer;
pub mod snapshot;

pub use aggregator::Aggregator;
pub use alert::AlertSink;
pub use renderer::{format_currency, Renderer, ResultView};
pub use snapshot::{Snapshot, SnapshotBuilder};
