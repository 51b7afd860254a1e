pub mod intake;

pub use intake::{apply_intake, load_intake_file, IntakeFile};
