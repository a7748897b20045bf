pub mod resume;

pub use resume::{ResumeRecord, SectionUpdate};
