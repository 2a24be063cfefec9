pub mod engine;
pub mod history;
pub mod metadata;
pub mod report;

pub use engine::*;
pub use history::*;
pub use metadata::*;
pub use report::*;
