pub mod date_key;
pub mod record;
pub mod types;

pub use date_key::*;
pub use record::*;
pub use types::*;
