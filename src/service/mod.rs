pub mod context;
pub mod request;

pub use context::*;
pub use request::*;
