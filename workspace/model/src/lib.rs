pub mod entities;
pub mod types;

pub use types::StringList;
