pub mod shutdown;
pub mod types;
pub mod validations;

pub use shutdown::*;
pub use types::*;
