pub mod errors;
pub mod nullable;
pub mod text;

pub use errors::*;
pub use nullable::*;
pub use text::*;
