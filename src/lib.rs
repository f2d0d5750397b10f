pub mod beep;
pub mod compiler;
pub mod error;
pub mod source;

pub use compiler::Compiler;
pub use error::Error;
