mod command_result;
pub mod context;
pub mod extract;
pub mod init;
pub mod pending;
pub mod translate;

pub use command_result::*;
