pub type CmdResult<T> = brtools::Result<T>;

pub mod format;
pub mod mask;
pub mod validate;
