pub mod helper;
pub mod path;
pub mod testing;
