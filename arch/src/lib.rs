pub mod mem;
pub mod op;
