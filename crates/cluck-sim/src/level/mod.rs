pub mod def;
pub mod spawn;
