pub mod build;
pub mod frame;
