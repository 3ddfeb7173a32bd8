pub mod common;
pub mod decode;
pub mod index;
pub mod keep;
