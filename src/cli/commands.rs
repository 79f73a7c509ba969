pub mod openapi;
pub mod serve;

pub use openapi::print_openapi;
pub use serve::serve;
