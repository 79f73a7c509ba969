pub mod forecast;
pub mod layout;
