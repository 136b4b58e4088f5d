pub mod core_api;
pub mod layout;
pub mod reader;
