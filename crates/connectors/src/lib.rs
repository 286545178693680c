pub mod error;
pub mod http;
pub mod settings;
pub mod sql;
