pub mod error;
pub mod loader;
pub mod observer;
pub mod pipeline;
pub mod schema;
pub mod table;
pub mod verify;

#[cfg(test)]
pub(crate) mod test_support;
