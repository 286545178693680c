pub mod row;
pub mod user;
