pub mod params;
pub mod row;
pub mod session;
pub mod utils;
