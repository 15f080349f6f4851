pub mod chart;
pub mod constants;
pub mod routes;
pub mod table;
pub mod types;
pub mod utils;
