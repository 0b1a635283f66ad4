pub mod format;
pub mod history;
pub mod routes;
