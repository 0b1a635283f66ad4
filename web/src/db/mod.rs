pub mod hotel_repository;
pub mod pool;
