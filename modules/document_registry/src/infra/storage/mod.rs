//! Storage layer - CSV tables, row records and repositories

pub mod mapper;
pub mod record;
pub mod reference_loader;
pub mod repositories;
pub mod table;
