//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod gear_repo;
pub mod guitarist_repo;
pub mod manufacturer_repo;

pub use gear_repo::GearRepo;
pub use guitarist_repo::GuitaristRepo;
pub use manufacturer_repo::ManufacturerRepo;
