pub mod gear;
pub mod guitarist;
pub mod manufacturer;
