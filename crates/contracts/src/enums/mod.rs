pub mod unit_status;
pub mod yard_zone;

pub use unit_status::UnitStatus;
pub use yard_zone::Zone;
