pub mod fuel;
pub mod parameters;
