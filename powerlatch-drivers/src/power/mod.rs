//! Power line drivers

pub mod auxiliary;
pub mod modules;
pub mod rail;

pub use auxiliary::GpioAuxShutdown;
pub use modules::GpioModulePower;
pub use rail::{GpioPowerRail, RailPolarity};
