// Domain layer: catalog models and ports. No transport or config concerns.

pub mod model;
pub mod ports;
