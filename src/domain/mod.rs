// Domain layer: API models and ports (interfaces).

pub mod model;
pub mod ports;
