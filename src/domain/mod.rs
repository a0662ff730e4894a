// Domain layer: calculation models and ports (interfaces).

pub mod model;
pub mod ports;
