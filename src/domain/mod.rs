// Domain layer: path constants, query parameters and the transport port.

pub mod endpoints;
pub mod model;
pub mod ports;
