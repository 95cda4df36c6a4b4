// Domain layer: menu and order models plus the ports the stores depend on.

pub mod model;
pub mod ports;
