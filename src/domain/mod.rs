// Domain layer: the token payload, the raw response, and the ports the core depends on.

pub mod model;
pub mod ports;
