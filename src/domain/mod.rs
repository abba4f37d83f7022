// Domain layer: card model and the set-finding port. No I/O here.

pub mod model;
pub mod ports;
