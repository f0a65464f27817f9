// Domain layer: value types and ports. No transport or datastore details.

pub mod model;
pub mod ports;
