// Domain layer: records, selection state, chart description and ports.

pub mod figure;
pub mod model;
pub mod ports;
