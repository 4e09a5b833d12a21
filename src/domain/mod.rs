// Domain layer: the project name, planned outputs and the filesystem port.

pub mod model;
pub mod ports;
