// Domain layer: entities and ports. No dependencies on adapters or the CLI.

pub mod model;
pub mod ports;
