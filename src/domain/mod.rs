// Domain layer: calculator models and the settings port. No external dependencies beyond serde.

pub mod model;
pub mod ports;
