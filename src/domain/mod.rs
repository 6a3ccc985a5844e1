// Domain layer: the settings model, collection names and endpoints, and the
// ports the provisioner talks through.

pub mod model;
pub mod ports;
