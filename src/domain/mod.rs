// Domain layer: lookup models and the ports the client and config implement.

pub mod model;
pub mod ports;
