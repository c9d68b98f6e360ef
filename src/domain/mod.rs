// Domain layer: plain records and the showcase port. No logic beyond constructors and parsing.

pub mod model;
pub mod ports;
