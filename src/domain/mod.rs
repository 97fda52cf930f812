// Domain layer: catalog model, ports and the immutable store. No I/O here.

pub mod catalog;
pub mod formatting;
pub mod model;
pub mod ports;
