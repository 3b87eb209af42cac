//! hvut-site: header navigation and blog catalog for a Form 2290 e-filing site,
//! laid out as a hexagon (domain, ports, adapters, use cases).

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
