pub mod container;
pub mod controller;
pub mod router;

pub use container::{Container, ContainerConfig};
pub use controller::{HoroscopeController, HoroscopeResponse};
pub use router::{build_router, serve};
