//! Ports - Interfaces between the application core and the outside world
//!
//! Only trait definitions and their error types live here. Concrete
//! implementations belong to the infrastructure layer.

pub mod outbound;
