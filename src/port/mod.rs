//! Trait boundaries between the application core and the outside world.

pub mod outbound;
