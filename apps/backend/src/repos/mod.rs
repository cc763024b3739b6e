//! Domain models and the narrow store contracts the boundary layer
//! implements. The core holds id-based references only; it never owns
//! player or persistence lifecycle.

pub mod games;
pub mod players;
pub mod turns;
