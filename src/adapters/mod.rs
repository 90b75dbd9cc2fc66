// Adapters layer: concrete implementations for external systems (terminal, clock).

pub mod clock;
pub mod console;
