//! Ordinaten-Bemaßungs-Tool: sammelt Ursprungspunkt, Messpunkt und
//! Textplatzierung sequentiell ein und committet das fertige Entity.

mod lifecycle;
mod state;

pub use state::{OrdinateDraft, OrdinatePlacement, PlacementStatus};

#[cfg(test)]
mod tests;
