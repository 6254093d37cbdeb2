// =============================================================================
// Helper Functions
// =============================================================================
//
// Shared utility functions used across the simulation.
//
// Modules:
// - geometry.rs   : Point/segment distance math
// - validation.rs : Tower placement rules
//
// =============================================================================

pub mod geometry;
pub mod validation;
