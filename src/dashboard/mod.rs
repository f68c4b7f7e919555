/// Dashboard domain layer
///
/// Wire contracts shared with the Orbyte API, client-side derivations over
/// them, and the per-view state containers the pages settle into.
pub mod domain;
pub mod services;
pub mod state;
