// ── Presentation model ──
//
// Types derived from the wire records. Everything here is rebuilt on each
// load cycle; nothing is cached between reloads.

pub mod identity;
pub mod row;

pub use identity::Identity;
pub use row::{Classification, FilterMode, LiveDetails, PresentationRow};
