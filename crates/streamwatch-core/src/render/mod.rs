// ── Rendering ──
//
// `row` turns a `PresentationRow` into a node tree. `session` owns the
// container those nodes are appended to, plus the registry the filter
// reads from.

mod node;
mod row;
mod session;

pub use node::{Element, Node, escape};
pub use row::row_node;
pub use session::{NodeId, RegistryEntry, RenderSession, StatusSummary};
