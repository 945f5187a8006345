//! Interactive query layer: named filters, cached graphs, rendering

mod registry;
mod render;
mod session;

pub use registry::{AllEntities, FilterRegistry, RelationFilter};
pub use render::{render_error, render_path, NO_PATH};
pub use session::{GraphSet, Query, QueryError, QuerySession};
