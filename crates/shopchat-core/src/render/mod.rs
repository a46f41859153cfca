//! Rendering: pure text transforms plus the incremental projection of the
//! transcript onto a host surface.
//!
//! `sanitize` and `format` are independent, explicitly ordered pure
//! functions so the injection boundary is auditable in isolation. Bot
//! content is escaped first, then formatted; user content is escaped only.

pub mod format;
pub mod pipeline;
pub mod sanitize;
pub mod surface;
