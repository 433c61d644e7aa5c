//! BOQ (Bill of Quantities) parsing: row reading, specification extraction,
//! and stateful continuation ("ditto") resolution.

pub mod extract;
pub mod reader;
pub mod session;

pub use reader::RowFields;
pub use session::ParseSession;
