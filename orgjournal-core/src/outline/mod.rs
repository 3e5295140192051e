mod outline_node;
mod parse_outline;

pub use outline_node::{OutlineNode, OutlineTimestamp};
pub use parse_outline::parse_outline;
