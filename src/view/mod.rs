pub mod markup;
pub mod node;

pub use node::{ControlNode, Element, Table, ViewNode};
