//! Single-input adapters: transforming, slicing, and concatenating sequences.

mod chain;
mod map;
mod slice;

pub use chain::{chain, cycle, flatten, Chain, Cycle, Flatten};
pub use map::{filter, map, Filter, Map};
pub use slice::{drop_n, drop_while, take, take_while, DropN, DropWhile, Take, TakeWhile};
