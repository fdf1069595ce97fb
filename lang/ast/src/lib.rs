mod ident;
mod node;
mod package;
mod pos;
mod set;
mod symbol;

pub use ident::*;
pub use node::*;
pub use package::*;
pub use pos::*;
pub use set::*;
pub use symbol::*;

pub type HashMap<K, V> = fxhash::FxHashMap<K, V>;
