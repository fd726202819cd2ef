//! Thin neural-network compositions of the container algebra: layers,
//! activations, losses. No layer owns any differentiation logic of its own;
//! everything flows through the core operators.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod sequential;

pub use module::Module;
pub use sequential::Sequential;
