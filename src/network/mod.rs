pub mod backward;
pub mod forward;
pub mod init;
pub mod network;

pub use backward::{backward, backward_from};
pub use forward::{forward, predict, Activations};
pub use init::{initialize, initialize_with_width};
pub use network::Network;
