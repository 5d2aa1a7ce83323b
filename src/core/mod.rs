pub mod error;
pub mod feedback;
pub mod floating;
pub mod host;
pub mod params;
pub mod pointer;
pub mod scroll;
pub mod trail;
pub mod visibility;

pub use error::*;
pub use feedback::*;
pub use host::*;
pub use params::*;
pub use pointer::*;
pub use trail::*;
pub use visibility::*;
