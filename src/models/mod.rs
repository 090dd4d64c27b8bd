pub mod crop;
pub mod lime;
pub mod organic;
pub mod recommendation;
pub mod sns;
pub mod soil;
pub mod timing;

pub use crop::*;
pub use lime::*;
pub use organic::*;
pub use recommendation::*;
pub use sns::*;
pub use soil::*;
pub use timing::*;
