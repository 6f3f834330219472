//! Convenient re-exports for common usage.
//!
//! ```
//! use delta_set::prelude::*;
//! ```

pub use crate::Delta;
pub use crate::DeltaReceiver;
pub use crate::DeltaSet;
pub use crate::DeltaTarget;
pub use crate::ReadonlyDeltaSet;
