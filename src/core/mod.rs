pub mod clock;
pub mod notice;
pub mod services;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use notice::{Notice, Severity};
pub use session::{Refresh, TrackerSession};
