//! Order groups: time-boxed, token-addressable group orders at a place
//!
//! [`OrderGroupWorkflow::open`] dispatches on the submission channel:
//!
//! - interactive: signed-in user only, expiration parsed in the business
//!   time zone and required to be at least two hours away
//! - plain form: hidden `place_id` checked against the target place, no
//!   expiration, answers with a share URL

pub mod clock;
pub mod error;
pub mod workflow;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{DateRejection, OrderGroupError};
pub use workflow::{MIN_ORDER_WINDOW, OrderGroupWorkflow, generate_token};
