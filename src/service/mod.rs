//! Service layer
//!
//! Business logic over the injected store:
//! - accounts: credential checks, registration, test cleanup
//! - photos: image posts and the contributor tally
//! - comments: per-source comment threads

mod accounts;
mod comments;
mod photos;

pub use accounts::{AccountService, TEST_ACCOUNT_EMAIL};
pub use comments::CommentService;
pub use photos::{LeaderboardOrder, PhotoService};
