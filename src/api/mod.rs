pub mod rank_request;
pub mod rank_response;

pub use rank_request::RankRequest;
pub use rank_response::{RankResponse, RankedApplicantEntry};
