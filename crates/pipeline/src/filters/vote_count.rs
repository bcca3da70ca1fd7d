//! Filter to drop titles with too few votes.

use crate::traits::Filter;
use catalog::MovieSummary;

/// Removes records with fewer than `min_vote_count` votes.
pub struct VoteCountFilter {
    min_vote_count: u32,
}

impl VoteCountFilter {
    pub fn new(min_vote_count: u32) -> Self {
        Self { min_vote_count }
    }
}

impl Filter for VoteCountFilter {
    fn name(&self) -> &str {
        "VoteCountFilter"
    }

    fn accepts(&self, movie: &MovieSummary) -> bool {
        movie.vote_count >= self.min_vote_count
    }
}
