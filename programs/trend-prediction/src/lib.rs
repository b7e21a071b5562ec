pub mod constants;
pub mod engine;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use engine::*;
pub use error::*;
pub use instructions::*;
pub use state::*;

declare_id!("D9ZvX3tLKzCEhX6HM4FAdFsJnpqewW6canG5UJAfrAU5");

#[program]
pub mod trend_prediction {
    use super::*;

    // Create the proposal registry (once per deployment)
    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        initialize_registry_handler(ctx)
    }

    // Create a new proposal at [PROPOSAL_SEED, author, title]
    pub fn create_proposal(
        ctx: Context<CreateProposal>,
        title: String,
        description: String,
        token_address: Option<Pubkey>,
        duration_days: u16,
    ) -> Result<()> {
        create_proposal_handler(ctx, title, description, token_address, duration_days)
    }

    // Vote YES or NO, or switch an earlier vote
    pub fn vote_on_proposal(
        ctx: Context<VoteOnProposal>,
        vote_direction: VoteDirection,
    ) -> Result<()> {
        vote_on_proposal_handler(ctx, vote_direction)
    }

    // Author-only: close after expiration and fix the outcome from the tally
    pub fn close_proposal(ctx: Context<CloseProposal>) -> Result<()> {
        close_proposal_handler(ctx)
    }

    // Author-only: fund the reward pool, closing the proposal if still open
    pub fn release_result(
        ctx: Context<ReleaseResult>,
        winning_side: Option<VoteDirection>,
        reward_pool: u64,
    ) -> Result<()> {
        release_result_handler(ctx, winning_side, reward_pool)
    }

    // Winning voter: collect an equal share of the pool
    pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
        claim_reward_handler(ctx)
    }

    pub fn list_proposals(
        ctx: Context<ListProposals>,
        offset: u64,
        limit: u8,
    ) -> Result<Vec<Pubkey>> {
        list_proposals_handler(ctx, offset, limit)
    }
}
