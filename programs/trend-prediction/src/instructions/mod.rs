pub mod initialize_registry;
pub mod create_proposal;
pub mod vote_on_proposal;
pub mod close_proposal;
pub mod release_result;
pub mod claim_reward;
pub mod list_proposals;  // read-only paging over the registry

pub use initialize_registry::*;
pub use create_proposal::*;
pub use vote_on_proposal::*;
pub use close_proposal::*;
pub use release_result::*;
pub use claim_reward::*;
pub use list_proposals::*;
