use soroban_sdk::{contracterror, contracttype, Address};

/// Category of activity a milestone rewards
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RewardType {
    Learn = 0,      // Course or tutorial completion
    Contribute = 1, // Code, content or community contributions
    Verify = 2,     // Review and verification work
}

/// Contract-wide settings and counters, stored as a single record
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GlobalConfig {
    pub contract_enabled: bool,
    pub treasury_balance: u128, // Funds available for payouts
    pub reward_rate: u64,       // Advisory only, never consulted by claims
    pub total_claims: u64,
    pub admin: Address,
    pub token_contract: Option<Address>, // Set exactly once
}

/// Threshold and payout for a milestone. Immutable once stored.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MilestoneConfig {
    pub reward_amount: u128,
    pub required_points: u64,
    pub reward_type: RewardType,
}

/// Claim record for a (user, milestone) pair
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserMilestoneClaim {
    pub claimed: bool,
    pub claimed_at_block: u32, // Ledger sequence at claim time
}

/// Instruction for the off-contract executor to move `amount` of `token`
/// from the treasury to the claimant. Never persisted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferIntent {
    pub token: Address,
    pub from: Address,
    pub to: Address,
    pub amount: u128,
}

/// Storage keys for contract data
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,                       // GlobalConfig singleton (instance)
    Milestone(u32),               // MilestoneConfig by id
    UserPoints(Address),          // Accrued points balance
    UserMilestone(Address, u32),  // Claim record by (user, milestone id)
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,       // Contract not initialized
    AlreadyInitialized = 2,   // Contract already setup
    Unauthorized = 3,         // Caller is not the admin
    AlreadySet = 4,           // Token contract already configured
    InvalidParameter = 5,     // Zero amount, points or rate
    DuplicateMilestone = 6,   // Milestone id already configured
    ContractDisabled = 7,     // Kill switch is off
    ForbiddenPrincipal = 8,   // Reserved burn address
    NotFound = 9,             // Milestone id not configured
    AlreadyClaimed = 10,      // Milestone reward already claimed by user
    InsufficientPoints = 11,  // Not enough points for the milestone
    InsufficientTreasury = 12, // Treasury cannot cover the reward
    TokenContractUnset = 13,  // Token contract not configured yet
    ArithmeticOverflow = 14,  // Balance would overflow
}
