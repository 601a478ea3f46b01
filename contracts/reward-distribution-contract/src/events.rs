use soroban_sdk::{contracttype, symbol_short, Symbol};

// Symbol representing contract initialization.
pub const INITIALIZED: Symbol = symbol_short!("init");

// Symbol representing the one-time token contract assignment.
pub const TOKEN_SET: Symbol = symbol_short!("token_set");

// Symbol representing reward rate updates.
pub const RATE_SET: Symbol = symbol_short!("rate_set");

// Symbol representing kill switch flips.
pub const TOGGLED: Symbol = symbol_short!("toggled");

// Symbol representing new milestone configs.
pub const MILESTONE_ADDED: Symbol = symbol_short!("ms_added");

// Symbol representing treasury top-ups.
pub const FUNDED: Symbol = symbol_short!("funded");

// Symbol representing point accrual.
pub const POINTS: Symbol = symbol_short!("points");

// Transfer intents and claims use names longer than nine characters.
pub const TRANSFER_INTENT: &str = "transfer_intent";
pub const REWARD_CLAIMED: &str = "reward_claimed";

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimed {
    pub milestone_id: u32,
    pub reward_amount: u128,
    pub claimed_at_block: u32,
}
