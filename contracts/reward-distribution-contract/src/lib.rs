#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env};

pub mod admin;
pub mod claims;
pub mod events;
pub mod milestones;
pub mod points;
pub mod types;

use admin::AdminModule;
use claims::ClaimManager;
use milestones::MilestoneManager;
use points::PointsManager;
use types::{Error, GlobalConfig, MilestoneConfig, RewardType, TransferIntent, UserMilestoneClaim};

/// Main contract trait defining all available functions
pub trait RewardDistributionTrait {
    // Admin functions
    fn initialize(env: Env, admin: Address, treasury_balance: u128) -> Result<(), Error>;
    fn set_token_contract(env: Env, caller: Address, token_contract: Address) -> Result<(), Error>;
    fn set_reward_rate(env: Env, caller: Address, new_rate: u64) -> Result<(), Error>;
    fn toggle_contract_enabled(env: Env, caller: Address) -> Result<bool, Error>;
    fn fund_treasury(env: Env, caller: Address, amount: u128) -> Result<u128, Error>;

    // Milestones management
    fn add_milestone_config(
        env: Env,
        caller: Address,
        milestone_id: u32,
        reward_amount: u128,
        required_points: u64,
        reward_type: RewardType,
    ) -> Result<(), Error>;

    // Points and claims
    fn update_user_points(env: Env, user: Address, points: u64) -> Result<u64, Error>;
    fn claim_reward(env: Env, user: Address, milestone_id: u32) -> Result<TransferIntent, Error>;

    // Read accessors
    fn get_treasury_balance(env: Env) -> u128;
    fn get_reward_rate(env: Env) -> u64;
    fn get_total_claims(env: Env) -> u64;
    fn get_user_points(env: Env, user: Address) -> u64;
    fn get_milestone_config(env: Env, milestone_id: u32) -> Option<MilestoneConfig>;
    fn get_user_milestone(env: Env, user: Address, milestone_id: u32) -> Option<UserMilestoneClaim>;
    fn get_admin(env: Env) -> Option<Address>;
    fn get_token_contract(env: Env) -> Option<Address>;
    fn is_contract_enabled(env: Env) -> bool;
    fn get_config(env: Env) -> Option<GlobalConfig>;
}

#[contract]
pub struct RewardDistribution;

#[contractimpl]
impl RewardDistributionTrait for RewardDistribution {
    // Admin functions
    fn initialize(env: Env, admin: Address, treasury_balance: u128) -> Result<(), Error> {
        AdminModule::init(&env, &admin, treasury_balance)
    }

    fn set_token_contract(env: Env, caller: Address, token_contract: Address) -> Result<(), Error> {
        AdminModule::set_token_contract(&env, &caller, &token_contract)
    }

    fn set_reward_rate(env: Env, caller: Address, new_rate: u64) -> Result<(), Error> {
        AdminModule::set_reward_rate(&env, &caller, new_rate)
    }

    fn toggle_contract_enabled(env: Env, caller: Address) -> Result<bool, Error> {
        AdminModule::toggle_contract_enabled(&env, &caller)
    }

    fn fund_treasury(env: Env, caller: Address, amount: u128) -> Result<u128, Error> {
        AdminModule::fund_treasury(&env, &caller, amount)
    }

    // Milestones management
    fn add_milestone_config(
        env: Env,
        caller: Address,
        milestone_id: u32,
        reward_amount: u128,
        required_points: u64,
        reward_type: RewardType,
    ) -> Result<(), Error> {
        MilestoneManager::add_milestone_config(
            &env,
            &caller,
            milestone_id,
            reward_amount,
            required_points,
            reward_type,
        )
    }

    // Points and claims
    fn update_user_points(env: Env, user: Address, points: u64) -> Result<u64, Error> {
        PointsManager::update_user_points(&env, &user, points)
    }

    fn claim_reward(env: Env, user: Address, milestone_id: u32) -> Result<TransferIntent, Error> {
        ClaimManager::claim_reward(&env, &user, milestone_id)
    }

    // Read accessors
    fn get_treasury_balance(env: Env) -> u128 {
        AdminModule::get_treasury_balance(&env)
    }

    fn get_reward_rate(env: Env) -> u64 {
        AdminModule::get_reward_rate(&env)
    }

    fn get_total_claims(env: Env) -> u64 {
        AdminModule::get_total_claims(&env)
    }

    fn get_user_points(env: Env, user: Address) -> u64 {
        PointsManager::get_user_points(&env, &user)
    }

    fn get_milestone_config(env: Env, milestone_id: u32) -> Option<MilestoneConfig> {
        MilestoneManager::get_milestone_config(&env, milestone_id)
    }

    fn get_user_milestone(env: Env, user: Address, milestone_id: u32) -> Option<UserMilestoneClaim> {
        ClaimManager::get_user_milestone(&env, &user, milestone_id)
    }

    fn get_admin(env: Env) -> Option<Address> {
        AdminModule::get_admin(&env)
    }

    fn get_token_contract(env: Env) -> Option<Address> {
        AdminModule::get_token_contract(&env)
    }

    fn is_contract_enabled(env: Env) -> bool {
        AdminModule::is_contract_enabled(&env)
    }

    fn get_config(env: Env) -> Option<GlobalConfig> {
        AdminModule::get_config(&env)
    }
}
