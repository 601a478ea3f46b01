use crate::events;
use crate::types::{DataKey, Error, GlobalConfig};
use soroban_sdk::{Address, Env};

/// Reward rate written at initialization
pub const DEFAULT_REWARD_RATE: u64 = 100;

pub struct AdminModule;

impl AdminModule {
    /// Initialize the contract with an admin and an opening treasury balance
    pub fn init(env: &Env, admin: &Address, treasury_balance: u128) -> Result<(), Error> {
        // Check if already initialized
        if env.storage().instance().has(&DataKey::Config) {
            return Err(Error::AlreadyInitialized);
        }

        // Require authorization from the admin
        admin.require_auth();

        let config = GlobalConfig {
            contract_enabled: true,
            treasury_balance,
            reward_rate: DEFAULT_REWARD_RATE,
            total_claims: 0,
            admin: admin.clone(),
            token_contract: None,
        };
        Self::save_config(env, &config);

        env.events()
            .publish((events::INITIALIZED, admin.clone()), treasury_balance);

        Ok(())
    }

    /// Load the config singleton
    pub fn load_config(env: &Env) -> Result<GlobalConfig, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)
    }

    pub fn save_config(env: &Env, config: &GlobalConfig) {
        env.storage().instance().set(&DataKey::Config, config);
    }

    /// Authenticate `caller` and check it holds the admin slot.
    /// Returns the loaded config so callers can mutate and save it.
    pub fn verify_admin(env: &Env, caller: &Address) -> Result<GlobalConfig, Error> {
        let config = Self::load_config(env)?;

        caller.require_auth();

        if *caller != config.admin {
            return Err(Error::Unauthorized);
        }

        Ok(config)
    }

    /// Set the token contract. Can only happen once.
    pub fn set_token_contract(
        env: &Env,
        caller: &Address,
        token_contract: &Address,
    ) -> Result<(), Error> {
        let mut config = Self::verify_admin(env, caller)?;

        if config.token_contract.is_some() {
            return Err(Error::AlreadySet);
        }

        config.token_contract = Some(token_contract.clone());
        Self::save_config(env, &config);

        env.events()
            .publish((events::TOKEN_SET,), token_contract.clone());

        Ok(())
    }

    /// Update the advisory reward rate
    pub fn set_reward_rate(env: &Env, caller: &Address, new_rate: u64) -> Result<(), Error> {
        let mut config = Self::verify_admin(env, caller)?;

        if new_rate == 0 {
            return Err(Error::InvalidParameter);
        }

        config.reward_rate = new_rate;
        Self::save_config(env, &config);

        env.events().publish((events::RATE_SET,), new_rate);

        Ok(())
    }

    /// Flip the kill switch, returning the new state
    pub fn toggle_contract_enabled(env: &Env, caller: &Address) -> Result<bool, Error> {
        let mut config = Self::verify_admin(env, caller)?;

        config.contract_enabled = !config.contract_enabled;
        Self::save_config(env, &config);

        env.events()
            .publish((events::TOGGLED,), config.contract_enabled);

        Ok(config.contract_enabled)
    }

    /// Top up the treasury, returning the new balance
    pub fn fund_treasury(env: &Env, caller: &Address, amount: u128) -> Result<u128, Error> {
        let mut config = Self::verify_admin(env, caller)?;

        if amount == 0 {
            return Err(Error::InvalidParameter);
        }

        config.treasury_balance = config
            .treasury_balance
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        Self::save_config(env, &config);

        env.events()
            .publish((events::FUNDED,), (amount, config.treasury_balance));

        Ok(config.treasury_balance)
    }

    pub fn get_config(env: &Env) -> Option<GlobalConfig> {
        Self::load_config(env).ok()
    }

    pub fn get_admin(env: &Env) -> Option<Address> {
        Self::get_config(env).map(|config| config.admin)
    }

    pub fn get_token_contract(env: &Env) -> Option<Address> {
        Self::get_config(env).and_then(|config| config.token_contract)
    }

    pub fn is_contract_enabled(env: &Env) -> bool {
        Self::get_config(env)
            .map(|config| config.contract_enabled)
            .unwrap_or(false)
    }

    /// Current treasury balance (0 before initialization)
    pub fn get_treasury_balance(env: &Env) -> u128 {
        Self::get_config(env)
            .map(|config| config.treasury_balance)
            .unwrap_or(0)
    }

    pub fn get_reward_rate(env: &Env) -> u64 {
        Self::get_config(env)
            .map(|config| config.reward_rate)
            .unwrap_or(0)
    }

    pub fn get_total_claims(env: &Env) -> u64 {
        Self::get_config(env)
            .map(|config| config.total_claims)
            .unwrap_or(0)
    }
}
