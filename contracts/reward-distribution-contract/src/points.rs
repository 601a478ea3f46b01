use crate::admin::AdminModule;
use crate::events;
use crate::types::{DataKey, Error};
use soroban_sdk::{log, Address, Env, String};

/// Stellar zero account. Used as a burn address, so it may never hold
/// points or claim rewards.
pub const BURN_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub struct PointsManager;

impl PointsManager {
    /// The reserved burn principal
    pub fn burn_address(env: &Env) -> Address {
        Address::from_string(&String::from_str(env, BURN_ADDRESS))
    }

    pub fn is_reserved_principal(env: &Env, user: &Address) -> bool {
        *user == Self::burn_address(env)
    }

    /// Credit points to a user, returning the new balance.
    ///
    /// No caller authentication happens here: accrual sources are trusted to
    /// have verified the underlying activity. The only gate is that a token
    /// contract must be configured.
    pub fn update_user_points(env: &Env, user: &Address, points: u64) -> Result<u64, Error> {
        let config = AdminModule::load_config(env)?;

        if config.token_contract.is_none() {
            return Err(Error::TokenContractUnset);
        }

        if Self::is_reserved_principal(env, user) {
            log!(env, "points rejected for reserved principal");
            return Err(Error::ForbiddenPrincipal);
        }

        if points == 0 {
            return Err(Error::InvalidParameter);
        }

        let balance = Self::get_user_points(env, user)
            .checked_add(points)
            .ok_or(Error::ArithmeticOverflow)?;
        Self::set_user_points(env, user, balance);

        env.events()
            .publish((events::POINTS, user.clone()), (points, balance));

        Ok(balance)
    }

    /// Current points balance, 0 for unknown users
    pub fn get_user_points(env: &Env, user: &Address) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::UserPoints(user.clone()))
            .unwrap_or(0)
    }

    pub(crate) fn set_user_points(env: &Env, user: &Address, points: u64) {
        env.storage()
            .persistent()
            .set(&DataKey::UserPoints(user.clone()), &points);
    }
}
