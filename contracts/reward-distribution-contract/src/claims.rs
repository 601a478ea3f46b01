use crate::admin::AdminModule;
use crate::events::{self, RewardClaimed};
use crate::milestones::MilestoneManager;
use crate::points::PointsManager;
use crate::types::{DataKey, Error, TransferIntent, UserMilestoneClaim};
use soroban_sdk::{log, Address, Env, Symbol};

pub struct ClaimManager;

impl ClaimManager {
    /// Redeem a milestone reward for `user`.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// kill switch, reserved principal, milestone existence, prior claim,
    /// points, treasury, token contract. Nothing is written until every
    /// check has passed.
    ///
    /// On success the treasury is debited, the claim is recorded at the
    /// current ledger sequence, `required_points` are deducted and a
    /// [`TransferIntent`] is published for the executor to settle.
    pub fn claim_reward(
        env: &Env,
        user: &Address,
        milestone_id: u32,
    ) -> Result<TransferIntent, Error> {
        user.require_auth();

        let mut config = AdminModule::load_config(env)?;

        if !config.contract_enabled {
            return Err(Error::ContractDisabled);
        }

        if PointsManager::is_reserved_principal(env, user) {
            log!(env, "claim rejected for reserved principal");
            return Err(Error::ForbiddenPrincipal);
        }

        let milestone =
            MilestoneManager::get_milestone_config(env, milestone_id).ok_or(Error::NotFound)?;

        if Self::has_claimed(env, user, milestone_id) {
            return Err(Error::AlreadyClaimed);
        }

        let points = PointsManager::get_user_points(env, user);
        if points < milestone.required_points {
            log!(
                env,
                "claim rejected: points {} below required {}",
                points,
                milestone.required_points
            );
            return Err(Error::InsufficientPoints);
        }

        if config.treasury_balance < milestone.reward_amount {
            log!(
                env,
                "claim rejected: treasury {} below reward {}",
                config.treasury_balance,
                milestone.reward_amount
            );
            return Err(Error::InsufficientTreasury);
        }

        let token = config.token_contract.clone().ok_or(Error::TokenContractUnset)?;

        let total_claims = config
            .total_claims
            .checked_add(1)
            .ok_or(Error::ArithmeticOverflow)?;

        // All checks passed, commit
        let claimed_at_block = env.ledger().sequence();
        let intent = TransferIntent {
            token,
            from: env.current_contract_address(),
            to: user.clone(),
            amount: milestone.reward_amount,
        };

        config.treasury_balance -= milestone.reward_amount;
        config.total_claims = total_claims;
        AdminModule::save_config(env, &config);

        env.storage().persistent().set(
            &DataKey::UserMilestone(user.clone(), milestone_id),
            &UserMilestoneClaim {
                claimed: true,
                claimed_at_block,
            },
        );

        PointsManager::set_user_points(env, user, points - milestone.required_points);

        env.events().publish(
            (Symbol::new(env, events::TRANSFER_INTENT), user.clone()),
            intent.clone(),
        );
        env.events().publish(
            (Symbol::new(env, events::REWARD_CLAIMED), user.clone()),
            RewardClaimed {
                milestone_id,
                reward_amount: milestone.reward_amount,
                claimed_at_block,
            },
        );

        Ok(intent)
    }

    /// Claim record for (user, milestone), `None` if never claimed
    pub fn get_user_milestone(
        env: &Env,
        user: &Address,
        milestone_id: u32,
    ) -> Option<UserMilestoneClaim> {
        env.storage()
            .persistent()
            .get(&DataKey::UserMilestone(user.clone(), milestone_id))
    }

    pub fn has_claimed(env: &Env, user: &Address, milestone_id: u32) -> bool {
        Self::get_user_milestone(env, user, milestone_id)
            .map(|record| record.claimed)
            .unwrap_or(false)
    }
}
