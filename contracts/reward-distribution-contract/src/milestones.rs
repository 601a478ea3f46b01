use crate::admin::AdminModule;
use crate::events;
use crate::types::{DataKey, Error, MilestoneConfig, RewardType};
use soroban_sdk::{Address, Env};

pub struct MilestoneManager;

impl MilestoneManager {
    /// Register a new milestone. Ids are write-once.
    pub fn add_milestone_config(
        env: &Env,
        caller: &Address,
        milestone_id: u32,
        reward_amount: u128,
        required_points: u64,
        reward_type: RewardType,
    ) -> Result<(), Error> {
        AdminModule::verify_admin(env, caller)?;

        if reward_amount == 0 || required_points == 0 {
            return Err(Error::InvalidParameter);
        }

        let key = DataKey::Milestone(milestone_id);
        if env.storage().persistent().has(&key) {
            return Err(Error::DuplicateMilestone);
        }

        let milestone = MilestoneConfig {
            reward_amount,
            required_points,
            reward_type,
        };
        env.storage().persistent().set(&key, &milestone);

        env.events()
            .publish((events::MILESTONE_ADDED, milestone_id), milestone);

        Ok(())
    }

    /// Get a milestone by id, `None` if it was never configured
    pub fn get_milestone_config(env: &Env, milestone_id: u32) -> Option<MilestoneConfig> {
        env.storage()
            .persistent()
            .get(&DataKey::Milestone(milestone_id))
    }
}
