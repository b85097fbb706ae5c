use booster_helpers::{
    constants::fees::FEE_DENOM,
    math::{casted_mul, MathError},
};

/// Harvest fee split, each share an integer with 1e4 precision.
#[ink::storage_item]
#[derive(Debug, Default)]
pub struct FeeSchedule {
    /// Share kept for the treasury.
    pub platform_fee: u32,
    /// Share paid to whoever triggered the harvest.
    pub caller_incentive: u32,
    /// Share routed to the locker account.
    pub locker_incentive: u32,
}

/// One harvested amount partitioned into its destinations. `net` is what gets
/// streamed to the stakers.
#[derive(Debug, PartialEq, Eq)]
pub struct HarvestSplit {
    pub platform: u128,
    pub caller: u128,
    pub locker: u128,
    pub net: u128,
}

impl FeeSchedule {
    /// Shares are given as integers with 1e4 precision. Their sum must not
    /// exceed [`FEE_DENOM`](const@FEE_DENOM).
    pub fn new(platform_fee: u32, caller_incentive: u32, locker_incentive: u32) -> Option<Self> {
        let total = platform_fee
            .checked_add(caller_incentive)?
            .checked_add(locker_incentive)?;
        if total > FEE_DENOM {
            None
        } else {
            Some(Self {
                platform_fee,
                caller_incentive,
                locker_incentive,
            })
        }
    }

    pub fn zero() -> Self {
        Self {
            platform_fee: 0,
            caller_incentive: 0,
            locker_incentive: 0,
        }
    }

    /// Splits `amount`. Every share rounds down, so `net` absorbs the
    /// remainder and the parts always sum to `amount` exactly.
    pub fn split(&self, amount: u128) -> Result<HarvestSplit, MathError> {
        let platform = u128_ratio(amount, self.platform_fee, FEE_DENOM)?;
        let caller = u128_ratio(amount, self.caller_incentive, FEE_DENOM)?;
        let locker = u128_ratio(amount, self.locker_incentive, FEE_DENOM)?;
        let net = amount
            .checked_sub(platform)
            .ok_or(MathError::SubUnderflow(41))?
            .checked_sub(caller)
            .ok_or(MathError::SubUnderflow(42))?
            .checked_sub(locker)
            .ok_or(MathError::SubUnderflow(43))?;
        Ok(HarvestSplit {
            platform,
            caller,
            locker,
            net,
        })
    }
}

fn u128_ratio(amount: u128, num: u32, denom: u32) -> Result<u128, MathError> {
    casted_mul(amount, num.into())
        .checked_div(denom.into())
        .ok_or(MathError::DivByZero(41))?
        .try_into()
        .map_err(|_| MathError::CastOverflow(41))
}
