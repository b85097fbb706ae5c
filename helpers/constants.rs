pub mod fees {
    /// Fee shares are expressed in basis points of this denominator.
    pub const FEE_DENOM: u32 = 10_000;
}

pub mod rewards {
    /// Upper bound on reward streams per pool, the primary stream included.
    pub const MAX_REWARD_STREAMS: u32 = 8;

    /// Canonical reward window length: seven days in milliseconds.
    pub const WEEK: u64 = 7 * 24 * 60 * 60 * 1000;
}
