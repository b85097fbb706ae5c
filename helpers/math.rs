use primitive_types::U256;

pub fn casted_mul(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Downcast of an intermediate `U256` result, tagged with the call site on failure.
pub fn casted_u128(value: U256, site: u8) -> Result<u128, MathError> {
    value
        .try_into()
        .map_err(|_| MathError::CastOverflow(site))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum MathError {
    AddOverflow(u8),
    CastOverflow(u8),
    DivByZero(u8),
    MulOverflow(u8),
    SubUnderflow(u8),
}
