use primitive_types::U256;
use scale::{Decode, Encode};

/// `U256` wrapped for use in contract storage and SCALE-encoded interfaces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Encode, Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct WrappedU256(pub U256);

impl WrappedU256 {
    pub const ZERO: Self = WrappedU256(U256::zero());
}

impl From<U256> for WrappedU256 {
    fn from(value: U256) -> Self {
        WrappedU256(value)
    }
}

impl From<WrappedU256> for U256 {
    fn from(value: WrappedU256) -> Self {
        value.0
    }
}

impl From<u128> for WrappedU256 {
    fn from(value: u128) -> Self {
        WrappedU256(U256::from(value))
    }
}

#[cfg(feature = "std")]
impl ink::storage::traits::StorageLayout for WrappedU256 {
    fn layout(key: &ink::primitives::Key) -> ink::metadata::layout::Layout {
        ink::metadata::layout::Layout::Leaf(ink::metadata::layout::LeafLayout::from_key::<Self>(
            ink::metadata::layout::LayoutKey::from(key),
        ))
    }
}
