//! Symbol lookup with an injectable miss policy.

use std::sync::Arc;

use crate::{error::ConvertError, index::EnumIndexMap};

/// Builds the error reported for a symbol missing from the map.
pub type MissPolicy = fn(&str) -> ConvertError;

/// Default miss policy: [`ConvertError::UnknownEnum`] naming the symbol.
pub fn unknown_enum(symbol: &str) -> ConvertError {
    ConvertError::UnknownEnum {
        symbol: symbol.to_string(),
    }
}

/// Looks symbols up in a shared [`EnumIndexMap`].
///
/// Holds no state besides the map and the policy, so clones can be used from
/// independent streams at the same time.
#[derive(Debug, Clone)]
pub struct EnumLookup<P = MissPolicy> {
    map: Arc<EnumIndexMap>,
    on_missing: P,
}

impl EnumLookup {
    pub fn new(map: Arc<EnumIndexMap>) -> Self {
        Self {
            map,
            on_missing: unknown_enum,
        }
    }
}

impl<P> EnumLookup<P>
where
    P: Fn(&str) -> ConvertError,
{
    pub fn with_miss_policy(map: Arc<EnumIndexMap>, on_missing: P) -> Self {
        Self { map, on_missing }
    }

    /// Ordinal of `symbol`, or the miss policy's error when it is unknown.
    pub fn lookup(&self, symbol: &str) -> Result<i32, ConvertError> {
        self.map
            .get(symbol)
            .ok_or_else(|| (self.on_missing)(symbol))
    }
}
