pub mod amount;
pub mod error;
pub mod math;
pub mod pool;
pub mod risk;
pub mod trade;

use cosmwasm_schema::cw_serde;
#[cfg(feature = "javascript")]
use tsify::Tsify;

/// Externally supplied data that may not have arrived yet. Callers have to
/// handle the unloaded case explicitly instead of falling through on a
/// default value.
#[cw_serde]
#[cfg_attr(feature = "javascript", derive(Tsify))]
#[cfg_attr(feature = "javascript", tsify(into_wasm_abi, from_wasm_abi))]
pub enum Loadable<T> {
    NotLoaded,
    Loaded(T),
}

impl<T> Loadable<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::NotLoaded => None,
            Loadable::Loaded(value) => Some(value),
        }
    }

    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            Loadable::NotLoaded => None,
            Loadable::Loaded(value) => Some(value),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Loadable::Loaded(_))
    }
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::NotLoaded
    }
}

impl<T> From<Option<T>> for Loadable<T> {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Loadable::NotLoaded, Loadable::Loaded)
    }
}
