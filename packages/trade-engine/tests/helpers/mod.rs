pub use self::{mock_asset_info::*, prop_test_runner::*, prop_test_strategies::*};

mod mock_asset_info;
mod prop_test_runner;
mod prop_test_strategies;
