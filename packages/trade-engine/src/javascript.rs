use cosmwasm_schema::cw_serde;
use meridian_types::{
    amount::TokenAmount,
    trade::{SubmissionPlan, SubmitAmount, TradeAction, ValidationResult},
};
use tsify::Tsify;
use wasm_bindgen::prelude::*;

use crate::TradeComputer;

// Note: Arguments and return values must use:
//          #[derive(Tsify)]
//          #[tsify(into_wasm_abi, from_wasm_abi)]
//      as attributes in order for Typescript type generation to work

#[cw_serde]
#[derive(Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct ValidationResponse {
    pub disabled_reason: Option<String>,
    pub error_reason: Option<String>,
    pub warning_reason: Option<String>,
    pub disabled_button: bool,
}

impl From<ValidationResult> for ValidationResponse {
    fn from(result: ValidationResult) -> Self {
        Self {
            disabled_reason: result.disabled_reason.map(|r| r.to_string()),
            error_reason: result.error_reason.map(|r| r.to_string()),
            warning_reason: result.warning_reason.map(|r| r.to_string()),
            disabled_button: result.disabled_button,
        }
    }
}

#[cw_serde]
#[derive(Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
pub struct SubmissionResponse {
    pub approved: bool,
    /// True when the dust sentinel replaces the literal amount.
    pub close_all: bool,
    pub units: Option<String>,
    pub reject_reason: Option<String>,
}

impl From<SubmissionPlan> for SubmissionResponse {
    fn from(plan: SubmissionPlan) -> Self {
        match plan {
            SubmissionPlan::Approved(SubmitAmount::Exact(amount)) => Self {
                approved: true,
                close_all: false,
                units: Some(amount.units.to_string()),
                reject_reason: None,
            },
            SubmissionPlan::Approved(SubmitAmount::CloseAll) => Self {
                approved: true,
                close_all: true,
                units: None,
                reject_reason: None,
            },
            SubmissionPlan::Rejected(reason) => Self {
                approved: false,
                close_all: false,
                units: None,
                reject_reason: Some(reason.to_string()),
            },
        }
    }
}

#[wasm_bindgen]
pub fn max_input_js(c: TradeComputer, action: TradeAction) -> String {
    c.max_input(action).unwrap().to_decimal_string()
}

#[wasm_bindgen]
pub fn project_risk_js(c: TradeComputer, action: TradeAction, amount: TokenAmount) -> String {
    c.project_risk(action, amount).unwrap().to_string()
}

#[wasm_bindgen]
pub fn classify_input_js(
    c: TradeComputer,
    action: TradeAction,
    amount: Option<TokenAmount>,
) -> ValidationResponse {
    c.classify_input(action, amount).unwrap().into()
}

#[wasm_bindgen]
pub fn prepare_submission_js(
    c: TradeComputer,
    action: TradeAction,
    amount: TokenAmount,
) -> SubmissionResponse {
    c.prepare_submission(action, amount).unwrap().into()
}
