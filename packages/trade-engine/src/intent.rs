use meridian_types::{amount::TokenAmount, trade::TradeAction};

use crate::error::{EngineError, EngineResult};

/// The single live trade intent: what the user is typing, the canonical
/// parsed amount, and the in-flight flag. The raw-text stage may be
/// debounced by the UI; validation always reads [`TradeIntent::amount`],
/// never the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeIntent {
    action: TradeAction,
    denom: String,
    raw_input: String,
    amount: Option<TokenAmount>,
    sending: bool,
}

impl TradeIntent {
    pub fn new(action: TradeAction, denom: impl Into<String>) -> Self {
        Self {
            action,
            denom: denom.into(),
            raw_input: String::new(),
            amount: None,
            sending: false,
        }
    }

    pub fn action(&self) -> TradeAction {
        self.action
    }

    pub fn denom(&self) -> &str {
        &self.denom
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// The canonical amount validation operates on. `None` until something
    /// parseable has been typed.
    pub fn amount(&self) -> Option<TokenAmount> {
        self.amount
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Raw-text stage: parse failures are recovered locally by coercing to
    /// zero, so a stray keystroke can never block the input field.
    pub fn set_input_text(&mut self, text: &str, decimals: u32) {
        self.raw_input = text.to_string();
        self.amount = if text.trim().is_empty() {
            None
        } else {
            Some(
                TokenAmount::from_decimal_str(text, decimals)
                    .unwrap_or_else(|_| TokenAmount::zero(decimals)),
            )
        };
    }

    /// Switching the target asset invalidates everything derived from the
    /// old one: no stale cross-asset state may leak into the new context.
    pub fn switch_asset(&mut self, denom: impl Into<String>) {
        let denom = denom.into();
        if denom != self.denom {
            self.denom = denom;
            self.clear_input();
        }
    }

    pub fn switch_action(&mut self, action: TradeAction) {
        if action != self.action {
            self.action = action;
            self.clear_input();
        }
    }

    pub fn clear_input(&mut self) {
        self.raw_input.clear();
        self.amount = None;
    }

    /// At most one submission per account is in flight. Locks until
    /// [`TradeIntent::finish_send`] resolves it.
    pub fn begin_send(&mut self) -> EngineResult<()> {
        if self.sending {
            return Err(EngineError::SubmissionInFlight);
        }
        self.sending = true;
        Ok(())
    }

    /// The amount field survives a failed or cancelled submission so the
    /// user can correct and resubmit; it is cleared only on confirmed
    /// success.
    pub fn finish_send(&mut self, success: bool) {
        self.sending = false;
        if success {
            self.clear_input();
        }
    }
}
