//! Budget guard
//!
//! Decides whether a candidate expense may enter the ledger. The check runs
//! strictly before insertion: a rejected expense is never added and never
//! persisted.

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, NewExpense};

/// Admit or reject a candidate expense against the current ledger
///
/// Field validation runs first: an empty description or non-positive amount
/// is a [`LedgerError::Validation`], reported before any budget arithmetic.
/// Then, if a cap is set for the candidate's period and the period's spend
/// plus the candidate amount would exceed it, the candidate is rejected with
/// [`LedgerError::BudgetExceeded`] carrying the overage context. No cap set
/// means no limit.
pub fn admit(ledger: &Ledger, candidate: &NewExpense) -> LedgerResult<()> {
    candidate.validate()?;

    let period = candidate.period();
    let Some(cap) = ledger.budgets().get(period) else {
        return Ok(());
    };

    let spent = ledger.spent_in(period);
    if spent + candidate.amount > cap {
        return Err(LedgerError::BudgetExceeded {
            period,
            cap,
            spent,
            attempted: candidate.amount,
        });
    }

    debug!(%period, %cap, %spent, attempted = %candidate.amount, "expense admitted under cap");
    Ok(())
}
