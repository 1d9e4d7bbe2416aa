//! Billing account hierarchy and currency columns.

use super::{pick, ColumnGenerator};
use crate::context::RowContext;
use crate::error::GenerateError;
use focus_core::FocusColumn;

pub struct AccountGenerator;

impl ColumnGenerator for AccountGenerator {
    fn name(&self) -> &'static str {
        "account"
    }

    fn owns(&self) -> &'static [FocusColumn] {
        &[
            FocusColumn::BillingAccountId,
            FocusColumn::BillingAccountName,
            FocusColumn::SubAccountId,
            FocusColumn::SubAccountName,
            FocusColumn::BillingCurrency,
        ]
    }

    fn generate(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError> {
        let accounts = ctx.pools.billing_accounts();
        if accounts.is_empty() {
            return Err(GenerateError::EmptyPool("billing accounts"));
        }
        let account = pick(&mut ctx.rng, accounts);
        ctx.set(FocusColumn::BillingAccountId, account.id.clone());
        ctx.set(FocusColumn::BillingAccountName, account.name.clone());

        let sub_accounts = ctx.pools.sub_accounts();
        if sub_accounts.is_empty() {
            return Err(GenerateError::EmptyPool("sub accounts"));
        }
        let sub_account = pick(&mut ctx.rng, sub_accounts);
        ctx.set(FocusColumn::SubAccountId, sub_account.id.clone());
        ctx.set(FocusColumn::SubAccountName, sub_account.name.clone());

        ctx.set(FocusColumn::BillingCurrency, ctx.pools.currency());

        Ok(())
    }
}
