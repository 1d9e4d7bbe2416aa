//! SKU identity columns.

use super::{read_dependency, ColumnGenerator};
use crate::context::RowContext;
use crate::error::GenerateError;
use focus_core::FocusColumn;
use rand::Rng;

pub struct SkuGenerator;

impl ColumnGenerator for SkuGenerator {
    fn name(&self) -> &'static str {
        "sku"
    }

    fn owns(&self) -> &'static [FocusColumn] {
        &[FocusColumn::SkuId, FocusColumn::SkuPriceId]
    }

    fn reads(&self) -> &'static [FocusColumn] {
        &[FocusColumn::ChargeCategory]
    }

    fn generate(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError> {
        let category = read_dependency(ctx, FocusColumn::SkuId, FocusColumn::ChargeCategory)?;

        // Tax rows are never SKU-priced.
        if category == "Tax" {
            return Ok(());
        }

        let sku = format!("SKU-{:04x}", ctx.rng.random_range(0u32..0x1_0000));
        let sku_price = format!("SKUPRICE-{:04x}", ctx.rng.random_range(0u32..0x1_0000));
        ctx.set(FocusColumn::SkuId, sku);
        ctx.set(FocusColumn::SkuPriceId, sku_price);

        Ok(())
    }
}
