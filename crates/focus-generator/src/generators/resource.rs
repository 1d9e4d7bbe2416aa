//! Resource identity columns, drawn from the per-dataset identity pool.

use super::{pick, ColumnGenerator};
use crate::context::RowContext;
use crate::error::GenerateError;
use focus_core::FocusColumn;

pub struct ResourceGenerator;

impl ColumnGenerator for ResourceGenerator {
    fn name(&self) -> &'static str {
        "resource"
    }

    fn owns(&self) -> &'static [FocusColumn] {
        &[
            FocusColumn::ResourceId,
            FocusColumn::ResourceName,
            FocusColumn::ResourceType,
        ]
    }

    fn reads(&self) -> &'static [FocusColumn] {
        &[FocusColumn::ServiceCategory]
    }

    fn generate(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError> {
        let family = ctx
            .service_family()
            .ok_or(GenerateError::MissingDependency {
                column: FocusColumn::ResourceId.name(),
                needs: FocusColumn::ServiceCategory.name(),
            })?;

        let pool = ctx.pools.resources(family);
        if pool.is_empty() {
            return Err(GenerateError::EmptyPool("resources"));
        }
        let resource = pick(&mut ctx.rng, pool);

        ctx.set(FocusColumn::ResourceId, resource.id.clone());
        ctx.set(FocusColumn::ResourceName, resource.name.clone());
        ctx.set(FocusColumn::ResourceType, resource.resource_type);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::ServiceFamily;
    use crate::testing::test_context;

    #[test]
    fn test_resource_comes_from_the_family_pool() {
        for seed in 0..100 {
            let mut ctx = test_context(seed);
            ctx.set(FocusColumn::ServiceCategory, "Storage");
            ResourceGenerator.generate(&mut ctx).unwrap();

            let id = ctx.text(FocusColumn::ResourceId).unwrap().to_string();
            let pool = ctx.pools.resources(ServiceFamily::Storage);
            let entry = pool.iter().find(|r| r.id == id).expect("id from pool");
            assert_eq!(ctx.text(FocusColumn::ResourceName), Some(entry.name.as_str()));
            assert_eq!(
                ctx.text(FocusColumn::ResourceType),
                Some(entry.resource_type)
            );
        }
    }

    #[test]
    fn test_missing_service_category_is_an_error() {
        let mut ctx = test_context(0);
        let err = ResourceGenerator.generate(&mut ctx).unwrap_err();
        assert!(matches!(err, GenerateError::MissingDependency { .. }));
    }
}
