//! Per-dataset identity pools.
//!
//! Billing accounts, sub-accounts and resources are drawn from pools built
//! once per dataset from a dedicated RNG stream. Rows then sample from the
//! pools, so the same identities recur across rows and across billing
//! periods; a multi-month trend shows the same resources growing, not a
//! fresh fleet every month.

use crate::family::ServiceFamily;
use crate::seeding::{stream_seed, streams};
use focus_core::{GenerationRequest, Profile};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

pub const COMPANIES: &[&str] = &[
    "Acme Corp",
    "TechStart Inc",
    "Global Systems",
    "Data Dynamics",
    "Cloud Solutions",
];

pub const DEPARTMENTS: &[&str] = &["Production", "Development", "Testing", "Staging", "Analytics"];

pub const CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "JPY", "CAD"];

#[derive(Debug, Clone)]
pub struct BillingAccount {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct SubAccount {
    pub id: String,
    pub name: String,
}

/// One provisioned resource: id, display name and type stay together so a
/// resource never changes shape between the rows (or months) that bill it.
#[derive(Debug, Clone)]
pub struct PooledResource {
    pub id: String,
    pub name: String,
    pub resource_type: &'static str,
}

#[derive(Debug)]
pub struct IdentityPools {
    currency: &'static str,
    billing_accounts: Vec<BillingAccount>,
    sub_accounts: Vec<SubAccount>,
    /// Resource pools indexed by `ServiceFamily::index()`.
    resources: Vec<Vec<PooledResource>>,
}

impl IdentityPools {
    pub fn build(request: &GenerationRequest) -> Self {
        let mut rng = StdRng::seed_from_u64(stream_seed(request.seed, streams::POOLS));

        let currency = *CURRENCIES
            .choose(&mut rng)
            .expect("currency table is non-empty");

        let billing_accounts = (0..billing_account_count(request.profile))
            .map(|_| BillingAccount {
                id: account_id(&mut rng),
                name: (*COMPANIES.choose(&mut rng).expect("company table is non-empty"))
                    .to_string(),
            })
            .collect();

        let sub_accounts = DEPARTMENTS
            .iter()
            .map(|department| SubAccount {
                id: account_id(&mut rng),
                name: (*department).to_string(),
            })
            .collect();

        let per_family = resource_pool_size(request.profile);
        let resources = ServiceFamily::ALL
            .iter()
            .map(|family| {
                (0..per_family)
                    .map(|_| {
                        let id = format!("{}{:08x}", family.resource_id_prefix(), rng.random::<u32>());
                        let suffix = &id[id.len() - 4..];
                        PooledResource {
                            name: format!("{}-{}", family.resource_name_stem(), suffix),
                            resource_type: family
                                .resource_types()
                                .choose(&mut rng)
                                .expect("resource type table is non-empty"),
                            id,
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            currency,
            billing_accounts,
            sub_accounts,
            resources,
        }
    }

    pub fn currency(&self) -> &'static str {
        self.currency
    }

    pub fn billing_accounts(&self) -> &[BillingAccount] {
        &self.billing_accounts
    }

    pub fn sub_accounts(&self) -> &[SubAccount] {
        &self.sub_accounts
    }

    pub fn resources(&self, family: ServiceFamily) -> &[PooledResource] {
        &self.resources[family.index()]
    }
}

/// 12-digit provider-style account id.
fn account_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.random_range(100_000_000_000u64..=999_999_999_999).to_string()
}

fn billing_account_count(profile: Profile) -> usize {
    match profile {
        Profile::Greenfield => 1,
        Profile::LargeBusiness => 3,
        Profile::Enterprise => 8,
    }
}

/// Resources provisioned per service family. Bigger organizations spread
/// spend over more distinct resources.
fn resource_pool_size(profile: Profile) -> usize {
    match profile {
        Profile::Greenfield => 8,
        Profile::LargeBusiness => 24,
        Profile::Enterprise => 64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use focus_core::{CloudProvider, Distribution};

    fn request(profile: Profile) -> GenerationRequest {
        GenerationRequest::new(
            profile,
            Distribution::EvenlyDistributed,
            vec![CloudProvider::Aws],
            10,
        )
    }

    #[test]
    fn test_pools_are_deterministic() {
        let a = IdentityPools::build(&request(Profile::Greenfield));
        let b = IdentityPools::build(&request(Profile::Greenfield));

        assert_eq!(a.currency(), b.currency());
        assert_eq!(a.billing_accounts().len(), b.billing_accounts().len());
        for (left, right) in a.billing_accounts().iter().zip(b.billing_accounts()) {
            assert_eq!(left.id, right.id);
            assert_eq!(left.name, right.name);
        }
        for family in ServiceFamily::ALL {
            let ids: Vec<&str> = a.resources(family).iter().map(|r| r.id.as_str()).collect();
            let other: Vec<&str> = b.resources(family).iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ids, other);
        }
    }

    #[test]
    fn test_pool_sizes_scale_with_profile() {
        let small = IdentityPools::build(&request(Profile::Greenfield));
        let large = IdentityPools::build(&request(Profile::Enterprise));

        assert!(small.billing_accounts().len() < large.billing_accounts().len());
        assert!(
            small.resources(ServiceFamily::Compute).len()
                < large.resources(ServiceFamily::Compute).len()
        );
    }

    #[test]
    fn test_resource_ids_carry_family_prefix() {
        let pools = IdentityPools::build(&request(Profile::LargeBusiness));
        for resource in pools.resources(ServiceFamily::Storage) {
            assert!(resource.id.starts_with("vol-"), "{}", resource.id);
        }
        for resource in pools.resources(ServiceFamily::Compute) {
            assert!(resource.id.starts_with("i-"), "{}", resource.id);
        }
    }

    #[test]
    fn test_account_ids_are_twelve_digits() {
        let pools = IdentityPools::build(&request(Profile::Enterprise));
        for account in pools.billing_accounts() {
            assert_eq!(account.id.len(), 12);
            assert!(account.id.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
