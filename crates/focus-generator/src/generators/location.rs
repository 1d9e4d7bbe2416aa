//! Region and availability zone columns.
//!
//! Regions and zones follow each provider's naming scheme; a zone only ever
//! appears inside its own region, and both are absent for charges that are
//! not region-specific.

use super::{pick, ColumnGenerator};
use crate::context::RowContext;
use crate::error::GenerateError;
use focus_core::{CloudProvider, FocusColumn};
use rand::Rng;

struct Region {
    id: &'static str,
    name: &'static str,
    zones: &'static [&'static str],
}

const AWS_REGIONS: &[Region] = &[
    Region {
        id: "us-east-1",
        name: "US East (N. Virginia)",
        zones: &["us-east-1a", "us-east-1b", "us-east-1c", "us-east-1d", "us-east-1f"],
    },
    Region {
        id: "us-west-2",
        name: "US West (Oregon)",
        zones: &["us-west-2a", "us-west-2b", "us-west-2c", "us-west-2d"],
    },
    Region {
        id: "eu-west-1",
        name: "Europe (Ireland)",
        zones: &["eu-west-1a", "eu-west-1b", "eu-west-1c"],
    },
    Region {
        id: "ap-southeast-1",
        name: "Asia Pacific (Singapore)",
        zones: &["ap-southeast-1a", "ap-southeast-1b", "ap-southeast-1c"],
    },
    Region {
        id: "ca-central-1",
        name: "Canada (Central)",
        zones: &["ca-central-1a", "ca-central-1b", "ca-central-1d"],
    },
];

const AZURE_REGIONS: &[Region] = &[
    Region {
        id: "eastus",
        name: "East US",
        zones: &["eastus-1", "eastus-2", "eastus-3"],
    },
    Region {
        id: "westus",
        name: "West US",
        zones: &["westus-1", "westus-2", "westus-3"],
    },
    Region {
        id: "northeurope",
        name: "North Europe",
        zones: &["northeurope-1", "northeurope-2", "northeurope-3"],
    },
    Region {
        id: "southeastasia",
        name: "Southeast Asia",
        zones: &["southeastasia-1", "southeastasia-2", "southeastasia-3"],
    },
];

const GCP_REGIONS: &[Region] = &[
    Region {
        id: "us-central1",
        name: "Iowa",
        zones: &["us-central1-a", "us-central1-b", "us-central1-c", "us-central1-f"],
    },
    Region {
        id: "us-east1",
        name: "South Carolina",
        zones: &["us-east1-b", "us-east1-c", "us-east1-d"],
    },
    Region {
        id: "europe-west1",
        name: "Belgium",
        zones: &["europe-west1-b", "europe-west1-c", "europe-west1-d"],
    },
    Region {
        id: "asia-southeast1",
        name: "Singapore",
        zones: &["asia-southeast1-a", "asia-southeast1-b", "asia-southeast1-c"],
    },
];

fn regions(provider: CloudProvider) -> &'static [Region] {
    match provider {
        CloudProvider::Aws => AWS_REGIONS,
        CloudProvider::Azure => AZURE_REGIONS,
        CloudProvider::Gcp => GCP_REGIONS,
    }
}

/// Share of charges with no region at all (global services, support fees).
const REGIONLESS_RATE: f64 = 0.10;

/// Share of regional charges that are not zonal.
const ZONELESS_RATE: f64 = 0.20;

pub struct LocationGenerator;

impl ColumnGenerator for LocationGenerator {
    fn name(&self) -> &'static str {
        "location"
    }

    fn owns(&self) -> &'static [FocusColumn] {
        &[
            FocusColumn::RegionId,
            FocusColumn::RegionName,
            FocusColumn::AvailabilityZone,
        ]
    }

    fn generate(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError> {
        if ctx.rng.random_bool(REGIONLESS_RATE) {
            // Region-free charge: no region, no zone.
            return Ok(());
        }

        let region = pick(&mut ctx.rng, regions(ctx.provider));
        let zone = if ctx.rng.random_bool(ZONELESS_RATE) {
            None
        } else {
            Some(*pick(&mut ctx.rng, region.zones))
        };

        ctx.set(FocusColumn::RegionId, region.id);
        ctx.set(FocusColumn::RegionName, region.name);
        if let Some(zone) = zone {
            ctx.set(FocusColumn::AvailabilityZone, zone);
        }

        Ok(())
    }
}
