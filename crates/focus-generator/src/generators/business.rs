//! Provider, publisher and invoice issuer columns.

use super::{pick, ColumnGenerator};
use crate::context::RowContext;
use crate::error::GenerateError;
use focus_core::{CloudProvider, FocusColumn};

struct ProviderIdentity {
    name: &'static str,
    publishers: &'static [&'static str],
    invoice_issuers: &'static [&'static str],
}

static AWS_IDENTITY: ProviderIdentity = ProviderIdentity {
    name: "AWS",
    publishers: &["Amazon Web Services", "AWS Marketplace", "Third Party"],
    invoice_issuers: &[
        "Amazon Web Services, Inc.",
        "AWS EMEA SARL",
        "AWS Asia Pacific",
    ],
};

static AZURE_IDENTITY: ProviderIdentity = ProviderIdentity {
    name: "Microsoft Azure",
    publishers: &["Microsoft", "Azure Marketplace", "Third Party"],
    invoice_issuers: &[
        "Microsoft Corporation",
        "Microsoft Ireland",
        "Microsoft Singapore",
    ],
};

static GCP_IDENTITY: ProviderIdentity = ProviderIdentity {
    name: "Google Cloud",
    publishers: &["Google", "Google Cloud Marketplace", "Third Party"],
    invoice_issuers: &["Google LLC", "Google Cloud EMEA", "Google Asia Pacific"],
};

fn identity(provider: CloudProvider) -> &'static ProviderIdentity {
    match provider {
        CloudProvider::Aws => &AWS_IDENTITY,
        CloudProvider::Azure => &AZURE_IDENTITY,
        CloudProvider::Gcp => &GCP_IDENTITY,
    }
}

pub struct BusinessGenerator;

impl ColumnGenerator for BusinessGenerator {
    fn name(&self) -> &'static str {
        "business"
    }

    fn owns(&self) -> &'static [FocusColumn] {
        &[
            FocusColumn::ProviderName,
            FocusColumn::PublisherName,
            FocusColumn::InvoiceIssuerName,
        ]
    }

    fn generate(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError> {
        let identity = identity(ctx.provider);
        ctx.set(FocusColumn::ProviderName, identity.name);
        let publisher_name = *pick(&mut ctx.rng, identity.publishers);
        ctx.set(FocusColumn::PublisherName, publisher_name);
        let invoice_issuer_name = *pick(&mut ctx.rng, identity.invoice_issuers);
        ctx.set(FocusColumn::InvoiceIssuerName, invoice_issuer_name);

        Ok(())
    }
}
