//! Service identity: category, name and subcategory.
//!
//! The family is drawn first from the distribution's weight table; the
//! concrete service name then comes from the provider's table for that
//! family, and the subcategory from the family's subcategory set. Sampling
//! jointly keeps the three columns coherent with each other and with the
//! provider.

use super::{pick, pick_weighted, ColumnGenerator};
use crate::context::RowContext;
use crate::error::GenerateError;
use crate::family::ServiceFamily;
use focus_core::{CloudProvider, Distribution, FocusColumn};

/// Service mix for `Evenly Distributed`. All weight tables are tunable
/// constants; the skews below are the engine's documented defaults.
pub const EVENLY_DISTRIBUTED_WEIGHTS: &[(ServiceFamily, f64)] = &[
    (ServiceFamily::Compute, 0.30),
    (ServiceFamily::Storage, 0.20),
    (ServiceFamily::Databases, 0.20),
    (ServiceFamily::Networking, 0.10),
    (ServiceFamily::MachineLearning, 0.10),
    (ServiceFamily::Other, 0.10),
];

/// Service mix for `ML-Focused`: ML services lead, everything else recedes.
pub const ML_FOCUSED_WEIGHTS: &[(ServiceFamily, f64)] = &[
    (ServiceFamily::Compute, 0.25),
    (ServiceFamily::Storage, 0.15),
    (ServiceFamily::Databases, 0.15),
    (ServiceFamily::Networking, 0.05),
    (ServiceFamily::MachineLearning, 0.35),
    (ServiceFamily::Other, 0.05),
];

/// Service mix for `Data-Intensive`: storage and databases dominate.
pub const DATA_INTENSIVE_WEIGHTS: &[(ServiceFamily, f64)] = &[
    (ServiceFamily::Compute, 0.20),
    (ServiceFamily::Storage, 0.35),
    (ServiceFamily::Databases, 0.30),
    (ServiceFamily::Networking, 0.05),
    (ServiceFamily::MachineLearning, 0.05),
    (ServiceFamily::Other, 0.05),
];

/// Service mix for `Media-Intensive`: storage plus heavy egress.
pub const MEDIA_INTENSIVE_WEIGHTS: &[(ServiceFamily, f64)] = &[
    (ServiceFamily::Compute, 0.15),
    (ServiceFamily::Storage, 0.40),
    (ServiceFamily::Databases, 0.10),
    (ServiceFamily::Networking, 0.25),
    (ServiceFamily::MachineLearning, 0.05),
    (ServiceFamily::Other, 0.05),
];

pub fn service_weights(distribution: Distribution) -> &'static [(ServiceFamily, f64)] {
    match distribution {
        Distribution::EvenlyDistributed => EVENLY_DISTRIBUTED_WEIGHTS,
        Distribution::MlFocused => ML_FOCUSED_WEIGHTS,
        Distribution::DataIntensive => DATA_INTENSIVE_WEIGHTS,
        Distribution::MediaIntensive => MEDIA_INTENSIVE_WEIGHTS,
    }
}

/// Service names offered per provider and family.
fn service_names(provider: CloudProvider, family: ServiceFamily) -> &'static [&'static str] {
    match provider {
        CloudProvider::Aws => match family {
            ServiceFamily::Compute => &[
                "Amazon EC2",
                "AWS Lambda",
                "Amazon ECS",
                "AWS Batch",
                "Amazon Lightsail",
                "AWS Fargate",
            ],
            ServiceFamily::Storage => &[
                "Amazon S3",
                "Amazon EBS",
                "Amazon EFS",
                "Amazon Glacier",
                "AWS Storage Gateway",
                "AWS Backup",
            ],
            ServiceFamily::Databases => &[
                "Amazon RDS",
                "Amazon DynamoDB",
                "Amazon Redshift",
                "Amazon ElastiCache",
                "Amazon DocumentDB",
                "Amazon Neptune",
            ],
            ServiceFamily::Networking => &[
                "Amazon VPC",
                "AWS Direct Connect",
                "Amazon CloudFront",
                "AWS Load Balancer",
                "Amazon Route 53",
                "AWS Global Accelerator",
            ],
            ServiceFamily::MachineLearning => &[
                "Amazon SageMaker",
                "Amazon Comprehend",
                "Amazon Rekognition",
                "AWS Bedrock",
                "Amazon Textract",
                "Amazon Forecast",
            ],
            ServiceFamily::Other => &[
                "AWS IAM",
                "Amazon CloudWatch",
                "AWS Config",
                "AWS CloudTrail",
                "AWS Systems Manager",
                "AWS Organizations",
            ],
        },
        CloudProvider::Azure => match family {
            ServiceFamily::Compute => &[
                "Azure Virtual Machines",
                "Azure Functions",
                "Azure Container Instances",
                "Azure Batch",
                "Azure App Service",
                "Azure Kubernetes Service",
            ],
            ServiceFamily::Storage => &[
                "Azure Blob Storage",
                "Azure Disk Storage",
                "Azure Files",
                "Azure Archive Storage",
                "Azure Data Lake Storage",
                "Azure Backup",
            ],
            ServiceFamily::Databases => &[
                "Azure SQL Database",
                "Azure Cosmos DB",
                "Azure Synapse",
                "Azure Cache for Redis",
                "Azure Database for PostgreSQL",
                "Azure Database for MySQL",
            ],
            ServiceFamily::Networking => &[
                "Azure Virtual Network",
                "Azure ExpressRoute",
                "Azure CDN",
                "Azure Load Balancer",
                "Azure Traffic Manager",
                "Azure Front Door",
            ],
            ServiceFamily::MachineLearning => &[
                "Azure Machine Learning",
                "Azure Cognitive Services",
                "Azure Computer Vision",
                "Azure OpenAI",
                "Azure Bot Service",
                "Azure Form Recognizer",
            ],
            ServiceFamily::Other => &[
                "Azure Active Directory",
                "Azure Monitor",
                "Azure Policy",
                "Azure Key Vault",
                "Azure Resource Manager",
                "Azure Cost Management",
            ],
        },
        CloudProvider::Gcp => match family {
            ServiceFamily::Compute => &[
                "Google Compute Engine",
                "Google Cloud Functions",
                "Google Cloud Run",
                "Google Cloud Batch",
                "Google App Engine",
                "Google Kubernetes Engine",
            ],
            ServiceFamily::Storage => &[
                "Google Cloud Storage",
                "Google Persistent Disk",
                "Google Filestore",
                "Google Cloud Archive",
                "Google Cloud Backup",
                "Google Transfer Service",
            ],
            ServiceFamily::Databases => &[
                "Google Cloud SQL",
                "Google Firestore",
                "Google BigQuery",
                "Google Memorystore",
                "Google Cloud Spanner",
                "Google Bigtable",
            ],
            ServiceFamily::Networking => &[
                "Google VPC",
                "Google Cloud Interconnect",
                "Google Cloud CDN",
                "Google Cloud Load Balancing",
                "Google Cloud DNS",
                "Google Cloud Armor",
            ],
            ServiceFamily::MachineLearning => &[
                "Google AI Platform",
                "Google Cloud AI",
                "Google Cloud Vision",
                "Google Vertex AI",
                "Google Cloud Natural Language",
                "Google Cloud Translation",
            ],
            ServiceFamily::Other => &[
                "Google Cloud IAM",
                "Google Cloud Monitoring",
                "Google Cloud Asset Inventory",
                "Google Cloud Security Command Center",
                "Google Cloud Deployment Manager",
                "Google Cloud Billing",
            ],
        },
    }
}

pub struct ServiceGenerator;

impl ColumnGenerator for ServiceGenerator {
    fn name(&self) -> &'static str {
        "service"
    }

    fn owns(&self) -> &'static [FocusColumn] {
        &[
            FocusColumn::ServiceCategory,
            FocusColumn::ServiceName,
            FocusColumn::ServiceSubcategory,
        ]
    }

    fn generate(&self, ctx: &mut RowContext<'_>) -> Result<(), GenerateError> {
        let family = *pick_weighted(&mut ctx.rng, service_weights(ctx.distribution));
        let service = *pick(&mut ctx.rng, service_names(ctx.provider, family));
        let subcategory = *pick(&mut ctx.rng, family.subcategories());

        ctx.set(FocusColumn::ServiceCategory, family.category());
        ctx.set(FocusColumn::ServiceName, service);
        ctx.set(FocusColumn::ServiceSubcategory, subcategory);

        Ok(())
    }
}
