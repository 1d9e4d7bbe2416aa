//! Service families: the generation-side grouping of FOCUS service
//! categories.
//!
//! Only a handful of the catalog's nineteen service categories carry
//! dedicated generation tables (services, resources, units); the rest fold
//! into [`ServiceFamily::Other`]. The family ties together everything that
//! must stay internally coherent for a row: category, subcategory, service
//! names, resource templates and usage units.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceFamily {
    Compute,
    Storage,
    Databases,
    Networking,
    MachineLearning,
    Other,
}

impl ServiceFamily {
    pub const COUNT: usize = 6;

    pub const ALL: [ServiceFamily; Self::COUNT] = [
        ServiceFamily::Compute,
        ServiceFamily::Storage,
        ServiceFamily::Databases,
        ServiceFamily::Networking,
        ServiceFamily::MachineLearning,
        ServiceFamily::Other,
    ];

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|f| *f == self)
            .unwrap_or(Self::COUNT - 1)
    }

    /// The `ServiceCategory` value this family writes.
    pub fn category(self) -> &'static str {
        match self {
            Self::Compute => "Compute",
            Self::Storage => "Storage",
            Self::Databases => "Databases",
            Self::Networking => "Networking",
            Self::MachineLearning => "AI and Machine Learning",
            Self::Other => "Other",
        }
    }

    /// Map a `ServiceCategory` value back to its family.
    pub fn from_category(category: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.category() == category)
    }

    /// Subcategories this family draws from. All values are members of the
    /// catalog's `ServiceSubcategory` allowed set.
    pub fn subcategories(self) -> &'static [&'static str] {
        match self {
            Self::Compute => &["Virtual Machines", "Serverless Compute", "Containers"],
            Self::Storage => &[
                "Object Storage",
                "Block Storage",
                "File Storage",
                "Backup Storage",
            ],
            Self::Databases => &[
                "Relational Databases",
                "NoSQL Databases",
                "Data Warehouses",
                "Caching",
            ],
            Self::Networking => &[
                "Network Infrastructure",
                "Content Delivery",
                "Network Security",
                "Application Networking",
            ],
            Self::MachineLearning => &[
                "Machine Learning",
                "Generative AI",
                "AI Platforms",
                "Natural Language Processing",
            ],
            Self::Other => &[
                "Other (Other)",
                "Identity and Access Management",
                "Observability",
            ],
        }
    }

    pub fn resource_types(self) -> &'static [&'static str] {
        match self {
            Self::Compute => &["Instance", "Container", "Function", "GPU Instance"],
            Self::Storage => &["Block Storage", "Object Storage", "File Storage"],
            Self::Databases => &["Relational DB", "NoSQL DB", "Cache", "Data Warehouse"],
            Self::Networking => &["Load Balancer", "VPC", "Subnet", "NAT Gateway"],
            Self::MachineLearning => &["ML Model", "Training Job", "Inference Endpoint"],
            Self::Other => &["Other"],
        }
    }

    /// Provider-style resource id prefix.
    pub fn resource_id_prefix(self) -> &'static str {
        match self {
            Self::Compute => "i-",
            Self::Storage => "vol-",
            Self::Databases => "db-",
            Self::Networking => "vpc-",
            Self::MachineLearning => "ml-",
            Self::Other => "res-",
        }
    }

    /// Human-readable resource name stem.
    pub fn resource_name_stem(self) -> &'static str {
        match self {
            Self::Compute => "web-server",
            Self::Storage => "data-volume",
            Self::Databases => "prod-db",
            _ => "resource",
        }
    }

    pub fn consumed_units(self) -> &'static [&'static str] {
        match self {
            Self::Compute => &["Hours", "vCPU-Hours", "Instance-Hours"],
            Self::Storage => &["GB", "GB-Month", "TB", "Requests"],
            Self::Databases => &["GB-Month", "Hours", "RCU", "WCU"],
            Self::Networking => &["GB", "Requests", "Hours"],
            Self::MachineLearning => &["Requests", "Training-Hours", "Inference-Hours"],
            Self::Other => &["Hours", "Requests", "Units"],
        }
    }

    /// Plausible `ConsumedQuantity` range for one charge period.
    pub fn consumed_quantity_range(self) -> (f64, f64) {
        match self {
            Self::Compute => (1.0, 720.0),
            Self::Storage => (1.0, 10_000.0),
            Self::Databases => (1.0, 1_000.0),
            Self::Networking => (0.1, 1_000.0),
            _ => (1.0, 100.0),
        }
    }

    pub fn sku_meter(self) -> &'static str {
        match self {
            Self::Compute => "Instance runtime",
            Self::Storage => "Storage capacity",
            Self::Databases => "Database runtime",
            Self::Networking => "Data transfer",
            Self::MachineLearning => "ML processing",
            Self::Other => "Service usage",
        }
    }

    /// SKU family label used in `SkuPriceDetails`.
    pub fn sku_family(self) -> &'static str {
        match self {
            Self::Compute => "Compute Instance",
            Self::Storage => "Storage",
            Self::Databases => "Database",
            Self::Networking => "Network",
            Self::MachineLearning => "ML Service",
            Self::Other => "General",
        }
    }
}

impl std::fmt::Display for ServiceFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.category())
    }
}
