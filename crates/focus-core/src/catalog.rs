//! Static column catalog for the FOCUS v1.1 schema.
//!
//! The catalog is the single source of truth for column names, order,
//! feature levels, data types, nullability and allowed-value sets. It is
//! loaded once as `'static` data and shared read-only by the generator and
//! the validator. Column order is load-bearing: any downstream writer emits
//! columns in exactly this order.

/// One of the 50 FOCUS v1.1 columns, in catalog order.
///
/// The discriminant doubles as the column's position in a [`FocusRecord`],
/// so `column as usize` is a stable index into the record and into
/// [`FocusColumn::ALL`].
///
/// [`FocusRecord`]: crate::record::FocusRecord
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FocusColumn {
    AvailabilityZone,
    BilledCost,
    BillingAccountId,
    BillingAccountName,
    BillingCurrency,
    BillingPeriodEnd,
    BillingPeriodStart,
    CapacityReservationId,
    CapacityReservationStatus,
    ChargeCategory,
    ChargeClass,
    ChargeDescription,
    ChargeFrequency,
    ChargePeriodEnd,
    ChargePeriodStart,
    CommitmentDiscountCategory,
    CommitmentDiscountId,
    CommitmentDiscountName,
    CommitmentDiscountQuantity,
    CommitmentDiscountStatus,
    CommitmentDiscountType,
    CommitmentDiscountUnit,
    ConsumedQuantity,
    ConsumedUnit,
    ContractedCost,
    ContractedUnitPrice,
    EffectiveCost,
    InvoiceIssuerName,
    ListCost,
    ListUnitPrice,
    PricingCategory,
    PricingQuantity,
    PricingUnit,
    ProviderName,
    PublisherName,
    RegionId,
    RegionName,
    ResourceId,
    ResourceName,
    ResourceType,
    ServiceCategory,
    ServiceName,
    ServiceSubcategory,
    SkuId,
    SkuMeter,
    SkuPriceDetails,
    SkuPriceId,
    SubAccountId,
    SubAccountName,
    Tags,
}

/// Requirement tier of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureLevel {
    Mandatory,
    Recommended,
    /// Required only under specific sibling-column conditions.
    Conditional,
}

/// Declared data type of a column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Text,
    Decimal,
    DateTime,
    /// Key-value structure (the FOCUS "JSON" columns: Tags, SkuPriceDetails).
    KeyValue,
}

/// Whether a column is a grouping dimension or an additive metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Dimension,
    Metric,
}

/// Static metadata for a single catalog column.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMetadata {
    pub column: FocusColumn,
    pub kind: ColumnKind,
    pub feature_level: FeatureLevel,
    pub data_type: DataType,
    pub allows_nulls: bool,
    /// Closed value set for enumerated dimensions, `None` for free-form columns.
    pub allowed_values: Option<&'static [&'static str]>,
}

pub const CHARGE_CATEGORIES: &[&str] = &["Usage", "Purchase", "Tax", "Credit", "Adjustment"];
pub const CHARGE_CLASSES: &[&str] = &["Correction"];
pub const CHARGE_FREQUENCIES: &[&str] = &["One-Time", "Recurring", "Usage-Based"];
pub const CAPACITY_RESERVATION_STATUSES: &[&str] = &["Used", "Unused"];
pub const COMMITMENT_DISCOUNT_CATEGORIES: &[&str] = &["Spend", "Usage"];
pub const COMMITMENT_DISCOUNT_STATUSES: &[&str] = &["Used", "Unused"];
pub const PRICING_CATEGORIES: &[&str] = &["Standard", "Dynamic", "Committed", "Other"];

pub const SERVICE_CATEGORIES: &[&str] = &[
    "AI and Machine Learning",
    "Analytics",
    "Business Applications",
    "Compute",
    "Databases",
    "Developer Tools",
    "Multicloud",
    "Identity",
    "Integration",
    "Internet of Things",
    "Management and Governance",
    "Media",
    "Migration",
    "Mobile",
    "Networking",
    "Security",
    "Storage",
    "Web",
    "Other",
];

/// All subcategories across every service category. Which subcategory pairs
/// with which category is generation logic, not catalog data.
pub const SERVICE_SUBCATEGORIES: &[&str] = &[
    // AI and Machine Learning
    "AI Platforms",
    "Bots",
    "Generative AI",
    "Machine Learning",
    "Natural Language Processing",
    "Other (AI and Machine Learning)",
    // Analytics
    "Analytics Platforms",
    "Business Intelligence",
    "Data Processing",
    "Search",
    "Streaming Analytics",
    "Other (Analytics)",
    // Business Applications
    "Productivity and Collaboration",
    "Other (Business Applications)",
    // Compute
    "Containers",
    "End User Computing",
    "Quantum Compute",
    "Serverless Compute",
    "Virtual Machines",
    "Other (Compute)",
    // Databases
    "Caching",
    "Data Warehouses",
    "Ledger Databases",
    "NoSQL Databases",
    "Relational Databases",
    "Time Series Databases",
    "Other (Databases)",
    // Developer Tools
    "Developer Platforms",
    "Continuous Integration and Deployment",
    "Development Environments",
    "Source Code Management",
    "Quality Assurance",
    "Other (Developer Tools)",
    // Identity
    "Identity and Access Management",
    "Other (Identity)",
    // Integration
    "API Management",
    "Messaging",
    "Workflow Orchestration",
    "Other (Integration)",
    // Internet of Things
    "IoT Analytics",
    "IoT Platforms",
    "Other (Internet of Things)",
    // Management and Governance
    "Architecture",
    "Compliance",
    "Cost Management",
    "Data Governance",
    "Disaster Recovery",
    "Endpoint Management",
    "Observability",
    "Support",
    "Other (Management and Governance)",
    // Media
    "Content Creation",
    "Gaming",
    "Media Streaming",
    "Mixed Reality",
    "Other (Media)",
    // Migration
    "Data Migration",
    "Resource Migration",
    "Other (Migration)",
    // Mobile
    "Other (Mobile)",
    // Multicloud
    "Multicloud Integration",
    "Other (Multicloud)",
    // Networking
    "Application Networking",
    "Content Delivery",
    "Network Connectivity",
    "Network Infrastructure",
    "Network Routing",
    "Network Security",
    "Other (Networking)",
    // Security
    "Secret Management",
    "Security Posture Management",
    "Threat Detection and Response",
    "Other (Security)",
    // Storage
    "Backup Storage",
    "Block Storage",
    "File Storage",
    "Object Storage",
    "Storage Platforms",
    "Other (Storage)",
    // Web
    "Application Platforms",
    "Other (Web)",
    // Other
    "Other (Other)",
];

impl FocusColumn {
    /// Number of catalog columns.
    pub const COUNT: usize = 50;

    /// Every column, in catalog order.
    pub const ALL: [FocusColumn; Self::COUNT] = [
        FocusColumn::AvailabilityZone,
        FocusColumn::BilledCost,
        FocusColumn::BillingAccountId,
        FocusColumn::BillingAccountName,
        FocusColumn::BillingCurrency,
        FocusColumn::BillingPeriodEnd,
        FocusColumn::BillingPeriodStart,
        FocusColumn::CapacityReservationId,
        FocusColumn::CapacityReservationStatus,
        FocusColumn::ChargeCategory,
        FocusColumn::ChargeClass,
        FocusColumn::ChargeDescription,
        FocusColumn::ChargeFrequency,
        FocusColumn::ChargePeriodEnd,
        FocusColumn::ChargePeriodStart,
        FocusColumn::CommitmentDiscountCategory,
        FocusColumn::CommitmentDiscountId,
        FocusColumn::CommitmentDiscountName,
        FocusColumn::CommitmentDiscountQuantity,
        FocusColumn::CommitmentDiscountStatus,
        FocusColumn::CommitmentDiscountType,
        FocusColumn::CommitmentDiscountUnit,
        FocusColumn::ConsumedQuantity,
        FocusColumn::ConsumedUnit,
        FocusColumn::ContractedCost,
        FocusColumn::ContractedUnitPrice,
        FocusColumn::EffectiveCost,
        FocusColumn::InvoiceIssuerName,
        FocusColumn::ListCost,
        FocusColumn::ListUnitPrice,
        FocusColumn::PricingCategory,
        FocusColumn::PricingQuantity,
        FocusColumn::PricingUnit,
        FocusColumn::ProviderName,
        FocusColumn::PublisherName,
        FocusColumn::RegionId,
        FocusColumn::RegionName,
        FocusColumn::ResourceId,
        FocusColumn::ResourceName,
        FocusColumn::ResourceType,
        FocusColumn::ServiceCategory,
        FocusColumn::ServiceName,
        FocusColumn::ServiceSubcategory,
        FocusColumn::SkuId,
        FocusColumn::SkuMeter,
        FocusColumn::SkuPriceDetails,
        FocusColumn::SkuPriceId,
        FocusColumn::SubAccountId,
        FocusColumn::SubAccountName,
        FocusColumn::Tags,
    ];

    /// Position of this column in catalog order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical column name as it appears in the FOCUS specification.
    pub fn name(self) -> &'static str {
        match self {
            FocusColumn::AvailabilityZone => "AvailabilityZone",
            FocusColumn::BilledCost => "BilledCost",
            FocusColumn::BillingAccountId => "BillingAccountId",
            FocusColumn::BillingAccountName => "BillingAccountName",
            FocusColumn::BillingCurrency => "BillingCurrency",
            FocusColumn::BillingPeriodEnd => "BillingPeriodEnd",
            FocusColumn::BillingPeriodStart => "BillingPeriodStart",
            FocusColumn::CapacityReservationId => "CapacityReservationId",
            FocusColumn::CapacityReservationStatus => "CapacityReservationStatus",
            FocusColumn::ChargeCategory => "ChargeCategory",
            FocusColumn::ChargeClass => "ChargeClass",
            FocusColumn::ChargeDescription => "ChargeDescription",
            FocusColumn::ChargeFrequency => "ChargeFrequency",
            FocusColumn::ChargePeriodEnd => "ChargePeriodEnd",
            FocusColumn::ChargePeriodStart => "ChargePeriodStart",
            FocusColumn::CommitmentDiscountCategory => "CommitmentDiscountCategory",
            FocusColumn::CommitmentDiscountId => "CommitmentDiscountId",
            FocusColumn::CommitmentDiscountName => "CommitmentDiscountName",
            FocusColumn::CommitmentDiscountQuantity => "CommitmentDiscountQuantity",
            FocusColumn::CommitmentDiscountStatus => "CommitmentDiscountStatus",
            FocusColumn::CommitmentDiscountType => "CommitmentDiscountType",
            FocusColumn::CommitmentDiscountUnit => "CommitmentDiscountUnit",
            FocusColumn::ConsumedQuantity => "ConsumedQuantity",
            FocusColumn::ConsumedUnit => "ConsumedUnit",
            FocusColumn::ContractedCost => "ContractedCost",
            FocusColumn::ContractedUnitPrice => "ContractedUnitPrice",
            FocusColumn::EffectiveCost => "EffectiveCost",
            FocusColumn::InvoiceIssuerName => "InvoiceIssuerName",
            FocusColumn::ListCost => "ListCost",
            FocusColumn::ListUnitPrice => "ListUnitPrice",
            FocusColumn::PricingCategory => "PricingCategory",
            FocusColumn::PricingQuantity => "PricingQuantity",
            FocusColumn::PricingUnit => "PricingUnit",
            FocusColumn::ProviderName => "ProviderName",
            FocusColumn::PublisherName => "PublisherName",
            FocusColumn::RegionId => "RegionId",
            FocusColumn::RegionName => "RegionName",
            FocusColumn::ResourceId => "ResourceId",
            FocusColumn::ResourceName => "ResourceName",
            FocusColumn::ResourceType => "ResourceType",
            FocusColumn::ServiceCategory => "ServiceCategory",
            FocusColumn::ServiceName => "ServiceName",
            FocusColumn::ServiceSubcategory => "ServiceSubcategory",
            FocusColumn::SkuId => "SkuId",
            FocusColumn::SkuMeter => "SkuMeter",
            FocusColumn::SkuPriceDetails => "SkuPriceDetails",
            FocusColumn::SkuPriceId => "SkuPriceId",
            FocusColumn::SubAccountId => "SubAccountId",
            FocusColumn::SubAccountName => "SubAccountName",
            FocusColumn::Tags => "Tags",
        }
    }

    /// Look up a column by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Static metadata for this column.
    pub fn metadata(self) -> &'static ColumnMetadata {
        &CATALOG[self as usize]
    }
}

impl std::fmt::Display for FocusColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

macro_rules! col {
    ($col:ident, $kind:ident, $level:ident, $ty:ident, nulls: $nulls:expr) => {
        ColumnMetadata {
            column: FocusColumn::$col,
            kind: ColumnKind::$kind,
            feature_level: FeatureLevel::$level,
            data_type: DataType::$ty,
            allows_nulls: $nulls,
            allowed_values: None,
        }
    };
    ($col:ident, $kind:ident, $level:ident, $ty:ident, nulls: $nulls:expr, values: $values:expr) => {
        ColumnMetadata {
            column: FocusColumn::$col,
            kind: ColumnKind::$kind,
            feature_level: FeatureLevel::$level,
            data_type: DataType::$ty,
            allows_nulls: $nulls,
            allowed_values: Some($values),
        }
    };
}

/// The full FOCUS v1.1 column catalog, indexed by `FocusColumn as usize`.
static CATALOG: [ColumnMetadata; FocusColumn::COUNT] = [
    col!(AvailabilityZone, Dimension, Recommended, Text, nulls: true),
    col!(BilledCost, Metric, Mandatory, Decimal, nulls: false),
    col!(BillingAccountId, Dimension, Mandatory, Text, nulls: false),
    col!(BillingAccountName, Dimension, Mandatory, Text, nulls: true),
    col!(BillingCurrency, Dimension, Mandatory, Text, nulls: false),
    col!(BillingPeriodEnd, Dimension, Mandatory, DateTime, nulls: false),
    col!(BillingPeriodStart, Dimension, Mandatory, DateTime, nulls: false),
    col!(CapacityReservationId, Dimension, Conditional, Text, nulls: true),
    col!(CapacityReservationStatus, Dimension, Conditional, Text, nulls: true,
        values: CAPACITY_RESERVATION_STATUSES),
    col!(ChargeCategory, Dimension, Mandatory, Text, nulls: false, values: CHARGE_CATEGORIES),
    col!(ChargeClass, Dimension, Mandatory, Text, nulls: true, values: CHARGE_CLASSES),
    col!(ChargeDescription, Dimension, Mandatory, Text, nulls: true),
    col!(ChargeFrequency, Dimension, Recommended, Text, nulls: false, values: CHARGE_FREQUENCIES),
    col!(ChargePeriodEnd, Dimension, Mandatory, DateTime, nulls: false),
    col!(ChargePeriodStart, Dimension, Mandatory, DateTime, nulls: false),
    col!(CommitmentDiscountCategory, Dimension, Conditional, Text, nulls: true,
        values: COMMITMENT_DISCOUNT_CATEGORIES),
    col!(CommitmentDiscountId, Dimension, Conditional, Text, nulls: true),
    col!(CommitmentDiscountName, Dimension, Conditional, Text, nulls: true),
    col!(CommitmentDiscountQuantity, Metric, Conditional, Decimal, nulls: true),
    col!(CommitmentDiscountStatus, Dimension, Conditional, Text, nulls: true,
        values: COMMITMENT_DISCOUNT_STATUSES),
    col!(CommitmentDiscountType, Dimension, Conditional, Text, nulls: true),
    col!(CommitmentDiscountUnit, Dimension, Conditional, Text, nulls: true),
    col!(ConsumedQuantity, Metric, Conditional, Decimal, nulls: true),
    col!(ConsumedUnit, Dimension, Conditional, Text, nulls: true),
    col!(ContractedCost, Metric, Mandatory, Decimal, nulls: false),
    col!(ContractedUnitPrice, Metric, Conditional, Decimal, nulls: true),
    col!(EffectiveCost, Metric, Mandatory, Decimal, nulls: false),
    col!(InvoiceIssuerName, Dimension, Mandatory, Text, nulls: false),
    col!(ListCost, Metric, Mandatory, Decimal, nulls: false),
    col!(ListUnitPrice, Metric, Conditional, Decimal, nulls: true),
    col!(PricingCategory, Dimension, Conditional, Text, nulls: true, values: PRICING_CATEGORIES),
    col!(PricingQuantity, Metric, Mandatory, Decimal, nulls: true),
    col!(PricingUnit, Dimension, Mandatory, Text, nulls: true),
    col!(ProviderName, Dimension, Mandatory, Text, nulls: false),
    col!(PublisherName, Dimension, Mandatory, Text, nulls: false),
    col!(RegionId, Dimension, Conditional, Text, nulls: true),
    col!(RegionName, Dimension, Conditional, Text, nulls: true),
    col!(ResourceId, Dimension, Conditional, Text, nulls: true),
    col!(ResourceName, Dimension, Conditional, Text, nulls: true),
    col!(ResourceType, Dimension, Conditional, Text, nulls: true),
    col!(ServiceCategory, Dimension, Mandatory, Text, nulls: false, values: SERVICE_CATEGORIES),
    col!(ServiceName, Dimension, Mandatory, Text, nulls: false),
    col!(ServiceSubcategory, Dimension, Recommended, Text, nulls: false,
        values: SERVICE_SUBCATEGORIES),
    col!(SkuId, Dimension, Conditional, Text, nulls: true),
    col!(SkuMeter, Dimension, Conditional, Text, nulls: true),
    col!(SkuPriceDetails, Dimension, Conditional, KeyValue, nulls: true),
    col!(SkuPriceId, Dimension, Conditional, Text, nulls: true),
    col!(SubAccountId, Dimension, Conditional, Text, nulls: true),
    col!(SubAccountName, Dimension, Conditional, Text, nulls: true),
    col!(Tags, Dimension, Conditional, KeyValue, nulls: true),
];
