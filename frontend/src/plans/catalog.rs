use std::fmt;

/// Billing cycle a price applies to. The set is closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Recurrence {
    #[default]
    Monthly,
    Quarterly,
    Semiannual,
    Annual,
}

impl Recurrence {
    pub const ALL: [Recurrence; 4] = [
        Recurrence::Monthly,
        Recurrence::Quarterly,
        Recurrence::Semiannual,
        Recurrence::Annual,
    ];

    /// Name used by the pricing API in the `recurrent` field.
    pub fn wire_name(self) -> &'static str {
        match self {
            Recurrence::Monthly => "mensual",
            Recurrence::Quarterly => "trimestral",
            Recurrence::Semiannual => "semestral",
            Recurrence::Annual => "anual",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.wire_name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Recurrence::Monthly => "Mensual",
            Recurrence::Quarterly => "Trimestral",
            Recurrence::Semiannual => "Semestral",
            Recurrence::Annual => "Anual",
        }
    }

    pub fn unit_suffix(self) -> &'static str {
        match self {
            Recurrence::Monthly => "/mes",
            Recurrence::Quarterly => "/trim",
            Recurrence::Semiannual => "/sem",
            Recurrence::Annual => "/año",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Recurrence::Monthly => 0,
            Recurrence::Quarterly => 1,
            Recurrence::Semiannual => 2,
            Recurrence::Annual => 3,
        }
    }
}

/// A quota that is either a fixed count or negotiated per customer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Limit {
    Count(u32),
    Custom,
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Count(n) => write!(f, "{}", n),
            Limit::Custom => f.write_str(CUSTOM_LABEL),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StaticPrice {
    Amount(u32),
    ContactUs,
}

pub const CUSTOM_LABEL: &str = "Personalizado";
pub const CONTACT_US_LABEL: &str = "Consultar";

/// Tier selected on first render when present in the catalog.
pub const DEFAULT_TIER: &str = "Advanced";

#[derive(Debug, PartialEq)]
pub struct Tier {
    pub name: &'static str,
    pub users: Limit,
    pub sites: Limit,
    pub equipment: bool,
    pub standards: Limit,
    pub custom_standards: bool,
    pub support: &'static str,
    pub storage: &'static str,
    pub color: &'static str,
    pub featured: bool,
    prices: [StaticPrice; 4],
}

impl Tier {
    pub fn static_price(&self, recurrence: Recurrence) -> StaticPrice {
        self.prices[recurrence.index()]
    }
}

pub static CATALOG: [Tier; 5] = [
    Tier {
        name: "Freemium",
        users: Limit::Count(1),
        sites: Limit::Count(1),
        equipment: false,
        standards: Limit::Count(1),
        custom_standards: false,
        support: "48h",
        storage: "100 MB",
        color: "#f3f4f6",
        featured: false,
        prices: [
            StaticPrice::Amount(0),
            StaticPrice::Amount(0),
            StaticPrice::Amount(0),
            StaticPrice::Amount(0),
        ],
    },
    Tier {
        name: "Basic",
        users: Limit::Count(3),
        sites: Limit::Count(3),
        equipment: true,
        standards: Limit::Count(1),
        custom_standards: false,
        support: "48h",
        storage: "500 MB",
        color: "rgba(41, 171, 226, 0.1)",
        featured: false,
        prices: [
            StaticPrice::Amount(29),
            StaticPrice::Amount(75),
            StaticPrice::Amount(135),
            StaticPrice::Amount(240),
        ],
    },
    Tier {
        name: "Advanced",
        users: Limit::Count(6),
        sites: Limit::Count(5),
        equipment: true,
        standards: Limit::Count(2),
        custom_standards: false,
        support: "24h",
        storage: "5 GB",
        color: "rgba(41, 171, 226, 0.2)",
        featured: true,
        prices: [
            StaticPrice::Amount(59),
            StaticPrice::Amount(153),
            StaticPrice::Amount(275),
            StaticPrice::Amount(480),
        ],
    },
    Tier {
        name: "Professional",
        users: Limit::Count(10),
        sites: Limit::Count(12),
        equipment: true,
        standards: Limit::Count(3),
        custom_standards: true,
        support: "12h",
        storage: "10 GB",
        color: "rgba(41, 171, 226, 0.3)",
        featured: false,
        prices: [
            StaticPrice::Amount(99),
            StaticPrice::Amount(258),
            StaticPrice::Amount(465),
            StaticPrice::Amount(828),
        ],
    },
    Tier {
        name: "Enterprises",
        users: Limit::Custom,
        sites: Limit::Custom,
        equipment: true,
        standards: Limit::Custom,
        custom_standards: true,
        support: CUSTOM_LABEL,
        storage: CUSTOM_LABEL,
        color: "rgba(41, 171, 226, 0.4)",
        featured: false,
        prices: [
            StaticPrice::ContactUs,
            StaticPrice::ContactUs,
            StaticPrice::ContactUs,
            StaticPrice::ContactUs,
        ],
    },
];
