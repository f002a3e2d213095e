use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of an age band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaxAge {
    Bounded(u32),
    /// "min_age and above", the oldest band of a price table.
    Unbounded,
}

impl fmt::Display for MaxAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxAge::Bounded(age) => write!(f, "{age}"),
            MaxAge::Unbounded => write!(f, "59+"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeRange {
    pub min_age: u32,
    pub max_age: MaxAge,
    pub price: Decimal,
}

impl AgeRange {
    pub fn bounded(min_age: u32, max_age: u32, price: Decimal) -> Self {
        AgeRange {
            min_age,
            max_age: MaxAge::Bounded(max_age),
            price,
        }
    }

    pub fn open_ended(min_age: u32, price: Decimal) -> Self {
        AgeRange {
            min_age,
            max_age: MaxAge::Unbounded,
            price,
        }
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}: R$ {:.2}", self.min_age, self.max_age, self.price)
    }
}

/// A fixed enumeration a classifier maps free text onto.
pub trait Category: Sized + Copy + 'static {
    /// All members, in vocabulary order.
    const ALL: &'static [Self];

    fn name(&self) -> &'static str;

    /// Case-insensitive lookup by vocabulary name.
    fn from_category(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanType {
    Empresarial,
    Adesao,
    Individual,
}

impl Category for PlanType {
    const ALL: &'static [Self] = &[PlanType::Empresarial, PlanType::Adesao, PlanType::Individual];

    fn name(&self) -> &'static str {
        match self {
            PlanType::Empresarial => "EMPRESARIAL",
            PlanType::Adesao => "ADESAO",
            PlanType::Individual => "INDIVIDUAL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoverageType {
    Ambulatorial,
    Obstetrica,
    Hospitalar,
}

impl Category for CoverageType {
    const ALL: &'static [Self] = &[
        CoverageType::Ambulatorial,
        CoverageType::Obstetrica,
        CoverageType::Hospitalar,
    ];

    fn name(&self) -> &'static str {
        match self {
            CoverageType::Ambulatorial => "AMBULATORIAL",
            CoverageType::Obstetrica => "OBSTETRICA",
            CoverageType::Hospitalar => "HOSPITALAR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccommodationType {
    Enfermaria,
    Apartamento,
    Nenhuma,
}

impl Category for AccommodationType {
    const ALL: &'static [Self] = &[
        AccommodationType::Enfermaria,
        AccommodationType::Apartamento,
        AccommodationType::Nenhuma,
    ];

    fn name(&self) -> &'static str {
        match self {
            AccommodationType::Enfermaria => "ENFERMARIA",
            AccommodationType::Apartamento => "APARTAMENTO",
            AccommodationType::Nenhuma => "NENHUMA",
        }
    }
}

macro_rules! display_by_name {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        })*
    };
}

display_by_name!(PlanType, CoverageType, AccommodationType);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePlan {
    pub plan_name: String,
    pub plan_type: PlanType,
    pub coverage_type: CoverageType,
    pub accommodation: AccommodationType,
    pub age_ranges: Vec<AgeRange>,
    pub network: String,
    pub co_payments: String,
    pub coverage_area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

/// Result of one parse invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedData {
    /// Plans in section order.
    pub plans: Vec<InsurancePlan>,
    /// ISO-8601 completion time of the parse.
    pub timestamp: String,
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
}
