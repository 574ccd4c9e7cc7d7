//! Housing and rent vocabulary shared by the scorer and the filter.
//!
//! Rent figures in the source datasets are stored per unit of floor area,
//! one column per housing type and figure kind.

use serde::{Deserialize, Serialize};

/// Kind of dwelling whose rent figures are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HousingType {
    /// Detached and multi-family houses (단독다가구).
    Detached,
    /// Apartments (아파트).
    #[default]
    Apartment,
    /// Row houses and multiplex units (연립다세대).
    RowHouse,
    /// Officetels (오피스텔).
    Officetel,
}

impl HousingType {
    /// Return the kebab-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Detached => "detached",
            Self::Apartment => "apartment",
            Self::RowHouse => "row-house",
            Self::Officetel => "officetel",
        }
    }

    /// Prefix used by the dataset's rent columns.
    #[must_use]
    pub const fn column_prefix(self) -> &'static str {
        match self {
            Self::Detached => "단독다가구",
            Self::Apartment => "아파트",
            Self::RowHouse => "연립다세대",
            Self::Officetel => "오피스텔",
        }
    }

    /// Column holding the monthly rent per unit area.
    #[must_use]
    pub fn monthly_rent_column(self) -> String {
        format!("{} 단위면적당 월세금", self.column_prefix())
    }

    /// Column holding the deposit paid alongside monthly rent, per unit area.
    #[must_use]
    pub fn monthly_deposit_column(self) -> String {
        format!("{} 월세 단위면적당 보증금", self.column_prefix())
    }

    /// Column holding the lease-only (jeonse) deposit per unit area.
    #[must_use]
    pub fn lease_deposit_column(self) -> String {
        format!("{} 전세 단위면적당 보증금", self.column_prefix())
    }
}

impl std::fmt::Display for HousingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HousingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "detached" => Ok(Self::Detached),
            "apartment" => Ok(Self::Apartment),
            "row-house" | "rowhouse" => Ok(Self::RowHouse),
            "officetel" => Ok(Self::Officetel),
            _ => Err(format!("unknown housing type '{s}'")),
        }
    }
}

/// How rent is paid for the requested dwelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RentType {
    /// Monthly rent plus a refundable deposit.
    #[default]
    Monthly,
    /// Lump-sum deposit with no monthly rent (jeonse).
    DepositOnly,
}

impl std::fmt::Display for RentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Monthly => "monthly",
            Self::DepositOnly => "deposit-only",
        })
    }
}
