//! Period granularity type.

use serde::{Deserialize, Serialize};

/// One of the four ledger granularities, ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Period {
    /// Daily.
    #[serde(rename = "DIARIO")]
    Daily,
    /// Weekly.
    #[serde(rename = "SEMANAL")]
    Weekly,
    /// Monthly.
    #[serde(rename = "MENSAL")]
    Monthly,
    /// Annual.
    #[serde(rename = "ANUAL")]
    Annual,
}

impl Period {
    /// All periods, smallest first.
    pub const ALL: [Self; 4] = [Self::Daily, Self::Weekly, Self::Monthly, Self::Annual];

    /// Returns every period strictly larger than this one, smallest first.
    pub fn larger(self) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |p| *p > self)
    }

    /// Returns the wire code used by the persistence layer.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Daily => "DIARIO",
            Self::Weekly => "SEMANAL",
            Self::Monthly => "MENSAL",
            Self::Annual => "ANUAL",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Daily => 0,
            Self::Weekly => 1,
            Self::Monthly => 2,
            Self::Annual => 3,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DIARIO" => Ok(Self::Daily),
            "SEMANAL" => Ok(Self::Weekly),
            "MENSAL" => Ok(Self::Monthly),
            "ANUAL" => Ok(Self::Annual),
            _ => Err(format!("Unknown period: {s}")),
        }
    }
}
