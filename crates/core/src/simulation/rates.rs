//! Benchmark rate table.

use finplan_shared::config::BenchmarkConfig;
use rust_decimal::Decimal;

use super::types::Indexer;

/// Annual benchmark estimates used by indexed return models.
///
/// Defaults are illustrative constants; hosts can inject their own table
/// through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BenchmarkRates {
    table: BenchmarkConfig,
}

impl BenchmarkRates {
    /// Creates a rate table from configuration.
    #[must_use]
    pub const fn new(table: BenchmarkConfig) -> Self {
        Self { table }
    }

    /// Annual estimate in percent for a benchmark.
    #[must_use]
    pub const fn annual_percent(&self, indexer: Indexer) -> Decimal {
        match indexer {
            Indexer::Cdi => self.table.cdi,
            Indexer::Selic => self.table.selic,
            Indexer::Ipca => self.table.ipca,
            Indexer::Poupanca => self.table.poupanca,
            Indexer::Tr => self.table.tr,
            Indexer::Igpm => self.table.igpm,
        }
    }

    /// Monthly rate as a fraction for `indexer_percent`% of a benchmark.
    #[must_use]
    pub fn monthly_fraction(&self, indexer: Indexer, indexer_percent: Decimal) -> Decimal {
        let benchmark_monthly =
            self.annual_percent(indexer) / Decimal::from(12) / Decimal::ONE_HUNDRED;
        indexer_percent / Decimal::ONE_HUNDRED * benchmark_monthly
    }
}

impl From<BenchmarkConfig> for BenchmarkRates {
    fn from(table: BenchmarkConfig) -> Self {
        Self::new(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_table() {
        let rates = BenchmarkRates::default();
        assert_eq!(rates.annual_percent(Indexer::Cdi), dec!(12));
        assert_eq!(rates.annual_percent(Indexer::Selic), dec!(11.25));
        assert_eq!(rates.annual_percent(Indexer::Igpm), dec!(7));
    }

    #[test]
    fn test_monthly_fraction_of_cdi() {
        let rates = BenchmarkRates::default();
        // 100% of 12% a year is 1% a month
        assert_eq!(rates.monthly_fraction(Indexer::Cdi, dec!(100)), dec!(0.01));
        assert_eq!(rates.monthly_fraction(Indexer::Cdi, dec!(110)), dec!(0.011));
    }

    #[test]
    fn test_injected_table() {
        let rates = BenchmarkRates::from(BenchmarkConfig {
            cdi: dec!(24),
            ..BenchmarkConfig::default()
        });
        assert_eq!(rates.monthly_fraction(Indexer::Cdi, dec!(100)), dec!(0.02));
    }
}
