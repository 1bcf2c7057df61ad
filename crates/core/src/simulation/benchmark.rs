//! Benchmark test for simulation performance.

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use finplan_shared::types::PositionId;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::time::Instant;

    use crate::simulation::{
        AssetClass, Indexer, InvestmentPosition, NoJitter, PortfolioRequest, PortfolioSimulator,
        ReturnModel, RiskLevel, SeededJitter,
    };

    /// Generate a mixed portfolio with every return model represented.
    fn generate_positions(count: usize) -> Vec<InvestmentPosition> {
        (0..count)
            .map(|i| {
                let (asset_class, return_model) = match i % 4 {
                    0 => (
                        AssetClass::FixedIncome,
                        ReturnModel::Indexed {
                            indexer: Indexer::Cdi,
                            indexer_percent: dec!(110),
                        },
                    ),
                    1 => (
                        AssetClass::FixedIncome,
                        ReturnModel::FixedPlusIndexed {
                            fixed_rate_annual: dec!(5.5),
                            indexer: Indexer::Ipca,
                            indexer_percent: dec!(100),
                        },
                    ),
                    2 => (
                        AssetClass::Stock,
                        ReturnModel::Flat {
                            rate: dec!(14),
                            rate_is_monthly: false,
                        },
                    ),
                    _ => (
                        AssetClass::Crypto,
                        ReturnModel::Flat {
                            rate: dec!(3),
                            rate_is_monthly: true,
                        },
                    ),
                };

                InvestmentPosition {
                    id: PositionId::new(i as u64),
                    name: format!("Position {i}"),
                    asset_class,
                    initial_value: Decimal::from((i + 1) * 1000),
                    monthly_contribution: dec!(250),
                    return_model,
                    risk_level: RiskLevel::Medium,
                    tax_rate_percent: dec!(15),
                    maturity_date: None,
                }
            })
            .collect()
    }

    fn request(positions: usize, months: u32) -> PortfolioRequest {
        PortfolioRequest {
            positions: generate_positions(positions),
            months,
            include_crypto_volatility: true,
            volatility_percent: dec!(10),
            seed: Some(1),
            as_of: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    #[test]
    fn benchmark_simulation_120_months_50_positions() {
        let req = request(50, 120);

        let start = Instant::now();
        let outcome = PortfolioSimulator::default().simulate(&req, &mut SeededJitter::new(1));
        let duration = start.elapsed();

        println!("\n=== BENCHMARK: 50 positions, 120-month simulation ===");
        println!("Duration: {:?}", duration);

        assert_eq!(outcome.snapshots.len(), 121);
        assert!(outcome.issues.is_empty());
        assert!(
            duration.as_millis() < 2000,
            "Simulation took {}ms, expected <2000ms",
            duration.as_millis()
        );
    }

    #[test]
    fn benchmark_simulation_worst_case() {
        // 200 positions over 30 years
        let req = request(200, 360);

        let start = Instant::now();
        let outcome = PortfolioSimulator::default().simulate(&req, &mut NoJitter);
        let duration = start.elapsed();

        println!("\n=== BENCHMARK: WORST CASE - 200 positions, 360 months ===");
        println!("Duration: {:?}", duration);

        assert_eq!(outcome.snapshots.len(), 361);
        assert!(
            duration.as_millis() < 5000,
            "Worst case simulation took {}ms, expected <5000ms",
            duration.as_millis()
        );
    }
}
