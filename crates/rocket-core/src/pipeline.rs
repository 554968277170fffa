//! Pipeline driver
//!
//! Transforms are registered in any order and executed in an order that
//! satisfies their declared columns. Among stages that are ready at the
//! same time, registration order wins, so runs are deterministic.

use std::collections::BTreeSet;
use std::path::Path;

use crate::clean::clean;
use crate::config::EstateConfig;
use crate::decision::{BuyDecision, DecisionRule};
use crate::error::{EstateResult, PipelineError};
use crate::features::{
    BathroomSplit, ConditionLabel, ExpectedProfit, Feature, GradeLabel, LastMaintenance,
    PricePerArea, RegionalAggregates, SeasonOfSale, ViewLabel, WaterfrontLabel,
};
use crate::record::{Column, PropertyTable};
use crate::view::{project_recommendations, Recommendation};

/// An ordered set of feature transforms
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Feature>>,
}

impl Pipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Every transform of a full run, configured from `config`
    pub fn standard(config: &EstateConfig) -> Self {
        Self::new()
            .with(WaterfrontLabel)
            .with(ViewLabel)
            .with(BathroomSplit)
            .with(GradeLabel)
            .with(LastMaintenance)
            .with(SeasonOfSale)
            .with(PricePerArea::new(config.features.zero_area))
            .with(RegionalAggregates)
            .with(ExpectedProfit)
            .with(BuyDecision::new(DecisionRule::from(&config.decision)))
            .with(ConditionLabel)
    }

    /// Register a transform
    pub fn with(mut self, feature: impl Feature + 'static) -> Self {
        self.stages.push(Box::new(feature));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Execution order as stage names, given columns already present
    pub fn plan(&self, available: &BTreeSet<Column>) -> Result<Vec<&'static str>, PipelineError> {
        Ok(self
            .order(available)?
            .into_iter()
            .map(|i| self.stages[i].name())
            .collect())
    }

    /// Run every stage over `table`
    pub fn apply(&self, table: PropertyTable) -> EstateResult<PropertyTable> {
        let order = self.order(table.columns())?;

        let mut table = table;
        for index in order {
            let stage = &self.stages[index];
            table.require(stage.name(), stage.requires())?;
            let before = table.len();
            table = stage.apply(table)?;
            tracing::debug!(
                stage = stage.name(),
                rows_in = before,
                rows_out = table.len(),
                "applied feature"
            );
        }
        Ok(table)
    }

    /// Stable topological order of stage indices
    fn order(&self, available: &BTreeSet<Column>) -> Result<Vec<usize>, PipelineError> {
        let mut present = available.clone();
        let mut pending: Vec<usize> = (0..self.stages.len()).collect();
        let mut order = Vec::with_capacity(pending.len());

        while !pending.is_empty() {
            let ready = pending.iter().position(|&i| {
                self.stages[i]
                    .requires()
                    .iter()
                    .all(|c| present.contains(c))
            });

            match ready {
                Some(pos) => {
                    let index = pending.remove(pos);
                    present.extend(self.stages[index].provides().iter().copied());
                    order.push(index);
                }
                None => return Err(self.blocked(&pending, &present)),
            }
        }

        Ok(order)
    }

    /// Explain why none of `pending` can run
    fn blocked(&self, pending: &[usize], present: &BTreeSet<Column>) -> PipelineError {
        let provided: BTreeSet<Column> = pending
            .iter()
            .flat_map(|&i| self.stages[i].provides().iter().copied())
            .collect();

        for &i in pending {
            let stage = &self.stages[i];
            if let Some(&column) = stage
                .requires()
                .iter()
                .find(|c| !present.contains(c) && !provided.contains(c))
            {
                return PipelineError::Unsatisfied {
                    stage: stage.name(),
                    column,
                };
            }
        }

        PipelineError::Cycle(pending.iter().map(|&i| self.stages[i].name()).collect())
    }
}

/// The two tables handed to the rendering layer
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Every cleaned property with all derived columns
    pub properties: PropertyTable,
    /// Purchase recommendations in the fixed column order
    pub recommendations: Vec<Recommendation>,
}

/// Load, clean, derive features, decide and project
pub fn run(path: impl AsRef<Path>, config: &EstateConfig) -> EstateResult<PipelineOutput> {
    let raw = rocket_io::load(path)?;
    process(raw, config)
}

/// Everything after loading, for callers that already hold the raw table
pub fn process(raw: rocket_io::RawTable, config: &EstateConfig) -> EstateResult<PipelineOutput> {
    config.validate()?;

    let table = clean(raw, &config.cleaning)?;
    let properties = Pipeline::standard(config).apply(table)?;
    let recommendations = project_recommendations(&properties)?;

    tracing::info!(
        properties = properties.len(),
        recommendations = recommendations.len(),
        "pipeline finished"
    );

    Ok(PipelineOutput {
        properties,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FeatureError, FeatureResult};

    struct Stage {
        name: &'static str,
        requires: &'static [Column],
        provides: &'static [Column],
    }

    impl Feature for Stage {
        fn name(&self) -> &'static str {
            self.name
        }

        fn requires(&self) -> &'static [Column] {
            self.requires
        }

        fn provides(&self) -> &'static [Column] {
            self.provides
        }

        fn apply(&self, table: PropertyTable) -> FeatureResult<PropertyTable> {
            Ok(table.map_records(self.provides, |_| {}))
        }
    }

    #[test]
    fn test_standard_plan_respects_dependencies() {
        let plan = Pipeline::standard(&EstateConfig::default())
            .plan(&BTreeSet::new())
            .unwrap();

        let pos = |name: &str| plan.iter().position(|n| *n == name).unwrap();
        assert_eq!(plan.len(), 11);
        assert!(pos("price_sqft") < pos("regional"));
        assert!(pos("regional") < pos("expected_profit"));
        assert!(pos("expected_profit") < pos("buy"));
        assert_eq!(plan[0], "waterfront");
    }

    #[test]
    fn test_registration_order_does_not_matter() {
        let pipeline = Pipeline::new()
            .with(BuyDecision::default())
            .with(ExpectedProfit)
            .with(RegionalAggregates)
            .with(PricePerArea::default());

        let plan = pipeline.plan(&BTreeSet::new()).unwrap();
        assert_eq!(plan, vec!["price_sqft", "regional", "expected_profit", "buy"]);
    }

    #[test]
    fn test_unsatisfied_dependency() {
        let pipeline = Pipeline::new().with(ExpectedProfit);
        assert_eq!(
            pipeline.plan(&BTreeSet::new()),
            Err(PipelineError::Unsatisfied {
                stage: "expected_profit",
                column: Column::RegionalPriceSqft
            })
        );

        let available = BTreeSet::from([Column::RegionalPriceSqft]);
        assert!(pipeline.plan(&available).is_ok());
    }

    #[test]
    fn test_cycle_detected() {
        let pipeline = Pipeline::new()
            .with(Stage {
                name: "a",
                requires: &[Column::Profit],
                provides: &[Column::Season],
            })
            .with(Stage {
                name: "b",
                requires: &[Column::Season],
                provides: &[Column::Profit],
            });

        assert_eq!(
            pipeline.plan(&BTreeSet::new()),
            Err(PipelineError::Cycle(vec!["a", "b"]))
        );
    }

    #[test]
    fn test_apply_surfaces_stage_errors() {
        let mut table = PropertyTable::new(vec![crate::features::testing::property(1)]);
        table = table.map_records(&[], |p| p.sqft_living = 0.0);
        let config = EstateConfig {
            features: crate::config::FeatureConfig {
                zero_area: crate::config::ZeroAreaPolicy::Fail,
            },
            ..EstateConfig::default()
        };

        let err = Pipeline::standard(&config).apply(table).unwrap_err();
        assert!(matches!(
            err,
            crate::error::EstateError::Feature(FeatureError::Division { id: 1, .. })
        ));
    }
}
