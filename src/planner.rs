//! Net-worth target planning: how much more to save each month to move the
//! 12-month prediction by a chosen percentage, and where to cut it from.

use crate::error::{AppError, Result};
use crate::ledger::SpendingByCategory;
use crate::models::SpendCategory;

/// Share of total variable spend treated as cuttable.
pub const MAX_CUT_FRACTION: f64 = 0.45;
pub const MONTHS_PER_YEAR: f64 = 12.0;

const EPSILON: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CutBucket {
    Dining,
    ShoppingEntertainment,
    Transportation,
    Other,
}

impl CutBucket {
    pub const ALL: [CutBucket; 4] = [
        CutBucket::Dining,
        CutBucket::ShoppingEntertainment,
        CutBucket::Transportation,
        CutBucket::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CutBucket::Dining => "Dining & Restaurants",
            CutBucket::ShoppingEntertainment => "Shopping & Entertainment",
            CutBucket::Transportation => "Transportation",
            CutBucket::Other => "Other Variable Expenses",
        }
    }

    pub fn cap_fraction(self) -> f64 {
        match self {
            CutBucket::Dining | CutBucket::ShoppingEntertainment => 0.5,
            CutBucket::Transportation | CutBucket::Other => 0.4,
        }
    }

    pub fn tip(self) -> &'static str {
        match self {
            CutBucket::Dining => "Cook at home more, limit takeout to 2-3 times/week",
            CutBucket::ShoppingEntertainment => "Limit impulse purchases, use 24-hour rule",
            CutBucket::Transportation => "Carpool, public transit, combine errands",
            CutBucket::Other => "Review and reduce non-essential spending",
        }
    }

    pub fn categories(self) -> &'static [SpendCategory] {
        match self {
            CutBucket::Dining => &[SpendCategory::Dining],
            CutBucket::ShoppingEntertainment => {
                &[SpendCategory::Shopping, SpendCategory::Entertainment]
            }
            CutBucket::Transportation => &[SpendCategory::Transportation],
            CutBucket::Other => &[SpendCategory::Other],
        }
    }

    fn spend(self, spending: &SpendingByCategory) -> f64 {
        self.categories().iter().map(|c| spending.get(*c)).sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryCut {
    pub bucket: CutBucket,
    pub current: f64,
    pub cut: f64,
    pub hit_cap: bool,
}

impl CategoryCut {
    pub fn cap(&self) -> f64 {
        self.current * self.bucket.cap_fraction()
    }

    fn room(&self) -> f64 {
        (self.cap() - self.cut).max(0.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Allocation {
    pub cuts: Vec<CategoryCut>,
    /// Portion of the gap the bucket caps could not absorb.
    pub unallocated: f64,
}

impl Allocation {
    pub fn total(&self) -> f64 {
        self.cuts.iter().map(|c| c.cut).sum()
    }
}

/// Spreads `gap` over the non-empty buckets: proportional shares clamped to
/// each bucket's cap, then the shortfall goes to buckets with room left,
/// weighted by that room.
pub fn allocate_cuts(spending: &SpendingByCategory, gap: f64) -> Allocation {
    let total = spending.total();
    let mut cuts: Vec<CategoryCut> = CutBucket::ALL
        .iter()
        .map(|bucket| (*bucket, bucket.spend(spending)))
        .filter(|(_, current)| *current > 0.0)
        .map(|(bucket, current)| {
            let proportional = if total > 0.0 {
                current / total * gap.max(0.0)
            } else {
                0.0
            };
            let cap = current * bucket.cap_fraction();
            CategoryCut {
                bucket,
                current,
                cut: proportional.min(cap),
                hit_cap: proportional > cap,
            }
        })
        .collect();

    let rounds = cuts.len();
    for _ in 0..rounds {
        let assigned: f64 = cuts.iter().map(|c| c.cut).sum();
        let shortfall = gap - assigned;
        if shortfall <= EPSILON {
            break;
        }
        let room: f64 = cuts.iter().map(CategoryCut::room).sum();
        if room <= EPSILON {
            break;
        }
        for cut in cuts.iter_mut() {
            let available = cut.room();
            if available > 0.0 {
                cut.cut += (available / room * shortfall).min(available);
            }
        }
    }

    let assigned: f64 = cuts.iter().map(|c| c.cut).sum();
    Allocation {
        cuts,
        unallocated: (gap - assigned).max(0.0),
    }
}

/// A validated adjustment in percent, -100..=100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetGrowth(f64);

impl TargetGrowth {
    pub fn new(percent: f64) -> Result<Self> {
        if percent.is_finite() && (-100.0..=100.0).contains(&percent) {
            Ok(Self(percent))
        } else {
            Err(AppError::GrowthOutOfRange(percent))
        }
    }

    /// Reads the adjustment field. A cleared field means no adjustment.
    pub fn from_input(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::new(0.0);
        }
        let percent = raw
            .parse::<f64>()
            .map_err(|_| AppError::InvalidNumber(raw.to_string()))?;
        Self::new(percent)
    }

    pub fn percent(self) -> f64 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlanOutcome {
    /// Zero or negative adjustment: less saving is needed.
    LowerTarget,
    Achievable(Allocation),
    Infeasible { shortfall: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct TargetPlan {
    pub growth: TargetGrowth,
    pub baseline_predicted: f64,
    pub target_net_worth: f64,
    pub additional_growth_needed: f64,
    pub additional_savings_needed: f64,
    pub percentage_of_income: Option<f64>,
    pub max_monthly_savings: f64,
    pub max_additional_growth: f64,
    pub max_target_net_worth: f64,
    pub max_adjustment_percent: Option<f64>,
    pub outcome: PlanOutcome,
}

impl TargetPlan {
    pub fn is_achievable(&self) -> bool {
        !matches!(self.outcome, PlanOutcome::Infeasible { .. })
    }
}

pub fn plan_target(
    growth: TargetGrowth,
    baseline_predicted: f64,
    monthly_income: f64,
    spending: &SpendingByCategory,
) -> TargetPlan {
    let target_net_worth = baseline_predicted * (1.0 + growth.percent() / 100.0);
    let additional_growth_needed = target_net_worth - baseline_predicted;
    let additional_savings_needed = additional_growth_needed / MONTHS_PER_YEAR;

    let max_monthly_savings = spending.total() * MAX_CUT_FRACTION;
    let max_additional_growth = max_monthly_savings * MONTHS_PER_YEAR;
    let max_adjustment_percent = (baseline_predicted != 0.0)
        .then(|| max_additional_growth / baseline_predicted.abs() * 100.0);
    let percentage_of_income =
        (monthly_income != 0.0).then(|| additional_savings_needed / monthly_income * 100.0);

    let outcome = if growth.percent() <= 0.0 {
        PlanOutcome::LowerTarget
    } else if additional_savings_needed <= max_monthly_savings {
        PlanOutcome::Achievable(allocate_cuts(spending, additional_savings_needed))
    } else {
        PlanOutcome::Infeasible {
            shortfall: additional_savings_needed - max_monthly_savings,
        }
    };

    TargetPlan {
        growth,
        baseline_predicted,
        target_net_worth,
        additional_growth_needed,
        additional_savings_needed,
        percentage_of_income,
        max_monthly_savings,
        max_additional_growth,
        max_target_net_worth: baseline_predicted + max_additional_growth,
        max_adjustment_percent,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) {
        assert!(
            (a - b).abs() <= eps,
            "approx not equal: left={a} right={b} eps={eps}"
        );
    }

    fn spending(entries: &[(SpendCategory, f64)]) -> SpendingByCategory {
        entries.iter().copied().collect()
    }

    fn growth(percent: f64) -> TargetGrowth {
        TargetGrowth::new(percent).unwrap()
    }

    fn sample_spending() -> SpendingByCategory {
        spending(&[
            (SpendCategory::Dining, 400.0),
            (SpendCategory::Shopping, 300.0),
            (SpendCategory::Transportation, 200.0),
        ])
    }

    #[test]
    fn ten_percent_over_fifty_thousand_is_infeasible() {
        let plan = plan_target(growth(10.0), 50_000.0, 5_000.0, &sample_spending());
        approx_eq(plan.additional_savings_needed, 416.666_666, 1e-3);
        approx_eq(plan.max_monthly_savings, 405.0, 1e-9);
        assert!(!plan.is_achievable());
        match plan.outcome {
            PlanOutcome::Infeasible { shortfall } => approx_eq(shortfall, 11.666_666, 1e-3),
            other => panic!("expected infeasible, got {other:?}"),
        }
        approx_eq(plan.max_adjustment_percent.unwrap(), 9.72, 1e-9);
        approx_eq(plan.max_target_net_worth, 54_860.0, 1e-9);
    }

    #[test]
    fn negative_adjustment_takes_lower_target_branch() {
        let plan = plan_target(growth(-5.0), 50_000.0, 5_000.0, &sample_spending());
        approx_eq(plan.additional_savings_needed, -208.333_333, 1e-3);
        approx_eq(plan.target_net_worth, 47_500.0, 1e-9);
        assert!(plan.is_achievable());
        assert_eq!(plan.outcome, PlanOutcome::LowerTarget);
    }

    #[test]
    fn zero_adjustment_is_lower_target_not_cuts() {
        let plan = plan_target(growth(0.0), 50_000.0, 5_000.0, &sample_spending());
        assert_eq!(plan.additional_savings_needed, 0.0);
        assert_eq!(plan.outcome, PlanOutcome::LowerTarget);
    }

    #[test]
    fn non_positive_growth_is_always_achievable() {
        let heavy = sample_spending();
        let empty = SpendingByCategory::default();
        for pct in [-100.0, -50.0, -12.5, -0.1, 0.0] {
            for baseline in [50_000.0, 1_000_000.0, 0.0] {
                for spend in [&heavy, &empty] {
                    let plan = plan_target(growth(pct), baseline, 4_000.0, spend);
                    assert!(plan.is_achievable());
                    assert!(plan.additional_savings_needed <= 0.0);
                }
            }
        }
    }

    #[test]
    fn feasible_gap_is_split_exactly() {
        let mixes = [
            sample_spending(),
            spending(&[
                (SpendCategory::Dining, 182.59),
                (SpendCategory::Entertainment, 106.38),
                (SpendCategory::Shopping, 190.41),
                (SpendCategory::Transportation, 149.0),
                (SpendCategory::Other, 49.64),
            ]),
            spending(&[(SpendCategory::Dining, 900.0), (SpendCategory::Other, 100.0)]),
            spending(&[
                (SpendCategory::Entertainment, 250.0),
                (SpendCategory::Transportation, 250.0),
            ]),
        ];
        for mix in &mixes {
            let max_cut = mix.total() * MAX_CUT_FRACTION;
            for step in 1..=20 {
                let gap = max_cut * step as f64 / 20.0;
                let allocation = allocate_cuts(mix, gap);
                approx_eq(allocation.total(), gap, 1e-6);
                assert!(allocation.unallocated < 1e-6);
                for cut in &allocation.cuts {
                    assert!(cut.cut <= cut.cap() + 1e-9, "{cut:?} over cap");
                    assert!(cut.cut >= 0.0);
                }
            }
        }
    }

    #[test]
    fn capped_bucket_pushes_shortfall_to_others() {
        // Other's proportional share (0.1 * 440 = 44) exceeds its 40 cap.
        let mix = spending(&[(SpendCategory::Dining, 900.0), (SpendCategory::Other, 100.0)]);
        let allocation = allocate_cuts(&mix, 440.0);
        let dining = &allocation.cuts[0];
        let other = &allocation.cuts[1];
        assert_eq!(dining.bucket, CutBucket::Dining);
        assert_eq!(other.bucket, CutBucket::Other);
        assert!(other.hit_cap);
        assert!(!dining.hit_cap);
        approx_eq(other.cut, 40.0, 1e-9);
        approx_eq(dining.cut, 400.0, 1e-9);
        approx_eq(allocation.total(), 440.0, 1e-9);
    }

    #[test]
    fn gap_beyond_bucket_caps_reports_unallocated() {
        // Transportation caps at 40% but the global limit is 45%.
        let mix = spending(&[(SpendCategory::Transportation, 1_000.0)]);
        let allocation = allocate_cuts(&mix, 430.0);
        approx_eq(allocation.total(), 400.0, 1e-9);
        approx_eq(allocation.unallocated, 30.0, 1e-9);
    }

    #[test]
    fn infeasible_shortfall_matches_gap_minus_max_cut() {
        let mix = sample_spending();
        for pct in [10.0, 25.0, 60.0, 100.0] {
            let plan = plan_target(growth(pct), 50_000.0, 5_000.0, &mix);
            let max_cut = mix.total() * MAX_CUT_FRACTION;
            assert!(plan.additional_savings_needed > max_cut);
            match plan.outcome {
                PlanOutcome::Infeasible { shortfall } => {
                    approx_eq(shortfall, plan.additional_savings_needed - max_cut, 1e-9)
                }
                other => panic!("expected infeasible, got {other:?}"),
            }
        }
    }

    #[test]
    fn achievable_plan_carries_allocation() {
        let plan = plan_target(growth(5.0), 50_000.0, 5_000.0, &sample_spending());
        approx_eq(plan.additional_savings_needed, 208.333_333, 1e-3);
        approx_eq(plan.percentage_of_income.unwrap(), 4.166_666, 1e-3);
        match &plan.outcome {
            PlanOutcome::Achievable(allocation) => {
                let labels: Vec<&str> = allocation.cuts.iter().map(|c| c.bucket.label()).collect();
                assert_eq!(
                    labels,
                    vec!["Dining & Restaurants", "Shopping & Entertainment", "Transportation"]
                );
                approx_eq(allocation.total(), plan.additional_savings_needed, 1e-6);
            }
            other => panic!("expected achievable, got {other:?}"),
        }
    }

    #[test]
    fn shopping_and_entertainment_share_a_bucket() {
        let mix = spending(&[
            (SpendCategory::Shopping, 120.0),
            (SpendCategory::Entertainment, 80.0),
        ]);
        let allocation = allocate_cuts(&mix, 50.0);
        assert_eq!(allocation.cuts.len(), 1);
        assert_eq!(allocation.cuts[0].bucket, CutBucket::ShoppingEntertainment);
        approx_eq(allocation.cuts[0].current, 200.0, 1e-9);
        approx_eq(allocation.cuts[0].cut, 50.0, 1e-9);
    }

    #[test]
    fn empty_buckets_are_left_out() {
        let mix = spending(&[(SpendCategory::Dining, 100.0), (SpendCategory::Other, 0.0)]);
        let allocation = allocate_cuts(&mix, 10.0);
        assert_eq!(allocation.cuts.len(), 1);
        assert_eq!(allocation.cuts[0].bucket, CutBucket::Dining);
    }

    #[test]
    fn out_of_range_growth_is_rejected() {
        assert!(TargetGrowth::new(100.0).is_ok());
        assert!(TargetGrowth::new(-100.0).is_ok());
        assert!(matches!(
            TargetGrowth::new(100.5),
            Err(AppError::GrowthOutOfRange(_))
        ));
        assert!(TargetGrowth::new(f64::NAN).is_err());
    }

    #[test]
    fn cleared_adjustment_field_resets_to_zero() {
        assert_eq!(TargetGrowth::from_input("").unwrap().percent(), 0.0);
        assert_eq!(TargetGrowth::from_input("  ").unwrap().percent(), 0.0);
        assert_eq!(TargetGrowth::from_input("12.5").unwrap().percent(), 12.5);
        assert!(matches!(
            TargetGrowth::from_input("-"),
            Err(AppError::InvalidNumber(_))
        ));
        assert!(matches!(
            TargetGrowth::from_input("250"),
            Err(AppError::GrowthOutOfRange(_))
        ));
    }

    #[test]
    fn zero_baseline_has_no_adjustment_ceiling() {
        let plan = plan_target(growth(10.0), 0.0, 0.0, &sample_spending());
        assert_eq!(plan.max_adjustment_percent, None);
        assert_eq!(plan.percentage_of_income, None);
        // 10% of nothing needs nothing extra.
        assert!(plan.is_achievable());
    }
}
