//! Embedded demo data. Every view reads the same "stable" profile: the
//! 24-month history for balances and the monthly statements for activity.

use crate::error::Result;
use crate::models::{Expenses, FinancialHistory, Income, MonthlySnapshot, StatementBook};

const HISTORY_JSON: &str = include_str!("../data/alex_stable_history.json");
const STATEMENTS_JSON: &str = include_str!("../data/alex_stable_statement.json");

pub fn load_history() -> Result<FinancialHistory> {
    Ok(serde_json::from_str(HISTORY_JSON)?)
}

pub fn load_statements() -> Result<StatementBook> {
    Ok(serde_json::from_str(STATEMENTS_JSON)?)
}

/// Both documents, or the decode error that stopped them.
#[derive(Clone, Debug, PartialEq)]
pub struct DemoData {
    pub history: FinancialHistory,
    pub statements: StatementBook,
}

impl DemoData {
    pub fn load() -> Result<Self> {
        Ok(Self {
            history: load_history()?,
            statements: load_statements()?,
        })
    }

    pub fn latest(&self) -> Option<&MonthlySnapshot> {
        self.history.monthly_financial_history.last()
    }

    pub fn checking_balance(&self) -> f64 {
        self.latest()
            .map(|m| m.balance_sheet_snapshot.liquid_assets.checking_account)
            .unwrap_or(0.0)
    }

    pub fn savings_balance(&self) -> f64 {
        self.latest()
            .map(|m| m.balance_sheet_snapshot.liquid_assets.savings_account)
            .unwrap_or(0.0)
    }

    pub fn total_balance(&self) -> f64 {
        self.checking_balance() + self.savings_balance()
    }

    pub fn monthly_income(&self) -> f64 {
        self.latest_income().map(|i| i.total).unwrap_or(0.0)
    }

    pub fn latest_expenses(&self) -> Option<&Expenses> {
        self.latest().map(|m| &m.cash_flow.expenses)
    }

    pub fn latest_income(&self) -> Option<&Income> {
        self.latest().map(|m| &m.cash_flow.income)
    }

    pub fn holder_name(&self) -> Option<&str> {
        self.history.profile.as_ref().map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_history_covers_two_years() {
        let history = load_history().expect("history fixture");
        assert_eq!(history.monthly_financial_history.len(), 24);
        let months: Vec<u32> = history
            .monthly_financial_history
            .iter()
            .map(|m| m.month)
            .collect();
        assert!(months.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn embedded_statements_are_chronological() {
        let book = load_statements().expect("statement fixture");
        assert!(book.statements.len() >= 6);
        let periods: Vec<&str> = book.statements.iter().map(|s| s.period.as_str()).collect();
        assert!(periods.windows(2).all(|w| w[0] < w[1]));
        assert!(book.statements.iter().all(|s| !s.transactions.is_empty()));
    }

    #[test]
    fn total_balance_adds_latest_liquid_accounts() {
        let data = DemoData::load().expect("fixtures");
        let latest = data.latest().expect("latest month");
        let liquid = &latest.balance_sheet_snapshot.liquid_assets;
        assert_eq!(latest.month, 24);
        assert_eq!(
            data.total_balance(),
            liquid.checking_account + liquid.savings_account
        );
        assert_eq!(data.holder_name(), Some("Alex"));
    }

    #[test]
    fn latest_month_breaks_down_cash_flow() {
        let data = DemoData::load().expect("fixtures");
        let expenses = data.latest_expenses().expect("expenses");
        let parts = expenses.fixed + expenses.variable + expenses.debt_payments;
        assert!((parts - expenses.total_outflow).abs() < 1e-6);

        let income = data.latest_income().expect("income");
        assert!((income.salary + income.freelance - income.total).abs() < 1e-6);
        assert_eq!(data.monthly_income(), income.total);
    }
}
