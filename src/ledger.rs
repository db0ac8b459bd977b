use crate::config::{
    CHECKING_ROWS, CHECKING_WINDOW_MONTHS, DASHBOARD_ROWS, DASHBOARD_WINDOW_MONTHS, SAVINGS_ROWS,
    SAVINGS_WINDOW_MONTHS,
};
use crate::models::{SpendCategory, Statement, StatementBook, TxnType};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Merchant keywords, checked top to bottom. First hit wins.
const MERCHANT_RULES: &[(SpendCategory, &[&str])] = &[
    (
        SpendCategory::Dining,
        &["restaurant", "bar", "grill", "eats", "valentine's"],
    ),
    (
        SpendCategory::Entertainment,
        &["concert", "gaming", "entertainment", "ticket"],
    ),
    (
        SpendCategory::Shopping,
        &["target", "purchase", "electronics"],
    ),
    (SpendCategory::Transportation, &["uber", "shell", "gas"]),
];

const VARIABLE_TAG: &str = "Variable";

pub fn classify_merchant(description: &str) -> SpendCategory {
    let merchant = description.to_lowercase();
    MERCHANT_RULES
        .iter()
        .find(|(_, terms)| terms.iter().any(|t| merchant.contains(t)))
        .map(|(category, _)| *category)
        .unwrap_or(SpendCategory::Other)
}

fn last_statements(book: &StatementBook, months: usize) -> &[Statement] {
    let start = book.statements.len().saturating_sub(months);
    &book.statements[start..]
}

/// Average monthly variable spend per category. Categories with no spend
/// are simply absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpendingByCategory(BTreeMap<SpendCategory, f64>);

impl SpendingByCategory {
    pub fn from_statements(book: &StatementBook, months: usize) -> Self {
        let mut totals: BTreeMap<SpendCategory, f64> = BTreeMap::new();
        for statement in last_statements(book, months) {
            for txn in &statement.transactions {
                if txn.kind == TxnType::Debit && txn.category == VARIABLE_TAG {
                    *totals.entry(classify_merchant(&txn.description)).or_insert(0.0) +=
                        txn.amount.abs();
                }
            }
        }
        // The divisor is the window size, even when fewer statements exist.
        let divisor = months.max(1) as f64;
        for total in totals.values_mut() {
            *total /= divisor;
        }
        Self(totals)
    }

    pub fn get(&self, category: SpendCategory) -> f64 {
        self.0.get(&category).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, amount)| amount).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpendCategory, f64)> + '_ {
        self.0.iter().map(|(c, v)| (*c, *v))
    }
}

impl FromIterator<(SpendCategory, f64)> for SpendingByCategory {
    fn from_iter<I: IntoIterator<Item = (SpendCategory, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One line of an account's activity list.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionRow {
    pub merchant: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub kind: TxnType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityView {
    Dashboard,
    Checking,
    Savings,
}

impl ActivityView {
    pub fn months(self) -> usize {
        match self {
            ActivityView::Dashboard => DASHBOARD_WINDOW_MONTHS,
            ActivityView::Checking => CHECKING_WINDOW_MONTHS,
            ActivityView::Savings => SAVINGS_WINDOW_MONTHS,
        }
    }

    pub fn limit(self) -> usize {
        match self {
            ActivityView::Dashboard => DASHBOARD_ROWS,
            ActivityView::Checking => CHECKING_ROWS,
            ActivityView::Savings => SAVINGS_ROWS,
        }
    }

    fn includes(self, kind: TxnType) -> bool {
        match self {
            ActivityView::Dashboard => true,
            ActivityView::Checking => kind == TxnType::Debit,
            ActivityView::Savings => kind == TxnType::Credit,
        }
    }
}

/// Newest first; same-day rows keep their statement order.
pub fn recent_activity(book: &StatementBook, view: ActivityView) -> Vec<TransactionRow> {
    let mut rows: Vec<TransactionRow> = last_statements(book, view.months())
        .iter()
        .flat_map(|s| s.transactions.iter())
        .filter(|t| view.includes(t.kind))
        .map(|t| TransactionRow {
            merchant: t.description.clone(),
            category: t.category.to_lowercase(),
            amount: t.amount.abs(),
            date: t.date,
            kind: t.kind,
        })
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows.truncate(view.limit());
    rows
}

/// "2024-10 to 2024-12" for the statements a view draws from.
pub fn period_span(book: &StatementBook, view: ActivityView) -> Option<String> {
    let window = last_statements(book, view.months());
    match (window.first(), window.last()) {
        (Some(first), Some(last)) if first.period == last.period => Some(first.period.clone()),
        (Some(first), Some(last)) => Some(format!("{} to {}", first.period, last.period)),
        _ => None,
    }
}
