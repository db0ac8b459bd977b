use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// --- fixture shapes -------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FinancialHistory {
    #[serde(default)]
    pub profile: Option<FixtureProfile>,
    pub savings_plan: SavingsPlan,
    pub monthly_financial_history: Vec<MonthlySnapshot>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FixtureProfile {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SavingsPlan {
    pub auto_transfer: f64,
    pub frequency: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MonthlySnapshot {
    pub month: u32,
    pub cash_flow: CashFlow,
    pub balance_sheet_snapshot: BalanceSheet,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CashFlow {
    pub income: Income,
    pub expenses: Expenses,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Income {
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub freelance: f64,
    pub total: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Expenses {
    pub fixed: f64,
    pub variable: f64,
    #[serde(default)]
    pub debt_payments: f64,
    #[serde(default)]
    pub total_outflow: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BalanceSheet {
    pub liquid_assets: LiquidAssets,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LiquidAssets {
    pub checking_account: f64,
    pub savings_account: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatementBook {
    pub statements: Vec<Statement>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Statement {
    pub period: String,
    pub transactions: Vec<StatementTransaction>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StatementTransaction {
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TxnType,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxnType {
    Debit,
    Credit,
}

impl TxnType {
    pub fn sign(self) -> &'static str {
        match self {
            TxnType::Debit => "-",
            TxnType::Credit => "+",
        }
    }

    pub fn amount_class(self) -> &'static str {
        match self {
            TxnType::Debit => "text-red-600",
            TxnType::Credit => "text-green-600",
        }
    }
}

// --- spending taxonomy ----------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpendCategory {
    Dining,
    Entertainment,
    Shopping,
    Transportation,
    Other,
}

impl SpendCategory {
    pub const ALL: [SpendCategory; 5] = [
        SpendCategory::Dining,
        SpendCategory::Entertainment,
        SpendCategory::Shopping,
        SpendCategory::Transportation,
        SpendCategory::Other,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SpendCategory::Dining => "dining",
            SpendCategory::Entertainment => "entertainment",
            SpendCategory::Shopping => "shopping",
            SpendCategory::Transportation => "transportation",
            SpendCategory::Other => "other",
        }
    }
}

impl fmt::Display for SpendCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// --- backend payloads -----------------------------------------------------

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Prediction {
    pub current_net_worth: f64,
    pub predicted_net_worth_12mo: f64,
    pub net_worth_growth: f64,
    pub growth_percentage: f64,
    #[serde(default)]
    pub monthly_predictions: Vec<ForecastPoint>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ForecastPoint {
    pub month: u32,
    pub net_worth: f64,
    pub date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub age: String,
    pub profession: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SessionStart {
    pub session_id: String,
    pub welcome_message: String,
    pub first_question: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChatReply {
    pub ai_response: String,
    #[serde(default)]
    pub conversation_progress: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CoachInsights {
    #[serde(default)]
    pub emotional_patterns: Option<EmotionalPatterns>,
    #[serde(default)]
    pub financial_behavior: Option<FinancialBehavior>,
    #[serde(default)]
    pub personalized_advice: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EmotionalPatterns {
    pub dominant_emotion: String,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FinancialBehavior {
    pub pattern: String,
    #[serde(default)]
    pub suggested_strategies: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VideoResult {
    pub success: bool,
    #[serde(default)]
    pub video_path: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VideoGuide {
    pub path: String,
    pub pattern: String,
}

impl VideoGuide {
    /// The backend falls back to a plain-text script when it cannot render video.
    pub fn is_script(&self) -> bool {
        self.path.ends_with(".txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_type_uses_lowercase_tags() {
        let txn: StatementTransaction = serde_json::from_str(
            r#"{"description":"Uber Trip","category":"Variable","amount":-18.5,"date":"2024-11-03","type":"debit"}"#,
        )
        .unwrap();
        assert_eq!(txn.kind, TxnType::Debit);
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 11, 3).unwrap());
        assert_eq!(TxnType::Debit.sign(), "-");
        assert_eq!(TxnType::Credit.sign(), "+");
    }

    #[test]
    fn prediction_tolerates_missing_forecast() {
        let prediction: Prediction = serde_json::from_str(
            r#"{"current_net_worth":40000.0,"predicted_net_worth_12mo":50000.0,"net_worth_growth":10000.0,"growth_percentage":25.0}"#,
        )
        .unwrap();
        assert!(prediction.monthly_predictions.is_empty());
        assert_eq!(prediction.predicted_net_worth_12mo, 50000.0);
    }

    #[test]
    fn chat_reply_skips_diagnostic_fields() {
        let reply: ChatReply = serde_json::from_str(
            r#"{"ai_response":"Tell me more.","diagnostic_insights":{"avoidance":1.0,"impulse":0.5},"next_question_type":"follow_up","conversation_progress":0.4}"#,
        )
        .unwrap();
        assert_eq!(reply.ai_response, "Tell me more.");
        assert_eq!(reply.conversation_progress, 0.4);
    }

    #[test]
    fn insights_accept_partial_payloads() {
        let insights: CoachInsights = serde_json::from_str(
            r#"{"session_id":"abc","financial_behavior":{"pattern":"avoidance","suggested_strategies":["Start small","Automate savings"]},"personalized_advice":"Focus on consistent small habits"}"#,
        )
        .unwrap();
        let behavior = insights.financial_behavior.unwrap();
        assert_eq!(behavior.suggested_strategies.len(), 2);
        assert!(insights.emotional_patterns.is_none());
    }

    #[test]
    fn emotional_patterns_carry_confidence() {
        let insights: CoachInsights = serde_json::from_str(
            r#"{"session_id":"abc","emotional_patterns":{"dominant_emotion":"anxiety","confidence":0.72}}"#,
        )
        .unwrap();
        let emotions = insights.emotional_patterns.unwrap();
        assert_eq!(emotions.dominant_emotion, "anxiety");
        assert_eq!(emotions.confidence, 0.72);
    }

    #[test]
    fn profile_serializes_as_session_start_body() {
        let profile = UserProfile {
            name: "Alex".into(),
            age: "29".into(),
            profession: "DJ".into(),
        };
        let body = serde_json::to_value(&profile).unwrap();
        assert_eq!(body["name"], "Alex");
        assert_eq!(body["age"], "29");
        assert_eq!(body["profession"], "DJ");
    }

    #[test]
    fn text_scripts_are_detected() {
        let guide = VideoGuide {
            path: "videos/guide_avoidance.txt".into(),
            pattern: "avoidance".into(),
        };
        assert!(guide.is_script());
    }
}
