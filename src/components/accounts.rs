use super::cards::StatCard;
use super::transactions::TransactionList;
use crate::fixtures::DemoData;
use crate::format::{format_amount, format_usd};
use crate::ledger::{period_span, recent_activity, ActivityView};
use std::rc::Rc;
use yew::prelude::*;

#[hook]
pub fn use_demo_data() -> Option<Rc<DemoData>> {
    use_context::<Rc<DemoData>>()
}

fn activity_heading(title: &str, data: &DemoData, view: ActivityView) -> Html {
    html! {
        <div class="flex items-baseline gap-3 mb-4">
            <h3 class="text-xl font-semibold text-[#003E5C]">{ title.to_string() }</h3>
            {
                match period_span(&data.statements, view) {
                    Some(span) => html! { <span class="text-xs text-slate-500">{ span }</span> },
                    None => html! {},
                }
            }
        </div>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let data = use_demo_data();
    let Some(data) = data else {
        return html! {};
    };
    let rows = recent_activity(&data.statements, ActivityView::Dashboard);
    let greeting = match data.holder_name() {
        Some(name) => format!("Welcome back, {}", name),
        None => "Welcome to CapCoach Banking".to_string(),
    };

    html! {
        <div class="max-w-5xl">
            <h1 class="text-3xl font-extrabold mb-6">{ greeting }</h1>
            <h3 class="text-xl font-semibold text-[#003E5C] mb-4">{"Your Accounts"}</h3>
            <div class="flex flex-wrap gap-4 mb-8">
                <StatCard title="360 Checking Account" value={format_usd(data.checking_balance())} caption={Some(AttrValue::from("Account ending in ****5382"))} />
                <StatCard title="360 Savings Account" value={format_usd(data.savings_balance())} caption={Some(AttrValue::from("Account ending in ****5383"))} />
            </div>
            { activity_heading("Recent Activity", &data, ActivityView::Dashboard) }
            <TransactionList rows={rows} />
        </div>
    }
}

#[function_component(CheckingPage)]
pub fn checking_page() -> Html {
    let data = use_demo_data();
    let Some(data) = data else {
        return html! {};
    };
    let rows = recent_activity(&data.statements, ActivityView::Checking);
    let outflow = data.latest_expenses().map(|e| {
        html! {
            <StatCard
                title="Monthly Outflow"
                value={format_usd(e.total_outflow)}
                caption={Some(AttrValue::from(format!(
                    "Fixed ${} · Variable ${} · Debt ${}",
                    format_amount(e.fixed),
                    format_amount(e.variable),
                    format_amount(e.debt_payments)
                )))}
                value_class="text-red-600"
            />
        }
    });

    html! {
        <div class="max-w-5xl">
            <h1 class="text-3xl font-extrabold mb-6">{"360 Checking Account"}</h1>
            <div class="flex flex-wrap gap-4 mb-8">
                <StatCard title="Available Balance" value={format_usd(data.checking_balance())} />
                { outflow.unwrap_or_else(|| html! {}) }
            </div>
            { activity_heading("Transaction History", &data, ActivityView::Checking) }
            <TransactionList rows={rows} />
        </div>
    }
}

#[function_component(SavingsPage)]
pub fn savings_page() -> Html {
    let data = use_demo_data();
    let Some(data) = data else {
        return html! {};
    };
    let rows = recent_activity(&data.statements, ActivityView::Savings);
    let plan = &data.history.savings_plan;
    let income_caption = match data.latest_income() {
        Some(income) if income.freelance > 0.0 => format!(
            "Salary ${} + freelance ${}",
            format_amount(income.salary),
            format_amount(income.freelance)
        ),
        Some(income) => format!("Salary ${}", format_amount(income.salary)),
        None => "Net monthly income".to_string(),
    };

    html! {
        <div class="max-w-5xl">
            <h1 class="text-3xl font-extrabold mb-6">{"360 Savings Account"}</h1>
            <div class="flex flex-wrap gap-4 mb-8">
                <StatCard title="Available Balance" value={format_usd(data.savings_balance())} />
            </div>
            <h3 class="text-xl font-semibold text-[#003E5C] mb-4">{"Income & Savings Information"}</h3>
            <div class="flex flex-wrap gap-4 mb-8">
                <StatCard title="Estimated Monthly Income" value={format_usd(data.monthly_income())} caption={Some(AttrValue::from(income_caption))} />
                <StatCard
                    title="Automatic Savings Transfer"
                    value={format_usd(plan.auto_transfer)}
                    caption={Some(AttrValue::from(format!("Transferred {}", plan.frequency)))}
                />
            </div>
            { activity_heading("Transaction History", &data, ActivityView::Savings) }
            <TransactionList rows={rows} />
        </div>
    }
}
