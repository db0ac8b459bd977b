use super::accounts::use_demo_data;
use super::ai_coach::AiCoach;
use super::cards::StatCard;
use super::icons::icon_chat;
use crate::config::SPENDING_WINDOW_MONTHS;
use crate::format::{format_amount, format_signed_percent, format_usd};
use crate::ledger::SpendingByCategory;
use crate::models::Prediction;
use crate::planner::{plan_target, Allocation, PlanOutcome, TargetGrowth, TargetPlan};
use crate::preferences::ProtectedSet;
use crate::session::CoachSession;
use tracing::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Choice {
    Satisfied,
    Adjust,
}

#[derive(Properties, PartialEq)]
pub struct CapCoachProps {
    pub prediction: Option<Prediction>,
    pub loading: bool,
    pub on_refresh: Callback<f64>,
}

#[function_component(CapCoachPage)]
pub fn capcoach_page(props: &CapCoachProps) -> Html {
    let data = use_demo_data();
    let session = use_context::<UseReducerHandle<CoachSession>>();
    let choice = use_state(|| None::<Choice>);
    let growth = use_state(|| None::<TargetGrowth>);
    let show_coach = use_state(|| false);

    let Some(data) = data else {
        return html! {};
    };
    let protected = session
        .as_ref()
        .map(|s| s.protected.clone())
        .unwrap_or_default();

    let on_choose = {
        let choice = choice.clone();
        let growth = growth.clone();
        Callback::from(move |picked: Choice| {
            if picked == Choice::Adjust {
                growth.set(TargetGrowth::new(0.0).ok());
            }
            choice.set(Some(picked));
        })
    };

    let on_growth_input = {
        let growth = growth.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                match TargetGrowth::from_input(&input.value()) {
                    Ok(valid) => growth.set(Some(valid)),
                    Err(err) => debug!(%err, "ignoring adjustment"),
                }
            }
        })
    };

    let on_start_over = {
        let choice = choice.clone();
        let growth = growth.clone();
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_| {
            choice.set(None);
            growth.set(None);
            on_refresh.emit(0.0);
        })
    };

    let toggle_coach = {
        let show_coach = show_coach.clone();
        Callback::from(move |_| show_coach.set(!*show_coach))
    };
    let close_coach = {
        let show_coach = show_coach.clone();
        Callback::from(move |_: ()| show_coach.set(false))
    };

    let body = if props.loading {
        html! {
            <div class="bg-white rounded-xl shadow-sm p-10 text-center">
                <h3 class="text-xl font-semibold text-[#003E5C]">{"Loading AI Predictions..."}</h3>
                <p class="text-slate-500">{"Analyzing your financial data with machine learning..."}</p>
                <div class="loading-spinner mx-auto mt-4" role="status" aria-label="Loading predictions"></div>
            </div>
        }
    } else if let Some(prediction) = &props.prediction {
        let spending = SpendingByCategory::from_statements(&data.statements, SPENDING_WINDOW_MONTHS);
        let plan = (*growth).map(|g| {
            plan_target(g, prediction.predicted_net_worth_12mo, data.monthly_income(), &spending)
        });
        if let Some(plan) = &plan {
            debug!(
                growth = plan.growth.percent(),
                gap = plan.additional_savings_needed,
                achievable = plan.is_achievable(),
                "target plan"
            );
        }

        html! {
            <>
                { prediction_cards(prediction) }
                {
                    match *choice {
                        None => choice_prompt(on_choose.clone()),
                        Some(Choice::Satisfied) => satisfied_view(prediction),
                        Some(Choice::Adjust) => html! {
                            <>
                                { adjust_controls(prediction, *growth, on_growth_input.clone()) }
                                { plan.as_ref().map(|p| plan_view(p, &protected)).unwrap_or_else(|| html! {}) }
                            </>
                        },
                    }
                }
                {
                    if choice.is_some() {
                        html! {
                            <button onclick={on_start_over} class="mt-6 bg-slate-600 text-white px-6 py-3 rounded-lg font-semibold">
                                {"Start Over"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
                { forecast_table(prediction) }
            </>
        }
    } else {
        html! {
            <div class="bg-white rounded-xl shadow-sm p-10 text-center text-slate-500">
                {"No prediction available yet."}
            </div>
        }
    };

    html! {
        <div class="flex gap-6">
            <div class="flex-1 max-w-5xl">
                <div class="flex items-center justify-between mb-6">
                    <h1 class="text-3xl font-extrabold">{"CapCoach - AI Financial Planner"}</h1>
                    <button onclick={toggle_coach} class="flex items-center gap-2 bg-[#003E5C] text-white px-4 py-2 rounded-lg text-sm font-semibold">
                        { icon_chat() }
                        <span>{ if *show_coach { "Hide AI Coach" } else { "Ask AI Coach" } }</span>
                    </button>
                </div>
                { body }
            </div>
            {
                if *show_coach {
                    html! {
                        <div class="w-[420px] shrink-0">
                            <AiCoach embedded={true} on_close={close_coach} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn prediction_cards(prediction: &Prediction) -> Html {
    let growth_class = if prediction.growth_percentage >= 0.0 {
        "text-green-600"
    } else {
        "text-red-600"
    };
    html! {
        <>
            <h3 class="text-xl font-semibold text-[#003E5C] mb-4">{"AI-Powered Net Worth Prediction"}</h3>
            <div class="flex flex-wrap gap-4 mb-6">
                <StatCard title="Current Net Worth" value={format_usd(prediction.current_net_worth)} caption={Some(AttrValue::from("As of now"))} />
                <StatCard
                    title="Predicted Net Worth (12 months)"
                    value={format_usd(prediction.predicted_net_worth_12mo)}
                    caption={Some(AttrValue::from("AI Forecast"))}
                    value_class="text-green-600"
                />
                <StatCard
                    title="Expected Growth"
                    value={format_signed_percent(prediction.growth_percentage)}
                    caption={Some(AttrValue::from(format_usd(prediction.net_worth_growth.abs())))}
                    value_class={growth_class}
                />
            </div>
        </>
    }
}

fn choice_prompt(on_choose: Callback<Choice>) -> Html {
    let satisfied = {
        let on_choose = on_choose.clone();
        Callback::from(move |_| on_choose.emit(Choice::Satisfied))
    };
    let adjust = Callback::from(move |_| on_choose.emit(Choice::Adjust));
    html! {
        <div class="bg-slate-50 rounded-xl p-8 text-center">
            <h3 class="text-xl font-semibold text-[#003E5C] mb-5">{"Are you satisfied with this projected growth?"}</h3>
            <div class="flex gap-4 justify-center flex-wrap">
                <button onclick={satisfied} class="bg-green-600 text-white px-10 py-4 rounded-lg font-semibold min-w-[200px]">
                    {"Yes, I'm satisfied"}
                </button>
                <button onclick={adjust} class="bg-yellow-500 text-white px-10 py-4 rounded-lg font-semibold min-w-[200px]">
                    {"No, I want to adjust it"}
                </button>
            </div>
        </div>
    }
}

fn satisfied_view(prediction: &Prediction) -> Html {
    html! {
        <>
            <div class="bg-green-100 border border-green-200 rounded-xl p-8 text-center mb-4">
                <h2 class="text-2xl font-bold text-green-900 mb-4">{"Great! Keep up the good work!"}</h2>
                <p class="text-lg text-green-900">
                    {"Based on your current spending and saving habits, you're on track to grow your net worth by "}
                    <strong>{ format_usd(prediction.net_worth_growth.abs()) }</strong>
                    {" over the next year."}
                </p>
            </div>
            { tip_list("Tips to Stay on Track", &[
                "Continue your current saving habits",
                "Review your budget monthly to catch any overspending early",
                "Consider automating your savings to make it effortless",
                "Build an emergency fund if you haven't already (3-6 months of expenses)",
            ]) }
        </>
    }
}

fn adjust_controls(
    prediction: &Prediction,
    growth: Option<TargetGrowth>,
    on_input: Callback<InputEvent>,
) -> Html {
    let percent = growth.map(TargetGrowth::percent).unwrap_or(0.0);
    let percent_class = if percent >= 0.0 {
        "text-xl text-green-600"
    } else {
        "text-xl text-red-600"
    };
    let sign = if percent >= 0.0 { "+" } else { "" };

    html! {
        <>
            <h3 class="text-xl font-semibold text-[#003E5C] mb-4">{"Adjust Your Net Worth Target"}</h3>
            <div class="bg-white rounded-xl shadow-sm p-6 mb-6">
                <div class="flex justify-between items-center mb-3">
                    <label class="font-semibold">
                        {"Adjustment from Baseline: "}
                        <span class={percent_class}>{ format!("{}{}%", sign, percent) }</span>
                    </label>
                    <div class="flex items-center gap-2">
                        <input type="number" min="-100" max="100" step="0.1" value={percent.to_string()} oninput={on_input.clone()} class="w-20 p-2 border rounded text-right text-sm" />
                        <span class="text-sm text-slate-500">{"%"}</span>
                    </div>
                </div>
                <p class="text-sm text-slate-500 mb-3">
                    { format!("Baseline prediction: {}", format_usd(prediction.predicted_net_worth_12mo)) }
                </p>
                <input type="range" min="-100" max="100" step="0.1" value={percent.to_string()} oninput={on_input} class="w-full mb-4 target-slider" />
                <div class="flex justify-between text-xs text-slate-500">
                    <span>{"-100%"}</span>
                    <span>{"0%"}</span>
                    <span>{"+100%"}</span>
                </div>
            </div>
        </>
    }
}

fn plan_view(plan: &TargetPlan, protected: &ProtectedSet) -> Html {
    let percent = plan.growth.percent();
    match &plan.outcome {
        PlanOutcome::LowerTarget => html! {
            <>
                <div class="bg-yellow-50 border border-yellow-400 rounded-xl p-6 text-center mb-4 text-yellow-900">
                    <h2 class="text-2xl font-bold mb-4">{"Lower Target Selected"}</h2>
                    <p class="text-lg mb-3">
                        { format!("Your adjusted target: {} ({}% adjustment)", format_usd(plan.target_net_worth), percent) }
                    </p>
                    <p>
                        { format!(
                            "This is {}/month less than your baseline trajectory. You'll have more spending flexibility!",
                            format_usd(plan.additional_savings_needed.abs())
                        ) }
                    </p>
                </div>
                { tip_list("Enjoying Life While Building Wealth", &[
                    "It's okay to prioritize current lifestyle and experiences",
                    "You can still build wealth at a comfortable pace",
                    "Consider allocating the extra funds to things that bring you joy",
                    "Keep an eye on your spending to ensure you stay on track",
                ]) }
            </>
        },
        PlanOutcome::Achievable(allocation) => achievable_view(plan, allocation, protected),
        PlanOutcome::Infeasible { shortfall } => {
            let max_percent = plan
                .max_adjustment_percent
                .map(|p| format!("{:.1}%", p))
                .unwrap_or_else(|| "n/a".to_string());
            html! {
                <>
                    <div class="bg-red-100 border border-red-200 rounded-xl p-6 text-center mb-4 text-red-900">
                        <h2 class="text-2xl font-bold mb-4">{"Goal Exceeds Maximum Capacity"}</h2>
                        <p class="mb-3">
                            { format!(
                                "This target requires {}/month in additional savings, but your maximum capacity (after essential expenses) is {}/month.",
                                format_usd(plan.additional_savings_needed),
                                format_usd(plan.max_monthly_savings)
                            ) }
                        </p>
                        <p class="mb-2">
                            {"You would need to reduce spending by an additional "}
                            <strong>{ format!("{}/month", format_usd(*shortfall)) }</strong>
                            {" beyond your variable expenses."}
                        </p>
                        <p class="text-sm">
                            {"Maximum achievable adjustment: "}
                            <strong>{ max_percent }</strong>
                            { format!(" ({})", format_usd(plan.max_target_net_worth)) }
                        </p>
                    </div>
                    { tip_list("Consider These Options Instead", &[
                        "Lower your target to a more realistic percentage using the slider above",
                        "Increase your income through a side hustle, freelance work, or raise",
                        "Extend your timeline to 18-24 months for more gradual growth",
                        "Reduce fixed expenses by negotiating bills or refinancing debts",
                    ]) }
                </>
            }
        }
    }
}

fn achievable_view(plan: &TargetPlan, allocation: &Allocation, protected: &ProtectedSet) -> Html {
    let percent = plan.growth.percent();
    let sign = if percent >= 0.0 { "+" } else { "" };
    let income_share = plan
        .percentage_of_income
        .map(|p| format!("{:.1}%", p))
        .unwrap_or_else(|| "n/a".to_string());
    let monthly = format_usd(plan.additional_savings_needed);

    html! {
        <>
            <div class="bg-green-100 border border-green-200 rounded-xl p-6 text-center mb-4 text-green-900">
                <h2 class="text-2xl font-bold mb-4">{"Goal is Achievable!"}</h2>
                <p class="text-lg mb-2">{ format!("To reach {} in 12 months", format_usd(plan.target_net_worth)) }</p>
                <p class="text-sm">
                    { format!("({}{}% from baseline: {})", sign, percent, format_usd(plan.baseline_predicted)) }
                </p>
            </div>
            <div class="flex flex-wrap gap-4 mb-4">
                <StatCard title="Additional Savings/Month" value={monthly.clone()} value_class="text-green-600" />
                <StatCard title="% of Income" value={income_share} />
                <StatCard title="Target Net Worth" value={format_usd(plan.target_net_worth)} value_class="text-green-600" />
            </div>
            {
                if plan.additional_savings_needed > 0.01 {
                    html! {
                        <>
                            <div class="bg-blue-50 rounded-xl p-5 mb-4 text-[#004879]">
                                {"Save an "}<strong>{ format!("additional {}/month", monthly) }</strong>{" beyond your current trajectory to reach this goal"}
                            </div>
                            <div class="bg-yellow-50 border border-yellow-400 rounded-xl p-5 text-yellow-900">
                                <h4 class="text-lg font-semibold mb-4">{"Ways to Bridge the Gap"}</h4>
                                <p class="mb-4">{"Here's how to save an additional "}<strong>{ format!("{}/month", monthly) }</strong>{":"}</p>
                                <div class="bg-white rounded-lg p-4 text-slate-800">
                                    <h5 class="font-semibold text-[#003E5C] mb-3">{"Recommended Spending Adjustments:"}</h5>
                                    { for allocation.cuts.iter().map(|cut| {
                                        let is_protected = cut.bucket.categories().iter().any(|c| protected.contains(c));
                                        html! {
                                            <div class="py-3 border-b border-slate-100">
                                                <div class="flex justify-between">
                                                    <span class="font-semibold">{ cut.bucket.label() }</span>
                                                    <span class="text-red-600 font-semibold">{ format!("-${}", format_amount(cut.cut)) }</span>
                                                </div>
                                                <p class="text-xs text-slate-400 my-0.5">
                                                    { format!("Current: ${}/mo", format_amount(cut.current)) }
                                                    { if cut.hit_cap { " (maximum reduction for this category)" } else { "" } }
                                                </p>
                                                <p class="text-sm text-slate-600 mt-1">{ cut.bucket.tip() }</p>
                                                {
                                                    if is_protected {
                                                        html! { <p class="text-xs text-[#003E5C] mt-1">{"You asked the coach to protect this spending."}</p> }
                                                    } else {
                                                        html! {}
                                                    }
                                                }
                                            </div>
                                        }
                                    }) }
                                    <div class="flex justify-between pt-3 font-bold">
                                        <span>{"Total Monthly Savings:"}</span>
                                        <span class="text-red-600">{ format!("-${}", format_amount(allocation.total())) }</span>
                                    </div>
                                    {
                                        if allocation.unallocated > 0.01 {
                                            html! {
                                                <p class="text-xs text-slate-500 mt-2">
                                                    { format!("{} could not be placed within the per-category limits.", format_usd(allocation.unallocated)) }
                                                </p>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                            </div>
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

fn tip_list(title: &'static str, tips: &[&'static str]) -> Html {
    html! {
        <div class="bg-blue-50 rounded-xl p-5 mt-4">
            <h4 class="text-lg font-semibold text-[#003E5C] mb-3">{ title }</h4>
            <ul class="list-disc pl-5 leading-relaxed text-[#004879]">
                { for tips.iter().map(|tip| html! { <li>{ *tip }</li> }) }
            </ul>
        </div>
    }
}

fn forecast_table(prediction: &Prediction) -> Html {
    if prediction.monthly_predictions.is_empty() {
        return html! {};
    }
    html! {
        <div class="bg-white rounded-xl shadow-sm p-5 mt-8">
            <h4 class="text-lg font-semibold text-[#003E5C] mb-3">{"12-Month Forecast"}</h4>
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-slate-500">
                        <th class="py-1">{"#"}</th>
                        <th class="py-1">{"Month"}</th>
                        <th class="py-1 text-right">{"Net Worth"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for prediction.monthly_predictions.iter().map(|point| html! {
                        <tr class="border-t border-slate-100">
                            <td class="py-1 text-slate-400">{ point.month.to_string() }</td>
                            <td class="py-1">{ point.date.clone() }</td>
                            <td class="py-1 text-right">{ format_usd(point.net_worth) }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
