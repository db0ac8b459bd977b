mod api;
mod components;
mod config;
mod error;
mod fixtures;
mod format;
mod ledger;
mod models;
mod planner;
mod preferences;
mod routes;
mod session;

use components::accounts::{CheckingPage, DashboardPage, SavingsPage};
use components::capcoach::CapCoachPage;
use components::layout::Layout;
use config::{load_ui_settings, save_ui_settings, UiSettings};
use fixtures::DemoData;
use models::Prediction;
use routes::{current_page, push_page, Page};
use session::CoachSession;
use std::rc::Rc;
use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let data = use_state(|| DemoData::load().map(Rc::new));
    let session = use_reducer(CoachSession::default);
    let active_page = use_state(current_page);
    let settings = use_state(load_ui_settings);
    let prediction = use_state(|| None::<Prediction>);
    let loading = use_state(|| false);

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| {
            push_page(page);
            active_page.set(page);
        })
    };

    let on_toggle_nav = {
        let settings = settings.clone();
        Callback::from(move |_: ()| {
            let next = UiSettings {
                nav_open: !settings.nav_open,
            };
            save_ui_settings(&next);
            settings.set(next);
        })
    };

    let fetch_prediction = {
        let prediction = prediction.clone();
        let loading = loading.clone();
        Callback::from(move |additional_monthly_savings: f64| {
            let prediction = prediction.clone();
            let loading = loading.clone();
            loading.set(true);
            spawn_local(async move {
                info!(additional_monthly_savings, "requesting net worth prediction");
                match api::fetch_prediction(additional_monthly_savings).await {
                    Ok(result) => prediction.set(Some(result)),
                    Err(err) => {
                        error!(%err, "Error fetching prediction");
                        error::alert("Error connecting to backend. Please make sure the Flask server is running on port 5001.");
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let fetch_prediction = fetch_prediction.clone();
        use_effect_with_deps(
            move |_| {
                fetch_prediction.emit(0.0);
                || ()
            },
            (),
        );
    }

    let data = match &*data {
        Ok(data) => data.clone(),
        Err(err) => {
            error!(%err, "demo data failed to load");
            return html! {
                <div class="min-h-screen flex items-center justify-center text-red-600">
                    { format!("Could not load account data: {}", err) }
                </div>
            };
        }
    };

    let content = match *active_page {
        Page::Dashboard => html! { <DashboardPage /> },
        Page::Checking => html! { <CheckingPage /> },
        Page::Savings => html! { <SavingsPage /> },
        Page::CapCoach => html! {
            <CapCoachPage
                prediction={(*prediction).clone()}
                loading={*loading}
                on_refresh={fetch_prediction}
            />
        },
    };

    html! {
        <ContextProvider<Rc<DemoData>> context={data.clone()}>
            <ContextProvider<UseReducerHandle<CoachSession>> context={session}>
                <Layout
                    active_page={*active_page}
                    on_select={on_select}
                    nav_open={settings.nav_open}
                    on_toggle_nav={on_toggle_nav}
                    total_balance={data.total_balance()}
                >
                    { content }
                </Layout>
            </ContextProvider<UseReducerHandle<CoachSession>>>
        </ContextProvider<Rc<DemoData>>>
    }
}

fn main() {
    tracing_wasm::set_as_global_default();
    yew::Renderer::<App>::new().render();
}
