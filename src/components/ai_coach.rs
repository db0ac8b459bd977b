use crate::api;
use crate::config::{INSIGHTS_DELAY_MS, INSIGHTS_PROGRESS_THRESHOLD};
use crate::error::{alert, AppError};
use crate::models::{CoachInsights, SpendCategory, UserProfile, VideoGuide};
use crate::session::{now_label, ChatMessage, CoachSession, MessageBody, SessionAction, Speaker};
use gloo_timers::future::TimeoutFuture;
use tracing::{error, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AiCoachProps {
    #[prop_or_default]
    pub embedded: bool,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

fn request_insights(session: UseReducerHandle<CoachSession>, session_id: String) {
    spawn_local(async move {
        TimeoutFuture::new(INSIGHTS_DELAY_MS).await;
        session.dispatch(SessionAction::Busy(true));
        match api::fetch_insights(&session_id).await {
            Ok(insights) => session.dispatch(SessionAction::InsightsReady {
                insights,
                at: now_label(),
            }),
            Err(err) => error!(%err, "Failed to generate insights"),
        }
        session.dispatch(SessionAction::Busy(false));
    });
}

#[function_component(AiCoach)]
pub fn ai_coach(props: &AiCoachProps) -> Html {
    let session = use_context::<UseReducerHandle<CoachSession>>();
    let input_message = use_state(|| "".to_string());
    let Some(session) = session else {
        return html! {};
    };

    let profile_input = |apply: fn(&mut UserProfile, String)| {
        let session = session.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                let mut profile = session.profile.clone();
                apply(&mut profile, input.value());
                session.dispatch(SessionAction::EditProfile(profile));
            }
        })
    };
    let on_name = profile_input(|p, v| p.name = v);
    let on_age = profile_input(|p, v| p.age = v);
    let on_profession = profile_input(|p, v| p.profession = v);

    let on_toggle_category = {
        let session = session.clone();
        Callback::from(move |category: SpendCategory| {
            session.dispatch(SessionAction::ToggleProtected(category))
        })
    };

    let start_session = {
        let session = session.clone();
        Callback::from(move |_| {
            let profile = session.profile.clone();
            if profile.name.trim().is_empty() {
                alert("Please enter your name to start");
                return;
            }
            let session = session.clone();
            session.dispatch(SessionAction::Busy(true));
            spawn_local(async move {
                info!(name = %profile.name, "starting coaching session");
                match api::start_session(&profile).await {
                    Ok(start) => session.dispatch(SessionAction::Started {
                        start,
                        at: now_label(),
                    }),
                    Err(err) => {
                        error!(%err, "Failed to start session");
                        alert("Failed to start AI coaching session. Please make sure the backend is running on port 5001.");
                    }
                }
                session.dispatch(SessionAction::Busy(false));
            });
        })
    };

    let send_message = {
        let session = session.clone();
        let input_message = input_message.clone();
        Callback::from(move |_: ()| {
            let text = (*input_message).clone();
            let Some(session_id) = session.session_id.clone() else {
                return;
            };
            if text.trim().is_empty() {
                return;
            }
            session.dispatch(SessionAction::UserSaid {
                text: text.clone(),
                at: now_label(),
            });
            input_message.set("".to_string());
            session.dispatch(SessionAction::Busy(true));

            let session = session.clone();
            spawn_local(async move {
                match api::send_message(&session_id, &text).await {
                    Ok(reply) => {
                        let progress = reply.conversation_progress;
                        session.dispatch(SessionAction::CoachReplied {
                            text: reply.ai_response,
                            progress,
                            at: now_label(),
                        });
                        if progress >= INSIGHTS_PROGRESS_THRESHOLD {
                            request_insights(session.clone(), session_id);
                        }
                    }
                    Err(err) => {
                        error!(%err, "Failed to send message");
                        session.dispatch(SessionAction::ReplyFailed { at: now_label() });
                    }
                }
                session.dispatch(SessionAction::Busy(false));
            });
        })
    };

    let generate_video = {
        let session = session.clone();
        Callback::from(move |_| {
            let Some(session_id) = session.session_id.clone() else {
                return;
            };
            let session = session.clone();
            spawn_local(async move {
                match api::generate_video(&session_id).await {
                    Ok(guide) => session.dispatch(SessionAction::VideoReady {
                        guide,
                        at: now_label(),
                    }),
                    Err(AppError::Backend(reason)) => {
                        warn!(%reason, "video generation failed");
                        alert(&format!("Video generation failed: {}", reason));
                    }
                    Err(err) => {
                        error!(%err, "Video generation error");
                        alert("Video service unavailable - check backend");
                    }
                }
            });
        })
    };

    let reset_session = {
        let session = session.clone();
        let input_message = input_message.clone();
        Callback::from(move |_| {
            input_message.set("".to_string());
            session.dispatch(SessionAction::Reset);
        })
    };

    let on_message_input = {
        let input_message = input_message.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                input_message.set(input.value());
            }
        })
    };
    let on_keypress = {
        let send_message = send_message.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                send_message.emit(());
            }
        })
    };
    let suggest = |text: &'static str| {
        let input_message = input_message.clone();
        Callback::from(move |_: MouseEvent| input_message.set(text.to_string()))
    };

    let header = if props.embedded {
        let close = props.on_close.clone().map(|on_close| {
            html! {
                <button onclick={Callback::from(move |_| on_close.emit(()))} aria-label="Close AI Coach" class="text-2xl text-slate-500 px-2">
                    {"×"}
                </button>
            }
        });
        html! {
            <div class="flex items-center justify-between gap-3 mb-3">
                <div>
                    <h2 class="text-xl font-extrabold text-[#003E5C] m-0">{"AI Coach"}</h2>
                    <p class="text-sm text-[#33566f] mt-1">{"Personalized guidance without leaving CapCoach"}</p>
                </div>
                { close.unwrap_or_else(|| html! {}) }
            </div>
        }
    } else {
        html! {
            <>
                <h1 class="text-3xl font-extrabold">{"AI Financial Coach"}</h1>
                <p class="text-lg text-slate-500 mb-6">{"Get personalized financial advice based on your emotions and behaviors"}</p>
            </>
        }
    };

    let selector = preference_selector(&session, on_toggle_category);
    let busy = session.busy;

    let body = if !session.is_active() {
        html! {
            <div class="bg-slate-50 rounded-xl shadow-sm p-8 text-center">
                <h3 class="text-xl font-semibold text-[#003E5C] mb-5">{"Let's Get Started"}</h3>
                <p class="text-slate-500 mb-6">{"Tell me a bit about yourself so I can provide personalized guidance:"}</p>
                <div class="flex flex-col gap-4 max-w-sm mx-auto">
                    <input type="text" placeholder="Your Name" value={session.profile.name.clone()} oninput={on_name} class="p-3 border rounded-lg" />
                    <input type="text" placeholder="Age" value={session.profile.age.clone()} oninput={on_age} class="p-3 border rounded-lg" />
                    <input type="text" placeholder="Profession" value={session.profile.profession.clone()} oninput={on_profession} class="p-3 border rounded-lg" />
                    { selector }
                    <button onclick={start_session} disabled={busy || session.profile.name.trim().is_empty()} class="bg-[#003E5C] text-white py-3 rounded-lg font-semibold disabled:opacity-50">
                        { if busy { "Starting..." } else { "Start Coaching Session" } }
                    </button>
                </div>
            </div>
        }
    } else {
        let send_click = {
            let send_message = send_message.clone();
            Callback::from(move |_| send_message.emit(()))
        };
        html! {
            <div class={if props.embedded { "flex flex-col h-full bg-white rounded-xl shadow" } else { "flex flex-col h-[70vh] bg-white rounded-xl shadow" }}>
                <div class="px-5 py-4 border-b border-slate-200 flex justify-between items-center bg-[#f6fbff]">
                    <div>
                        <h3 class="text-[#003E5C] font-semibold m-0">{ format!("Session with {}", session.profile.name) }</h3>
                        <span class="text-xs text-slate-500">{ format!("ID: {}", session.session_id.clone().unwrap_or_default()) }</span>
                    </div>
                    <div class="flex gap-2 items-center">
                        <button onclick={generate_video} class="bg-green-600 text-white px-3 py-2 rounded-lg text-sm">{"Video"}</button>
                        <button onclick={reset_session} class="bg-slate-500 text-white px-3 py-2 rounded-lg text-sm">{"New Session"}</button>
                    </div>
                </div>

                <div class="flex-1 overflow-y-auto px-5 py-4 bg-slate-50 flex flex-col gap-3">
                    { selector }
                    { for session.messages.iter().map(message_bubble) }
                    {
                        if busy {
                            html! { <div class="self-start bg-white rounded-xl px-4 py-3 text-slate-500 text-sm">{"Thinking..."}</div> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class="px-4 py-3 border-t border-slate-200 bg-white">
                    <div class="grid grid-cols-[1fr_auto] gap-2 items-center mb-3">
                        <input type="text" value={(*input_message).clone()} oninput={on_message_input} onkeypress={on_keypress} placeholder="Type your message here..." disabled={busy} class="p-3 border rounded-lg" />
                        <button onclick={send_click} disabled={busy || input_message.trim().is_empty()} class="bg-[#003E5C] text-white px-5 py-3 rounded-lg font-semibold whitespace-nowrap disabled:opacity-50">
                            {"Send"}
                        </button>
                    </div>
                    <div class="flex items-center gap-2 flex-wrap text-sm text-slate-500">
                        <span>{"Try asking:"}</span>
                        <button onclick={suggest("I feel anxious about money")} class="underline">{"\"I feel anxious about money\""}</button>
                        <button onclick={suggest("How can I save more?")} class="underline">{"\"How can I save more?\""}</button>
                    </div>
                </div>
            </div>
        }
    };

    html! {
        <div class={if props.embedded { "p-3 h-full flex flex-col overflow-y-auto bg-[#f4f6f9]" } else { "bg-[#f4f6f9]" }}>
            { header }
            { body }
        </div>
    }
}

fn preference_selector(session: &CoachSession, on_toggle: Callback<SpendCategory>) -> Html {
    html! {
        <div class="mt-3 text-left">
            <p class="text-slate-500 mb-2 text-sm">{"Tell the coach what spending to protect:"}</p>
            <div class="flex flex-wrap gap-2">
                { for SpendCategory::ALL.iter().map(|category| {
                    let category = *category;
                    let active = session.protected.contains(&category);
                    let on_toggle = on_toggle.clone();
                    let class_name = if active {
                        "px-3 py-1 rounded-full text-xs border border-[#003E5C] bg-[#003E5C] text-white"
                    } else {
                        "px-3 py-1 rounded-full text-xs border border-slate-300 bg-white text-slate-600"
                    };
                    html! {
                        <button type="button" class={class_name} onclick={Callback::from(move |_| on_toggle.emit(category))}>
                            { format!("{}{}", if active { "Protect " } else { "Okay to cut " }, category) }
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

fn message_bubble(message: &ChatMessage) -> Html {
    let class_name = match message.speaker {
        Speaker::User => "self-end max-w-[80%] bg-[#003E5C] text-white rounded-xl px-4 py-3",
        Speaker::Coach => "self-start max-w-[80%] bg-white text-slate-800 rounded-xl px-4 py-3 shadow-sm",
    };

    let extra = match &message.body {
        MessageBody::Text => html! {},
        MessageBody::Reply { progress } => progress_bar(*progress),
        MessageBody::Insights(insights) => insights_card(insights),
        MessageBody::Video(guide) => video_card(guide),
    };

    html! {
        <div class={class_name}>
            <div class="mb-2 leading-normal">{ message.content.clone() }</div>
            { extra }
            <div class="text-[10px] opacity-60 text-right">{ message.timestamp.clone() }</div>
        </div>
    }
}

fn progress_bar(progress: f64) -> Html {
    if progress <= 0.0 {
        return html! {};
    }
    let percent = (progress * 100.0).round().clamp(0.0, 100.0);
    html! {
        <div class="mt-3 text-sm text-slate-500">
            <div class="w-full h-1.5 bg-slate-200 rounded mb-1">
                <div class="h-1.5 bg-green-500 rounded" style={format!("width: {}%", percent)}></div>
            </div>
            <span>{ format!("Progress: {}%", percent) }</span>
        </div>
    }
}

fn insights_card(insights: &CoachInsights) -> Html {
    let behavior = insights.financial_behavior.as_ref();
    html! {
        <div class="mt-3 bg-blue-50 border border-blue-200 rounded-lg p-4">
            <h5 class="text-[#003E5C] font-semibold mb-3">{"Financial Behavior Insights:"}</h5>
            {
                match &insights.emotional_patterns {
                    Some(emotions) => html! {
                        <div class="mb-2">
                            <strong>{"Dominant emotion: "}</strong>{ emotions.dominant_emotion.clone() }
                            {
                                if emotions.confidence > 0.0 {
                                    html! { <span class="text-xs text-slate-500">{ format!(" ({:.0}% confidence)", emotions.confidence * 100.0) }</span> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    },
                    None => html! {},
                }
            }
            <div class="mb-2"><strong>{"Pattern: "}</strong>{ behavior.map(|b| b.pattern.clone()).unwrap_or_default() }</div>
            <div class="mb-3"><strong>{"Advice: "}</strong>{ insights.personalized_advice.clone().unwrap_or_default() }</div>
            <div>
                <strong>{"Suggested Strategies:"}</strong>
                <ul class="mt-2 pl-5 list-disc">
                    { for behavior.into_iter().flat_map(|b| b.suggested_strategies.iter()).map(|s| html! { <li class="mb-1">{ s.clone() }</li> }) }
                </ul>
            </div>
        </div>
    }
}

fn video_card(guide: &VideoGuide) -> Html {
    let on_view = {
        let guide = guide.clone();
        Callback::from(move |_| {
            if guide.is_script() {
                alert(&format!(
                    "Open the file: {}\n\nContains your personalized financial guidance!",
                    guide.path
                ));
            } else {
                alert(&format!("Video ready: {}", guide.path));
            }
        })
    };
    html! {
        <div class="mt-3 bg-green-50 border border-green-500 rounded-lg p-4">
            <h5 class="text-green-800 font-semibold mb-3">{"Personalized Video Guide"}</h5>
            <div class="mb-2"><strong>{"Pattern: "}</strong>{ guide.pattern.clone() }</div>
            <div class="mb-3 break-all"><strong>{"File: "}</strong>{ guide.path.clone() }</div>
            <button onclick={on_view} class="bg-green-600 text-white px-4 py-2 rounded-lg text-sm">{"View Video Guide"}</button>
        </div>
    }
}
