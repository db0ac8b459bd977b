use super::icons::{
    icon_close, icon_credit_card, icon_layout_grid, icon_menu, icon_target, icon_wallet,
};
use crate::format::format_usd;
use crate::routes::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub active_page: Page,
    pub on_select: Callback<Page>,
    pub nav_open: bool,
    pub on_toggle_nav: Callback<()>,
    pub total_balance: f64,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let open_nav = {
        let on_toggle_nav = props.on_toggle_nav.clone();
        Callback::from(move |_| on_toggle_nav.emit(()))
    };

    html! {
        <div class="flex h-screen bg-[#f4f6f9]">
            {
                if props.nav_open {
                    html! {
                        <Sidebar
                            active_page={props.active_page}
                            on_select={props.on_select.clone()}
                            on_close={props.on_toggle_nav.clone()}
                            total_balance={props.total_balance}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <div class="flex-1 flex flex-col overflow-hidden">
                <main class="flex-1 overflow-y-auto px-8 py-6">
                    {
                        if props.nav_open {
                            html! {}
                        } else {
                            html! {
                                <button onclick={open_nav} aria-label="Open navigation" class="mb-4 p-2 rounded-lg hover:bg-white text-[#003E5C]">
                                    { icon_menu() }
                                </button>
                            }
                        }
                    }
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

fn nav_icon(page: Page) -> Html {
    match page {
        Page::Dashboard => icon_layout_grid(),
        Page::Checking => icon_credit_card(),
        Page::Savings => icon_wallet(),
        Page::CapCoach => icon_target(),
    }
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    active_page: Page,
    on_select: Callback<Page>,
    on_close: Callback<()>,
    total_balance: f64,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <aside class="w-[240px] h-screen bg-[#003E5C] p-4 flex flex-col text-white shadow-lg">
            <div class="flex items-center justify-between px-2 mb-8">
                <span class="text-xl font-black tracking-tight">{"CapCoach Banking"}</span>
                <button onclick={on_close} aria-label="Close navigation" class="p-1 rounded hover:bg-white/10">
                    { icon_close() }
                </button>
            </div>

            <nav class="flex-1 space-y-2">
                { for Page::ALL.into_iter().map(|page| {
                    let is_active = page == props.active_page;
                    let class_name = if is_active {
                        "flex items-center gap-3 px-4 py-3 rounded-xl text-[13px] font-medium bg-white text-[#003E5C] w-full"
                    } else {
                        "flex items-center gap-3 px-4 py-3 rounded-xl text-[13px] font-medium text-slate-200 hover:bg-white/10 w-full"
                    };
                    let on_select = props.on_select.clone();

                    html! {
                        <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                            <span class="shrink-0">{ nav_icon(page) }</span>
                            <span class="truncate whitespace-nowrap text-left">{ page.label() }</span>
                        </button>
                    }
                }) }
            </nav>

            <hr class="border-white/20 my-4" />
            <h2 class="px-2 text-lg font-bold">{ format!("Total Balance: {}", format_usd(props.total_balance)) }</h2>
        </aside>
    }
}
