use yew::prelude::*;

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
pub fn icon_credit_card() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18")
}
pub fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
pub fn icon_target() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0")
}
pub fn icon_menu() -> Html {
    icon_base("M3 6h18M3 12h18M3 18h18")
}
pub fn icon_close() -> Html {
    icon_base("M18 6L6 18M6 6l12 12")
}
pub fn icon_chat() -> Html {
    icon_base("M21 15a2 2 0 01-2 2H7l-4 4V5a2 2 0 012-2h14a2 2 0 012 2z")
}
