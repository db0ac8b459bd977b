use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub caption: Option<AttrValue>,
    #[prop_or(AttrValue::from("text-[#003E5C]"))]
    pub value_class: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let value_class = format!("text-3xl font-bold tracking-tight {}", props.value_class);
    html! {
        <div class="bg-white p-5 rounded-[10px] shadow-sm border border-slate-200 min-w-[220px]">
            <p class="text-sm font-semibold text-slate-600 mb-1">{ props.title.clone() }</p>
            <p class={value_class}>{ props.value.clone() }</p>
            {
                match &props.caption {
                    Some(caption) => html! { <p class="text-xs text-slate-500 mt-1">{ caption.clone() }</p> },
                    None => html! {},
                }
            }
        </div>
    }
}
