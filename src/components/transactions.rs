use crate::format::format_amount;
use crate::ledger::TransactionRow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub rows: Vec<TransactionRow>,
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    if props.rows.is_empty() {
        return html! {
            <p class="text-sm text-slate-500">{"No transactions in this period."}</p>
        };
    }

    html! {
        <div class="space-y-3">
            { for props.rows.iter().map(|row| html! { <TransactionItem row={row.clone()} /> }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TransactionItemProps {
    pub row: TransactionRow,
}

/// Debits render red with a minus, credits green with a plus.
#[function_component(TransactionItem)]
pub fn transaction_item(props: &TransactionItemProps) -> Html {
    let row = &props.row;
    let amount_class = format!("m-0 text-lg font-bold {}", row.kind.amount_class());

    html! {
        <div class="bg-white rounded-lg shadow-sm px-4 py-4 flex justify-between items-center">
            <div>
                <p class="m-0 font-semibold">{ row.merchant.clone() }</p>
                <p class="m-0 text-xs text-slate-500">{ format!("{} • {}", row.category, row.date) }</p>
            </div>
            <p class={amount_class}>
                { format!("{}${}", row.kind.sign(), format_amount(row.amount)) }
            </p>
        </div>
    }
}
