use shared::{EntryTable as TableModel, SortField};
use yew::prelude::*;

const SORTABLE: [SortField; 4] = [
    SortField::TokenNumber,
    SortField::Count,
    SortField::Date,
    SortField::DrawTime,
];

const HEADER_CLASSES: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";
const CELL_CLASSES: &str = "px-6 py-4 whitespace-nowrap text-sm text-gray-700";
const PAGER_BUTTON: &str = "relative inline-flex items-center px-4 py-2 border border-gray-300 text-sm font-medium rounded-md text-gray-700 bg-white hover:bg-gray-50 disabled:opacity-50";

#[derive(Properties, Clone, PartialEq)]
pub struct EntryTableProps {
    pub table: TableModel,
    pub on_sort: Callback<SortField>,
    pub on_page: Callback<usize>,
    /// Renders a delete action per row when set.
    #[prop_or_default]
    pub on_delete: Option<Callback<String>>,
}

#[function_component(EntryTable)]
pub fn entry_table(props: &EntryTableProps) -> Html {
    let table = &props.table;
    let sort = table.sort();
    let page = table.page();
    let (first, last, total) = table.range();

    let header = |field: SortField| {
        let arrow = match sort {
            Some(state) if state.field == field => state.direction.arrow(),
            _ => "",
        };
        html! {
            <th class={HEADER_CLASSES}>
                <button
                    type="button"
                    class="flex items-center space-x-1 hover:text-gray-700"
                    onclick={props.on_sort.reform(move |_| field)}
                >
                    <span>{field.label()}</span>
                    <span>{arrow}</span>
                </button>
            </th>
        }
    };

    html! {
        <div class="bg-white shadow overflow-hidden sm:rounded-lg">
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-200">
                    <thead class="bg-gray-50">
                        <tr>
                            <th class={HEADER_CLASSES}>{"Sl No"}</th>
                            { for SORTABLE.iter().map(|field| header(*field)) }
                            if props.on_delete.is_some() {
                                <th class={HEADER_CLASSES}></th>
                            }
                        </tr>
                    </thead>
                    <tbody class="bg-white divide-y divide-gray-200">
                        { for table.rows().into_iter().map(|row| {
                            let delete = match (&props.on_delete, &row.token_id) {
                                (Some(on_delete), Some(token_id)) => {
                                    let token_id = token_id.clone();
                                    html! {
                                        <td class={CELL_CLASSES}>
                                            <button
                                                type="button"
                                                class="text-red-600 hover:text-red-800"
                                                onclick={on_delete.reform(move |_| token_id.clone())}
                                            >
                                                {"Delete"}
                                            </button>
                                        </td>
                                    }
                                }
                                (Some(_), None) => html! { <td class={CELL_CLASSES}></td> },
                                (None, _) => html! {},
                            };
                            html! {
                                <tr key={row.key.clone()} class="hover:bg-gray-50">
                                    <td class={CELL_CLASSES}>{row.serial}</td>
                                    <td class={CELL_CLASSES}>{&row.token_number}</td>
                                    <td class={CELL_CLASSES}>{row.count}</td>
                                    <td class={CELL_CLASSES}>{&row.date}</td>
                                    <td class={CELL_CLASSES}>{&row.draw_time}</td>
                                    {delete}
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>

            // Pagination
            if table.page_count() > 1 {
                <div class="bg-white px-4 py-3 flex items-center justify-between border-t border-gray-200 sm:px-6">
                    <p class="text-sm text-gray-700">
                        {"Showing "}
                        <span class="font-medium">{first}</span>
                        {" to "}
                        <span class="font-medium">{last}</span>
                        {" of "}
                        <span class="font-medium">{total}</span>
                        {" results"}
                    </p>
                    <div class="flex space-x-3">
                        <button
                            type="button"
                            onclick={props.on_page.reform(move |_| page.saturating_sub(1))}
                            disabled={!table.has_previous()}
                            class={PAGER_BUTTON}
                        >
                            {"Previous"}
                        </button>
                        <span class="self-center text-sm text-gray-500">
                            {format!("Page {} of {}", page, table.page_count())}
                        </span>
                        <button
                            type="button"
                            onclick={props.on_page.reform(move |_| page + 1)}
                            disabled={!table.has_next()}
                            class={PAGER_BUTTON}
                        >
                            {"Next"}
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}
