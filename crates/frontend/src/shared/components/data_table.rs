use super::ui::StatusBadge;
use contracts::shared::view_tree::{ColumnView, TableView, TitledTable};
use leptos::prelude::*;
use thaw::*;

fn header_cell(column: ColumnView, on_sort: Option<Callback<String>>) -> impl IntoView {
    match (column.sort_key, on_sort) {
        (Some(key), Some(on_sort)) => view! {
            <TableHeaderCell>
                <div
                    class="table__sortable-header"
                    style="cursor: pointer; user-select: none;"
                    on:click=move |_| on_sort.run(key.clone())
                >
                    {column.label}
                    {column.sort_indicator}
                </div>
            </TableHeaderCell>
        }
        .into_any(),
        _ => view! { <TableHeaderCell>{column.label}</TableHeaderCell> }.into_any(),
    }
}

/// Rendered table; columns flagged as badges draw their cells as status badges.
/// Header clicks on sortable columns report the column code.
#[component]
pub fn DataTable(
    #[prop(into)]
    table: Signal<TableView>,
    #[prop(optional)]
    on_sort: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <Table>
                <TableHeader>
                    <TableRow>
                        {move || {
                            table
                                .with(|t| t.columns.clone())
                                .into_iter()
                                .map(|c| header_cell(c, on_sort))
                                .collect_view()
                        }}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        table.with(|t| {
                            let badges: Vec<bool> = t.columns.iter().map(|c| c.badge).collect();
                            t.rows
                                .iter()
                                .map(|row| {
                                    let cells = row
                                        .iter()
                                        .enumerate()
                                        .map(|(i, cell)| {
                                            let text = cell.clone();
                                            let content = if badges.get(i).copied().unwrap_or(false) {
                                                view! { <StatusBadge text=text /> }.into_any()
                                            } else {
                                                text.into_any()
                                            };
                                            view! {
                                                <TableCell>
                                                    <TableCellLayout>{content}</TableCellLayout>
                                                </TableCell>
                                            }
                                        })
                                        .collect_view();
                                    view! { <TableRow>{cells}</TableRow> }
                                })
                                .collect_view()
                        })
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

/// Table under a section heading
#[component]
pub fn TitledDataTable(#[prop(into)] table: Signal<TitledTable>) -> impl IntoView {
    view! {
        <section class="section">
            <h3 class="section__title">{move || table.with(|t| t.title.clone())}</h3>
            <DataTable table=Signal::derive(move || table.with(|t| t.table.clone())) />
        </section>
    }
}
