use contracts::domain::a101_material_catalog::{catalog_table_rows, MaterialCatalogItem, CATALOG_COLUMNS};
use leptos::prelude::*;
use thaw::*;

/// Searchable, serial-number ordered view of the catalog.
#[component]
pub fn IndentTable(#[prop(into)] data: Signal<Vec<MaterialCatalogItem>>) -> impl IntoView {
    let search = RwSignal::new(String::new());

    let rows = Memo::new(move |_| data.with(|items| catalog_table_rows(items, &search.get())));

    view! {
        <div class="indent-table">
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                <div style="flex: 1; max-width: 360px;">
                    <Input value=search placeholder="Search materials..." />
                </div>
                <span class="indent-table__count">
                    {move || format!("{} of {} rows", rows.with(|r| r.len()), data.with(|d| d.len()))}
                </span>
            </Flex>

            <div class="table-wrapper">
                <Table attr:style="width: 100%; min-width: 800px;">
                    <TableHeader>
                        <TableRow>
                            {CATALOG_COLUMNS
                                .iter()
                                .map(|(_, label)| view! { <TableHeaderCell>{*label}</TableHeaderCell> })
                                .collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || rows.get().into_iter().enumerate()
                            key=|(index, item)| format!("{}-{}", index, item.id)
                            children=move |(_, item)| {
                                view! {
                                    <TableRow>
                                        {CATALOG_COLUMNS
                                            .iter()
                                            .map(|(column, _)| {
                                                let value = item.column_value(column);
                                                view! {
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{value}</TableCellLayout>
                                                    </TableCell>
                                                }
                                            })
                                            .collect_view()}
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>

            <Show when=move || rows.with(|r| r.is_empty())>
                <div class="page__placeholder">"No matching materials"</div>
            </Show>
        </div>
    }
}
