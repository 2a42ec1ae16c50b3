use leptos::prelude::*;
use leptos_router::components::A;
use models::*;
use shared_constants::DEFAULT_SORT;
use thaw::{
    Badge, BadgeAppearance, BadgeColor, BadgeSize, Flex, FlexAlign, FlexGap, FlexJustify, Input,
    Layout, Select, Table, TableBody, TableCell, TableHeader, TableHeaderCell, TableRow, Text,
};

use super::anecdotes::{AnecdotesInjection, VoteButton};

#[component]
fn AnecdoteRow(anecdote: Anecdote) -> impl IntoView {
    let href = anecdote.href();
    view! {
        <TableRow>
            <TableCell>
                <A href=href>{anecdote.content}</A>
            </TableCell>
            <TableCell>{anecdote.author}</TableCell>
            <TableCell>{anecdote.votes}</TableCell>
            <TableCell>
                <VoteButton id=anecdote.id />
            </TableCell>
        </TableRow>
    }
}

/// Lists all anecdotes matching the quick filter, in the selected order.
///
/// Each row links to the details of the anecdote and carries its own vote
/// button. The badge shows how many anecdotes survive the filter out of
/// how many exist.
#[component]
pub fn AnecdoteList() -> impl IntoView {
    let store = AnecdotesInjection::expect_context();
    let query = RwSignal::new(String::new());
    let sort_value = RwSignal::new(DEFAULT_SORT.to_string());
    let sort_kind = Memo::new(move |_| {
        sort_value
            .with(|value| value.parse::<SortKind>())
            .unwrap_or_else(|e| {
                log::warn!("{e}, falling back to default order");
                SortKind::default()
            })
    });
    let shown = Memo::new(move |_| {
        let query = query.get();
        let sort_kind = sort_kind.get();
        store.with(|anecdotes| anecdotes.query(&query, sort_kind))
    });
    let total = Memo::new(move |_| store.anecdotes().with(|anecdotes| anecdotes.len()));

    view! {
        <Layout class="anecdote-list">
            <h2>"Anecdotes"</h2>
            <Flex gap=FlexGap::Small align=FlexAlign::Center justify=FlexJustify::Start>
                <Input value=query placeholder="Quick filter" />
                <Text>"Sort by"</Text>
                <Select default_value=DEFAULT_SORT value=sort_value>
                    {SortKind::ALL
                        .into_iter()
                        .map(|kind| view! { <option label=kind.label() value=kind.to_string() /> })
                        .collect_view()}
                </Select>
                <Badge
                    appearance=BadgeAppearance::Tint
                    size=BadgeSize::Large
                    color=BadgeColor::Subtle
                >
                    {move || format!("{} / {}", shown.with(Vec::len), total.get())}
                </Badge>
            </Flex>
            <Show
                when=move || !shown.with(Vec::is_empty)
                fallback=|| view! { <Text>"No anecdotes match the filter."</Text> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Anecdote"</TableHeaderCell>
                            <TableHeaderCell>"Author"</TableHeaderCell>
                            <TableHeaderCell>"Votes"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || shown.get()
                            key=|anecdote| (anecdote.id, anecdote.votes)
                            children=move |anecdote| view! { <AnecdoteRow anecdote /> }
                        />
                    </TableBody>
                </Table>
            </Show>
        </Layout>
    }
}
