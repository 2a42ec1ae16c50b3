use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use models::*;
use thaw::{
    Card, CardHeader, CardPreview, Flex, FlexJustify, MessageBar, MessageBarBody,
    MessageBarIntent, MessageBarTitle, Table, TableBody, TableCell, TableRow, Text, TextTag,
};

use super::anecdotes::{AnecdotesInjection, VoteButton};

#[component]
fn DetailsRow(#[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <TableRow>
            <TableCell>
                <Text tag=TextTag::Em>{label}</Text>
            </TableCell>
            <TableCell>{children()}</TableCell>
        </TableRow>
    }
}

#[component]
fn AnecdoteCard(anecdote: Anecdote) -> impl IntoView {
    let info = if anecdote.info.is_empty() {
        view! { <Text>"-"</Text> }.into_any()
    } else {
        let href = anecdote.info.clone();
        view! {
            <a href=href target="_blank" rel="noopener noreferrer">
                {anecdote.info}
            </a>
        }
        .into_any()
    };
    view! {
        <Card class="anecdote-card">
            <CardHeader>
                <h2>{anecdote.content}</h2>
            </CardHeader>
            <CardPreview>
                <Table>
                    <TableBody>
                        <DetailsRow label="Author">{anecdote.author}</DetailsRow>
                        <DetailsRow label="Url">{info}</DetailsRow>
                        <DetailsRow label="Votes">{anecdote.votes}</DetailsRow>
                    </TableBody>
                </Table>
                <Flex justify=FlexJustify::End>
                    <VoteButton id=anecdote.id />
                </Flex>
            </CardPreview>
        </Card>
    }
}

/// Shows the anecdote addressed by the `:id` route parameter
#[component]
pub fn AnecdoteDetails() -> impl IntoView {
    let store = AnecdotesInjection::expect_context();
    let params = use_params_map();
    let anecdote = Memo::new(move |_| {
        let raw = params.with(|params| params.get("id")).unwrap_or_default();
        parse_anecdote_id(&raw).and_then(|id| {
            store
                .with(|anecdotes| anecdotes.find(id).cloned())
                .ok_or(AnecdoteError::NotFound(id))
        })
    });

    move || match anecdote.get() {
        Ok(anecdote) => view! { <AnecdoteCard anecdote /> }.into_any(),
        Err(err) => {
            log::debug!("No anecdote to show: {err}");
            view! {
                <MessageBar intent=MessageBarIntent::Warning>
                    <MessageBarBody>
                        <MessageBarTitle>"Anecdote not found"</MessageBarTitle>
                        {err.to_string()}
                    </MessageBarBody>
                </MessageBar>
            }
            .into_any()
        }
    }
}
