use std::collections::HashMap;
use yew::prelude::*;
use shared::models::{Direction, ItemRef, TallySnapshot};
use shared::document::{DocumentStats, Outline, OutlineFeature, OutlineStory, ResultsDocument, Story};
use crate::styles::*;

/// Everything a vote row needs: current counts and the shared click handler.
pub struct VoteContext<'a> {
    pub tallies: &'a HashMap<ItemRef, TallySnapshot>,
    pub on_vote: &'a Callback<(ItemRef, Direction)>,
}

fn render_vote_row(item: &ItemRef, votes: &VoteContext) -> Html {
    let tally = votes.tallies.get(item).copied().unwrap_or_default();
    let button = |direction: Direction, icon: &'static str, count: u64| {
        let on_vote = votes.on_vote.clone();
        let item = item.clone();
        let title = format!("Vote {} for {}", direction, item);
        html! {
            <button
                type="button"
                class={VOTE_BUTTON}
                title={title}
                onclick={Callback::from(move |_| on_vote.emit((item.clone(), direction)))}
            >
                <span>{icon}</span>
                {if count > 0 { html! { <span class="ml-0.5 text-xs text-gray-500">{count}</span> } } else { html! {} }}
            </button>
        }
    };

    html! {
        <div class="flex justify-end gap-1.5 px-4 pt-1">
            {button(Direction::Up, "👍", tally.up_count)}
            {button(Direction::Down, "👎", tally.down_count)}
        </div>
    }
}

fn render_list(items: &[String]) -> Html {
    html! {
        <ul class="list-disc pl-5 text-xs space-y-0.5">
            {for items.iter().map(|item| html! { <li>{item}</li> })}
        </ul>
    }
}

pub fn render_story_body(story: &Story) -> Html {
    html! {
        <div>
            <p class="text-sm text-gray-700 mt-1 mb-2">{&story.description}</p>
            <div class={SECTION_LABEL}>{"Acceptance criteria"}</div>
            {render_list(&story.acceptance_criteria)}
            <div class={SECTION_LABEL}>{"Definition of Ready"}</div>
            {render_list(&story.definition_of_ready)}
            {if story.raw_text_reference.is_empty() {
                html! {}
            } else {
                html! { <div class="text-[11px] text-gray-500 mt-1.5">{format!("Source: {}", story.raw_text_reference)}</div> }
            }}
        </div>
    }
}

fn render_story(entry: &OutlineStory, votes: &VoteContext) -> Html {
    html! {
        <div class={STORY_CARD}>
            <div class="flex items-center justify-between mb-1">
                <div class="flex items-center gap-2">
                    <span class={STORY_ID}>{entry.item.id()}</span>
                    <span class="text-sm font-medium">{&entry.story.title}</span>
                </div>
                {render_vote_row(&entry.item, votes)}
            </div>
            {render_story_body(entry.story)}
        </div>
    }
}

fn render_feature(entry: &OutlineFeature, votes: &VoteContext) -> Html {
    let feature = entry.feature;
    let label = format!("{} · {} · {} Stories", entry.item.id(), feature.title, feature.stories.len());

    html! {
        <details class={FEATURE_PANEL}>
            <summary class={FEATURE_SUMMARY}>{label}</summary>
            {render_vote_row(&entry.item, votes)}
            <div class="px-4 pt-2 pb-1 text-sm">
                <div class="font-medium mb-0.5">{&feature.title}</div>
                <div class="text-gray-600">{&feature.description}</div>
                {if feature.webpage.is_empty() {
                    html! {}
                } else {
                    html! { <div class="text-gray-600"><strong>{"Web page: "}</strong>{&feature.webpage}</div> }
                }}
            </div>
            <div class="px-3 pb-2">
                {for entry.stories.iter().map(|story| render_story(story, votes))}
            </div>
        </details>
    }
}

pub fn render_hierarchy(doc: &ResultsDocument, outline: &Outline, votes: &VoteContext) -> Html {
    let label = format!("{} · {} · {} Features", outline.epic.id(), doc.epic.title, doc.features.len());

    html! {
        <details class={EPIC_PANEL} open={true}>
            <summary class={EPIC_SUMMARY}>{label}</summary>
            {render_vote_row(&outline.epic, votes)}
            <p class="px-4 py-2 text-sm text-gray-700">{&doc.epic.summary}</p>
            {for outline.features.iter().map(|feature| render_feature(feature, votes))}
        </details>
    }
}

pub fn render_page_header(title: &str) -> Html {
    html! {
        <div class="flex items-center justify-between gap-4 mb-3">
            <div class="flex items-center gap-3">
                <h1 class="text-2xl font-semibold m-0">{title}</h1>
                <span class={STATUS_PILL}>{"Generated"}</span>
            </div>
            <div class="flex gap-2">
                <button class={button_outline()}>{"✏️ Edit"}</button>
                <button class={button_primary()}>{"📤 Publish"}</button>
            </div>
        </div>
    }
}

pub fn render_upload_card() -> Html {
    html! {
        <div class={combine_classes(CARD_FLAT, "flex items-center justify-between")}>
            <div class="flex items-center gap-3">
                <div class="w-9 h-9 rounded-xl bg-indigo-100 flex items-center justify-center text-xl">{"📄"}</div>
                <div>
                    <div class="text-sm font-medium">{"ecommerce-requirements.pdf"}</div>
                    <div class="text-xs text-gray-500">{"Uploaded 2 minutes ago · 2.4 MB"}</div>
                </div>
            </div>
            <button class={button_outline()}>{"View File"}</button>
        </div>
    }
}

pub fn render_ai_summary() -> Html {
    html! {
        <div class={combine_classes(CARD_FLAT, "flex items-start gap-3")}>
            <div class={AVATAR}>{"AI"}</div>
            <div class="text-sm text-gray-700">
                {"I've analyzed your requirements document and generated a comprehensive breakdown of epics, \
                  features, and user stories for this project. Review the items below and provide feedback."}
            </div>
        </div>
    }
}

pub fn render_stats(stats: &DocumentStats) -> Html {
    let card = |label: &str, value: usize| html! {
        <div class={STAT_CARD}>
            <div class="text-xs text-gray-500 mb-1.5">{label}</div>
            <div class="text-2xl font-semibold">{value}</div>
        </div>
    };

    html! {
        <div class="flex gap-4 mb-4">
            {card("Epics", stats.epics)}
            {card("Features", stats.features)}
            {card("User Stories", stats.stories)}
        </div>
    }
}
