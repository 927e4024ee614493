use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use futures::join;
use uuid::Uuid;
use shared::{document::ResultsDocument, error::ErrorResponse, models::*};
use crate::{Route, styles::*, config::CONFIG};
use crate::render_results::*;

const PROJECT_TITLE: &str = "E-commerce Platform";

pub enum Msg {
    Loaded(Result<(ResultsDocument, Uuid), String>),
    Vote(ItemRef, Direction),
    Recorded(Result<VoteReceipt, String>),
    ClearToast,
}

#[derive(Default)]
enum State {
    #[default]
    Loading,
    Ready { doc: Rc<ResultsDocument>, session_id: Uuid },
    Error(String),
}

pub struct Results {
    state: State,
    tallies: HashMap<ItemRef, TallySnapshot>,
    toast: String,
    toast_timer: Option<Timeout>,
    on_vote: Callback<(ItemRef, Direction)>,
}

impl Component for Results {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_future(async { Msg::Loaded(fetch_results().await) });

        Self {
            state: State::default(),
            tallies: HashMap::new(),
            toast: String::new(),
            toast_timer: None,
            on_vote: ctx.link().callback(|(item, direction): (ItemRef, Direction)| Msg::Vote(item, direction)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok((doc, session_id))) => {
                self.state = State::Ready { doc: Rc::new(doc), session_id };
            }
            Msg::Loaded(Err(err)) => {
                self.state = State::Error(err);
            }
            Msg::Vote(item, direction) => {
                let State::Ready { session_id, .. } = &self.state else { return false };
                let event = VoteEvent::new(&item, direction);
                let url = format!("{}/session/{}/feedback", CONFIG.api_base_url, session_id);
                ctx.link().send_future(async move { Msg::Recorded(post_vote(&url, &event).await) });
                return false;
            }
            Msg::Recorded(Ok(receipt)) => {
                self.toast = receipt.message;
                let shown = self.tallies.entry(receipt.item).or_default();
                *shown = shown.merge(receipt.tally);
                self.restart_toast_timer(ctx);
            }
            Msg::Recorded(Err(err)) => {
                self.toast = err;
                self.restart_toast_timer(ctx);
            }
            Msg::ClearToast => {
                self.toast.clear();
                self.toast_timer = None;
            }
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.state {
            State::Loading => html! {
                <div class={CONTAINER}>
                    <div class="flex items-center justify-center p-8">
                        <div class="animate-spin rounded-full h-12 w-12 border-4 border-blue-500 border-t-transparent"/>
                    </div>
                </div>
            },
            State::Ready { doc, .. } => self.render_ready(doc),
            State::Error(err) => html! {
                <div class={CONTAINER}>
                    <div class={alert_style("error")}>
                        <p>{err}</p>
                        <Link<Route> to={Route::Home} classes={classes!(button_primary(), "mt-4", "inline-block")}>
                            {"Return Home"}
                        </Link<Route>>
                    </div>
                </div>
            },
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let State::Ready { session_id, .. } = &self.state {
            wasm_bindgen_futures::spawn_local(end_session(*session_id));
        }
    }
}

impl Results {
    fn restart_toast_timer(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.toast_timer = Some(Timeout::new(CONFIG.toast_millis, move || link.send_message(Msg::ClearToast)));
    }

    fn render_ready(&self, doc: &ResultsDocument) -> Html {
        let outline = doc.outline();
        let votes = VoteContext { tallies: &self.tallies, on_vote: &self.on_vote };

        html! {
            <div class={CONTAINER}>
                {render_page_header(PROJECT_TITLE)}
                <div class="text-[11px] text-gray-600 opacity-80 mb-2 min-h-[1rem]" aria-live="polite">
                    {&self.toast}
                </div>
                {render_upload_card()}
                {render_ai_summary()}
                {render_stats(&doc.stats())}
                {render_hierarchy(doc, &outline, &votes)}
            </div>
        }
    }
}

async fn fetch_results() -> Result<(ResultsDocument, Uuid), String> {
    let (doc, session) = join!(fetch_document(), start_session());
    let (outcome, orphan) = pair_startup(doc, session);
    if let Some(session_id) = orphan {
        end_session(session_id).await;
    }
    outcome
}

/// Pairs the document with the new session. When the document failed,
/// the session is returned separately so it can be ended right away.
pub(crate) fn pair_startup(
    doc: Result<ResultsDocument, String>,
    session: Result<Uuid, String>,
) -> (Result<(ResultsDocument, Uuid), String>, Option<Uuid>) {
    match (doc, session) {
        (Ok(doc), Ok(session_id)) => (Ok((doc, session_id)), None),
        (Err(err), Ok(session_id)) => (Err(err), Some(session_id)),
        (_, Err(err)) => (Err(err), None),
    }
}

async fn fetch_document() -> Result<ResultsDocument, String> {
    let response = Request::get(&format!("{}/results", CONFIG.api_base_url))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(error_message(response, "Results are not available yet").await);
    }
    response.json::<ResultsDocument>().await
        .map_err(|_| "Failed to parse results document".to_string())
}

async fn start_session() -> Result<Uuid, String> {
    let response = Request::post(&format!("{}/session", CONFIG.api_base_url))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(error_message(response, "Failed to start feedback session").await);
    }
    response.json::<SessionCreated>().await
        .map(|created| created.session_id)
        .map_err(|_| "Failed to start feedback session".to_string())
}

async fn end_session(session_id: Uuid) {
    let url = format!("{}/session/{}", CONFIG.api_base_url, session_id);
    if let Err(e) = Request::delete(&url).send().await {
        web_sys::console::log_1(&format!("Failed to end session {}: {}", session_id, e).into());
    }
}

async fn post_vote(url: &str, event: &VoteEvent) -> Result<VoteReceipt, String> {
    let response = Request::post(url)
        .json(event)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    match response.status() {
        200 => response.json::<VoteReceipt>().await
            .map_err(|e| format!("Failed to parse response: {}", e)),
        404 => Err("Your feedback session expired. Reload the page to continue.".into()),
        _ => Err(error_message(response, "Failed to record feedback").await),
    }
}

async fn error_message(response: gloo_net::http::Response, fallback: &str) -> String {
    response.json::<ErrorResponse>().await
        .map(|e| e.error)
        .unwrap_or_else(|_| fallback.to_string())
}
