use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use shared::{landing::{greeting, upload_status, UploadStatus}, validation::{validate_project_link, validate_upload}};
use crate::{Route, styles::*, config::CONFIG};

const UPLOAD_ICON: &str = "https://cdn-icons-png.flaticon.com/512/1828/1828490.png";

pub enum Msg {
    UrlChanged(String),
    FilesSelected(Vec<(String, u64)>),
}

pub struct Home {
    greeting: String,
    url: String,
    files: Vec<String>,
    link_error: Option<String>,
    file_errors: Vec<String>,
    file_input: NodeRef,
}

impl Component for Home {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let seed = (js_sys::Math::random() * 1000.0) as usize;
        Self {
            greeting: greeting(CONFIG.user_name, seed),
            url: String::new(),
            files: Vec::new(),
            link_error: None,
            file_errors: Vec::new(),
            file_input: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UrlChanged(url) => {
                self.link_error = validate_project_link(&url).err().map(|e| e.to_string());
                self.url = url;
            }
            Msg::FilesSelected(selected) => {
                self.file_errors.clear();
                self.files = selected.into_iter()
                    .filter_map(|(name, size)| match validate_upload(&name, size) {
                        Ok(()) => Some(name),
                        Err(e) => {
                            self.file_errors.push(e.to_string());
                            None
                        }
                    })
                    .collect();
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_url = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UrlChanged(input.value())
        });

        let file_input = self.file_input.clone();
        let on_files = ctx.link().callback(move |_: Event| {
            let selected = file_input.cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .map(|list| {
                    (0..list.length())
                        .filter_map(|i| list.get(i))
                        .map(|file| (file.name(), file.size() as u64))
                        .collect()
                })
                .unwrap_or_default();
            Msg::FilesSelected(selected)
        });

        html! {
            <div class={CONTAINER}>
                <div class="mb-7">
                    <h1 class={HEADING_LG}>{&self.greeting}</h1>
                    <p class={TEXT_MUTED}>
                        {"Upload your project documentation to generate agile user stories, epics, and features."}
                    </p>
                </div>

                <div class={CARD}>
                    <div class={HEADING_MD}>{"Get Started"}</div>
                    <div class={TEXT_MUTED}>{"Choose how you'd like to provide your project requirements"}</div>
                    <div class="text-xs text-gray-500 mt-1 mb-2">{"Or paste a link to your project docs"}</div>

                    <div class="relative">
                        <input
                            type="url"
                            class={INPUT_PILL}
                            placeholder="Paste a Google Doc link, Notion page, or URL..."
                            value={self.url.clone()}
                            oninput={on_url}
                        />
                        <span class="absolute right-4 top-1/2 -translate-y-1/2 opacity-75">{"🔗"}</span>
                    </div>

                    <div class={DROPZONE}>
                        <img class="w-12 h-12 object-contain" src={UPLOAD_ICON} alt="" />
                        <div class="text-base font-medium text-blue-700">{"Drag and drop your files here"}</div>
                        <div class="text-xs text-blue-700">{"Supports PDF, DOCX, TXT files up to 10MB"}</div>
                        <span class={button_primary()}>{"Browse Files"}</span>
                        <input
                            ref={self.file_input.clone()}
                            type="file"
                            multiple={true}
                            accept=".pdf,.docx,.txt"
                            class="absolute inset-0 opacity-0 cursor-pointer z-10"
                            onchange={on_files}
                        />
                    </div>

                    {for self.link_error.iter().chain(self.file_errors.iter()).map(|e| html! { <p class={combine_classes(TEXT_ERROR, "mt-3")}>{e}</p> })}

                    <div class="mt-4 min-h-[40px]">
                        {self.render_status()}
                    </div>
                </div>
            </div>
        }
    }
}

impl Home {
    fn render_status(&self) -> Html {
        match upload_status(Some(self.url.trim()), self.files.len()) {
            UploadStatus::Waiting => html! {
                <span class="text-xs text-gray-400">{UploadStatus::WAITING_TEXT}</span>
            },
            UploadStatus::Analyzing { details } => html! {
                <div class="flex items-center gap-3 text-sm text-gray-700">
                    <div class={SPINNER}/>
                    <div>
                        <div class="font-medium text-gray-900">{UploadStatus::ANALYZING_TEXT}</div>
                        <div class="text-xs text-gray-500">{details}</div>
                    </div>
                    <Link<Route> to={Route::Results} classes={classes!(button_outline(), "ml-auto")}>
                        {"View results"}
                    </Link<Route>>
                </div>
            },
        }
    }
}
