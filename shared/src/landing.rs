use serde::{Serialize, Deserialize};

pub const GREETINGS: [&str; 5] = [
    "Hi {user}, how can I assist you today?",
    "Hello {user}, which project do you want to work on today?",
    "{user}, ready to kick off a new project?",
    "Welcome back, {user}. What are we building today?",
    "Good to see you, {user}. Where should we start?",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum UploadStatus {
    Waiting,
    Analyzing { details: String },
}

impl UploadStatus {
    pub const WAITING_TEXT: &'static str = "Waiting for a document or link...";
    pub const ANALYZING_TEXT: &'static str = "Uploading & analyzing your project...";
}

pub fn upload_status(url: Option<&str>, file_count: usize) -> UploadStatus {
    let has_url = url.map_or(false, |u| !u.trim().is_empty());

    if !has_url && file_count == 0 {
        return UploadStatus::Waiting;
    }

    let mut details = Vec::new();
    if has_url {
        details.push("Using project link.".to_string());
    }
    if file_count > 0 {
        details.push(format!("{} document(s) selected.", file_count));
    }
    UploadStatus::Analyzing { details: details.join(" ") }
}

pub fn greeting(user: &str, seed: usize) -> String {
    GREETINGS[seed % GREETINGS.len()].replace("{user}", user)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SidebarProfile {
    pub app_name: String,
    pub user_name: String,
    pub user_initial: String,
    pub recent_projects: Vec<String>,
}

impl SidebarProfile {
    pub fn new(app_name: &str, user_name: &str, recent_projects: &[&str]) -> Self {
        Self {
            app_name: app_name.to_string(),
            user_name: user_name.to_string(),
            user_initial: user_initial(user_name),
            recent_projects: recent_projects.iter().map(|p| p.to_string()).collect(),
        }
    }
}

pub fn user_initial(user_name: &str) -> String {
    user_name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "U".to_string())
}
