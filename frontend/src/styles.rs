pub const MAIN_PANEL: &str = "flex-1 min-h-screen bg-gray-100 px-8 py-10 md:px-14";
pub const CONTAINER: &str = "max-w-4xl mx-auto";

pub const SIDEBAR: &str = "w-64 shrink-0 h-screen sticky top-0 flex flex-col bg-slate-900 text-white overflow-hidden";
pub const SIDEBAR_HEADER: &str = "shrink-0 px-5 pt-6 pb-4 space-y-4";
pub const SIDEBAR_SECTION: &str = "flex-1 min-h-0 overflow-y-auto px-3";
pub const SIDEBAR_FOOTER: &str = "shrink-0 flex items-center gap-3 px-5 py-4 border-t border-slate-700";
pub const PROJECT_ITEM: &str = "px-3 py-2 rounded-md text-sm text-slate-200 hover:bg-slate-800 cursor-pointer truncate";
pub const AVATAR: &str = "w-8 h-8 rounded-full bg-blue-600 flex items-center justify-center font-semibold";

pub const CARD: &str = "bg-white border border-gray-200 rounded-3xl shadow-xl p-7";
pub const CARD_FLAT: &str = "bg-white rounded-2xl shadow-sm px-5 py-4 mb-4";
pub const ALERT_CARD: &str = "p-4 rounded-lg shadow-md mb-6";

pub const INPUT_PILL: &str = "w-full py-3 pl-4 pr-11 rounded-full border-2 border-blue-600 bg-white text-sm text-gray-900 placeholder-gray-400 focus:outline-none";
pub const DROPZONE: &str = "relative mt-4 rounded-2xl border-2 border-dashed border-blue-200 bg-blue-50/40 px-6 py-7 flex flex-col items-center text-center gap-2";

pub const BUTTON_BASE: &str = "px-5 py-2 rounded-full font-medium text-sm transition-all duration-150 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "bg-blue-600 hover:bg-blue-700 text-white";
pub const BUTTON_OUTLINE: &str = "border border-gray-300 bg-white hover:bg-gray-50 text-gray-800";
pub const VOTE_BUTTON: &str = "w-7 h-7 rounded-full flex items-center justify-center text-sm hover:bg-slate-900/5 transition-colors";

pub const TEXT_MUTED: &str = "text-sm text-gray-500";
pub const TEXT_ERROR: &str = "text-sm text-red-600 font-semibold";
pub const HEADING_LG: &str = "text-2xl font-bold text-slate-900 mb-1";
pub const HEADING_MD: &str = "text-base font-semibold text-gray-900";
pub const SECTION_LABEL: &str = "text-xs font-semibold mt-2 mb-1";

pub const EPIC_PANEL: &str = "rounded-2xl overflow-hidden border border-indigo-200 bg-indigo-50 shadow-sm";
pub const EPIC_SUMMARY: &str = "cursor-pointer px-4 py-3 font-medium text-sm bg-gradient-to-r from-blue-100 to-sky-100";
pub const FEATURE_PANEL: &str = "rounded-2xl mx-3 my-2 border border-green-200 bg-green-50 shadow-sm";
pub const FEATURE_SUMMARY: &str = "cursor-pointer px-4 py-2 font-medium text-sm";
pub const STORY_CARD: &str = "rounded-xl border border-gray-200 bg-neutral-100 px-3 py-2 mb-2 shadow-sm";
pub const STORY_ID: &str = "text-xs font-semibold px-2 py-0.5 rounded-full bg-gray-200";

pub const STAT_CARD: &str = "flex-1 bg-white rounded-2xl shadow-sm px-5 py-4";
pub const STATUS_PILL: &str = "text-xs px-3 py-1 rounded-full bg-green-100 text-green-700 font-medium";
pub const SPINNER: &str = "w-4 h-4 rounded-full border-2 border-blue-200 border-t-blue-600 animate-spin";

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button_primary() -> String {
    combine_classes(BUTTON_BASE, BUTTON_PRIMARY)
}

pub fn button_outline() -> String {
    combine_classes(BUTTON_BASE, BUTTON_OUTLINE)
}

pub fn alert_style(style: &str) -> String {
    match style {
        "error" => combine_classes(ALERT_CARD, "bg-red-500 text-white shadow-lg"),
        "success" => combine_classes(ALERT_CARD, "bg-green-500 text-white shadow-lg"),
        _ => combine_classes(ALERT_CARD, "bg-blue-500 text-white shadow-lg"),
    }
}
