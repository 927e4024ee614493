pub struct Config {
    pub api_base_url: &'static str,
    pub app_name: &'static str,
    pub user_name: &'static str,
    pub recent_projects: &'static [&'static str],
    pub toast_millis: u32,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            api_base_url: "/api",
            app_name: "AgileAI",
            user_name: "Shrimayee",
            recent_projects: &[
                "E-commerce Platform",
                "Mobile Banking App",
                "Healthcare Portal",
                "CRM System",
                "Inventory Management",
                "Social Media Dashboard",
                "Analytics Platform",
            ],
            toast_millis: 4000,
        }
    }
}

pub const CONFIG: Config = Config::new();
