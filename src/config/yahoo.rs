/// HTTP client settings for the Yahoo Finance chart endpoint.
pub struct YahooClientConfig {
    pub timeout_ms: u64,
    pub user_agent: &'static str,
}

pub struct YahooEndpoints {
    pub base_url: &'static str,
    /// Path segments before the symbol, i.e. `{base_url}/v8/finance/chart/{symbol}`
    pub chart_path: &'static [&'static str],
}

pub struct YahooConfig {
    pub endpoints: YahooEndpoints,
    pub client: YahooClientConfig,
}

pub const YAHOO: YahooConfig = YahooConfig {
    endpoints: YahooEndpoints {
        base_url: "https://query1.finance.yahoo.com",
        chart_path: &["v8", "finance", "chart"],
    },
    client: YahooClientConfig {
        timeout_ms: 10_000,
        // The endpoint rejects requests without a browser-like agent.
        user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36",
    },
};
