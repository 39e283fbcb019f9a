//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# SuperMe client configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

# base_url = "https://api.superme.ai"   # http://localhost:5000 for local servers
# auto_login = true                      # log in while building the client
# model = "gpt-4"
# max_tokens = 1000
# identity_key = "username"              # user, username (default follows auth mode)

[auth]
mode = "api_key"                         # api_key, password
api_key = ""                             # Settings -> Account -> API Keys
# username = ""                          # password mode only
# password = ""

[endpoints]
# login = "/auth/login"
# chat_completions = "/mcp/chat/completions"
# mcp = "/mcp"

[http]
# connect_timeout_secs = 10
# request_timeout_secs = 120
"##
    .to_string()
}
