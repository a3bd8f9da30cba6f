use crate::config::HookConfig;
use crate::environment::TemplateEnvironment;
use crate::error::Result;
use crate::files::SourceFiles;
use crate::headers::{touch_nojekyll, write_headers};
use chrono::Utc;

pub const CACHE_BUST_GLOBAL: &str = "cache_bust";

pub fn on_post_build(config: &HookConfig) -> Result<()> {
    let site_dir = config.site_dir.as_path();

    write_headers(site_dir)?;
    println!("✓ Created cache control headers file");

    touch_nojekyll(site_dir)?;
    println!("✓ Created .nojekyll file");

    tracing::info!(dir = %site_dir.display(), "post-build hook finished");
    Ok(())
}

pub fn cache_bust_token() -> String {
    Utc::now().timestamp().to_string()
}

pub fn on_env(
    mut env: TemplateEnvironment,
    _config: &HookConfig,
    _files: &SourceFiles,
) -> TemplateEnvironment {
    let token = cache_bust_token();
    tracing::debug!(token = %token, "setting cache_bust global");
    env.insert_global(CACHE_BUST_GLOBAL, &token);
    env
}
