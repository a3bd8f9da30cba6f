use cache_hooks::{HookConfig, SourceFiles, TemplateEnvironment, on_env, on_post_build};
use std::path::Path;

fn load_config(
    input: Option<&Path>,
    site_dir: Option<&Path>,
) -> Result<HookConfig, Box<dyn std::error::Error>> {
    let input_dir = input.unwrap_or(Path::new("."));
    let mut config = HookConfig::discover(input_dir)?;

    if let Some(dir) = site_dir {
        config = config.with_site_dir(dir);
    }

    Ok(config)
}

pub fn post_build(
    input: Option<&Path>,
    site_dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(input, site_dir)?;
    on_post_build(&config)?;
    Ok(())
}

pub fn env(
    input: Option<&Path>,
    templates: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let globals = env_globals(input, templates)?;
    println!("{}", serde_json::to_string_pretty(&globals)?);
    Ok(())
}

fn env_globals(
    input: Option<&Path>,
    templates: Option<&Path>,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let config = load_config(input, None)?;
    let files = SourceFiles::collect(&config.docs_dir)?;

    let environment = match templates {
        Some(dir) => TemplateEnvironment::from_directory(dir)?,
        None => TemplateEnvironment::new(),
    };

    let environment = on_env(environment, &config, &files);
    Ok(environment.globals().clone().into_json())
}
