use log::error;
use std::env;
use std::sync::Arc;

use flavor_fusion::{
    app_state_from_config, build_app, classify, generate_recipe_post, web, AppConfig,
    GenerationResult,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load().inspect_err(|e| error!("Failed to load config: {}", e))?;

    // `flavor-fusion "Banana Bread" 300` prints one post; no arguments starts the web UI.
    let args: Vec<String> = env::args().collect();
    if let Some(topic) = args.get(1) {
        let word_count = match args.get(2) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| format!("Invalid word count: {}", raw))?,
            None => i64::from(config.word_count.default),
        };

        let text = generate_recipe_post(&config, topic, word_count).await?;
        return match classify(&text) {
            GenerationResult::Success { text } => {
                println!("{}", text);
                Ok(())
            }
            GenerationResult::Failure { message } => {
                error!("{}", message);
                Err(message.into())
            }
        };
    }

    let state = app_state_from_config(&config)
        .inspect_err(|e| error!("Failed to set up the Gemini provider: {}", e))?;
    web::run_server(build_app(Arc::new(state)), &config.server).await?;

    Ok(())
}
