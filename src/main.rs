use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use intergen::conversation::ConversationController;
use intergen::llm::Generator;
use intergen::llm::config::GeminiConfig;
use intergen::llm::gemini::GeminiClient;
use intergen::message::{MessageType, Mode};

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Chat => "chat",
        Mode::Code => "code",
        Mode::Image => "image",
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let config = match GeminiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration failed");
            std::process::exit(1);
        }
    };

    let client = GeminiClient::new(config.api_key.clone(), config.base_url.clone(), config.timeouts)
        .expect("HTTP client build failed");
    let controller = ConversationController::new(Generator::new(Arc::new(client), config.models.clone()));

    tracing::info!(chat = %config.models.chat, code = %config.models.code, image = %config.models.image, "intergen ready");
    println!("InterGen — type a prompt, /mode chat|code|image to switch, /quit to exit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "/quit" {
            break;
        }
        if let Some(rest) = line.strip_prefix("/mode") {
            match Mode::parse(rest) {
                Ok(mode) => {
                    controller.set_mode(mode).await;
                    println!("mode: {}", mode_label(mode));
                }
                Err(other) => println!("unknown mode: {other}"),
            }
            continue;
        }

        controller.submit(line).await;
        if let Some(reply) = controller.snapshot().await.last() {
            match reply.message_type {
                MessageType::Image => {
                    let size = reply.image_data.as_ref().map_or(0, String::len);
                    println!("{} [image data URI, {size} chars]", reply.content);
                }
                _ => println!("{}", reply.content),
            }
        }
    }
}
