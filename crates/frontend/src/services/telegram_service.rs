use async_trait::async_trait;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{error, info};

use crate::config::FrontendKind;
use crate::presenter;
use crate::services::Frontend;
use crate::services::headline_service::HeadlineService;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "show what this bot does.")]
    Start,
    #[command(description = "list the commands.")]
    Help,
    #[command(description = "explain each label.")]
    Legend,
}

/// Every plain text message is one headline submission.
pub struct TelegramService {
    bot: Bot,
    service: Arc<HeadlineService>,
}

impl TelegramService {
    pub fn new(token: String, service: Arc<HeadlineService>) -> Self {
        Self {
            bot: Bot::new(token),
            service,
        }
    }
}

#[async_trait]
impl Frontend for TelegramService {
    fn kind(&self) -> FrontendKind {
        FrontendKind::Telegram
    }

    async fn run(&mut self) -> anyhow::Result<()> {
        info!("Starting Telegram headline bot");

        let handler = Update::filter_message()
            .branch(
                dptree::entry()
                    .filter_command::<Command>()
                    .endpoint(answer_command),
            )
            .branch(dptree::endpoint(answer_headline));

        Dispatcher::builder(self.bot.clone(), handler)
            .dependencies(dptree::deps![self.service.clone()])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("Telegram dispatcher stopped.");
        Ok(())
    }
}

pub fn command_reply(command: &Command) -> String {
    match command {
        Command::Start => presenter::header(),
        Command::Help => format!("{}\n\n{}", presenter::header(), Command::descriptions()),
        Command::Legend => presenter::legend(),
    }
}

async fn answer_command(bot: Bot, msg: Message, command: Command) -> ResponseResult<()> {
    bot.send_message(msg.chat.id, command_reply(&command)).await?;
    Ok(())
}

async fn answer_headline(
    bot: Bot,
    msg: Message,
    service: Arc<HeadlineService>,
) -> ResponseResult<()> {
    // stickers, photos and the like arrive without text and count as blank
    let outcome = service.classify(msg.text().unwrap_or_default());

    // A failed reply must not take the bot down
    if let Err(e) = bot.send_message(msg.chat.id, presenter::render(&outcome)).await {
        error!("Failed to send Telegram reply to chat {}: {}", msg.chat.id.0, e);
    }
    Ok(())
}
