//! sitechat CLI binary entry point.

use std::io::{BufRead, Write};

use clap::Parser;
use sitechat::assistant::AssistantClient;
use sitechat::cli::{ChatArgs, Cli, Commands, PageArgs};
use sitechat::config::SiteChatConfig;
use sitechat::context::{collect_context_string, PageDocument};
use sitechat::widget::ChatWidget;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Context(args) => handle_context(args),
        Commands::Chat(args) => handle_chat(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn read_page(args: &PageArgs) -> Result<PageDocument, Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(&args.page)
        .map_err(|e| format!("cannot read {}: {e}", args.page.display()))?;
    let document = PageDocument::parse(&source);
    Ok(match &args.url {
        Some(url) => document.with_url(url.clone()),
        None => document,
    })
}

fn handle_context(args: PageArgs) -> Result<(), Box<dyn std::error::Error>> {
    let document = read_page(&args)?;
    println!("{}", collect_context_string(&document));
    Ok(())
}

async fn handle_chat(args: ChatArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => SiteChatConfig::load(path)?,
        None => SiteChatConfig::from_env()?,
    };
    if let Some(model) = &args.model {
        config.model = model.parse()?;
    }

    let client = AssistantClient::from_config(&config)?;
    let mut widget = ChatWidget::new(client, config.widget.clone());
    widget.seed_context(&read_page(&args.page)?);
    widget.open();

    let bot_name = widget.config().bot_name.clone();
    println!("{bot_name}: {}", widget.history().last().content);
    println!("(type /quit to exit)");

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim() == "/quit" {
            break;
        }

        widget.set_input(line);
        if let Some(reply) = widget.send().await {
            println!("{bot_name}: {}", reply.content);
        }
    }

    widget.close();
    Ok(())
}
