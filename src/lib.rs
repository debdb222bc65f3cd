//! sitechat — an embeddable website chat assistant.
//!
//! Visitor messages are sent, together with the whole conversation and a
//! snapshot of the hosting page, to a hosted generative model (Google
//! Gemini by default). Failures never reach the visitor as errors; they are
//! turned into short explanatory replies.
//!
//! # Quick Start
//!
//! ```no_run
//! use sitechat::prelude::*;
//!
//! # async fn example() -> sitechat::error::Result<()> {
//! let client = AssistantClient::new("your-gemini-key")?;
//! let mut widget = ChatWidget::new(client, WidgetConfig::default());
//! widget.seed_context(&PageDocument::parse("<title>Shop</title><main>Shoes</main>"));
//!
//! widget.open();
//! widget.set_input("Do you ship abroad?");
//! if let Some(reply) = widget.send().await {
//!     println!("{}", reply.content);
//! }
//! # Ok(())
//! # }
//! ```

pub mod assistant;
pub mod config;
pub mod context;
pub mod error;
pub mod history;
pub mod models;
pub mod prelude;
pub mod provider;
pub mod util;
pub mod widget;

#[cfg(feature = "cli")]
pub mod cli;
