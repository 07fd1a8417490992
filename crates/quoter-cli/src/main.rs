//! Quoter CLI - Generate, save and publish quotes from the terminal
//!
//! Talks to the Quoter API with a session token from the auth service.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Confirm, Password};
use uuid::Uuid;

use api::{QuoterClient, SaveQuoteRequest, UpdateProfileRequest};
use config::Config;

#[derive(Parser)]
#[command(name = "quoter")]
#[command(about = "Quoter CLI - AI quotes from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Login and store a session token
    Login {
        /// Session token (will prompt if not provided)
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Generate a quote
    Generate {
        /// Topic for the quote (e.g., "resilience")
        topic: String,
        /// Tone of the quote
        #[arg(short = 'T', long, default_value = "Inspirational")]
        tone: String,
        /// Author style to imitate
        #[arg(short, long, default_value = "Maya Angelou")]
        author_style: String,
        /// Save the generated quote
        #[arg(short, long)]
        save: bool,
    },

    /// List your saved quotes
    List,

    /// Publish a saved quote to the shared feed
    Publish {
        /// Quote ID
        id: Uuid,
    },

    /// Unpublish a saved quote
    Unpublish {
        /// Quote ID
        id: Uuid,
    },

    /// Remove a saved quote
    Remove {
        /// Quote ID
        id: Uuid,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Published quotes from everyone
    Feed,

    /// Show or update your profile
    Profile {
        /// New display name
        #[arg(long)]
        full_name: Option<String>,
        /// New bio
        #[arg(long)]
        bio: Option<String>,
        /// New avatar URL
        #[arg(long)]
        avatar_url: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Login { token } => cmd_login(token).await,
        Commands::Generate {
            topic,
            tone,
            author_style,
            save,
        } => cmd_generate(topic, tone, author_style, save).await,
        Commands::List => cmd_list().await,
        Commands::Publish { id } => cmd_set_published(id, true).await,
        Commands::Unpublish { id } => cmd_set_published(id, false).await,
        Commands::Remove { id, yes } => cmd_remove(id, yes).await,
        Commands::Feed => cmd_feed().await,
        Commands::Profile {
            full_name,
            bio,
            avatar_url,
        } => cmd_profile(full_name, bio, avatar_url).await,
        Commands::Config => cmd_config(),
    }
}

fn client(config: &Config) -> Result<QuoterClient> {
    let token = config.require_token()?;
    Ok(QuoterClient::new(&config.base_url, token))
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(token: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let token = match token {
        Some(t) => t,
        None => Password::new()
            .with_prompt("Session token")
            .interact()
            .context("Failed to read session token")?,
    };

    // Test connection
    let client = QuoterClient::new(&config.base_url, &token);
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to the Quoter API at {}", config.base_url);
        }
    }

    // Verify the token actually resolves to a user
    client
        .get_profile()
        .await
        .context("Token rejected. Check your session token.")?;

    config.set_token(token);
    config.save()?;

    println!("{} Token saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

async fn cmd_generate(topic: String, tone: String, author_style: String, save: bool) -> Result<()> {
    let config = Config::load()?;
    let client = client(&config)?;

    println!(
        "Generating a {} quote about {}...",
        tone.cyan(),
        topic.cyan()
    );

    let generated = client.generate(&topic, &tone, &author_style).await?;

    println!();
    println!("  “{}”", generated.quote.italic());
    println!("      {} {}", "—".dimmed(), generated.author.dimmed());
    println!();

    if save {
        let saved = client
            .save_quote(&SaveQuoteRequest {
                quote_text: generated.quote,
                author: generated.author,
                topic: Some(topic),
            })
            .await?;
        println!("{} Saved as {}", "✓".green(), saved.id);
    }

    Ok(())
}

async fn cmd_list() -> Result<()> {
    let config = Config::load()?;
    let client = client(&config)?;

    let quotes = client.list_quotes().await?;
    if quotes.is_empty() {
        println!("You haven't saved any quotes yet.");
        println!("\n{}", "Generate and save one with:".dimmed());
        println!("  quoter generate \"resilience\" --save");
        return Ok(());
    }

    for quote in quotes {
        let marker = if quote.published {
            "published".green().to_string()
        } else {
            "private".dimmed().to_string()
        };
        println!("{} [{}]", quote.id.to_string().cyan(), marker);
        println!("  “{}” — {}", quote.quote_text.italic(), quote.author);
        if let Some(topic) = &quote.topic {
            println!("  {}", topic.dimmed());
        }
    }

    Ok(())
}

async fn cmd_set_published(id: Uuid, published: bool) -> Result<()> {
    let config = Config::load()?;
    let client = client(&config)?;

    let quote = client.set_published(id, published).await?;
    let verb = if published { "Published" } else { "Unpublished" };
    println!("{} {} “{}”", "✓".green(), verb, quote.quote_text);

    Ok(())
}

async fn cmd_remove(id: Uuid, yes: bool) -> Result<()> {
    let config = Config::load()?;
    let client = client(&config)?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Remove this saved quote?")
            .default(false)
            .interact()
            .context("Failed to read confirmation")?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    client.delete_quote(id).await?;
    println!("{} Quote removed", "✓".green());

    Ok(())
}

async fn cmd_feed() -> Result<()> {
    let config = Config::load()?;
    let client = client(&config)?;

    let quotes = client.feed().await?;
    if quotes.is_empty() {
        println!("No published quotes yet.");
        return Ok(());
    }

    for quote in quotes {
        println!("  “{}” — {}", quote.quote_text.italic(), quote.author);
        println!(
            "      {}",
            quote.created_at.format("%Y-%m-%d").to_string().dimmed()
        );
    }

    Ok(())
}

async fn cmd_profile(
    full_name: Option<String>,
    bio: Option<String>,
    avatar_url: Option<String>,
) -> Result<()> {
    let config = Config::load()?;
    let client = client(&config)?;

    let no_changes = full_name.is_none() && bio.is_none() && avatar_url.is_none();

    let profile = if no_changes {
        client.get_profile().await?
    } else {
        client
            .update_profile(&UpdateProfileRequest {
                full_name,
                bio,
                avatar_url,
            })
            .await?
    };

    println!("{}", "Profile:".bold());
    println!("  Name:   {}", profile.full_name.as_deref().unwrap_or("-"));
    println!("  Bio:    {}", profile.bio.as_deref().unwrap_or("-"));
    println!("  Avatar: {}", profile.avatar_url.as_deref().unwrap_or("-"));

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path:     {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  Token:    {}",
        if config.token.is_some() {
            "set".green().to_string()
        } else {
            "not set".red().to_string()
        }
    );

    Ok(())
}
