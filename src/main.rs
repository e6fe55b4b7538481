use clap::{Parser, Subcommand};
use qalimtech_site::contact::{ContactForm, FormEvent};
use qalimtech_site::newsletter::{NewsletterEvent, NewsletterForm};
use qalimtech_site::submit::{Outbox, Phase};
use qalimtech_site::validate::Field;
use qalimtech_site::{config, content, generate, output};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("SITE_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("SITE_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "qalimtech-site")]
#[command(about = "One-page brochure site for QalimTech Farms")]
#[command(long_about = "\
One-page brochure site for QalimTech Farms

The page is rendered from two optional TOML files layered over stock
defaults. Anything you leave out keeps its stock value.

Source structure:

  site/
  ├── config.toml      # Title, section order, scroll threshold, colors, outboxes
  ├── content.toml     # Page copy: hero, about, products, gallery, testimonials...
  └── assets/          # Images, favicon, fonts → copied to the output root

Form submissions from the command line are appended as JSON lines to the
outbox files named in config.toml, relative to the source directory.

Run 'qalimtech-site gen-config' or 'gen-content' for documented stock files.")]
#[command(version = version_string())]
struct Cli {
    /// Site source directory
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render index.html, style.css and site.js, and copy assets
    Build,
    /// Validate config and content without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the stock page copy as content.toml
    GenContent,
    /// Validate and submit a contact message to the contact outbox
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        /// Optional phone number
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Validate and submit a newsletter subscription
    Subscribe {
        #[arg(long, default_value = "")]
        email: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Building {} → {}", cli.source.display(), cli.output.display());
            let report = generate::generate(&cli.source, &cli.output)?;
            output::print_generate_output(&report, &cli.output);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let site_content = content::load_content(&cli.source)?;
            output::print_check_output(&site_config, &site_content, &cli.source);
            println!("==> Site is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenContent => {
            print!("{}", content::stock_content_toml()?);
        }
        Command::Contact {
            name,
            email,
            phone,
            message,
        } => {
            let site_config = config::load_config(&cli.source)?;
            let outbox = Outbox::new(cli.source.join(&site_config.contact.outbox));

            let mut form = ContactForm::new();
            for (field, value) in [
                (Field::Name, name),
                (Field::Email, email),
                (Field::Phone, phone),
                (Field::Message, message),
            ] {
                form.update(FormEvent::Edit { field, value });
            }
            let phase = form.submit_with(&outbox).clone();
            output::print_submission_output(&phase, form.errors(), outbox.path());
            if phase != Phase::Succeeded {
                std::process::exit(1);
            }
        }
        Command::Subscribe { email } => {
            let site_config = config::load_config(&cli.source)?;
            let outbox = Outbox::new(cli.source.join(&site_config.contact.newsletter_outbox));

            let mut form = NewsletterForm::new();
            form.update(NewsletterEvent::Edit(email));
            let phase = form.submit_with(&outbox).clone();
            let errors: BTreeMap<Field, _> =
                form.error().map(|e| (Field::Email, e)).into_iter().collect();
            output::print_submission_output(&phase, &errors, outbox.path());
            if phase != Phase::Succeeded {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
