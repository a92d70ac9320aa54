use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use fitswap_core::config::StoreConfig;
use fitswap_core::consts::SWAP_DELAY;
use fitswap_core::selectors::{can_checkout, cart_summary};
use fitswap_core::swap::{FailingSwapProcessor, MockSwapProcessor, NoOpObserver, SwapProcessor};
use fitswap_core::upload::{FileUploader, PlaceholderUploader, Uploader};
use fitswap_core::{format_price, PhotoSlot, ProductId, Session, SessionEvent};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;

use super::load_store_config;
use crate::summary::print_session_summary;

#[derive(Args)]
pub struct SimulateArgs {
    /// Store config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Session script (TOML); command-line flags are merged on top
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Customer photo to upload
    #[arg(long)]
    pub customer: Option<PathBuf>,

    /// Outfit photo to upload
    #[arg(long)]
    pub outfit: Option<PathBuf>,

    /// Fill missing photo slots with the configured placeholders
    #[arg(long)]
    pub placeholders: bool,

    /// Comma-separated product ids to select
    #[arg(long)]
    pub select: Option<String>,

    /// Make the swap fail with this reason
    #[arg(long)]
    pub fail: Option<String>,

    /// Reset the session right after starting the swap
    #[arg(long)]
    pub reset_during: bool,

    /// Add the selected products to the cart at the end
    #[arg(long)]
    pub checkout: bool,
}

/// Scripted session, loadable from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SessionScript {
    customer: Option<PathBuf>,
    outfit: Option<PathBuf>,
    placeholders: bool,
    select: Vec<u32>,
    fail: Option<String>,
    reset_during: bool,
    checkout: bool,
}

impl SessionScript {
    fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        toml::from_str(&contents).context("Invalid session script")
    }

    fn merge_args(mut self, args: &SimulateArgs) -> Result<Self> {
        if args.customer.is_some() {
            self.customer = args.customer.clone();
        }
        if args.outfit.is_some() {
            self.outfit = args.outfit.clone();
        }
        if let Some(ref ids) = args.select {
            self.select = parse_product_ids(ids)?;
        }
        if args.fail.is_some() {
            self.fail = args.fail.clone();
        }
        self.placeholders |= args.placeholders;
        self.reset_during |= args.reset_during;
        self.checkout |= args.checkout;
        Ok(self)
    }
}

/// Parse a comma-separated list of product ids. Empty entries are skipped.
fn parse_product_ids(list: &str) -> Result<Vec<u32>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse()
                .with_context(|| format!("Invalid product id '{s}' in --select"))
        })
        .collect()
}

pub fn run(args: &SimulateArgs) -> Result<()> {
    let config = load_store_config(args.config.as_deref())?;
    let script = match args.script {
        Some(ref path) => SessionScript::load(path)?,
        None => SessionScript::default(),
    }
    .merge_args(args)?;
    tracing::debug!("Session script: {script:?}");

    let processor: Arc<dyn SwapProcessor> = match script.fail {
        Some(ref reason) => Arc::new(FailingSwapProcessor::new(SWAP_DELAY, reason.clone())),
        None => Arc::new(MockSwapProcessor::new(
            SWAP_DELAY,
            config.placeholders.result.clone(),
        )),
    };
    let mut session = Session::new(config.catalog()?, processor, Arc::new(NoOpObserver));

    upload_photos(&mut session, &script, &config)?;

    for &id in &script.select {
        if !session.toggle_product_selection(ProductId(id)) {
            println!("Skipping unknown product id {id}");
        }
    }

    match session.begin_swap() {
        Ok(ticket) if script.reset_during => {
            session.reset_all();
            println!("Swap {ticket} cancelled by reset");
        }
        Ok(_) => wait_with_spinner(&mut session)?,
        Err(e) => println!("Swap not started: {e}"),
    }

    print_session_summary(session.state(), &config.currency);

    if script.checkout {
        checkout(&session, &config.currency);
    }

    Ok(())
}

fn upload_photos(session: &mut Session, script: &SessionScript, config: &StoreConfig) -> Result<()> {
    let placeholders = PlaceholderUploader::new(config.placeholders.clone());
    for &slot in PhotoSlot::ALL {
        let path = match slot {
            PhotoSlot::Customer => script.customer.as_deref(),
            PhotoSlot::Outfit => script.outfit.as_deref(),
        };
        let image = match path {
            Some(path) => Some(
                FileUploader
                    .upload(slot, path)
                    .with_context(|| format!("{slot} upload failed"))?,
            ),
            None if script.placeholders => Some(placeholders.upload(slot, Path::new(""))?),
            None => None,
        };
        if let Some(image) = image {
            println!("{slot}: {image}");
            session.set_photo(slot, image);
        }
    }
    Ok(())
}

fn wait_with_spinner(session: &mut Session) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]")?);
    pb.set_message("Generating outfit photo");
    pb.enable_steady_tick(Duration::from_millis(100));

    match session.wait_for_swap(SWAP_DELAY * 4) {
        Some(SessionEvent::SwapCompleted { ticket, .. }) => {
            pb.finish_with_message(format!("Swap {ticket} done"));
        }
        Some(SessionEvent::SwapFailed { ticket, reason }) => {
            pb.abandon_with_message(format!("Swap {ticket} failed: {reason}"));
        }
        Some(SessionEvent::StaleOutcome { .. }) | None => {
            pb.abandon_with_message("Timed out waiting for swap");
        }
    }
    Ok(())
}

fn checkout(session: &Session, currency: &str) {
    let state = session.state();
    if !can_checkout(state) {
        println!("Nothing to add to the cart");
        return;
    }
    let cart = cart_summary(state);
    tracing::info!("Checkout: {} items", cart.count);
    println!(
        "Added {} item(s) to the cart, total {}",
        cart.count,
        format_price(currency, cart.total)
    );
}
