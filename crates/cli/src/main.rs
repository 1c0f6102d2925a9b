//! vfdctl - Shuttle VFD control CLI
//!
//! Command-line surface over the front-panel display driver: write text,
//! toggle icons, switch between text and clock mode, pick the text
//! alignment.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hidapi::HidApi;
use shuttle_vfd_device::{AttachOptions, HidTransport, VfdController};
use shuttle_vfd_protocol::WIDTH;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "vfdctl")]
#[command(about = "Shuttle VFD control - drive the XPC front-panel display")]
#[command(version)]
struct Cli {
    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clear the panel (text and icons), optionally showing a greeting
    Init {
        /// Text to show once the panel is cleared
        #[arg(long)]
        greeting: Option<String>,
    },

    /// Write text to the display (20 characters, aligned per style)
    Text {
        /// Text to display; longer input is truncated
        text: String,

        /// Alignment for this write: left/l, right/r or center/c
        #[arg(short, long)]
        style: Option<String>,
    },

    /// Toggle or set icons ("play,vol5", "clear", "=,cd,music", ...)
    Icons {
        /// Comma/space-separated icon tokens
        tokens: String,
    },

    /// Switch display mode: text/txt or clock/clk
    Mode {
        /// Mode name
        mode: String,
    },

    /// Set the text alignment for future writes
    Style {
        /// Style name: left/l, right/r or center/c
        style: String,
    },

    /// Show the attached device and driver state
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!(
                "vfdctl={log_level},shuttle_vfd_device={log_level},shuttle_vfd_protocol={log_level}"
            )
            .into()
        }))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let api = HidApi::new().context("failed to initialize the host HID layer")?;
    let transport = HidTransport::open_first(&api)?;
    debug!("transport ready");

    match cli.command {
        Commands::Init { greeting } => {
            let options = AttachOptions { greeting };
            VfdController::attach(transport, options)?;
        }
        Commands::Text { text, style } => {
            let mut vfd = VfdController::new(transport);
            if let Some(style) = style {
                vfd.set_text_style(&style)?;
            }
            vfd.set_text(text.as_bytes())?;
        }
        Commands::Icons { tokens } => {
            let mut vfd = VfdController::new(transport);
            let unknown = vfd.set_icons(&tokens)?;
            for token in unknown {
                eprintln!("unknown icon token: {token}");
            }
        }
        Commands::Mode { mode } => {
            VfdController::new(transport).set_mode(&mode)?;
        }
        Commands::Style { style } => {
            VfdController::new(transport).set_text_style(&style)?;
        }
        Commands::Status => {
            let vfd = VfdController::new(transport);
            println!("device: Shuttle VFD ({WIDTH}x1)");
            println!("text:   {}", printable_text(vfd.text()));
            println!("icons:  {}", vfd.icons_string());
            println!("mode:   {}", vfd.mode().as_str());
            println!("style:  {}", vfd.text_style().as_str());
        }
    }

    Ok(())
}

/// Trim trailing NULs and newlines, then make the bytes printable.
fn printable_text(screen: &[u8; WIDTH]) -> String {
    let mut end = screen.len();
    while end > 0 && (screen[end - 1] == 0 || screen[end - 1] == b'\n') {
        end -= 1;
    }
    String::from_utf8_lossy(&screen[..end]).into_owned()
}
