//! Campaign Layout - Entry Point

use campaign_layout::model::AppError;
use campaign_layout::view_state::listing::CampaignListing;
use campaign_layout::view_state::types::{Insets, Rect, Size};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Lay out a campaign catalog and print the frames visible in a viewport
#[derive(Parser, Debug)]
#[command(name = "campaign-layout")]
#[command(version)]
#[command(about = "Compute card frames for a campaign listing")]
pub struct Args {
    /// Path to a JSON campaign catalog
    pub catalog: Option<PathBuf>,

    /// Scroll view width in points
    #[arg(short, long, default_value_t = 375.0)]
    pub width: f64,

    /// Scroll view height in points
    #[arg(long, default_value_t = 812.0)]
    pub viewport_height: f64,

    /// Vertical scroll offset of the queried viewport
    #[arg(short = 'y', long, default_value_t = 0.0)]
    pub viewport_y: f64,

    /// Left and right content inset
    #[arg(long, default_value_t = 0.0)]
    pub inset: f64,

    /// Override card spacing
    #[arg(long)]
    pub spacing: Option<f64>,

    /// Override the height used for images that have not arrived
    #[arg(long)]
    pub fallback_height: Option<f64>,

    /// Show the loading placeholder instead of campaigns
    #[arg(long)]
    pub loading: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = campaign_layout::config::load_config_with_precedence(args.config.clone())?;
        let merged = campaign_layout::config::merge_config(config_file)?;
        let with_env = campaign_layout::config::apply_env_overrides(merged);
        campaign_layout::config::apply_cli_overrides(with_env, args.spacing, args.fallback_height)?
    };

    campaign_layout::logging::init(&config.log_file_path, &config.log_level)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let mut listing = CampaignListing::new(config.height_calculator());
    if !args.loading {
        let campaigns = match &args.catalog {
            Some(path) => campaign_layout::source::load_catalog(path)?,
            None => Vec::new(),
        };
        listing.display(campaigns);
    }

    listing.set_bounds(
        Size::new(args.width, args.viewport_height),
        Insets::new(0.0, args.inset, 0.0, args.inset),
    );
    listing.prepare();

    let content = listing.total_content_size();
    let viewport = Rect::new(0.0, args.viewport_y, content.width, args.viewport_height);
    let rows = campaign_layout::view::collect_rows(&listing, viewport)?;

    print!(
        "{}",
        campaign_layout::view::render_report(&rows, content, viewport)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["campaign-layout", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["campaign-layout", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["campaign-layout"]);
        assert_eq!(args.catalog, None);
        assert_eq!(args.width, 375.0);
        assert_eq!(args.viewport_height, 812.0);
        assert_eq!(args.viewport_y, 0.0);
        assert_eq!(args.inset, 0.0);
        assert_eq!(args.spacing, None);
        assert_eq!(args.fallback_height, None);
        assert!(!args.loading);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_catalog_path_populates_catalog_field() {
        let args = Args::parse_from(["campaign-layout", "campaigns.json"]);
        assert_eq!(args.catalog, Some(PathBuf::from("campaigns.json")));
    }

    #[test]
    fn test_width_short_flag() {
        let args = Args::parse_from(["campaign-layout", "-w", "320"]);
        assert_eq!(args.width, 320.0);
    }

    #[test]
    fn test_viewport_y_short_flag() {
        let args = Args::parse_from(["campaign-layout", "-y", "1200.5"]);
        assert_eq!(args.viewport_y, 1200.5);
    }

    #[test]
    fn test_width_rejects_non_number() {
        let result = Args::try_parse_from(["campaign-layout", "--width", "wide"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ValueValidation
        );
    }

    #[test]
    fn test_loading_flag() {
        let args = Args::parse_from(["campaign-layout", "--loading"]);
        assert!(args.loading);
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "campaign-layout",
            "campaigns.json",
            "--width",
            "414",
            "--viewport-height",
            "896",
            "--spacing",
            "8",
            "--fallback-height",
            "240",
            "--config",
            "/custom/config.toml",
        ]);
        assert_eq!(args.catalog, Some(PathBuf::from("campaigns.json")));
        assert_eq!(args.width, 414.0);
        assert_eq!(args.viewport_height, 896.0);
        assert_eq!(args.spacing, Some(8.0));
        assert_eq!(args.fallback_height, Some(240.0));
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_cli_values_flow_through_config_precedence_chain() {
        use campaign_layout::config::{
            apply_cli_overrides, apply_env_overrides, merge_config, ConfigFile,
        };

        let config_file = ConfigFile {
            spacing: Some(4.0),
            fallback_image_height: Some(200.0),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file)).unwrap();
        assert_eq!(merged.spacing, 4.0, "Config file should override default spacing");

        let with_env = apply_env_overrides(merged);
        let with_cli = apply_cli_overrides(with_env, Some(10.0), None).unwrap();

        assert_eq!(with_cli.spacing, 10.0, "CLI spacing should override all other sources");
        assert_eq!(with_cli.fallback_image_height, 200.0);
    }
}
