use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use ecomap::aggregate::categorize_projects;
use ecomap::catalog::{CatalogSource, FileSource, HttpSource, load_snapshot};
use ecomap::layout::masonry::{Breakpoints, distribute};
use ecomap::layout::radial::{RadialConfig, radial_map};
use ecomap::layout::{LayoutConfig, Weighting, compute_layout};
use ecomap::model::CatalogSnapshot;
use ecomap::output::{
    CanvasSize, CategoryOutput, MapOutput, MasonryOutput, categories_output, share_layout_output,
};
use ecomap::palette::Palette;
use ecomap::visibility::VisibleSet;
use log::{LevelFilter, info};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Group an ecosystem project catalog by category and print layouts as JSON",
    long_about = None
)]
struct Cli {
    /// Catalog JSON file (defaults to fetching from --url)
    #[arg(long, short, value_name = "CATALOG_JSON", conflicts_with = "url")]
    input: Option<Utf8PathBuf>,

    /// Catalog API endpoint
    #[arg(long, default_value = ecomap::catalog::DEFAULT_CATALOG_URL)]
    url: String,

    /// Binary snapshot: read it if present, otherwise load the catalog and write it
    #[arg(long, value_name = "FILE")]
    snapshot: Option<Utf8PathBuf>,

    /// Ignore an existing snapshot and reload the catalog
    #[arg(long, requires = "snapshot")]
    refresh: bool,

    /// JSON object of category key → colour layered over the built-in palette
    #[arg(long, value_name = "FILE")]
    palette: Option<Utf8PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct Selection {
    /// Lay out every category
    #[arg(long, conflicts_with = "featured")]
    all: bool,

    /// Lay out priority categories only
    #[arg(long)]
    featured: bool,
}

impl Selection {
    fn visible_set(&self, categories: &ecomap::model::CategorizedProjects) -> VisibleSet {
        if self.all {
            VisibleSet::all(categories, true)
        } else if self.featured {
            VisibleSet::featured_only(categories)
        } else {
            VisibleSet::initial(categories)
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print all categories in display order
    Categories,
    /// Print a single category by key
    Show {
        #[arg(value_name = "SLUG")]
        slug: String,
    },
    /// Print the share-canvas layout
    Layout {
        #[command(flatten)]
        selection: Selection,
        #[arg(long, default_value_t = 1920.0)]
        width: f64,
        #[arg(long, default_value_t = 1080.0)]
        height: f64,
        /// Size regions by project count instead of its square root
        #[arg(long)]
        linear: bool,
    },
    /// Print the masonry column assignment for a viewport width
    Masonry {
        #[command(flatten)]
        selection: Selection,
        #[arg(long, default_value_t = 1920)]
        viewport_width: u32,
    },
    /// Print radial map node positions
    Map {
        #[command(flatten)]
        selection: Selection,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load(cli: &Cli) -> Result<CatalogSnapshot> {
    if let Some(path) = &cli.snapshot {
        if path.exists() && !cli.refresh {
            info!("reading snapshot {}", path);
            return CatalogSnapshot::load_from_binary(path);
        }
    }
    let snapshot = match &cli.input {
        Some(path) => fetch(&mut FileSource::new(path))?,
        None => fetch(&mut HttpSource::new(cli.url.clone()))?,
    };
    if let Some(path) = &cli.snapshot {
        snapshot.save_to_binary(path)?;
        info!("wrote snapshot {}", path);
    }
    Ok(snapshot)
}

fn fetch<S: CatalogSource>(source: &mut S) -> Result<CatalogSnapshot> {
    load_snapshot(source).context("Failed to load projects, try again")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let palette = match &cli.palette {
        Some(path) => Palette::load_overrides(path)?,
        None => Palette::default(),
    };
    let snapshot = load(&cli)?;
    let categories = categorize_projects(&snapshot.projects);
    info!(
        "{} categories from {} projects",
        categories.len(),
        snapshot.projects.len()
    );

    let json = match &cli.command {
        Command::Categories => {
            serde_json::to_string_pretty(&categories_output(&categories, &palette))?
        }
        Command::Show { slug } => {
            let category = categories
                .get(slug)
                .ok_or_else(|| anyhow!("Category '{}' not found", slug))?;
            serde_json::to_string_pretty(&CategoryOutput {
                category,
                color: palette.color_for(slug),
            })?
        }
        Command::Layout {
            selection,
            width,
            height,
            linear,
        } => {
            let cfg = LayoutConfig {
                canvas_width: *width,
                canvas_height: *height,
                weighting: if *linear {
                    Weighting::Linear
                } else {
                    Weighting::SquareRoot
                },
                ..Default::default()
            };
            let visible = selection.visible_set(&categories);
            let regions = compute_layout(&categories.visible(&visible), &cfg);
            let canvas = CanvasSize {
                width: cfg.canvas_width,
                height: cfg.canvas_height,
            };
            serde_json::to_string_pretty(&share_layout_output(canvas, &regions, &palette))?
        }
        Command::Masonry {
            selection,
            viewport_width,
        } => {
            let visible = selection.visible_set(&categories);
            let keys: Vec<&str> = categories
                .visible(&visible)
                .into_iter()
                .map(|(k, _)| k)
                .collect();
            let columns = Breakpoints::default().columns_for_width(*viewport_width);
            serde_json::to_string_pretty(&MasonryOutput {
                columns: distribute(&keys, columns),
            })?
        }
        Command::Map { selection } => {
            let visible = selection.visible_set(&categories);
            let nodes = radial_map(&categories.visible(&visible), &RadialConfig::default());
            serde_json::to_string_pretty(&MapOutput { nodes: &nodes })?
        }
    };
    println!("{}", json);
    Ok(())
}
