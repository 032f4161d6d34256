use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use paper_size::{IntSize, PageSize, PageSizeId, Size, SizeMatchPolicy, Unit, catalog};
use viewer_session::SessionOptions;

#[derive(Parser)]
#[command(name = "papert", about = "Paper size tools CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every standard page size
    Sizes,

    /// Show one standard size by its PPD key
    Lookup {
        /// PPD key, e.g. "A4" or "Env10" (case-insensitive)
        key: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Convert a width/height pair between units
    Convert {
        width: f64,
        height: f64,

        #[arg(long, value_enum)]
        from: UnitArg,

        #[arg(long, value_enum)]
        to: UnitArg,
    },

    /// Match a size against the standard table
    Match {
        width: f64,
        height: f64,

        #[arg(long, default_value = "point", value_enum)]
        unit: UnitArg,

        #[arg(long, default_value = "fuzzy", value_enum)]
        policy: PolicyArg,
    },

    /// Scale a point size to device pixels
    Pixels {
        width: i32,
        height: i32,

        /// Target resolution in dots per inch
        #[arg(long, default_value = "72")]
        dpi: i32,
    },

    /// Pack viewer session options into their wire form
    SessionPack {
        /// Start in presentation mode
        #[arg(long)]
        presentation: bool,

        /// Open the print dialog after loading
        #[arg(long)]
        print: bool,

        /// Reuse a single viewer instance
        #[arg(long)]
        unique: bool,

        /// Do not raise the window
        #[arg(long)]
        no_raise: bool,

        /// Page reference to open at
        #[arg(long, default_value = "")]
        page: String,
    },

    /// Unpack a serialized session option string
    SessionUnpack { options: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Mm,
    Point,
    Inch,
    Pica,
    Didot,
    Cicero,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Fuzzy,
    FuzzyOrientation,
    Exact,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Mm => Self::Millimeter,
            UnitArg::Point => Self::Point,
            UnitArg::Inch => Self::Inch,
            UnitArg::Pica => Self::Pica,
            UnitArg::Didot => Self::Didot,
            UnitArg::Cicero => Self::Cicero,
        }
    }
}

impl From<PolicyArg> for SizeMatchPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Fuzzy => Self::Fuzzy,
            PolicyArg::FuzzyOrientation => Self::FuzzyOrientation,
            PolicyArg::Exact => Self::Exact,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sizes => {
            for row in catalog::entries() {
                println!(
                    "{:<20} {:>5} x {:>5} pt   {:>7} x {:>7} mm   {:>6} x {:>6} in",
                    row.key,
                    row.width_points,
                    row.height_points,
                    row.width_mm,
                    row.height_mm,
                    row.width_inches,
                    row.height_inches,
                );
            }
        }

        Commands::Lookup { key, json } => {
            let Some(row) = catalog::entries()
                .iter()
                .find(|row| row.key.eq_ignore_ascii_case(&key))
            else {
                bail!("unknown page size key: {key}");
            };

            if json {
                let value = serde_json::json!({
                    "key": row.key,
                    "points": [row.width_points, row.height_points],
                    "millimeters": [row.width_mm, row.height_mm],
                    "inches": [row.width_inches, row.height_inches],
                    "windows_id": row.windows_id,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}:", row.key);
                println!("  points:      {} x {}", row.width_points, row.height_points);
                println!("  millimeters: {} x {}", row.width_mm, row.height_mm);
                println!("  inches:      {} x {}", row.width_inches, row.height_inches);
                if let Some(code) = row.windows_id {
                    println!("  driver code: {code}");
                }
            }
        }

        Commands::Convert {
            width,
            height,
            from,
            to,
        } => {
            let size = Size::new(width, height).validated()?;
            let converted = paper_size::convert(size, from.into(), to.into());
            println!("{} x {}", converted.width, converted.height);
        }

        Commands::Match {
            width,
            height,
            unit,
            policy,
        } => {
            let size = Size::new(width, height).validated()?;
            let page = PageSize::with_size(size, unit.into(), policy.into());
            if page.id() == PageSizeId::Custom {
                println!("no standard match → {}", page.key());
            } else {
                let points = page.size_points();
                println!("{} ({} x {} pt)", page.key(), points.width, points.height);
            }
        }

        Commands::Pixels { width, height, dpi } => {
            let pixels = paper_size::to_pixels(IntSize::new(width, height), dpi);
            if !pixels.is_valid() {
                bail!("point size and resolution must both be positive");
            }
            println!("{} x {} px", pixels.width, pixels.height);
        }

        Commands::SessionPack {
            presentation,
            print,
            unique,
            no_raise,
            page,
        } => {
            if page.contains(':') {
                bail!("page reference cannot contain ':'");
            }
            let options = SessionOptions {
                start_in_presentation: presentation,
                show_print_dialog: print,
                unique,
                no_raise,
                page,
            };
            println!("{}", options.serialize());
        }

        Commands::SessionUnpack { options } => {
            let options = SessionOptions::parse(&options)?;
            println!("Session options:");
            println!("  presentation: {}", options.start_in_presentation);
            println!("  print dialog: {}", options.show_print_dialog);
            println!("  unique:       {}", options.unique);
            println!("  no raise:     {}", options.no_raise);
            println!("  page:         {}", options.page);
        }
    }

    Ok(())
}
