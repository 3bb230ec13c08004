use clap::{
    CommandFactory, Parser, Subcommand, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tidalcat::{
    cli, config, error,
    types::{PaginationParams, SearchParams, SearchPopularity, SearchType},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// ISO 3166-1 alpha-2 country code (defaults to TIDAL_COUNTRY_CODE)
    #[clap(long, global = true)]
    country: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the access token of the client-credentials exchange
    Token,

    /// Look up albums
    #[command(subcommand)]
    Albums(AlbumsCommand),

    /// Look up artists
    #[command(subcommand)]
    Artists(ArtistsCommand),

    /// Look up tracks
    #[command(subcommand)]
    Tracks(TracksCommand),

    /// Look up videos
    #[command(subcommand)]
    Videos(VideosCommand),

    /// Search the catalog
    Search(SearchOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Subcommand, Debug, Clone)]
pub enum AlbumsCommand {
    /// Show a single album
    Get { id: String },

    /// Find albums by barcode (EAN/UPC)
    Barcode { barcode_id: String },

    /// Show several albums at once
    Multiple {
        #[clap(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// List every track and video of an album
    Tracks { id: String },

    /// List albums similar to an album
    Similar {
        id: String,
        #[clap(long, default_value_t = 10)]
        limit: u32,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ArtistsCommand {
    /// Show a single artist
    Get { id: String },

    /// List the albums of an artist
    Albums {
        id: String,
        #[clap(flatten)]
        page: PageOptions,
        /// Fetch the whole discography instead of one page
        #[clap(long, conflicts_with_all = ["offset", "limit"])]
        all: bool,
    },

    /// Show several artists at once
    Multiple {
        #[clap(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// List artists similar to an artist
    Similar {
        id: String,
        #[clap(long, default_value_t = 10)]
        limit: u32,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum TracksCommand {
    /// Show a single track
    Get { id: String },

    /// Find tracks by ISRC
    Isrc {
        isrc: String,
        #[clap(flatten)]
        page: PageOptions,
    },

    /// Show several tracks at once
    Multiple {
        #[clap(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum VideosCommand {
    /// Show a single video
    Get { id: String },

    /// Show several videos at once
    Multiple {
        #[clap(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
}

#[derive(Parser, Debug, Clone)]
pub struct PageOptions {
    /// Number of items to skip
    #[clap(long, default_value_t = 0)]
    offset: u32,

    /// Maximum number of items to return
    #[clap(long, default_value_t = 10)]
    limit: u32,
}

impl From<PageOptions> for PaginationParams {
    fn from(page: PageOptions) -> Self {
        PaginationParams {
            offset: page.offset,
            limit: page.limit,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search query in plain text
    query: String,

    /// Restrict the search to one resource kind
    #[clap(long = "type", value_enum)]
    kind: Option<SearchKind>,

    #[clap(flatten)]
    page: PageOptions,

    /// Rank results by worldwide or country popularity
    #[clap(long, value_enum)]
    popularity: Option<Popularity>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum SearchKind {
    Albums,
    Artists,
    Tracks,
    Videos,
}

impl From<SearchKind> for SearchType {
    fn from(kind: SearchKind) -> Self {
        match kind {
            SearchKind::Albums => SearchType::Albums,
            SearchKind::Artists => SearchType::Artists,
            SearchKind::Tracks => SearchType::Tracks,
            SearchKind::Videos => SearchType::Videos,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Popularity {
    Worldwide,
    Country,
}

impl From<Popularity> for SearchPopularity {
    fn from(popularity: Popularity) -> Self {
        match popularity {
            Popularity::Worldwide => SearchPopularity::Worldwide,
            Popularity::Country => SearchPopularity::Country,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn main() {
    if let Err(e) = config::load_env() {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let client = cli::connect(cli.country);

    match cli.command {
        Command::Token => cli::token::token(&client),

        Command::Albums(cmd) => match cmd {
            AlbumsCommand::Get { id } => cli::albums::get_album(&client, &id),
            AlbumsCommand::Barcode { barcode_id } => {
                cli::albums::albums_by_barcode(&client, &barcode_id)
            }
            AlbumsCommand::Multiple { ids } => cli::albums::multiple_albums(&client, &ids),
            AlbumsCommand::Tracks { id } => cli::albums::album_tracks(&client, &id),
            AlbumsCommand::Similar { id, limit } => {
                cli::albums::similar_albums(&client, &id, limit)
            }
        },

        Command::Artists(cmd) => match cmd {
            ArtistsCommand::Get { id } => cli::artists::get_artist(&client, &id),
            ArtistsCommand::Albums { id, page, all } => {
                cli::artists::artist_albums(&client, &id, page.into(), all)
            }
            ArtistsCommand::Multiple { ids } => cli::artists::multiple_artists(&client, &ids),
            ArtistsCommand::Similar { id, limit } => {
                cli::artists::similar_artists(&client, &id, limit)
            }
        },

        Command::Tracks(cmd) => match cmd {
            TracksCommand::Get { id } => cli::tracks::get_track(&client, &id),
            TracksCommand::Isrc { isrc, page } => {
                cli::tracks::tracks_by_isrc(&client, &isrc, page.into())
            }
            TracksCommand::Multiple { ids } => cli::tracks::multiple_tracks(&client, &ids),
        },

        Command::Videos(cmd) => match cmd {
            VideosCommand::Get { id } => cli::videos::get_video(&client, &id),
            VideosCommand::Multiple { ids } => cli::videos::multiple_videos(&client, &ids),
        },

        Command::Search(opt) => {
            let params = SearchParams {
                query: opt.query,
                kind: opt.kind.map(Into::into),
                offset: opt.page.offset,
                limit: opt.page.limit,
                country_code: String::new(),
                popularity: opt.popularity.map(Into::into),
            };
            cli::search::search(&client, &params)
        }

        Command::Completions(_) => {}
    }
}
