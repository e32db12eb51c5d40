use clap::{Parser, Subcommand};
use prosper::{
    client::{SearchFilter, SearchParams},
    core::{Accounter, BidPlacer, ListingSearcher, NoteFetcher, OrderStatusQuerier},
    interval::Interval,
    types::{ListingNumber, ListingStatus, OrderId, ProsperRating},
    Client, ClientCredentials, DEFAULT_BASE_URL,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Query a Prosper investor account from the command line.
#[derive(Parser, Debug)]
#[command(name = "prosper", version)]
struct Args {
    #[arg(long, env = "PROSPER_CLIENT_ID")]
    client_id: String,

    #[arg(long, env = "PROSPER_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,

    #[arg(long, env = "PROSPER_USERNAME")]
    username: String,

    #[arg(long, env = "PROSPER_PASSWORD", hide_env_values = true)]
    password: String,

    /// Root of both the token endpoint and the REST endpoints
    #[arg(long, env = "PROSPER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show balances and note summaries
    Account,
    /// List owned notes
    Notes {
        #[arg(long, default_value_t = 0)]
        offset: u32,
        #[arg(long, default_value_t = 25)]
        limit: u32,
    },
    /// Search active listings
    Search {
        #[arg(long, default_value_t = 0)]
        offset: u32,
        #[arg(long, default_value_t = 25)]
        limit: u32,
        /// Leave out listings already invested in
        #[arg(long)]
        exclude_invested: bool,
        /// Prosper rating to include, may be repeated
        #[arg(long = "rating", value_parser = parse_rating)]
        ratings: Vec<ProsperRating>,
        /// Lowest estimated return, as a fraction
        #[arg(long)]
        min_return: Option<f64>,
    },
    /// Bid on a listing
    Bid {
        #[arg(long)]
        listing: i64,
        /// Amount in dollars
        #[arg(long)]
        amount: f64,
    },
    /// Show the state of a placed order
    OrderStatus { order_id: String },
}

fn parse_rating(s: &str) -> Result<ProsperRating, String> {
    s.parse().map_err(|err: prosper::client::ParseError| err.to_string())
}

impl From<&Args> for ClientCredentials {
    fn from(args: &Args) -> Self {
        ClientCredentials {
            client_id: args.client_id.clone(),
            client_secret: args.client_secret.clone(),
            username: args.username.clone(),
            password: args.password.clone(),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = Client::with_base_url(ClientCredentials::from(&args), args.base_url.clone());

    match args.command {
        Command::Account => print_json(&Accounter::account(&client).await?),
        Command::Notes { offset, limit } => {
            print_json(&NoteFetcher::notes(&client, offset, limit).await?)
        }
        Command::Search {
            offset,
            limit,
            exclude_invested,
            ratings,
            min_return,
        } => {
            let params = SearchParams {
                offset,
                limit,
                exclude_listings_invested: exclude_invested,
                filter: SearchFilter {
                    prosper_rating: ratings,
                    estimated_return: min_return.map(Interval::at_least).unwrap_or_default(),
                    listing_status: vec![ListingStatus::Active],
                    ..SearchFilter::default()
                },
            };
            print_json(&ListingSearcher::search(&client, &params).await?)
        }
        Command::Bid { listing, amount } => {
            print_json(&BidPlacer::place_bid(&client, ListingNumber(listing), amount).await?)
        }
        Command::OrderStatus { order_id } => {
            print_json(&OrderStatusQuerier::order_status(&client, &OrderId(order_id)).await?)
        }
    }
}
