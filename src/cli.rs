//! Command line options for the `ordtree` binary.

use clap::{ArgAction, Parser};

use crate::Order;

/// Insert, search, delete and walk integer keys in a binary search tree from an interactive menu
#[derive(Parser, Debug)]
#[command(name = "ordtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Turn debugging information on (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Keys inserted before the menu starts, in order
    #[arg(
        short,
        long,
        env = "ORDTREE_KEYS",
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    pub keys: Vec<i32>,

    /// Don't print the menu or prompts, only results
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the final tree in this order (pre, in or post) when the session ends
    #[arg(long, value_name = "ORDER")]
    pub dump: Option<Order>,
}
