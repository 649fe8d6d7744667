//! The interactive console menu. This is a thin layer that reads a selector and, where needed, a
//! key, runs the matching tree operation and prints the result.
//!
//! All state lives in a [`Session`], which owns the tree and the console handles. Reading and
//! writing go through [`BufRead`] and [`Write`] so a session can be driven from memory.
//!
//! # Examples
//!
//! ```
//! use ordtree::menu::Session;
//! use ordtree::OrderedTree;
//!
//! let input = "1\n5\n1\n3\n3\n7\n";
//! let mut output = Vec::new();
//!
//! Session::new(OrderedTree::new(), input.as_bytes(), &mut output)
//!     .quiet(true)
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(String::from_utf8(output).unwrap(), "In-order traversal:\n3 5\n");
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::error::{InputError, MenuResult};
use crate::traversal::Order;
use crate::OrderedTree;

const MENU: &str = "\
Menu:
1. Insert key
2. Search key
3. In-order traversal
4. Pre-order traversal
5. Post-order traversal
6. Delete key
7. Exit
";

/// A menu entry as picked by its number, before any key has been read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// `1`
    Insert,
    /// `2`
    Search,
    /// `3`, `4` and `5`
    Traverse(Order),
    /// `6`
    Delete,
    /// `7`
    Exit,
}

impl Selection {
    /// Maps a menu number to its entry. Numbers outside the menu give `None`.
    pub fn from_number(number: i32) -> Option<Self> {
        Some(match number {
            1 => Self::Insert,
            2 => Self::Search,
            3 => Self::Traverse(Order::In),
            4 => Self::Traverse(Order::Pre),
            5 => Self::Traverse(Order::Post),
            6 => Self::Delete,
            7 => Self::Exit,
            _ => return None,
        })
    }

    /// The prompt for this entry's key, if it takes one.
    fn key_prompt(self) -> Option<&'static str> {
        match self {
            Self::Insert => Some("Enter the key to insert: "),
            Self::Search => Some("Enter the key to search for: "),
            Self::Delete => Some("Enter the key to delete: "),
            Self::Traverse(_) | Self::Exit => None,
        }
    }

    /// Completes the entry into a [`Command`]. `key` is ignored by entries that don't take one.
    fn with_key(self, key: i32) -> Command {
        match self {
            Self::Insert => Command::Insert(key),
            Self::Search => Command::Search(key),
            Self::Delete => Command::Delete(key),
            Self::Traverse(order) => Command::Traverse(order),
            Self::Exit => Command::Exit,
        }
    }
}

/// A fully specified request against the tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Insert the key, ignoring duplicates.
    Insert(i32),
    /// Report whether the key is stored.
    Search(i32),
    /// Print every key in the given order.
    Traverse(Order),
    /// Delete the key if present.
    Delete(i32),
    /// End the session.
    Exit,
}

/// Whether the session keeps going after a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Show the menu again.
    Continue,
    /// Stop reading commands.
    Exit,
}

/// Parses a line of console input as an `i32`, ignoring surrounding whitespace.
pub fn parse_integer(text: &str) -> Result<i32, InputError> {
    let text = text.trim();
    text.parse().map_err(|_| InputError::NotAnInteger(text.to_string()))
}

/// Runs `command` against `tree`, writing any result to `out`.
pub fn dispatch<W: Write>(
    tree: &mut OrderedTree,
    command: Command,
    out: &mut W,
) -> MenuResult<Flow> {
    trace!(?command, "dispatching");
    match command {
        Command::Insert(key) => tree.insert(key),
        Command::Search(key) => {
            let found = tree.search(key);
            writeln!(out, "{}", if found { "Key found." } else { "Key not found." })?;
        }
        Command::Traverse(order) => {
            writeln!(out, "{} traversal:", capitalized(order))?;
            let mut separator = "";
            for key in tree.traverse(order) {
                write!(out, "{separator}{key}")?;
                separator = " ";
            }
            writeln!(out)?;
        }
        Command::Delete(key) => tree.delete(key),
        Command::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

fn capitalized(order: Order) -> &'static str {
    match order {
        Order::Pre => "Pre-order",
        Order::In => "In-order",
        Order::Post => "Post-order",
    }
}

/// The state of one run of the menu: the tree being edited and where commands come from and
/// results go to.
pub struct Session<R, W> {
    tree: OrderedTree,
    input: R,
    output: W,
    quiet: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Starts a session over an existing tree.
    pub fn new(tree: OrderedTree, input: R, output: W) -> Self {
        Self {
            tree,
            input,
            output,
            quiet: false,
        }
    }

    /// When `quiet`, neither the menu listing nor the prompts are printed. Results and input
    /// errors still are.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// The tree as it currently stands.
    pub fn tree(&self) -> &OrderedTree {
        &self.tree
    }

    /// Ends the session, handing back the tree.
    pub fn into_tree(self) -> OrderedTree {
        self.tree
    }

    /// Runs one command outside the menu loop.
    pub fn execute(&mut self, command: Command) -> MenuResult<Flow> {
        let flow = dispatch(&mut self.tree, command, &mut self.output)?;
        self.output.flush()?;
        Ok(flow)
    }

    /// Shows the menu and handles selections until `7` is chosen or the input runs out.
    pub fn run(&mut self) -> MenuResult<()> {
        loop {
            if !self.quiet {
                write!(self.output, "\n{MENU}")?;
            }
            let Some(command) = self.read_command()? else {
                debug!("input exhausted");
                return Ok(());
            };
            if self.execute(command)? == Flow::Exit {
                debug!("exit selected");
                return Ok(());
            }
        }
    }

    /// Reads a selection and its key. Returns `None` once the input is exhausted. An unknown
    /// selection is reported and read again.
    fn read_command(&mut self) -> MenuResult<Option<Command>> {
        let selection = loop {
            let Some(number) = self.read_integer("Select an option: ")? else {
                return Ok(None);
            };
            match Selection::from_number(number) {
                Some(selection) => break selection,
                None => {
                    writeln!(self.output, "Invalid option.")?;
                    if !self.quiet {
                        write!(self.output, "\n{MENU}")?;
                    }
                }
            }
        };

        let key = match selection.key_prompt() {
            Some(prompt) => match self.read_integer(prompt)? {
                Some(key) => key,
                None => return Ok(None),
            },
            None => 0,
        };
        Ok(Some(selection.with_key(key)))
    }

    /// Prompts until a line parses as an integer. Returns `None` at the end of the input.
    fn read_integer(&mut self, prompt: &str) -> MenuResult<Option<i32>> {
        loop {
            if !self.quiet {
                write!(self.output, "{prompt}")?;
                self.output.flush()?;
            }

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match parse_integer(&line) {
                Ok(number) => return Ok(Some(number)),
                Err(e) => {
                    debug!(error = %e, "rejected input");
                    writeln!(self.output, "{e}")?;
                }
            }
        }
    }
}
