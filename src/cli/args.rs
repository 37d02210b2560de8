use std::path::PathBuf;

use clap::Args;

/// Where the edge list comes from and how to build the graph
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Edge file: a `source,destination` header then `from,to,weight` rows (`-` for stdin)
    pub file: PathBuf,

    /// Treat edges as one-way
    #[arg(long, short)]
    pub directed: bool,

    /// Declared node count (default: one past the largest label in the file)
    #[arg(long)]
    pub nodes: Option<usize>,
}

impl GraphArgs {
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }
}
