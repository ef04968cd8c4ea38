use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "artz")]
#[command(about = "Dependency-inversion demo: articles over swappable store backends", long_about = None)]
pub struct Cli {
    /// Storage backend to inject into the service
    #[arg(short, long, value_enum, default_value = "memory")]
    pub backend: Backend,

    /// Print articles as a JSON array instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Working in-memory store
    Memory,
    /// File store stub (always empty; demonstrates substitutability)
    File,
}
