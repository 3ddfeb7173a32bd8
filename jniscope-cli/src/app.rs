use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jniscope::metadata::{MemberKinds, MONO_ANDROID_ASSEMBLY, REGISTER_ATTRIBUTE};

/// jniscope - ProGuard keep rules for Java bindings in .NET assemblies
#[derive(Debug, Parser)]
#[command(name = "jniscope", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Which types and registrations a crawl picks up.
#[derive(Debug, Args)]
pub struct Selection {
    /// Skip every assembly with this name; may be repeated.
    #[arg(long = "exclude", value_name = "ASSEMBLY", default_values_t = [MONO_ANDROID_ASSEMBLY.to_string()])]
    pub excluded: Vec<String>,

    /// Full name of the registration attribute.
    #[arg(long, value_name = "TYPE", default_value = REGISTER_ATTRIBUTE)]
    pub attribute: String,

    /// Member kinds to inspect: fields, properties, events, methods (comma separated).
    #[arg(long, value_name = "KINDS", value_delimiter = ',', value_parser = parse_member_kind)]
    pub kinds: Vec<MemberKinds>,
}

impl Selection {
    /// Union of the requested member kinds; all kinds when none were given.
    pub fn member_kinds(&self) -> MemberKinds {
        if self.kinds.is_empty() {
            MemberKinds::all()
        } else {
            self.kinds.iter().fold(MemberKinds::empty(), |acc, kind| acc | *kind)
        }
    }
}

fn parse_member_kind(value: &str) -> Result<MemberKinds, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "fields" | "field" => Ok(MemberKinds::FIELDS),
        "properties" | "property" => Ok(MemberKinds::PROPERTIES),
        "events" | "event" => Ok(MemberKinds::EVENTS),
        "methods" | "method" => Ok(MemberKinds::METHODS),
        "all" => Ok(MemberKinds::all()),
        other => Err(format!("unknown member kind '{other}'")),
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render ProGuard keep rules for every registered Java type in a metadata graph.
    Keep {
        /// Path to the metadata graph (JSON).
        #[arg(value_name = "GRAPH")]
        graph: PathBuf,

        /// Write the rules to this file instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        selection: Selection,

        /// Leave out the fixed resource, Mono runtime and callable wrapper rules.
        #[arg(long)]
        no_preamble: bool,
    },

    /// List registered Java types and their member counts.
    Index {
        /// Path to the metadata graph (JSON).
        #[arg(value_name = "GRAPH")]
        graph: PathBuf,

        #[command(flatten)]
        selection: Selection,
    },

    /// Decode one member's JNI signature into a Java declaration.
    Decode {
        /// Member name; `.ctor` is rendered as a constructor.
        #[arg(value_name = "NAME")]
        name: String,

        /// Compact JNI signature, e.g. `(ILjava/lang/String;)V`.
        #[arg(value_name = "SIGNATURE", allow_hyphen_values = true)]
        signature: String,
    },
}
