//! `bimg` — BIM graph exchange container command-line interface.
//!
//! Provides three subcommands for working with container files on the
//! command line:
//!
//! - **`validate`** — re-check a container file against the assignment-time
//!   invariants (deserialisation bypasses them).
//! - **`show`** — print a human-readable summary of a container.
//! - **`pack`** — assemble a container from Turtle and JSON parts through
//!   the validating setters.
//!
//! `validate` and `show` read JSON from a file path or from stdin (`-`).

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use bimgraph::{
    duplicate_ids, render_container, validate_container, AccessRight, GraphContainer,
    MetaDataNode, UseCase,
};
use clap::{Parser, Subcommand};

/// bimg — BIM graph exchange container CLI
///
/// Validate, inspect, and assemble graph container files.
#[derive(Parser)]
#[command(name = "bimg", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a container file against the assignment-time invariants.
    ///
    /// Loading a container does not re-run the validating setters, so a file
    /// can hold payloads direct assignment would reject. This command runs
    /// the full re-check and also warns about duplicate metadata ids.
    /// Exits 0 if the container is valid, 1 otherwise.
    ///
    /// Pass `-` as FILE to read from stdin.
    Validate {
        /// Path to a container JSON file, or `-` for stdin.
        file: PathBuf,
    },

    /// Print a human-readable summary of a container file.
    ///
    /// Pass `-` as FILE to read from stdin.
    Show {
        /// Path to a container JSON file, or `-` for stdin.
        file: PathBuf,
    },

    /// Assemble a container from its parts and print it as JSON.
    ///
    /// All parts flow through the validating setters, so the result is
    /// guaranteed well-formed. The metadata file holds a JSON array of
    /// nodes; access rights and use case are optional JSON files.
    ///
    /// Example:
    ///   bimg pack --template schema.ttl --instance site.ttl \
    ///     --metadata nodes.json -o container.json
    Pack {
        /// Path to the Turtle template graph.
        #[arg(short = 't', long, value_name = "TTL_FILE")]
        template: PathBuf,

        /// Path to the Turtle instance graph.
        #[arg(short = 'i', long, value_name = "TTL_FILE")]
        instance: Option<PathBuf>,

        /// Path to a JSON array of metadata nodes.
        #[arg(short = 'm', long, value_name = "JSON_FILE")]
        metadata: PathBuf,

        /// Path to a JSON array of access rights.
        #[arg(long = "access-rights", value_name = "JSON_FILE")]
        access_rights: Option<PathBuf>,

        /// Path to a JSON use-case object.
        #[arg(long = "use-case", value_name = "JSON_FILE")]
        use_case: Option<PathBuf>,

        /// Write the container here instead of stdout.
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate { file } => {
            let container = read_container(&file);

            for id in duplicate_ids(container.metadata()) {
                eprintln!("warning: metadata id {:?} appears more than once", id);
            }

            match validate_container(&container) {
                Ok(()) => println!("valid"),
                Err(e) => {
                    eprintln!("error: {}", e);
                    process::exit(1);
                }
            }
        }

        Command::Show { file } => {
            let container = read_container(&file);
            print!("{}", render_container(&container));
        }

        Command::Pack {
            template,
            instance,
            metadata,
            access_rights,
            use_case,
            output,
        } => {
            let mut container = GraphContainer::new();

            container
                .set_template(read_file(&template))
                .unwrap_or_else(|e| fatal(&format!("{}: {}", template.display(), e)));

            if let Some(path) = instance {
                container
                    .set_instance(read_file(&path))
                    .unwrap_or_else(|e| fatal(&format!("{}: {}", path.display(), e)));
            }

            let nodes: Vec<MetaDataNode> = parse_json(&metadata);
            container
                .set_metadata(nodes)
                .unwrap_or_else(|e| fatal(&format!("{}: {}", metadata.display(), e)));

            if let Some(path) = access_rights {
                let rights: Vec<AccessRight> = parse_json(&path);
                container.set_access_rights(rights);
            }

            if let Some(path) = use_case {
                let uc: UseCase = parse_json(&path);
                container.set_use_case(uc);
            }

            match output {
                Some(path) => container
                    .save(&path)
                    .unwrap_or_else(|e| fatal(&e.to_string())),
                None => println!("{}", container.to_json()),
            }
        }
    }
}

/// Read a container from a file path, or stdin when the path is `"-"`.
fn read_container(path: &PathBuf) -> GraphContainer {
    let json = if path.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .unwrap_or_else(|e| fatal(&format!("failed to read stdin: {}", e)));
        buf
    } else {
        read_file(path)
    };
    GraphContainer::from_json(&json).unwrap_or_else(|e| fatal(&e.to_string()))
}

/// Read the full contents of a file, exiting with a message on failure.
fn read_file(path: &PathBuf) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|e| fatal(&format!("failed to read {}: {}", path.display(), e)))
}

/// Read a file and parse it as JSON into the requested type.
fn parse_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> T {
    serde_json::from_str(&read_file(path))
        .unwrap_or_else(|e| fatal(&format!("failed to parse {}: {}", path.display(), e)))
}

/// Print an error message to stderr and exit with code 2.
fn fatal(msg: &str) -> ! {
    eprintln!("bimg: {}", msg);
    process::exit(2);
}
