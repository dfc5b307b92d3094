use clap::{Subcommand, ValueEnum};

use crate::album::AlbumId;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Html,
    Json,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "Load and print the album collection",
        long_about = "Fetch the whole album collection from the service and print it."
    )]
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table, help = "Output format")]
        format: OutputFormat,
    },
    #[command(
        about = "Delete an album, then print the refreshed collection",
        long_about = "Send a delete request for the album and reload the collection afterwards. The service's answer to the delete is not checked."
    )]
    Delete {
        #[arg(long, value_name = "ID", help = "Album id")]
        id: AlbumId,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table, help = "Output format")]
        format: OutputFormat,
    },
    #[command(about = "Edit an album (not implemented, logs the request)")]
    Edit {
        #[arg(long, value_name = "ID", help = "Album id")]
        id: AlbumId,
    },
    #[command(about = "Add an album (not implemented, logs the request)")]
    Add,
    #[command(
        about = "Serve the album table to a browser",
        long_about = "Serve an HTML page with the album table. Its Delete, Edit, Refresh Data and Add Album buttons drive the same operations as the CLI."
    )]
    Serve {
        #[arg(
            long,
            env = "ALBUM_VIEW_LISTEN",
            value_name = "ADDR",
            default_value = "127.0.0.1:8081",
            help = "Listen address (host:port)"
        )]
        listen: std::net::SocketAddr,
    },
}
