//! Language Server Protocol implementation
//!
//! Provides completion for CSS-module class names inside Vue single-file
//! components. Built directly into the main binary and started with
//! `vuemod-ls server`.

pub mod completion;
pub mod document;
pub mod server;
pub mod types;

pub use server::VueModLanguageServer;
pub use types::VueModLspConfig;

use anyhow::Result;
use tokio::net::TcpListener;
use tower_lsp::{LspService, Server};

/// Start the language server on stdio.
pub async fn start_server() -> Result<()> {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(VueModLanguageServer::new);

    log::info!("starting vuemod language server on stdio");

    Server::new(stdin, stdout, socket).serve(service).await;

    Ok(())
}

/// Start the language server over TCP (useful for debugging).
pub async fn start_tcp_server(port: u16) -> Result<()> {
    let listener = TcpListener::bind(format!("127.0.0.1:{port}")).await?;
    log::info!("vuemod language server listening on 127.0.0.1:{port}");

    loop {
        let (stream, _) = listener.accept().await?;
        let (service, socket) = LspService::new(VueModLanguageServer::new);

        tokio::spawn(async move {
            let (read, write) = tokio::io::split(stream);
            Server::new(read, write, socket).serve(service).await;
        });
    }
}
