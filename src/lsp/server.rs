//! Main Language Server Protocol server implementation
//!
//! Holds the open-document store and the per-document completion lists.
//! Every open or change rebuilds the changed document's list in full; a
//! completion request returns the requesting document's current list
//! verbatim, wherever the cursor is.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result as JsonRpcResult;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use super::completion::completions_for_source;
use super::document;
use super::types::VueModLspConfig;

pub struct VueModLanguageServer {
    client: Client,
    /// Client-provided settings
    config: Arc<RwLock<VueModLspConfig>>,
    /// Document store for open files
    documents: Arc<RwLock<HashMap<Url, String>>>,
    /// Published completion list per open document
    completions: Arc<RwLock<HashMap<Url, Vec<CompletionItem>>>>,
}

impl VueModLanguageServer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            config: Arc::new(RwLock::new(VueModLspConfig::default())),
            documents: Arc::new(RwLock::new(HashMap::new())),
            completions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Rebuild and publish the completion list for one document.
    async fn rebuild_completions(&self, uri: Url, text: &str) {
        let items = completions_for_source(text);
        log::debug!("rebuilt {} completion(s) for {}", items.len(), uri);
        self.completions.write().await.insert(uri, items);
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for VueModLanguageServer {
    async fn initialize(&self, params: InitializeParams) -> JsonRpcResult<InitializeResult> {
        log::info!("initializing vuemod language server");

        if let Some(options) = params.initialization_options {
            match serde_json::from_value::<VueModLspConfig>(options) {
                Ok(config) => *self.config.write().await = config,
                Err(e) => log::warn!("invalid initialization options: {e}"),
            }
        }

        // Workspace-folder support is advertised only when the client has it
        let client_has_workspace_folders = params
            .capabilities
            .workspace
            .as_ref()
            .and_then(|w| w.workspace_folders)
            .unwrap_or(false);

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        change: Some(TextDocumentSyncKind::INCREMENTAL),
                        ..Default::default()
                    },
                )),
                completion_provider: Some(CompletionOptions {
                    resolve_provider: Some(true),
                    ..Default::default()
                }),
                workspace: client_has_workspace_folders.then(|| WorkspaceServerCapabilities {
                    workspace_folders: Some(WorkspaceFoldersServerCapabilities {
                        supported: Some(true),
                        change_notifications: Some(OneOf::Left(true)),
                    }),
                    file_operations: None,
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "vuemod-ls".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        log::info!("vuemod language server initialized");

        self.client
            .log_message(MessageType::INFO, "vuemod language server started")
            .await;
    }

    async fn shutdown(&self) -> JsonRpcResult<()> {
        log::info!("shutting down vuemod language server");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        let text = params.text_document.text;

        self.documents.write().await.insert(uri.clone(), text.clone());
        self.rebuild_completions(uri, &text).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri;

        let mut documents = self.documents.write().await;
        let Some(text) = documents.get_mut(&uri) else {
            log::warn!("change notification for unopened document {uri}");
            return;
        };
        if let Err(e) = document::apply_content_changes(text, &params.content_changes) {
            // The stored text is now unreliable; leave the previous
            // completion list in place rather than rebuild from it.
            log::error!("failed to apply edits to {uri}: {e}");
            return;
        }
        let text = text.clone();
        drop(documents);

        self.rebuild_completions(uri, &text).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.documents.write().await.remove(&uri);
        self.completions.write().await.remove(&uri);
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        match serde_json::from_value::<VueModLspConfig>(params.settings) {
            Ok(config) => {
                log::debug!("configuration changed: {config:?}");
                *self.config.write().await = config;
            }
            Err(e) => log::warn!("ignoring unrecognized configuration: {e}"),
        }
    }

    async fn did_change_watched_files(&self, params: DidChangeWatchedFilesParams) {
        log::info!("received {} watched file event(s)", params.changes.len());
    }

    async fn completion(&self, params: CompletionParams) -> JsonRpcResult<Option<CompletionResponse>> {
        // Position is deliberately ignored: the list covers the document
        let uri = params.text_document_position.text_document.uri;
        let items = self
            .completions
            .read()
            .await
            .get(&uri)
            .cloned()
            .unwrap_or_default();
        Ok(Some(CompletionResponse::Array(items)))
    }

    async fn completion_resolve(&self, item: CompletionItem) -> JsonRpcResult<CompletionItem> {
        // Nothing to lazily enrich on a bare class name
        Ok(item)
    }
}
