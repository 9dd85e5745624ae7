//! CLI command implementations

use depgraph_core::{Graph, NodeType};
use depgraph_fetch::{BlobStore, CacheFetcher, DirStore, Fetcher, cache_key_for};
use depgraph_loader::{GraphLoader, REMOTE_MAX_AGE};
use std::path::PathBuf;

pub async fn load(cache_dir: PathBuf, build: &str, source: &str, json: bool) -> anyhow::Result<()> {
    let loader = GraphLoader::with_cache_dir(cache_dir);
    let graph = loader.load(build, source).await?;

    if json {
        println!("{}", graph.to_json_pretty()?);
    } else {
        print!("{}", summarize(&graph));
    }
    Ok(())
}

pub async fn fetch(cache_dir: PathBuf, url: &str, force: bool) -> anyhow::Result<()> {
    let key = cache_key_for(url);
    let fetcher = CacheFetcher::http(cache_dir);
    let bytes = fetcher.fetch(REMOTE_MAX_AGE, url, key, force).await?;

    println!("{}: {} bytes cached as {}", url, bytes.len(), key);
    Ok(())
}

pub fn clear(cache_dir: PathBuf, url: &str) -> anyhow::Result<()> {
    let key = cache_key_for(url);
    let store = DirStore::new(cache_dir);

    if store.remove(key)? {
        tracing::info!("Removed cached copy {}", store.path_for(key)?.display());
    } else {
        tracing::info!("Nothing cached for {}", url);
    }
    Ok(())
}

/// Human-readable counts for a loaded graph.
fn summarize(graph: &Graph) -> String {
    let mut out = String::new();
    let build = if graph.build_id.is_empty() { "-" } else { graph.build_id.as_str() };
    out.push_str(&format!("build:  {}\n", build));
    out.push_str(&format!("nodes:  {}\n", graph.node_count()));
    for node_type in [NodeType::File, NodeType::Symbol, NodeType::Library, NodeType::Artifact] {
        let count = graph.nodes_of_type(&node_type).count();
        if count > 0 {
            out.push_str(&format!("  {:<9} {}\n", node_type, count));
        }
    }
    let targets: usize = graph.edges.iter().map(|e| e.to_nodes.len()).sum();
    out.push_str(&format!("edges:  {} groups, {} targets\n", graph.edge_count(), targets));
    out
}
