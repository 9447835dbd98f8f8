//! peerprobe binary.

#[tokio::main]
async fn main() -> eyre::Result<()> {
    peerprobe_node_commands::run().await
}
